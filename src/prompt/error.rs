use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt interaction failed: {0}")]
    Interaction(String),

    #[error("Prompt task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Unsupported link: {0}")]
    Unsupported(String),

    #[error("Failed to launch URL opener: {0}")]
    Launch(#[from] std::io::Error),
}
