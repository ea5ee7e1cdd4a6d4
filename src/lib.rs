pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatUseCase, CompletionClient};

pub use cli::Commands;

pub use connector::{
    build_router, Container, ContainerConfig, GroqClient, MockCompletionClient, RecordedCall,
};

pub use domain::{
    assemble_messages, ChatMessage, ChatReply, ChatRequest, DomainError, HealthStatus,
    QuestionKind, Role,
};
