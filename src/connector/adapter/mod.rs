mod groq_client;
mod mock_completion_client;

pub use groq_client::*;
pub use mock_completion_client::*;
