mod chat_message;
mod chat_reply;
mod chat_request;
mod health;

pub use chat_message::*;
pub use chat_reply::*;
pub use chat_request::*;
pub use health::*;
