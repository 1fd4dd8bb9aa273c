/// Data models for messages and send requests
pub mod message;
pub mod request;

pub use message::*;
pub use request::*;
