pub mod client;
pub mod loader;
pub mod messages;

pub use client::{ApiConfig, ClientConfig, SessionConfig};
pub use loader::ConfigLoader;
pub use messages::MessagesConfig;
