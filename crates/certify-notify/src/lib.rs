pub mod loading;
pub mod manager;
pub mod message;
pub mod notifier;
pub mod providers;

pub use loading::{CountingIndicator, LoadingGuard, LoadingIndicator};
pub use manager::NotifyManager;
pub use message::{NotifyLevel, NotifyMessage};
pub use notifier::{Notifier, NotifyResult};
pub use providers::{RecordingNotifier, TracingNotifier};
