pub mod clock;
pub mod data;
pub mod keepalive;
pub mod storage;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use data::Session;
pub use keepalive::KeepAliveHandle;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{SessionKeys, SessionStore};
