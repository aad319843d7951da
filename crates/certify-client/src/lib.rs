mod api;
pub mod client;
pub mod download;
pub mod endpoints;
pub mod error;
pub mod options;
pub mod payload;
pub mod url_builder;

pub use client::{ApiClient, ApiClientBuilder};
pub use download::{DirectorySaver, DownloadOptions, FileSaver, MemorySaver, SavedFile};
pub use error::{ApiError, ErrorKind, Result};
pub use options::{RequestBody, RequestOptions};
pub use payload::Payload;
pub use url_builder::UrlBuilder;
