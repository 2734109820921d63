// src/lib.rs
pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod transport;

pub use config::Config;
pub use document::Document;
pub use error::{ApiPostError, Stage};
pub use pipeline::Pipeline;
pub use transport::{HttpsTransport, Reply, Transport};
