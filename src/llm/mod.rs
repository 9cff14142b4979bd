//! Chat-completion client that turns the commit log into a report.

pub mod client;
pub mod request;
pub mod response;
pub mod transport;

pub use client::ReportClient;
pub use request::{ChatMessage, ChatRequest, Role};
pub use response::extract_reply;
pub use transport::{ChatTransport, HttpTransport, RawResponse};
