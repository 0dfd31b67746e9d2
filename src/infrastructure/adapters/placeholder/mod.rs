//! Placeholder Adapter - 上游 REST 客户端实现

mod http_placeholder_client;
mod in_memory_placeholder_client;

pub use http_placeholder_client::*;
pub use in_memory_placeholder_client::InMemoryPlaceholderClient;
