mod backend;
mod error;
mod message;
mod query;

pub use backend::{ClusterConfigStore, SearchBackend};
pub use error::{Result, SearchError};
pub use message::{FIELD_TIMESTAMP, Message, SearchResult};
pub use query::{SearchQuery, SortDirection, Sorting};
