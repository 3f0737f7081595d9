use serde::{Deserialize, Serialize};

use lookback_domain::AbsoluteRange;

use crate::message::FIELD_TIMESTAMP;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
	Ascending,
	Descending,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Sorting {
	pub field: String,
	pub direction: SortDirection,
}
impl Sorting {
	/// The fixed sort every lookback search uses: newest message first.
	pub fn timestamp_descending() -> Self {
		Self { field: FIELD_TIMESTAMP.to_string(), direction: SortDirection::Descending }
	}
}

/// One search request against the backend. Built fresh per invocation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SearchQuery {
	pub query: String,
	pub stream_filter: String,
	pub range: AbsoluteRange,
	pub limit: usize,
	pub offset: usize,
	pub sort: Sorting,
}
impl SearchQuery {
	/// The backend filter string that scopes a search to one stream.
	pub fn stream_filter(stream_id: &str) -> String {
		format!("streams:{stream_id}")
	}
}
