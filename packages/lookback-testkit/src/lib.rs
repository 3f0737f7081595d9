use std::sync::Mutex;

use time::OffsetDateTime;

use lookback_config::ClusterSearchConfig;
use lookback_search::{
	ClusterConfigStore, Message, Result, SearchBackend, SearchError, SearchQuery, SearchResult,
	SortDirection,
};

/// A deterministic in-memory stand-in for the cluster search backend.
///
/// Seeded records are filtered by stream and time range, matched against the
/// query string (`"*"` matches everything, anything else is a substring match
/// over rendered field values), sorted by timestamp, then windowed by offset
/// and limit. The last executed query is kept for assertions.
#[derive(Default)]
pub struct InMemoryBackend {
	records: Vec<(String, Message)>,
	last_query: Mutex<Option<SearchQuery>>,
}
impl InMemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn seed(&mut self, stream_id: &str, message: Message) {
		self.records.push((stream_id.to_string(), message));
	}

	pub fn last_query(&self) -> Option<SearchQuery> {
		self.last_query.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}
}
impl SearchBackend for InMemoryBackend {
	fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
		*self.last_query.lock().unwrap_or_else(|err| err.into_inner()) = Some(query.clone());

		let stream_id = query.stream_filter.strip_prefix("streams:").ok_or_else(|| {
			SearchError::backend(format!("unsupported filter {:?}", query.stream_filter))
		})?;
		let mut matched = self
			.records
			.iter()
			.filter(|(stream, message)| {
				stream.as_str() == stream_id
					&& query.range.contains(message.timestamp())
					&& matches_query(message, &query.query)
			})
			.map(|(_, message)| message.clone())
			.collect::<Vec<_>>();

		matched.sort_by_key(Message::timestamp);

		if query.sort.direction == SortDirection::Descending {
			matched.reverse();
		}

		let windowed = matched.into_iter().skip(query.offset).take(query.limit).collect();

		Ok(SearchResult::new(windowed))
	}
}

/// Always fails, for backend-error propagation tests.
pub struct FailingBackend;
impl SearchBackend for FailingBackend {
	fn search(&self, _: &SearchQuery) -> Result<SearchResult> {
		Err(SearchError::backend("backend unavailable"))
	}
}

/// A fixed cluster configuration lookup.
pub struct StaticClusterConfig(pub Option<ClusterSearchConfig>);
impl ClusterConfigStore for StaticClusterConfig {
	fn cluster_search_config(&self) -> Option<ClusterSearchConfig> {
		self.0
	}
}

/// Builds a message with string fields, the common case in tests.
pub fn message(timestamp: OffsetDateTime, fields: &[(&str, &str)]) -> Message {
	let mut message = Message::new(timestamp);

	for (name, value) in fields {
		message.add_field(*name, *value);
	}

	message
}

fn matches_query(message: &Message, query: &str) -> bool {
	if query == "*" {
		return true;
	}

	message
		.fields()
		.keys()
		.any(|name| message.field_as_string(name).is_some_and(|value| value.contains(query)))
}
