use serde::{Deserialize, Serialize};
use time::Duration;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub searches: Searches,
}

#[derive(Debug, Default, Deserialize)]
pub struct Searches {
	/// Widest window, in seconds, a single lookback search may cover. Zero disables the limit.
	#[serde(default)]
	pub query_time_range_limit_secs: i64,
}

/// The cluster-wide search limit as handed to callers at runtime.
///
/// A zero `query_time_range_limit` means "unlimited"; see
/// [`is_unlimited`](Self::is_unlimited).
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClusterSearchConfig {
	pub query_time_range_limit: Duration,
}
impl ClusterSearchConfig {
	pub fn unlimited() -> Self {
		Self { query_time_range_limit: Duration::ZERO }
	}

	pub fn limited(limit: Duration) -> Self {
		Self { query_time_range_limit: limit }
	}

	pub fn is_unlimited(&self) -> bool {
		self.query_time_range_limit.is_zero()
	}
}

impl Config {
	pub fn cluster_search_config(&self) -> ClusterSearchConfig {
		ClusterSearchConfig {
			query_time_range_limit: Duration::seconds(self.searches.query_time_range_limit_secs),
		}
	}
}
