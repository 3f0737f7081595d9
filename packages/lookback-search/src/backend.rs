use lookback_config::ClusterSearchConfig;

use crate::{Result, message::SearchResult, query::SearchQuery};

/// The external search capability. One blocking call per enrichment; any
/// deadline or retry policy lives behind this seam, not in front of it.
pub trait SearchBackend
where
	Self: Send + Sync,
{
	fn search(&self, query: &SearchQuery) -> Result<SearchResult>;
}

/// The cluster configuration capability. Read fresh on every invocation;
/// `None` means no limit has been configured.
pub trait ClusterConfigStore
where
	Self: Send + Sync,
{
	fn cluster_search_config(&self) -> Option<ClusterSearchConfig>;
}

impl ClusterConfigStore for ClusterSearchConfig {
	fn cluster_search_config(&self) -> Option<ClusterSearchConfig> {
		Some(*self)
	}
}
