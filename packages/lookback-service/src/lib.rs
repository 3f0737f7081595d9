mod error;
mod params;

pub use error::{Error, Result};
pub use params::EnrichParams;

use std::sync::Arc;

use time::OffsetDateTime;

use lookback_domain::{extract, timerange};
use lookback_search::{ClusterConfigStore, Message, SearchBackend, SearchQuery, Sorting};

/// The `enrich_with_search` pipeline function.
///
/// Both collaborators are injected at construction and only read during
/// [`evaluate`](Self::evaluate); the function itself holds no state across
/// invocations, so one instance may serve concurrent pipeline evaluations.
pub struct EnrichWithSearch {
	backend: Arc<dyn SearchBackend>,
	cluster_config: Arc<dyn ClusterConfigStore>,
}
impl EnrichWithSearch {
	pub const NAME: &'static str = "enrich_with_search";

	pub fn new(
		backend: Arc<dyn SearchBackend>,
		cluster_config: Arc<dyn ClusterConfigStore>,
	) -> Self {
		Self { backend, cluster_config }
	}

	/// Runs one enrichment and returns the number of fields appended.
	///
	/// The current message is only touched after the whole result set has
	/// been reduced, so a failed invocation leaves it unmodified. Zero
	/// matches is a success with count zero.
	pub fn evaluate(&self, params: &EnrichParams, current: &mut Message) -> Result<usize> {
		params.validate()?;

		tracing::debug!(stream_id = %params.stream_id, "Starting enrichment evaluation.");

		let now = OffsetDateTime::now_utc();
		let candidate = timerange::resolve(params.lookback_seconds(), now).inspect_err(|_| {
			tracing::warn!(
				max_minutes = params.max_minutes,
				"Invalid time range parameters provided, not executing search."
			);
		})?;
		let config = self.cluster_config.cluster_search_config();
		let range = timerange::clamp(candidate, config.as_ref());
		let query = SearchQuery {
			query: params.query.clone(),
			stream_filter: SearchQuery::stream_filter(&params.stream_id),
			range,
			limit: params.result_limit(),
			offset: 0,
			sort: Sorting::timestamp_descending(),
		};

		tracing::info!(
			query = %query.query,
			filter = %query.stream_filter,
			"Executing lookback query."
		);

		let result = self.backend.search(&query)?;

		tracing::info!(matches = result.len(), "Lookback query finished.");

		let values = extract::distinct_values(
			result.messages.iter().map(|message| message.field_as_string(&params.source_field)),
		);
		let planned = extract::plan_fields(values, &params.destination_field, params.use_sequence);

		for field in &planned {
			tracing::debug!(name = %field.name, value = %field.value, "Appending enriched field.");

			current.add_field(field.name.clone(), field.value.clone());
		}

		Ok(planned.len())
	}

	/// The host pipeline contract: same as [`evaluate`](Self::evaluate) but
	/// with the empty-string return the original call sites expect.
	pub fn evaluate_to_string(
		&self,
		params: &EnrichParams,
		current: &mut Message,
	) -> Result<String> {
		self.evaluate(params, current).map(|_| String::new())
	}
}
