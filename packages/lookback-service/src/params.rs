use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The named parameters of the `enrich_with_search` rule function.
///
/// Wire names match the historical rule language verbatim, including the
/// `max_messsages` spelling, so existing rules keep working unchanged.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EnrichParams {
	/// The stream to search in.
	pub stream_id: String,
	/// The query string to search for.
	pub query: String,
	/// The field to read from each found message.
	pub source_field: String,
	/// The field name to write on the current message.
	pub destination_field: String,
	/// The maximum number of messages to consider.
	#[serde(rename = "max_messsages")]
	pub max_messages: i64,
	/// The maximum number of minutes to look back.
	pub max_minutes: i64,
	/// Whether to suffix the destination field with a sequence number per
	/// value (`ip0`, `ip1`, ...). Without it all values target the same name
	/// and last write wins.
	pub use_sequence: bool,
}
impl EnrichParams {
	pub fn validate(&self) -> Result<()> {
		for (name, value) in [
			("stream_id", &self.stream_id),
			("query", &self.query),
			("source_field", &self.source_field),
			("destination_field", &self.destination_field),
		] {
			if value.trim().is_empty() {
				return Err(Error::InvalidParams {
					message: format!("{name} must be non-empty"),
				});
			}
		}
		if self.max_messages < 0 {
			return Err(Error::InvalidParams {
				message: "max_messsages must be zero or greater".to_string(),
			});
		}

		Ok(())
	}

	/// The requested lookback, in seconds. May be negative for malformed
	/// input; the time-range resolver rejects that case.
	pub fn lookback_seconds(&self) -> i64 {
		self.max_minutes.saturating_mul(60)
	}

	pub fn result_limit(&self) -> usize {
		usize::try_from(self.max_messages).unwrap_or(usize::MAX)
	}
}

#[cfg(test)]
mod tests {
	use crate::params::EnrichParams;

	fn valid_params() -> EnrichParams {
		EnrichParams {
			stream_id: "S1".to_string(),
			query: "*".to_string(),
			source_field: "src_ip".to_string(),
			destination_field: "enriched_ip".to_string(),
			max_messages: 10,
			max_minutes: 5,
			use_sequence: true,
		}
	}

	#[test]
	fn accepts_valid_params() {
		assert!(valid_params().validate().is_ok());
	}

	#[test]
	fn rejects_blank_required_strings() {
		let mut params = valid_params();

		params.source_field = "  ".to_string();

		assert!(params.validate().is_err());
	}

	#[test]
	fn rejects_negative_message_limit() {
		let mut params = valid_params();

		params.max_messages = -1;

		assert!(params.validate().is_err());
	}

	#[test]
	fn negative_minutes_pass_validation_for_the_resolver_to_reject() {
		let mut params = valid_params();

		params.max_minutes = -5;

		assert!(params.validate().is_ok());
		assert_eq!(params.lookback_seconds(), -300);
	}

	#[test]
	fn deserializes_historical_wire_names() {
		let params: EnrichParams = serde_json::from_str(
			r#"{
				"stream_id": "S1",
				"query": "*",
				"source_field": "src_ip",
				"destination_field": "enriched_ip",
				"max_messsages": 10,
				"max_minutes": 5,
				"use_sequence": false
			}"#,
		)
		.expect("expected params to deserialize");

		assert_eq!(params.max_messages, 10);
		assert_eq!(params.lookback_seconds(), 300);
	}
}
