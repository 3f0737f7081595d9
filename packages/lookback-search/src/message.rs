use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

/// The canonical timestamp field every indexed message carries.
pub const FIELD_TIMESTAMP: &str = "timestamp";

/// A pipeline message: a timestamp plus a flat field map.
///
/// Fields may be absent; [`add_field`](Self::add_field) is last-write-wins
/// for repeated names.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Message {
	timestamp: OffsetDateTime,
	fields: BTreeMap<String, Value>,
}
impl Message {
	pub fn new(timestamp: OffsetDateTime) -> Self {
		Self { timestamp, fields: BTreeMap::new() }
	}

	pub fn timestamp(&self) -> OffsetDateTime {
		self.timestamp
	}

	pub fn has_field(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}

	/// The field rendered as a plain string: string values are returned
	/// verbatim, anything else through its JSON representation.
	pub fn field_as_string(&self, name: &str) -> Option<String> {
		self.fields.get(name).map(|value| match value {
			Value::String(text) => text.clone(),
			other => other.to_string(),
		})
	}

	/// Appends a field. Re-adding an existing name replaces its value.
	pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.fields.insert(name.into(), value.into());
	}

	pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.add_field(name, value);

		self
	}

	pub fn fields(&self) -> &BTreeMap<String, Value> {
		&self.fields
	}
}

/// An ordered search result, in the backend's sort order.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SearchResult {
	pub messages: Vec<Message>,
}
impl SearchResult {
	pub fn new(messages: Vec<Message>) -> Self {
		Self { messages }
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use time::macros::datetime;

	use crate::message::Message;

	#[test]
	fn renders_strings_verbatim_and_others_as_json() {
		let message = Message::new(datetime!(2024-05-01 12:00:00 UTC))
			.with_field("src_ip", "10.0.0.1")
			.with_field("port", 443)
			.with_field("tags", json!(["a", "b"]));

		assert_eq!(message.field_as_string("src_ip").as_deref(), Some("10.0.0.1"));
		assert_eq!(message.field_as_string("port").as_deref(), Some("443"));
		assert_eq!(message.field_as_string("tags").as_deref(), Some(r#"["a","b"]"#));
		assert_eq!(message.field_as_string("absent"), None);
	}

	#[test]
	fn re_adding_a_field_replaces_the_value() {
		let mut message = Message::new(datetime!(2024-05-01 12:00:00 UTC));

		message.add_field("ip", "10.0.0.1");
		message.add_field("ip", "10.0.0.2");

		assert_eq!(message.field_as_string("ip").as_deref(), Some("10.0.0.2"));
		assert_eq!(message.fields().len(), 1);
	}
}
