use std::collections::HashSet;

/// One field ready to be appended to the current message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlannedField {
	pub name: String,
	pub value: String,
}

/// Keeps the first occurrence of each value, in encounter order. `None`
/// entries are messages without the source field and are skipped.
///
/// Callers feed results in backend sort order (most recent first), so for a
/// repeated value the most recent occurrence decides its position.
pub fn distinct_values<I>(values: I) -> Vec<String>
where
	I: IntoIterator<Item = Option<String>>,
{
	let mut seen = HashSet::new();
	let mut distinct = Vec::new();

	for value in values.into_iter().flatten() {
		if seen.insert(value.clone()) {
			distinct.push(value);
		}
	}

	distinct
}

/// Assigns destination field names. With sequencing each value gets a
/// zero-based suffix matching its position in the distinct sequence; without
/// it every value targets the bare destination name and the message's
/// repeated-name policy decides which one survives.
pub fn plan_fields(
	values: Vec<String>,
	destination: &str,
	use_sequence: bool,
) -> Vec<PlannedField> {
	values
		.into_iter()
		.enumerate()
		.map(|(index, value)| {
			let name = if use_sequence {
				format!("{destination}{index}")
			} else {
				destination.to_string()
			};

			PlannedField { name, value }
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use crate::extract::{PlannedField, distinct_values, plan_fields};

	fn owned(values: &[&str]) -> Vec<Option<String>> {
		values.iter().map(|value| Some(value.to_string())).collect()
	}

	#[test]
	fn keeps_first_occurrence_order() {
		let distinct = distinct_values(owned(&["a", "b", "a", "c"]));

		assert_eq!(distinct, vec!["a", "b", "c"]);
	}

	#[test]
	fn skips_absent_fields() {
		let distinct = distinct_values(vec![None, Some("a".to_string()), None]);

		assert_eq!(distinct, vec!["a"]);
	}

	#[test]
	fn empty_input_yields_no_values() {
		assert!(distinct_values(Vec::new()).is_empty());
	}

	#[test]
	fn sequencing_appends_zero_based_suffix() {
		let planned =
			plan_fields(vec!["x".to_string(), "y".to_string(), "z".to_string()], "ip", true);

		assert_eq!(planned, vec![
			PlannedField { name: "ip0".to_string(), value: "x".to_string() },
			PlannedField { name: "ip1".to_string(), value: "y".to_string() },
			PlannedField { name: "ip2".to_string(), value: "z".to_string() },
		]);
	}

	#[test]
	fn without_sequencing_all_values_share_the_name() {
		let planned = plan_fields(vec!["x".to_string(), "y".to_string()], "ip", false);

		assert!(planned.iter().all(|field| field.name == "ip"));
	}
}
