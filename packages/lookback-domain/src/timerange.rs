use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use lookback_config::ClusterSearchConfig;

use crate::{Error, Result};

/// A resolved search window. `from` never exceeds `to`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AbsoluteRange {
	from: OffsetDateTime,
	to: OffsetDateTime,
}
impl AbsoluteRange {
	pub fn new(from: OffsetDateTime, to: OffsetDateTime) -> Result<Self> {
		if from > to {
			return Err(Error::InvalidRange {
				message: format!("range start {from} is after range end {to}"),
			});
		}

		Ok(Self { from, to })
	}

	pub fn from(&self) -> OffsetDateTime {
		self.from
	}

	pub fn to(&self) -> OffsetDateTime {
		self.to
	}

	pub fn width(&self) -> Duration {
		self.to - self.from
	}

	pub fn contains(&self, instant: OffsetDateTime) -> bool {
		self.from <= instant && instant <= self.to
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TimeRange {
	Relative { seconds: i64 },
	Absolute { from: OffsetDateTime, to: OffsetDateTime },
}
impl TimeRange {
	pub fn resolve(self, now: OffsetDateTime) -> Result<AbsoluteRange> {
		match self {
			Self::Relative { seconds } => resolve(seconds, now),
			Self::Absolute { from, to } => AbsoluteRange::new(from, to),
		}
	}
}

/// Builds the window `[now - seconds_back, now]`.
///
/// A malformed lookback fails here, before any search is built; callers must
/// not run a search from an errored resolution.
pub fn resolve(seconds_back: i64, now: OffsetDateTime) -> Result<AbsoluteRange> {
	if seconds_back < 0 {
		return Err(Error::InvalidRange {
			message: format!("lookback of {seconds_back} seconds is negative"),
		});
	}

	let from =
		now.checked_sub(Duration::seconds(seconds_back)).ok_or_else(|| Error::InvalidRange {
			message: format!("lookback of {seconds_back} seconds underflows the timestamp range"),
		})?;

	AbsoluteRange::new(from, now)
}

/// Applies the cluster-wide window limit: the later of the requested start
/// and `to - limit` wins, so the limit only ever shrinks the window. An
/// absent or non-positive limit leaves the window untouched.
pub fn clamp(candidate: AbsoluteRange, config: Option<&ClusterSearchConfig>) -> AbsoluteRange {
	let original_from = candidate.from;
	let to = candidate.to;
	let from = match config {
		Some(config) if config.query_time_range_limit.is_positive() => {
			let limited_from = to - config.query_time_range_limit;

			if limited_from > original_from { limited_from } else { original_from }
		},
		_ => original_from,
	};

	AbsoluteRange { from, to }
}
