mod error;
pub mod extract;
pub mod timerange;

pub use error::{Error, Result};
pub use extract::PlannedField;
pub use timerange::{AbsoluteRange, TimeRange};
