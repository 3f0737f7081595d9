pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid parameters: {message}.")]
	InvalidParams { message: String },
	#[error(transparent)]
	InvalidRange(#[from] lookback_domain::Error),
	#[error(transparent)]
	Search(#[from] lookback_search::SearchError),
}
