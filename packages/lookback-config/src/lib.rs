mod error;
mod types;

pub use error::{Error, Result};
pub use types::{ClusterSearchConfig, Config, Searches};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.searches.query_time_range_limit_secs < 0 {
		return Err(Error::Validation {
			message: "searches.query_time_range_limit_secs must be zero or greater.".to_string(),
		});
	}

	Ok(())
}
