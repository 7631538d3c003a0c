use std::sync::OnceLock;

use crate::{
	config::Config,
	services::{
		formatter::{LocalizedFormatter, TimestampFormatter},
		response::ServiceError,
	},
};

pub struct Dependency;
impl Dependency {
	pub fn formatter(&self) -> Box<dyn TimestampFormatter> {
		Box::new(LocalizedFormatter::new(config().locale))
	}
}

fn loaded_config() -> &'static (Config, Vec<ServiceError>) {
	static CONFIG: OnceLock<(Config, Vec<ServiceError>)> = OnceLock::new();
	CONFIG.get_or_init(Config::new)
}

pub fn config() -> &'static Config {
	&loaded_config().0
}

/// Settings that could not be read and were replaced by their defaults. Report
/// these once logging is up.
pub fn config_issues() -> &'static [ServiceError] {
	&loaded_config().1
}

pub fn dependency() -> &'static Dependency {
	static DEPENDENCY: OnceLock<Dependency> = OnceLock::new();
	DEPENDENCY.get_or_init(|| Dependency)
}
