use std::{env, path::PathBuf};

use crate::{
	domain::post::entity::CommentAuthor,
	services::{formatter::Locale, response::ServiceError},
};

pub struct Config {
	/// Which events we want to log
	pub log_level: String,

	/// Identity attached to comments written from this view
	pub default_commenter_name: String,
	pub default_commenter_avatar_url: String,

	pub locale: Locale,
	/// Feed file to load; the bundled demo feed when unset
	pub feed_path: Option<PathBuf>,
}

impl Config {
	/// Reads the process environment. Variables that fail to parse fall back to
	/// their defaults one by one; the returned errors describe what was dropped.
	pub fn new() -> (Config, Vec<ServiceError>) {
		dotenv::dotenv().ok();
		Config::from_lookup(|key| env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Config, Vec<ServiceError>) {
		let defaults = Config::default();
		let mut issues = Vec::new();

		let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);
		let default_commenter_name = match lookup("DEFAULT_COMMENTER_NAME") {
			Some(name) if name.trim().is_empty() => {
				issues.push(ServiceError::InvalidConfig("DEFAULT_COMMENTER_NAME must not be empty".into()));
				defaults.default_commenter_name
			}
			Some(name) => name,
			None => defaults.default_commenter_name,
		};
		let default_commenter_avatar_url = lookup("DEFAULT_COMMENTER_AVATAR_URL").unwrap_or(defaults.default_commenter_avatar_url);
		let locale = match lookup("FEED_LOCALE").map(|raw| raw.parse::<Locale>()) {
			Some(Ok(locale)) => locale,
			Some(Err(err)) => {
				issues.push(err);
				defaults.locale
			}
			None => defaults.locale,
		};
		let feed_path = lookup("FEED_PATH").map(PathBuf::from);

		let config = Config {
			log_level,
			default_commenter_name,
			default_commenter_avatar_url,
			locale,
			feed_path,
		};
		(config, issues)
	}

	pub fn commenter(&self) -> CommentAuthor {
		CommentAuthor {
			name: self.default_commenter_name.clone(),
			avatar_url: self.default_commenter_avatar_url.clone(),
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			log_level: "warn".into(),
			default_commenter_name: "Gustavo da Silva".into(),
			default_commenter_avatar_url: "https://github.com/gstvds.png".into(),
			locale: Locale::PtBr,
			feed_path: None,
		}
	}
}
