use std::{
	fs::File,
	io::{self, BufRead, Write},
};

use feed::{
	dependencies::{config, config_issues, dependency},
	domain::feed::schemas::FeedCommand,
	services::{
		handlers::FeedHandler,
		response::{ServiceError, ServiceResponse},
	},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_FEED: &str = include_str!("../../../demos/feed.json");

fn main() -> Result<(), ServiceError> {
	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| format!("feed={}", config().log_level).into()))
		.with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
		.init();

	for issue in config_issues() {
		tracing::warn!("Falling back to default setting: {}", issue);
	}

	let posts = match &config().feed_path {
		Some(path) => {
			tracing::info!(path = %path.display(), "loading feed file");
			FeedHandler::load_posts(File::open(path)?)?
		}
		None => FeedHandler::load_posts(DEMO_FEED.as_bytes())?,
	};
	let mut handler = FeedHandler::new(posts, config().commenter(), dependency().formatter());

	let stdout = io::stdout();
	let mut out = stdout.lock();
	print_response(&mut out, &handler.handle(FeedCommand::Show)?)?;

	// one JSON command per line, applied in arrival order
	for line in io::stdin().lock().lines() {
		let line = line?;
		if line.trim().is_empty() {
			continue;
		}
		let result = FeedCommand::try_from(line.as_str()).and_then(|command| handler.handle(command));
		match result {
			Ok(response) => print_response(&mut out, &response)?,
			Err(err) => {
				tracing::warn!("command rejected: {}", err);
				writeln!(out, "{}", serde_json::json!({ "error": err.to_string() }))?;
			}
		}
	}
	Ok(())
}

fn print_response(
	out: &mut impl Write,
	response: &ServiceResponse,
) -> Result<(), ServiceError> {
	serde_json::to_writer(&mut *out, response)?;
	writeln!(out)?;
	Ok(())
}
