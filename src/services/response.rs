use serde::Serialize;

use crate::{
	domain::post::entity::{Comment, CommentId},
	services::view::FeedView,
};

#[derive(Debug, Serialize)]
pub enum ServiceResponse {
	Feed(FeedView),
	Comment(Comment),
	String(String),
	Bool(bool),
	U64(u64),
	Empty(()),
}

impl From<FeedView> for ServiceResponse {
	fn from(value: FeedView) -> Self {
		ServiceResponse::Feed(value)
	}
}

impl From<Comment> for ServiceResponse {
	fn from(value: Comment) -> Self {
		ServiceResponse::Comment(value)
	}
}

impl From<String> for ServiceResponse {
	fn from(value: String) -> Self {
		ServiceResponse::String(value)
	}
}

impl From<bool> for ServiceResponse {
	fn from(value: bool) -> Self {
		ServiceResponse::Bool(value)
	}
}

impl From<()> for ServiceResponse {
	fn from(_value: ()) -> Self {
		ServiceResponse::Empty(())
	}
}

impl From<u64> for ServiceResponse {
	fn from(value: u64) -> Self {
		ServiceResponse::U64(value)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("EmptyDraft")]
	EmptyDraft,
	#[error("PostNotFound: {0}")]
	PostNotFound(usize),
	#[error("CommentNotFound: {0}")]
	CommentNotFound(CommentId),
	#[error("IdGeneratorExhausted: no fresh id after {0} attempts")]
	IdGeneratorExhausted(usize),
	#[error("ParsingError: {0}")]
	ParsingError(String),
	#[error("InvalidConfig: {0}")]
	InvalidConfig(String),
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ServiceError {
	fn from(value: serde_json::Error) -> Self {
		ServiceError::ParsingError(value.to_string())
	}
}
