use serde::{Deserialize, Serialize};

use crate::{domain::post::entity::CommentId, services::response::ServiceError};

/// User actions on the feed. `post` is the post's position in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum FeedCommand {
	UpdateDraft { post: usize, text: String },
	SubmitDraft { post: usize },
	DeleteComment { post: usize, id: CommentId },
	LikeComment { post: usize, id: CommentId },
	Show,
}

impl FeedCommand {
	pub(crate) fn name<'a>(&self) -> &'a str {
		match self {
			Self::UpdateDraft { .. } => "feed.post.draft.update",
			Self::SubmitDraft { .. } => "feed.post.draft.submit",
			Self::DeleteComment { .. } => "feed.post.comment.delete",
			Self::LikeComment { .. } => "feed.post.comment.like",
			Self::Show => "feed.show",
		}
	}
}

impl TryFrom<&str> for FeedCommand {
	type Error = ServiceError;
	fn try_from(value: &str) -> Result<Self, Self::Error> {
		serde_json::from_str::<FeedCommand>(value.trim()).map_err(|err| ServiceError::ParsingError(err.to_string()))
	}
}

#[test]
fn test_enum_representation() {
	let command = FeedCommand::try_from(r#"{"DeleteComment": {"post": 1, "id": "abc"}}"#).unwrap();
	assert_eq!(
		command,
		FeedCommand::DeleteComment {
			post: 1,
			id: "abc".into()
		}
	);
	assert_eq!(FeedCommand::try_from("\"Show\"\n").unwrap(), FeedCommand::Show);
	assert!(matches!(FeedCommand::try_from("{\"Publish\": {}}"), Err(ServiceError::ParsingError(_))));
}
