use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
	pub avatar_url: String,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
}

/// Identity attached to a comment: only name and avatar, no role.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
	pub name: String,
	pub avatar_url: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
	Paragraph,
	Link,
	#[serde(other)]
	Unknown,
}

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct ContentBlock {
	#[serde(rename = "type")]
	pub kind: BlockKind,
	pub content: String,
	/// Explicit destination for link blocks.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}

impl ContentBlock {
	pub fn paragraph(content: impl Into<String>) -> Self {
		Self {
			kind: BlockKind::Paragraph,
			content: content.into(),
			url: None,
		}
	}
	pub fn link(
		content: impl Into<String>,
		url: Option<String>,
	) -> Self {
		Self {
			kind: BlockKind::Link,
			content: content.into(),
			url,
		}
	}
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(String);

impl CommentId {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for CommentId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<Uuid> for CommentId {
	fn from(value: Uuid) -> Self {
		Self(value.to_string())
	}
}
impl From<String> for CommentId {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for CommentId {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
	id: CommentId,
	author: CommentAuthor,
	content: String,
	commented_at: DateTime<Utc>,
}

impl Comment {
	pub fn new(
		id: CommentId,
		author: CommentAuthor,
		content: String,
		commented_at: DateTime<Utc>,
	) -> Self {
		Self {
			id,
			author,
			content,
			commented_at,
		}
	}
	pub fn id(&self) -> &CommentId {
		&self.id
	}
	pub fn author(&self) -> &CommentAuthor {
		&self.author
	}
	pub fn content(&self) -> &str {
		&self.content
	}
	pub fn commented_at(&self) -> DateTime<Utc> {
		self.commented_at
	}
}

/// The fixed part of a post as it arrives from the feed source.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
	pub author: Author,
	pub published_at: DateTime<Utc>,
	#[serde(default)]
	pub content: Vec<ContentBlock>,
}
