//! Read-only snapshots of the feed, derived after every action. A UI layer
//! draws these; avatars and icons are described, not drawn.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
	formatter::TimestampFormatter,
	render::{ContentRenderer, DisplayFragment},
};
use crate::domain::{
	comment::CommentDisplay,
	feed::PostSession,
	post::entity::{Comment, CommentId},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarView {
	pub src: String,
	pub has_border: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
	ThumbsUp,
	Trash,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeView {
	pub iso: String,
	pub absolute: String,
	pub relative: String,
}

impl TimeView {
	fn derive(
		timestamp: DateTime<Utc>,
		now: DateTime<Utc>,
		add_suffix: bool,
		formatter: &dyn TimestampFormatter,
	) -> Self {
		Self {
			iso: timestamp.to_rfc3339(),
			absolute: formatter.format_absolute(timestamp),
			relative: formatter.format_relative(timestamp, now, add_suffix),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
	pub id: CommentId,
	pub avatar: AvatarView,
	pub name: String,
	pub commented: TimeView,
	pub content: String,
	pub like_count: u64,
	pub like_icon: Icon,
	pub delete_icon: Icon,
}

impl CommentView {
	fn derive(
		comment: &Comment,
		display: &CommentDisplay,
		now: DateTime<Utc>,
		formatter: &dyn TimestampFormatter,
	) -> Self {
		Self {
			id: comment.id().clone(),
			avatar: AvatarView {
				src: comment.author().avatar_url.clone(),
				has_border: false,
			},
			name: comment.author().name.clone(),
			commented: TimeView::derive(comment.commented_at(), now, false, formatter),
			content: comment.content().to_string(),
			like_count: display.like_count(),
			like_icon: Icon::ThumbsUp,
			delete_icon: Icon::Trash,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
	pub index: usize,
	pub avatar: AvatarView,
	pub name: String,
	pub role: Option<String>,
	pub published: TimeView,
	pub content: Vec<DisplayFragment>,
	pub draft: String,
	pub submit_enabled: bool,
	pub comments: Vec<CommentView>,
}

impl PostView {
	pub fn derive(
		index: usize,
		session: &PostSession,
		renderer: &ContentRenderer,
		formatter: &dyn TimestampFormatter,
		now: DateTime<Utc>,
	) -> Self {
		Self {
			index,
			avatar: AvatarView {
				src: session.author.avatar_url.clone(),
				has_border: true,
			},
			name: session.author.name.clone(),
			role: session.author.role.clone(),
			published: TimeView::derive(session.published_at, now, true, formatter),
			content: renderer.render_all(&session.content),
			draft: session.draft().to_string(),
			submit_enabled: session.submit_enabled(),
			comments: session
				.comments()
				.iter()
				.zip(session.displays())
				.map(|(comment, display)| CommentView::derive(comment, display, now, formatter))
				.collect(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedView {
	pub posts: Vec<PostView>,
}
