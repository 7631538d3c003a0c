// display-time state of a rendered comment
use serde::Serialize;

use super::post::entity::CommentId;

/// One-way applause counter. There is no way to take a like back.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct LikeCounter(u64);

impl LikeCounter {
	pub fn like(&mut self) {
		self.0 = self.0.saturating_add(1);
	}
	pub fn count(&self) -> u64 {
		self.0
	}
}

/// A rendered comment instance. Owns the like counter, which is dropped with it.
#[derive(Debug)]
pub struct CommentDisplay {
	comment_id: CommentId,
	likes: LikeCounter,
}

impl CommentDisplay {
	pub fn new(comment_id: CommentId) -> Self {
		Self {
			comment_id,
			likes: LikeCounter::default(),
		}
	}
	pub fn comment_id(&self) -> &CommentId {
		&self.comment_id
	}
	pub fn like(&mut self) -> u64 {
		self.likes.like();
		tracing::debug!(id = %self.comment_id, likes = self.likes.count(), "comment liked");
		self.likes.count()
	}
	pub fn like_count(&self) -> u64 {
		self.likes.count()
	}
}
