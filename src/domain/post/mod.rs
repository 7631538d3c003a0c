use std::{collections::HashSet, ops::Deref};

use chrono::{DateTime, Utc};

use self::{
	entity::{Comment, CommentAuthor, CommentId, PostPayload},
	identifier::{IdGenerator, UuidGenerator},
};
use crate::services::response::ServiceError;

pub mod entity;
pub mod identifier;

const MINT_ATTEMPTS: usize = 16;

pub trait Clock {
	fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;
impl Clock for SystemClock {
	fn now(&self) -> DateTime<Utc> {
		Utc::now()
	}
}

/// State container for one post: the fixed payload, its comment thread and the
/// pending draft.
pub struct PostViewModel {
	payload: PostPayload,
	comments: Vec<Comment>,
	draft: String,
	commenter: CommentAuthor,
	// every id this store has held, deleted ones included; grows with the
	// number of comments written during the view's lifetime
	issued: HashSet<CommentId>,
	ids: Box<dyn IdGenerator>,
	clock: Box<dyn Clock>,
}

impl PostViewModel {
	pub fn new(
		payload: PostPayload,
		commenter: CommentAuthor,
	) -> Self {
		Self {
			payload,
			comments: Vec::new(),
			draft: String::new(),
			commenter,
			issued: HashSet::new(),
			ids: Box::new(UuidGenerator),
			clock: Box::new(SystemClock),
		}
	}

	pub fn with_id_generator(
		mut self,
		ids: impl IdGenerator + 'static,
	) -> Self {
		self.ids = Box::new(ids);
		self
	}

	pub fn with_clock(
		mut self,
		clock: impl Clock + 'static,
	) -> Self {
		self.clock = Box::new(clock);
		self
	}

	/// Seeds the thread with existing comments. A comment whose id is already
	/// taken is dropped.
	pub fn with_comments(
		mut self,
		comments: impl IntoIterator<Item = Comment>,
	) -> Self {
		for comment in comments {
			if self.issued.insert(comment.id().clone()) {
				self.comments.push(comment);
			} else {
				tracing::warn!(id = %comment.id(), "duplicate comment id dropped while seeding");
			}
		}
		self
	}

	pub fn draft(&self) -> &str {
		&self.draft
	}

	pub fn comments(&self) -> &[Comment] {
		&self.comments
	}

	pub fn commenter(&self) -> &CommentAuthor {
		&self.commenter
	}

	pub fn submit_enabled(&self) -> bool {
		!self.draft.is_empty()
	}

	pub fn update_draft(
		&mut self,
		text: impl Into<String>,
	) {
		self.draft = text.into();
	}

	pub fn submit_draft(&mut self) -> Result<Comment, ServiceError> {
		if self.draft.is_empty() {
			tracing::warn!("refused to submit an empty draft");
			return Err(ServiceError::EmptyDraft);
		}

		let id = self.mint_id()?;
		let comment = Comment::new(id, self.commenter.clone(), std::mem::take(&mut self.draft), self.clock.now());
		tracing::debug!(id = %comment.id(), "comment appended");
		self.comments.push(comment.clone());
		Ok(comment)
	}

	/// Removes the comment with `id`, keeping the others in place. Returns
	/// whether anything was removed; an unknown id is not an error.
	pub fn delete_comment(
		&mut self,
		id: &CommentId,
	) -> bool {
		let before = self.comments.len();
		self.comments.retain(|comment| comment.id() != id);
		let removed = self.comments.len() != before;
		tracing::debug!(%id, removed, "delete comment");
		removed
	}

	fn mint_id(&mut self) -> Result<CommentId, ServiceError> {
		for _ in 0..MINT_ATTEMPTS {
			let id = self.ids.next_id();
			if self.issued.insert(id.clone()) {
				return Ok(id);
			}
			tracing::warn!(%id, "generated comment id already used, retrying");
		}
		tracing::error!(attempts = MINT_ATTEMPTS, "id generator produced no fresh comment id");
		Err(ServiceError::IdGeneratorExhausted(MINT_ATTEMPTS))
	}
}

impl Deref for PostViewModel {
	type Target = PostPayload;
	fn deref(&self) -> &Self::Target {
		&self.payload
	}
}
