pub mod schemas;

use std::{collections::HashMap, ops::Deref};

use super::{
	comment::CommentDisplay,
	post::{
		entity::{Comment, CommentId},
		PostViewModel,
	},
};
use crate::services::response::ServiceError;

/// A post as it is currently on screen: the view model plus one display
/// instance per comment in the thread.
pub struct PostSession {
	model: PostViewModel,
	displays: Vec<CommentDisplay>,
}

impl PostSession {
	pub fn new(model: PostViewModel) -> Self {
		let mut session = Self {
			model,
			displays: Vec::new(),
		};
		session.reconcile();
		session
	}

	pub fn displays(&self) -> &[CommentDisplay] {
		&self.displays
	}

	pub fn update_draft(
		&mut self,
		text: impl Into<String>,
	) {
		self.model.update_draft(text);
	}

	pub fn submit_draft(&mut self) -> Result<Comment, ServiceError> {
		let comment = self.model.submit_draft()?;
		self.reconcile();
		Ok(comment)
	}

	pub fn delete_comment(
		&mut self,
		id: &CommentId,
	) -> bool {
		let removed = self.model.delete_comment(id);
		if removed {
			self.reconcile();
		}
		removed
	}

	pub fn like_comment(
		&mut self,
		id: &CommentId,
	) -> Result<u64, ServiceError> {
		self.displays
			.iter_mut()
			.find(|display| display.comment_id() == id)
			.map(CommentDisplay::like)
			.ok_or_else(|| ServiceError::CommentNotFound(id.clone()))
	}

	pub fn like_count(
		&self,
		id: &CommentId,
	) -> Option<u64> {
		self.displays.iter().find(|display| display.comment_id() == id).map(CommentDisplay::like_count)
	}

	// Keeps display instances keyed by comment id: surviving comments keep
	// their counters, new ones start fresh, removed ones are dropped.
	fn reconcile(&mut self) {
		let mut previous: HashMap<CommentId, CommentDisplay> =
			self.displays.drain(..).map(|display| (display.comment_id().clone(), display)).collect();
		self.displays = self
			.model
			.comments()
			.iter()
			.map(|comment| previous.remove(comment.id()).unwrap_or_else(|| CommentDisplay::new(comment.id().clone())))
			.collect();
	}
}

impl Deref for PostSession {
	type Target = PostViewModel;
	fn deref(&self) -> &Self::Target {
		&self.model
	}
}

#[cfg(test)]
mod test {
	use chrono::{TimeZone, Utc};

	use super::*;
	use crate::domain::post::{
		identifier::SequentialGenerator,
		test::{commenter, payload, FixedClock},
	};

	fn session() -> PostSession {
		PostSession::new(
			PostViewModel::new(payload(), commenter())
				.with_id_generator(SequentialGenerator::default())
				.with_clock(FixedClock(Utc.with_ymd_and_hms(2022, 5, 4, 10, 0, 0).unwrap())),
		)
	}

	fn submit(
		session: &mut PostSession,
		text: &str,
	) -> CommentId {
		session.update_draft(text);
		session.submit_draft().unwrap().id().clone()
	}

	#[test]
	fn test_likes_survive_other_mutations() {
		'_given: {
			let mut session = session();
			let first = submit(&mut session, "first");
			let second = submit(&mut session, "second");
			session.like_comment(&first).unwrap();
			session.like_comment(&first).unwrap();

			'_when: {
				session.delete_comment(&second);
				let third = submit(&mut session, "third");

				assert_eq!(session.like_count(&first), Some(2));
				assert_eq!(session.like_count(&third), Some(0));
				assert_eq!(session.like_count(&second), None);
				assert_eq!(session.displays().len(), 2);
			}
		}
	}

	#[test]
	fn test_recreated_comment_starts_from_zero() {
		let mut session = session();
		let id = submit(&mut session, "same text");
		session.like_comment(&id).unwrap();
		session.delete_comment(&id);

		let again = submit(&mut session, "same text");

		assert_ne!(again, id);
		assert_eq!(session.like_count(&again), Some(0));
	}

	#[test]
	fn test_liking_a_missing_comment_fails() {
		let mut session = session();
		assert!(matches!(session.like_comment(&"nope".into()), Err(ServiceError::CommentNotFound(_))));
	}

	#[test]
	fn test_displays_follow_comment_order() {
		let mut session = session();
		let ids: Vec<CommentId> = ["a", "b", "c"].into_iter().map(|text| submit(&mut session, text)).collect();
		session.delete_comment(&ids[1]);

		let shown: Vec<&CommentId> = session.displays().iter().map(CommentDisplay::comment_id).collect();
		assert_eq!(shown, vec![&ids[0], &ids[2]]);
	}
}
