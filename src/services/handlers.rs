use std::io::Read;

use chrono::{DateTime, Utc};

use super::{
	formatter::TimestampFormatter,
	render::ContentRenderer,
	response::{ServiceError, ServiceResponse},
	view::{FeedView, PostView},
};
use crate::domain::{
	feed::{schemas::FeedCommand, PostSession},
	post::{
		entity::{CommentAuthor, PostPayload},
		PostViewModel,
	},
};

/// Owns every post on screen and applies user actions to them one at a time.
pub struct FeedHandler {
	sessions: Vec<PostSession>,
	renderer: ContentRenderer,
	formatter: Box<dyn TimestampFormatter>,
}

impl FeedHandler {
	pub fn new(
		posts: Vec<PostPayload>,
		commenter: CommentAuthor,
		formatter: Box<dyn TimestampFormatter>,
	) -> Self {
		let sessions = posts
			.into_iter()
			.map(|payload| PostSession::new(PostViewModel::new(payload, commenter.clone())))
			.collect();
		Self::from_sessions(sessions, formatter)
	}

	pub fn from_sessions(
		sessions: Vec<PostSession>,
		formatter: Box<dyn TimestampFormatter>,
	) -> Self {
		Self {
			sessions,
			renderer: ContentRenderer,
			formatter,
		}
	}

	/// Reads a feed file: a JSON array of posts.
	pub fn load_posts(reader: impl Read) -> Result<Vec<PostPayload>, ServiceError> {
		let posts: Vec<PostPayload> = serde_json::from_reader(reader)?;
		tracing::info!(posts = posts.len(), "feed loaded");
		Ok(posts)
	}

	pub fn sessions(&self) -> &[PostSession] {
		&self.sessions
	}

	pub fn session(
		&self,
		post: usize,
	) -> Result<&PostSession, ServiceError> {
		self.sessions.get(post).ok_or(ServiceError::PostNotFound(post))
	}

	fn session_mut(
		&mut self,
		post: usize,
	) -> Result<&mut PostSession, ServiceError> {
		self.sessions.get_mut(post).ok_or(ServiceError::PostNotFound(post))
	}

	pub fn handle(
		&mut self,
		command: FeedCommand,
	) -> Result<ServiceResponse, ServiceError> {
		tracing::debug!(command = command.name(), "handling command");
		match command {
			FeedCommand::UpdateDraft { post, text } => {
				let session = self.session_mut(post)?;
				session.update_draft(text);
				Ok(session.submit_enabled().into())
			}
			FeedCommand::SubmitDraft { post } => Ok(self.session_mut(post)?.submit_draft()?.into()),
			FeedCommand::DeleteComment { post, id } => Ok(self.session_mut(post)?.delete_comment(&id).into()),
			FeedCommand::LikeComment { post, id } => Ok(self.session_mut(post)?.like_comment(&id)?.into()),
			FeedCommand::Show => Ok(self.view(Utc::now()).into()),
		}
	}

	pub fn view(
		&self,
		now: DateTime<Utc>,
	) -> FeedView {
		FeedView {
			posts: self
				.sessions
				.iter()
				.enumerate()
				.map(|(index, session)| PostView::derive(index, session, &self.renderer, self.formatter.as_ref(), now))
				.collect(),
		}
	}
}

#[cfg(test)]
mod test {
	use chrono::{Duration, TimeZone};

	use super::*;
	use crate::{
		domain::post::{
			identifier::SequentialGenerator,
			test::{commenter, payload, FixedClock},
		},
		services::{
			formatter::{Locale, LocalizedFormatter},
			render::DisplayFragment,
			view::{AvatarView, Icon},
		},
	};

	fn commented_at() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2022, 5, 4, 10, 0, 0).unwrap()
	}

	fn handler() -> FeedHandler {
		let session = PostSession::new(
			PostViewModel::new(payload(), commenter())
				.with_id_generator(SequentialGenerator::default())
				.with_clock(FixedClock(commented_at())),
		);
		FeedHandler::from_sessions(vec![session], Box::new(LocalizedFormatter::new(Locale::PtBr)))
	}

	fn run(
		handler: &mut FeedHandler,
		line: &str,
	) -> Result<ServiceResponse, ServiceError> {
		handler.handle(FeedCommand::try_from(line)?)
	}

	#[test]
	fn test_draft_submit_like_delete_flow() {
		'_given: {
			let mut handler = handler();

			'_when: {
				let enabled = run(&mut handler, r#"{"UpdateDraft": {"post": 0, "text": "hi"}}"#).unwrap();
				assert!(matches!(enabled, ServiceResponse::Bool(true)));

				let ServiceResponse::Comment(created) = run(&mut handler, r#"{"SubmitDraft": {"post": 0}}"#).unwrap() else {
					panic!("expected the created comment");
				};
				assert_eq!(created.content(), "hi");
				assert_eq!(created.id().as_str(), "1");

				let like = FeedCommand::LikeComment {
					post: 0,
					id: created.id().clone(),
				};
				handler.handle(like.clone()).unwrap();
				let liked = handler.handle(like).unwrap();
				assert!(matches!(liked, ServiceResponse::U64(2)));

				let removed = run(&mut handler, r#"{"DeleteComment": {"post": 0, "id": "1"}}"#).unwrap();
				assert!(matches!(removed, ServiceResponse::Bool(true)));
				assert!(handler.session(0).unwrap().comments().is_empty());
			}
		}
	}

	#[test]
	fn test_empty_submit_surfaces_error() {
		let mut handler = handler();
		let result = run(&mut handler, r#"{"SubmitDraft": {"post": 0}}"#);
		assert!(matches!(result, Err(ServiceError::EmptyDraft)));
		assert!(handler.session(0).unwrap().comments().is_empty());
	}

	#[test]
	fn test_unknown_post_is_reported() {
		let mut handler = handler();
		let result = run(&mut handler, r#"{"UpdateDraft": {"post": 7, "text": "hi"}}"#);
		assert!(matches!(result, Err(ServiceError::PostNotFound(7))));
	}

	#[test]
	fn test_deleting_absent_comment_is_silent() {
		let mut handler = handler();
		let removed = run(&mut handler, r#"{"DeleteComment": {"post": 0, "id": "ghost"}}"#).unwrap();
		assert!(matches!(removed, ServiceResponse::Bool(false)));
	}

	#[test]
	fn test_view_reflects_state() {
		'_given: {
			let mut handler = handler();
			run(&mut handler, r#"{"UpdateDraft": {"post": 0, "text": "Muito bom Devon, parabéns!! 👏👏"}}"#).unwrap();
			run(&mut handler, r#"{"SubmitDraft": {"post": 0}}"#).unwrap();
			run(&mut handler, r#"{"LikeComment": {"post": 0, "id": "1"}}"#).unwrap();
			run(&mut handler, r#"{"UpdateDraft": {"post": 0, "text": "still typing"}}"#).unwrap();

			'_when: {
				let view = handler.view(commented_at() + Duration::hours(2));
				let post = &view.posts[0];

				assert_eq!(
					post.avatar,
					AvatarView {
						src: "https://github.com/diego3g.png".into(),
						has_border: true
					}
				);
				assert_eq!(post.role.as_deref(), Some("CTO @Rocketseat"));
				assert_eq!(post.published.absolute, "3 de maio às 20:00h");
				assert_eq!(post.draft, "still typing");
				assert!(post.submit_enabled);
				assert!(matches!(post.content[1], DisplayFragment::Link { .. }));

				let comment = &post.comments[0];
				assert!(!comment.avatar.has_border);
				assert_eq!(comment.name, "Gustavo da Silva");
				assert_eq!(comment.commented.relative, "cerca de 2 horas");
				assert_eq!(comment.like_count, 1);
				assert_eq!((comment.like_icon, comment.delete_icon), (Icon::ThumbsUp, Icon::Trash));
			}
		}
	}

	#[test]
	fn test_load_posts_from_json() {
		let raw = r#"[
			{
				"author": {"avatarUrl": "https://github.com/maykbrito.png", "name": "Mayk Brito", "role": "Educator @Rocketseat"},
				"publishedAt": "2022-05-10T20:00:00Z",
				"content": [{"type": "paragraph", "content": "Fala pessoal 👋"}]
			}
		]"#;
		let posts = FeedHandler::load_posts(raw.as_bytes()).unwrap();
		let handler = FeedHandler::new(posts, commenter(), Box::new(LocalizedFormatter::default()));
		assert_eq!(handler.sessions().len(), 1);
		assert_eq!(handler.session(0).unwrap().author.name, "Mayk Brito");
	}

	#[test]
	fn test_load_posts_rejects_garbage() {
		assert!(matches!(FeedHandler::load_posts("not json".as_bytes()), Err(ServiceError::ParsingError(_))));
	}
}
