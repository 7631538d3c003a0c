use serde::Serialize;
use url::Url;

use crate::domain::post::entity::{BlockKind, ContentBlock};

const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// A piece of post body ready for display. `key` is the block's position in the
/// post, stable even when two blocks carry the same text.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DisplayFragment {
	Text { key: usize, text: String },
	Link { key: usize, text: String, href: Url },
}

impl DisplayFragment {
	pub fn key(&self) -> usize {
		match self {
			Self::Text { key, .. } | Self::Link { key, .. } => *key,
		}
	}
	pub fn text(&self) -> &str {
		match self {
			Self::Text { text, .. } | Self::Link { text, .. } => text,
		}
	}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ContentRenderer;

impl ContentRenderer {
	pub fn render(
		&self,
		key: usize,
		block: &ContentBlock,
	) -> Option<DisplayFragment> {
		match block.kind {
			BlockKind::Paragraph => Some(DisplayFragment::Text {
				key,
				text: block.content.clone(),
			}),
			BlockKind::Link => match Self::link_target(block) {
				Some(href) => Some(DisplayFragment::Link {
					key,
					text: block.content.clone(),
					href,
				}),
				None => {
					tracing::warn!(key, content = %block.content, "link block has no resolvable target, rendering as text");
					Some(DisplayFragment::Text {
						key,
						text: block.content.clone(),
					})
				}
			},
			BlockKind::Unknown => {
				tracing::debug!(key, "skipping content block of unknown type");
				None
			}
		}
	}

	pub fn render_all(
		&self,
		blocks: &[ContentBlock],
	) -> Vec<DisplayFragment> {
		blocks.iter().enumerate().filter_map(|(key, block)| self.render(key, block)).collect()
	}

	/// The explicit `url` wins; otherwise the link text itself is read as an
	/// address, with `https://` assumed when it carries no scheme.
	fn link_target(block: &ContentBlock) -> Option<Url> {
		block
			.url
			.as_deref()
			.and_then(Self::parse_target)
			.or_else(|| Self::parse_target(block.content.trim()))
	}

	fn parse_target(raw: &str) -> Option<Url> {
		if raw.is_empty() {
			return None;
		}
		match Url::parse(raw) {
			Ok(url) if LINK_SCHEMES.contains(&url.scheme()) => Some(url),
			_ => Url::parse(&format!("https://{raw}")).ok().filter(|url| url.host_str().is_some_and(|host| host.contains('.'))),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_paragraph_renders_text() {
		let fragment = ContentRenderer.render(0, &ContentBlock::paragraph("hello"));
		assert_eq!(
			fragment,
			Some(DisplayFragment::Text {
				key: 0,
				text: "hello".into()
			})
		);
	}

	#[test]
	fn test_unknown_type_renders_nothing() {
		let block: ContentBlock = serde_json::from_str(r#"{"type": "unknown", "content": "x"}"#).unwrap();
		assert_eq!(ContentRenderer.render(0, &block), None);
	}

	#[test]
	fn test_link_binds_explicit_url() {
		let block = ContentBlock::link("my portfolio", Some("https://jane.design/doctorcare".into()));
		match ContentRenderer.render(3, &block) {
			Some(DisplayFragment::Link { key, text, href }) => {
				assert_eq!(key, 3);
				assert_eq!(text, "my portfolio");
				assert_eq!(href.as_str(), "https://jane.design/doctorcare");
			}
			other => panic!("expected a link, got {other:?}"),
		}
	}

	#[test]
	fn test_link_falls_back_to_its_text() {
		let block = ContentBlock::link("jane.design/doctorcare", None);
		match ContentRenderer.render(0, &block) {
			Some(DisplayFragment::Link { href, .. }) => assert_eq!(href.as_str(), "https://jane.design/doctorcare"),
			other => panic!("expected a link, got {other:?}"),
		}
	}

	#[test]
	fn test_unresolvable_link_degrades_to_text() {
		let block = ContentBlock::link("#novoprojeto", None);
		assert_eq!(
			ContentRenderer.render(1, &block),
			Some(DisplayFragment::Text {
				key: 1,
				text: "#novoprojeto".into()
			})
		);
	}

	#[test]
	fn test_render_all_keys_by_index_and_keeps_order() {
		let blocks: Vec<ContentBlock> = serde_json::from_str(
			r#"[
				{"type": "paragraph", "content": "same"},
				{"type": "video", "content": "dropped"},
				{"type": "paragraph", "content": "same"}
			]"#,
		)
		.unwrap();

		let fragments = ContentRenderer.render_all(&blocks);

		assert_eq!(fragments.len(), 2);
		assert_eq!(fragments.iter().map(DisplayFragment::key).collect::<Vec<_>>(), vec![0, 2]);
		assert!(fragments.iter().all(|fragment| fragment.text() == "same"));
	}
}
