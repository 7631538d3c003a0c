use uuid::Uuid;

use super::entity::CommentId;

/// Source of comment identifiers.
pub trait IdGenerator {
	fn next_id(&mut self) -> CommentId;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
	fn next_id(&mut self) -> CommentId {
		Uuid::new_v4().into()
	}
}

/// Monotonic counter; ids are `"{prefix}{n}"` starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
	prefix: String,
	next: u64,
}

impl SequentialGenerator {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			next: 1,
		}
	}
}

impl Default for SequentialGenerator {
	fn default() -> Self {
		Self::new("")
	}
}

impl IdGenerator for SequentialGenerator {
	fn next_id(&mut self) -> CommentId {
		let id = format!("{}{}", self.prefix, self.next);
		self.next += 1;
		id.into()
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn test_sequential_generator_counts_up() {
		let mut generator = SequentialGenerator::new("c-");
		assert_eq!(generator.next_id().as_str(), "c-1");
		assert_eq!(generator.next_id().as_str(), "c-2");
	}

	#[test]
	fn test_uuid_generator_does_not_repeat() {
		let mut generator = UuidGenerator;
		let ids: HashSet<CommentId> = (0..1000).map(|_| generator.next_id()).collect();
		assert_eq!(ids.len(), 1000);
	}
}
