pub mod comment;
pub mod feed;
pub mod post;
