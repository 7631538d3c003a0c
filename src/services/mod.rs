pub mod formatter;
pub mod handlers;
pub mod render;
pub mod response;
pub mod view;
