//! Domain entities - the core business objects.

mod author;
mod filter;
mod post;

pub use author::Author;
pub use filter::PostFilter;
pub use post::{ExternalPost, Post, PostPatch};
