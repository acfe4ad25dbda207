pub mod post;
pub mod types;

pub use post::{Post, PostId};
pub use types::{IdSet, KeywordSnapshot};
