//! Comments domain module.
//!
//! Comments hang off a blog post. They are stored by
//! [`BlogStore`](crate::domains::blogs::BlogStore) next to the post they belong
//! to, so removing a post removes its comments in the same write.

mod schema;

pub use schema::{COMMENT_MAX_LEN, COMMENT_MIN_LEN, Comment, CommentId, NewComment};
