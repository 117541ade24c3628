//! Comment schema.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::blogs::{BlogId, FieldError, ValidationErrors};

pub type CommentId = Uuid;

pub const COMMENT_MIN_LEN: usize = 1;
pub const COMMENT_MAX_LEN: usize = 500;

/// A comment attached to a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub blog_id: BlogId,
    pub body: String,
}

/// Payload for posting a comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewComment {
    pub body: String,
}

impl NewComment {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let len = self.body.trim().chars().count();
        if len < COMMENT_MIN_LEN {
            return Err(FieldError::too_short(&["body", "body"], COMMENT_MIN_LEN, &self.body).into());
        }
        if self.body.chars().count() > COMMENT_MAX_LEN {
            return Err(FieldError::too_long(&["body", "body"], COMMENT_MAX_LEN, &self.body).into());
        }
        Ok(())
    }

    pub(crate) fn into_comment(self, blog_id: BlogId) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            blog_id,
            body: self.body,
        }
    }
}
