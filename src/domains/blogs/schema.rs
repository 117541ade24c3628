//! Blog post schema and field constraints.
//!
//! Create payloads are checked in full; update payloads are checked only for
//! the fields they actually carry.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::error::{FieldError, ValidationErrors};

/// Identifier of a blog post. Assigned by the store, never reused.
pub type BlogId = Uuid;

pub const TITLE_MIN_LEN: usize = 5;
pub const TITLE_MAX_LEN: usize = 100;
pub const BODY_MIN_LEN: usize = 10;

/// A stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: BlogId,
    pub title: String,
    pub body: String,
    pub published: Option<bool>,
}

/// Payload for creating a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewBlog {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub published: Option<bool>,
}

impl NewBlog {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            published: None,
        }
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    /// Check every field, collecting all violations.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_title(&self.title, &mut errors);
        check_body(&self.body, &mut errors);
        errors.into_result()
    }

    pub(crate) fn into_post(self, id: BlogId) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            body: self.body,
            published: self.published,
        }
    }
}

/// One field of a partial update.
///
/// Distinguishes a field left out of the payload from one explicitly set to
/// `null`. Use with `#[serde(default)]` so absent keys become [`Patch::Missing`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Missing,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Payload for a partial update. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BlogPatch {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub body: Patch<String>,
    /// `null` clears the flag.
    #[serde(default)]
    pub published: Patch<bool>,
}

impl BlogPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Patch::Value(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Patch::Value(body.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_missing() && self.body.is_missing() && self.published.is_missing()
    }

    /// Check the supplied fields only.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.title {
            Patch::Missing => {}
            Patch::Null => errors.push(FieldError::null(&["body", "title"])),
            Patch::Value(title) => check_title(title, &mut errors),
        }

        match &self.body {
            Patch::Missing => {}
            Patch::Null => errors.push(FieldError::null(&["body", "body"])),
            Patch::Value(body) => check_body(body, &mut errors),
        }

        errors.into_result()
    }

    /// Merge into `post`. Callers validate first.
    pub(crate) fn apply(self, post: &mut BlogPost) {
        if let Patch::Value(title) = self.title {
            post.title = title;
        }
        if let Patch::Value(body) = self.body {
            post.body = body;
        }
        match self.published {
            Patch::Missing => {}
            Patch::Null => post.published = None,
            Patch::Value(published) => post.published = Some(published),
        }
    }
}

fn check_title(title: &str, errors: &mut ValidationErrors) {
    let len = title.chars().count();
    if len < TITLE_MIN_LEN {
        errors.push(FieldError::too_short(&["body", "title"], TITLE_MIN_LEN, title));
    } else if len > TITLE_MAX_LEN {
        errors.push(FieldError::too_long(&["body", "title"], TITLE_MAX_LEN, title));
    }
}

fn check_body(body: &str, errors: &mut ValidationErrors) {
    if body.chars().count() < BODY_MIN_LEN {
        errors.push(FieldError::too_short(&["body", "body"], BODY_MIN_LEN, body));
    }
}
