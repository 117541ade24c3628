//! Pagination and filtering over stored blog posts.
//!
//! Filters operate on the store's iteration order, which is insertion order,
//! so ties keep their relative position.

use serde_json::Value;

use super::error::{FieldError, ValidationErrors};
use super::schema::BlogPost;

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;
pub const MIN_KEYWORD_LEN: usize = 3;

/// A validated skip/limit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    skip: usize,
    limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Build a window from raw query values.
    ///
    /// Absent values take their defaults. Negative values and a limit above
    /// [`MAX_LIMIT`] are rejected.
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut page = Self::default();

        if let Some(skip) = skip {
            match usize::try_from(skip) {
                Ok(skip) => page.skip = skip,
                Err(_) => errors.push(FieldError::less_than(&["query", "skip"], 0, skip)),
            }
        }

        if let Some(limit) = limit {
            if limit < 0 {
                errors.push(FieldError::less_than(&["query", "limit"], 0, limit));
            } else if limit > MAX_LIMIT as i64 {
                errors.push(FieldError::greater_than(
                    &["query", "limit"],
                    MAX_LIMIT as i64,
                    limit,
                ));
            } else {
                page.limit = limit as usize;
            }
        }

        errors.into_result().map(|()| page)
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Restrict `items` to this window.
    pub fn apply<I>(&self, items: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
    {
        items.into_iter().skip(self.skip).take(self.limit)
    }
}

/// Optional restrictions applied to a listing before pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Posts with no flag count as unpublished.
    pub published: Option<bool>,
}

impl ListFilter {
    pub fn published(published: bool) -> Self {
        Self {
            published: Some(published),
        }
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        match self.published {
            Some(wanted) => post.published.unwrap_or(false) == wanted,
            None => true,
        }
    }
}

/// A case-insensitive title search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleKeyword(String);

impl TitleKeyword {
    /// Accepts keywords of at least [`MIN_KEYWORD_LEN`] characters.
    /// Whitespace is part of the keyword.
    pub fn parse(raw: &str) -> Result<Self, ValidationErrors> {
        if raw.chars().count() < MIN_KEYWORD_LEN {
            return Err(FieldError::new(
                ["query", "keyword"],
                format!("String should have at least {MIN_KEYWORD_LEN} characters"),
                "string_too_short",
                Value::from(raw),
            )
            .into());
        }
        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.0)
    }
}
