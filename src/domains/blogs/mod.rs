//! Blogs domain module.
//!
//! This module owns everything about blog posts: what a valid post looks
//! like, where posts live, and how they are paged and searched.
//!
//! ## Architecture
//!
//! - `schema.rs` - Post, create and partial-update payloads, field constraints
//! - `store.rs` - The in-memory store (also holds comments, see `domains::comments`)
//! - `query.rs` - Pagination, published filter, title keyword search
//! - `error.rs` - Blog-specific error and validation types

mod error;
mod query;
mod schema;
mod store;

pub use error::{BlogError, BlogResult, FieldError, ValidationErrors};
pub use query::{DEFAULT_LIMIT, ListFilter, MAX_LIMIT, MIN_KEYWORD_LEN, Pagination, TitleKeyword};
pub use schema::{
    BODY_MIN_LEN, BlogId, BlogPatch, BlogPost, NewBlog, Patch, TITLE_MAX_LEN, TITLE_MIN_LEN,
};
pub use store::BlogStore;
