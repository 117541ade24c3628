//! In-memory blog store.
//!
//! The BlogStore is the sole owner of blog post state. It is created once at
//! startup and shared behind an `Arc`; handlers only ever receive clones of
//! the records it holds.

use indexmap::IndexMap;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::error::{BlogError, BlogResult};
use super::query::{ListFilter, Pagination, TitleKeyword};
use super::schema::{BlogId, BlogPatch, BlogPost, NewBlog};
use crate::domains::comments::{Comment, NewComment};

/// Volatile, process-local storage for blog posts and their comments.
///
/// Mutations take the write lock, reads share the read lock. Every operation
/// validates its input before touching state, so a rejected request never
/// leaves a record half-updated.
pub struct BlogStore {
    state: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    /// Posts in insertion order.
    posts: IndexMap<BlogId, BlogPost>,

    /// Comments per post, in insertion order.
    comments: HashMap<BlogId, Vec<Comment>>,
}

impl Default for BlogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        info!("Initializing BlogStore");
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Validate and insert a new post under a freshly generated id.
    #[instrument(skip_all, fields(title = %new_blog.title))]
    pub async fn create(&self, new_blog: NewBlog) -> BlogResult<BlogPost> {
        new_blog.validate()?;

        let post = new_blog.into_post(Uuid::new_v4());
        let mut state = self.state.write().await;
        state.posts.insert(post.id, post.clone());

        info!("Created blog {}", post.id);
        Ok(post)
    }

    /// Fetch a post by id.
    pub async fn get(&self, id: BlogId) -> BlogResult<BlogPost> {
        let state = self.state.read().await;
        state
            .posts
            .get(&id)
            .cloned()
            .ok_or_else(|| BlogError::not_found(id))
    }

    /// List posts in insertion order, filtered, then windowed by `page`.
    pub async fn list(&self, page: Pagination, filter: ListFilter) -> Vec<BlogPost> {
        let state = self.state.read().await;
        let posts: Vec<_> = page
            .apply(state.posts.values().filter(|post| filter.matches(post)))
            .cloned()
            .collect();

        debug!(
            "Listed {} of {} blogs (skip={}, limit={})",
            posts.len(),
            state.posts.len(),
            page.skip(),
            page.limit()
        );
        posts
    }

    /// Apply a partial update and return the merged record.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: BlogId, patch: BlogPatch) -> BlogResult<BlogPost> {
        patch.validate()?;

        let mut state = self.state.write().await;
        let post = state
            .posts
            .get_mut(&id)
            .ok_or_else(|| BlogError::not_found(id))?;
        patch.apply(post);

        info!("Updated blog {}", id);
        Ok(post.clone())
    }

    /// Remove a post and its comments. Deleting twice fails the second time.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: BlogId) -> BlogResult<()> {
        let mut state = self.state.write().await;
        state
            .posts
            .shift_remove(&id)
            .ok_or_else(|| BlogError::not_found(id))?;
        let removed = state.comments.remove(&id).map_or(0, |c| c.len());

        info!("Deleted blog {} ({} comments)", id, removed);
        Ok(())
    }

    /// Posts whose title contains `keyword`, ignoring case.
    pub async fn filter_by_title(&self, keyword: &TitleKeyword) -> Vec<BlogPost> {
        let state = self.state.read().await;
        let matches: Vec<_> = state
            .posts
            .values()
            .filter(|post| keyword.matches(&post.title))
            .cloned()
            .collect();

        debug!("Search '{}' matched {} blogs", keyword.as_str(), matches.len());
        matches
    }

    /// Attach a comment to an existing post.
    #[instrument(skip(self, new_comment))]
    pub async fn add_comment(&self, blog_id: BlogId, new_comment: NewComment) -> BlogResult<Comment> {
        new_comment.validate()?;

        let mut state = self.state.write().await;
        if !state.posts.contains_key(&blog_id) {
            return Err(BlogError::not_found(blog_id));
        }

        let comment = new_comment.into_comment(blog_id);
        state
            .comments
            .entry(blog_id)
            .or_default()
            .push(comment.clone());

        info!("Added comment {} to blog {}", comment.id, blog_id);
        Ok(comment)
    }

    /// Comments on a post, oldest first.
    pub async fn comments(&self, blog_id: BlogId) -> BlogResult<Vec<Comment>> {
        let state = self.state.read().await;
        if !state.posts.contains_key(&blog_id) {
            return Err(BlogError::not_found(blog_id));
        }
        Ok(state.comments.get(&blog_id).cloned().unwrap_or_default())
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.state.read().await.posts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
