//! HTTP transport implementation.
//!
//! Exposes the blog store as a small REST API. Handlers are thin: they pull
//! the request apart, call the store, and let [`Error`]'s `IntoResponse`
//! implementation pick the status code.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::{BlogServer, Result};
use crate::domains::blogs::{
    BlogId, BlogPatch, BlogPost, ListFilter, NewBlog, Pagination, TitleKeyword,
};
use crate::domains::comments::{Comment, NewComment};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: BlogServer,
}

/// Query string for `GET /blogs`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub published: Option<bool>,
}

/// Query string for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until ctrl-c.
    pub async fn run(self, server: BlogServer) -> TransportResult<()> {
        let addr = self.address();
        info!("Starting transport: {}", self.config.description());

        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Blogs:  POST /blog, GET /blogs, GET|PUT|DELETE /blog/{{id}}");
        info!("  → Search: GET /search?keyword=");
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the router with every endpoint wired to `server`.
pub fn build_router(server: BlogServer, enable_cors: bool) -> Router {
    let state = AppState { server };

    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/about", get(about_handler))
        .route("/health", get(health_check))
        .route("/blog", post(create_blog))
        .route("/blogs", get(list_blogs))
        .route(
            "/blog/{id}",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .route(
            "/blog/{id}/comments",
            get(list_comments).post(create_comment),
        )
        .route("/search", get(search_blogs))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "endpoints": {
            "create": "POST /blog",
            "list": "GET /blogs?skip=&limit=&published=",
            "get": "GET /blog/{id}",
            "update": "PUT /blog/{id}",
            "delete": "DELETE /blog/{id}",
            "comments": "GET|POST /blog/{id}/comments",
            "search": "GET /search?keyword=",
            "about": "GET /about",
            "health": "GET /health"
        }
    }))
}

/// About page - a short description of the service.
async fn about_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "description": "In-memory blog API: create, list, update, delete and search posts, with comments.",
        "storage": "memory (cleared on restart)"
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": state.server.version(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all)]
async fn create_blog(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewBlog>, JsonRejection>,
) -> Result<(StatusCode, Json<BlogPost>)> {
    let Json(new_blog) = payload?;
    let post = state.server.store().create(new_blog).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[instrument(skip_all)]
async fn list_blogs(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<BlogPost>>> {
    let Query(params) = params?;
    let page = Pagination::new(params.skip, params.limit)?;
    let filter = ListFilter {
        published: params.published,
    };
    Ok(Json(state.server.store().list(page, filter).await))
}

#[instrument(skip_all)]
async fn get_blog(
    State(state): State<AppState>,
    id: std::result::Result<Path<BlogId>, PathRejection>,
) -> Result<Json<BlogPost>> {
    let Path(id) = id?;
    Ok(Json(state.server.store().get(id).await?))
}

#[instrument(skip_all)]
async fn update_blog(
    State(state): State<AppState>,
    id: std::result::Result<Path<BlogId>, PathRejection>,
    payload: std::result::Result<Json<BlogPatch>, JsonRejection>,
) -> Result<Json<BlogPost>> {
    let Path(id) = id?;
    let Json(patch) = payload?;
    Ok(Json(state.server.store().update(id, patch).await?))
}

#[instrument(skip_all)]
async fn delete_blog(
    State(state): State<AppState>,
    id: std::result::Result<Path<BlogId>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    state.server.store().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip_all)]
async fn search_blogs(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<BlogPost>>> {
    let Query(params) = params?;
    let keyword = TitleKeyword::parse(&params.keyword)?;
    Ok(Json(state.server.store().filter_by_title(&keyword).await))
}

#[instrument(skip_all)]
async fn list_comments(
    State(state): State<AppState>,
    id: std::result::Result<Path<BlogId>, PathRejection>,
) -> Result<Json<Vec<Comment>>> {
    let Path(id) = id?;
    Ok(Json(state.server.store().comments(id).await?))
}

#[instrument(skip_all)]
async fn create_comment(
    State(state): State<AppState>,
    id: std::result::Result<Path<BlogId>, PathRejection>,
    payload: std::result::Result<Json<NewComment>, JsonRejection>,
) -> Result<(StatusCode, Json<Comment>)> {
    let Path(id) = id?;
    let Json(new_comment) = payload?;
    let comment = state.server.store().add_comment(id, new_comment).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, header};
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    fn app() -> Router {
        build_router(BlogServer::new(Config::default()), false)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create(app: &Router, title: &str, body: &str) -> Value {
        let (status, post) = send(
            app,
            Method::POST,
            "/blog",
            Some(json!({ "title": title, "body": body })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        post
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "blog-api");
    }

    #[tokio::test]
    async fn test_about_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/about", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "blog-api");
        assert!(body["description"].as_str().unwrap().contains("blog"));
    }

    #[tokio::test]
    async fn test_create_get_delete_scenario() {
        let app = app();
        let created = create(
            &app,
            "Sample Blog 1",
            "This is the content of sample blog 1.",
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();
        assert!(uuid::Uuid::parse_str(&id).is_ok());

        let (status, fetched) = send(&app, Method::GET, &format!("/blog/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["title"], "Sample Blog 1");
        assert_eq!(fetched["body"], "This is the content of sample blog 1.");

        let (status, body) = send(&app, Method::DELETE, &format!("/blog/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, body) = send(&app, Method::GET, &format!("/blog/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Blog not found" }));

        let (status, _) = send(&app, Method::DELETE, &format!("/blog/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_short_title_is_422() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/blog",
            Some(json!({ "title": "ab", "body": "This body is long enough." })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["body", "title"]));
        assert_eq!(body["detail"][0]["type"], "string_too_short");
        assert_eq!(body["detail"][0]["input"], "ab");
    }

    #[tokio::test]
    async fn test_create_missing_field_is_422() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/blog",
            Some(json!({ "title": "Only a title" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["body"]));
    }

    #[tokio::test]
    async fn test_partial_update() {
        let app = app();
        let created = create(&app, "Original title", "Original body text.").await;
        let uri = format!("/blog/{}", created["id"].as_str().unwrap());

        let (status, updated) =
            send(&app, Method::PUT, &uri, Some(json!({ "title": "Changed title" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Changed title");
        assert_eq!(updated["body"], "Original body text.");

        let (status, updated) =
            send(&app, Method::PUT, &uri, Some(json!({ "body": "Changed body text." }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Changed title");
        assert_eq!(updated["body"], "Changed body text.");
    }

    #[tokio::test]
    async fn test_update_errors() {
        let app = app();
        let created = create(&app, "Original title", "Original body text.").await;
        let uri = format!("/blog/{}", created["id"].as_str().unwrap());

        let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "title": null }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "body": "short" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let missing = format!("/blog/{}", uuid::Uuid::new_v4());
        let (status, _) =
            send(&app, Method::PUT, &missing, Some(json!({ "title": "Fresh title" }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_invalid_id_is_422() {
        let (status, body) = send(&app(), Method::GET, "/blog/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["path", "id"]));
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let app = app();
        for n in 1..=12 {
            create(&app, &format!("Sample Blog {n}"), "Some body content here.").await;
        }

        let (status, page) = send(&app, Method::GET, "/blogs", None).await;
        assert_eq!(status, StatusCode::OK);
        let page = page.as_array().unwrap();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0]["title"], "Sample Blog 1");
        assert_eq!(page[9]["title"], "Sample Blog 10");

        let (_, page) = send(&app, Method::GET, "/blogs?skip=10&limit=5", None).await;
        let titles: Vec<_> = page
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["Sample Blog 11", "Sample Blog 12"]);

        let (status, page) = send(&app, Method::GET, "/blogs?skip=50", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page, json!([]));

        let (status, _) = send(&app, Method::GET, "/blogs?skip=-1", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, Method::GET, "/blogs?limit=101", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, Method::GET, "/blogs?limit=abc", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_list_published_filter() {
        let app = app();
        create(&app, "Draft post", "Not ready for readers.").await;
        let (_, live) = send(
            &app,
            Method::POST,
            "/blog",
            Some(json!({ "title": "Live post", "body": "Ready for readers.", "published": true })),
        )
        .await;

        let (status, page) = send(&app, Method::GET, "/blogs?published=true", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page, json!([live]));
    }

    #[tokio::test]
    async fn test_search() {
        let app = app();
        create(&app, "Sample Blog 1", "This is the content of sample blog 1.").await;
        create(&app, "Sample Blog 2", "This is the content of sample blog 2.").await;

        let (status, hits) = send(&app, Method::GET, "/search?keyword=blog", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(hits.as_array().unwrap().len(), 2);

        let (status, hits) = send(&app, Method::GET, "/search?keyword=xyz", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(hits, json!([]));

        let (status, body) = send(&app, Method::GET, "/search?keyword=ab", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["query", "keyword"]));

        let (status, _) = send(&app, Method::GET, "/search", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_comments() {
        let app = app();
        let created = create(&app, "Commented post", "Please leave a comment.").await;
        let uri = format!("/blog/{}/comments", created["id"].as_str().unwrap());

        let (status, comment) =
            send(&app, Method::POST, &uri, Some(json!({ "body": "Nice post" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(comment["blog_id"], created["id"]);

        let (status, comments) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(comments, json!([comment]));

        let (status, _) = send(&app, Method::POST, &uri, Some(json!({ "body": "" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let missing = format!("/blog/{}/comments", uuid::Uuid::new_v4());
        let (status, body) = send(&app, Method::GET, &missing, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Blog not found");
    }
}
