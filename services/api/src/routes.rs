use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use skillfolio::error::AppError;
use skillfolio::site::{
    BlogPreviewView, HomeView, PostSummaryView, SkillListingEntry, SkillPageView,
};
use skillfolio::skills::RELATED_POST_LIMIT;

#[derive(Debug, Deserialize)]
pub(crate) struct RelatedPostsQuery {
    pub(crate) skill: String,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RelatedPostsResponse {
    pub(crate) skill: String,
    pub(crate) page: Option<String>,
    pub(crate) keywords: &'static [&'static str],
    pub(crate) posts: Vec<PostSummaryView>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BlogPreviewQuery {
    #[serde(default)]
    pub(crate) slug: Option<String>,
}

pub(crate) fn site_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/home", get(home_endpoint))
        .route("/api/v1/skills", get(skills_endpoint))
        .route("/api/v1/skills/:key", get(skill_page_endpoint))
        .route("/api/v1/posts/related", get(related_posts_endpoint))
        .route("/api/v1/blog/preview", get(blog_preview_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "posts": state.site.posts().len() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn home_endpoint(Extension(state): Extension<AppState>) -> Json<HomeView> {
    Json(state.site.home())
}

pub(crate) async fn skills_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<Vec<SkillListingEntry>> {
    Json(state.site.skills())
}

pub(crate) async fn skill_page_endpoint(
    Extension(state): Extension<AppState>,
    Path(key): Path<String>,
) -> Result<Json<SkillPageView>, AppError> {
    state
        .site
        .skill_page(&key)
        .map(Json)
        .ok_or(AppError::SkillNotFound(key))
}

pub(crate) async fn related_posts_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<RelatedPostsQuery>,
) -> Json<RelatedPostsResponse> {
    let RelatedPostsQuery { skill, limit } = query;
    let limit = limit.unwrap_or(RELATED_POST_LIMIT);
    let posts = state.site.related_posts(&skill, limit);
    let catalog = state.site.catalog();
    let page = catalog.find_by_name(&skill).map(|definition| definition.url());
    let keywords = catalog.keywords().keywords_for(&skill);

    Json(RelatedPostsResponse {
        skill,
        page,
        keywords,
        posts,
    })
}

pub(crate) async fn blog_preview_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<BlogPreviewQuery>,
) -> Json<BlogPreviewView> {
    Json(state.site.blog_preview(query.slug.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use skillfolio::config::SiteConfig;
    use skillfolio::content::PostRecord;
    use skillfolio::site::SiteService;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn post(slug: &str, title: &str, tags: &[&str], date: &str) -> PostRecord {
        PostRecord {
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            date: Some(date.to_string()),
            ..PostRecord::new(slug, title)
        }
    }

    fn sample_state(ready: bool) -> AppState {
        let mut draft = post("draft", "Kubernetes 部署草稿", &["kubernetes"], "2024-06-01");
        draft.draft = true;
        let posts = vec![
            post("lora", "模型微调实践", &["LoRA"], "2024-01-01"),
            post("essay", "随笔", &[], "2024-02-01"),
            post("ops", "Pipelines", &["DevOps"], "2024-03-01"),
            draft,
        ];

        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            site: Arc::new(SiteService::new(SiteConfig::default(), posts)),
        }
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let app = site_routes().layer(Extension(state));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body = serde_json::from_slice(&bytes).expect("json body");
        (status, body)
    }

    #[tokio::test]
    async fn skill_page_endpoint_returns_related_posts() {
        let Json(page) = skill_page_endpoint(
            Extension(sample_state(true)),
            Path("finetuning".to_string()),
        )
        .await
        .expect("known skill");

        assert_eq!(page.name, "模型理解与微调能力");
        let slugs: Vec<&str> = page
            .related_posts
            .iter()
            .map(|post| post.slug.as_str())
            .collect();
        assert_eq!(slugs, ["lora"]);
    }

    #[tokio::test]
    async fn unknown_skill_page_is_not_found() {
        let (status, body) = get_json(sample_state(true), "/api/v1/skills/cooking").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("cooking"));
    }

    #[tokio::test]
    async fn related_posts_endpoint_honours_limit_and_skips_drafts() {
        let uri = "/api/v1/posts/related?skill=%E7%B3%BB%E7%BB%9F%E5%B7%A5%E7%A8%8B%E4%B8%8E%E9%83%A8%E7%BD%B2%E8%83%BD%E5%8A%9B&limit=5";
        let (status, body) = get_json(sample_state(true), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill"], "系统工程与部署能力");
        assert_eq!(body["page"], "/skills/systems");
        let posts = body["posts"].as_array().expect("posts array");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["slug"], "ops");
        assert!(body["keywords"]
            .as_array()
            .expect("keywords array")
            .iter()
            .any(|keyword| keyword == "devops"));
    }

    #[tokio::test]
    async fn related_posts_for_unknown_skill_is_empty() {
        let (status, body) =
            get_json(sample_state(true), "/api/v1/posts/related?skill=unknown").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["posts"].as_array().map(Vec::len), Some(0));
        assert_eq!(body["keywords"].as_array().map(Vec::len), Some(0));
        assert!(body["page"].is_null());
    }

    #[tokio::test]
    async fn home_endpoint_lists_latest_published_posts() {
        let (status, body) = get_json(sample_state(true), "/api/v1/home").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ability_chart"].as_array().map(Vec::len), Some(6));
        let slugs: Vec<&str> = body["latest_posts"]
            .as_array()
            .expect("posts array")
            .iter()
            .filter_map(|post| post["slug"].as_str())
            .collect();
        assert_eq!(slugs, ["ops", "essay", "lora"]);
    }

    #[tokio::test]
    async fn blog_preview_endpoint_selects_slug() {
        let (status, body) =
            get_json(sample_state(true), "/api/v1/blog/preview?slug=essay").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active"]["slug"], "essay");
        assert_eq!(body["posts"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn readiness_reflects_startup_state() {
        let (status, body) = get_json(sample_state(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        let (status, body) = get_json(sample_state(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["posts"], 4);
    }

    #[tokio::test]
    async fn skills_endpoint_lists_catalog() {
        let (status, body) = get_json(sample_state(true), "/api/v1/skills").await;

        assert_eq!(status, StatusCode::OK);
        let skills = body.as_array().expect("skills array");
        assert_eq!(skills.len(), 6);
        assert!(skills.iter().all(|skill| skill["url"]
            .as_str()
            .is_some_and(|url| url.starts_with("/skills/"))));
    }
}
