use axum::{middleware, routing::get, routing::post, Router};

use repository::Repository;
use serde::Serialize;
use tokio::sync::OnceCell;
use tower_http::cors::CorsLayer;
use tracing::info;
use util::load_config;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;
use utoipauto::utoipauto;

mod auth;
pub mod category;
pub mod comment;
pub mod feed;
pub mod healthz;
pub mod not_found;
pub mod post;
pub mod profile;
mod request;
mod response;

pub enum ApiError {
    NotFound,
    LoginRequired,
    NotAuthor(i32),
    Validation(Vec<FieldError>),
    ClientError(String),
    ServerError(String),
}

/// One rejected form field, as the frontend re-renders it.
#[derive(Clone, Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiState {
    repo: Repository,
    config: Config,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub feed: Feed,
    pub auth: Auth,
}

#[derive(Clone, Debug)]
pub struct Feed {
    pub page_size: u64,
}

#[derive(Clone, Debug)]
pub struct Auth {
    pub login_url: String,
}

static JWT_SECRET: OnceCell<String> = OnceCell::const_new();
static LOGIN_URL: OnceCell<String> = OnceCell::const_new();

pub(crate) fn login_url() -> &'static str {
    LOGIN_URL.get().map(|x| x.as_str()).unwrap_or("/auth/login/")
}

pub async fn serve(
    repository: Repository,
    config_name: &str,
    jwt_secret: String,
) -> anyhow::Result<Router> {
    #[utoipauto(paths = "./libs/api/src")]
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "blog", description = "Blog publishing API")
        )
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let _ = JWT_SECRET.set(jwt_secret);

    let config = load_config(config_name)?;
    let feed = Feed {
        page_size: config["feed"]["page_size"].as_integer().unwrap() as u64,
    };
    let auth = Auth {
        login_url: config["auth"]["login_url"].as_str().unwrap().to_string(),
    };
    let _ = LOGIN_URL.set(auth.login_url.clone());

    let state = ApiState {
        repo: repository.clone(),
        config: Config { feed, auth },
    };

    let origins = ["http://localhost:3000".parse().unwrap()];

    // index
    let feed_router = Router::new()
        .route("/", get(feed::get_feed))
        .with_state(state.clone());

    // categories
    let category_router = Router::new()
        .route("/:slug/", get(category::get_category_posts))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // profiles
    let profile_router = Router::new()
        .route("/edit/", post(profile::edit_profile))
        .route("/:username/", get(profile::get_profile))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // posts and their comments
    let post_router = Router::new()
        .route("/create/", post(post::create_post))
        .route("/:id/", get(post::get_post))
        .route("/:id/edit/", post(post::edit_post))
        .route("/:id/delete/", post(post::delete_post))
        .route("/:id/comment/", post(comment::create_comment))
        .route(
            "/:id/edit_comment/:comment_id/",
            post(comment::edit_comment),
        )
        .route(
            "/:id/delete_comment/:comment_id/",
            post(comment::delete_comment),
        )
        .fallback(not_found::get_404)
        .with_state(repository.clone());

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/category", category_router)
        .nest("/profile", profile_router)
        .nest("/posts", post_router)
        .merge(feed_router)
        .route_layer(middleware::from_fn(auth::identify))
        .layer(CorsLayer::new().allow_origin(origins))
        .fallback(not_found::get_404);

    Ok(router)
}
