pub mod ads;
pub mod auth;
pub mod categories;
pub mod content;
pub mod exams;
pub mod health;
pub mod home;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{auth::resolve_session, cors::permissive_cors, rate_limit};
use crate::models::exam::Exam;
use crate::AppState;

fn exam_routes(exam: Exam) -> Router<AppState> {
    Router::new()
        .route("/complete", get(exams::complete_exam))
        .route("/:section", get(exams::list_section))
        .route("/:section/:id", get(exams::get_section_item))
        .layer(Extension(exam))
}

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/categories", get(categories::list_root_categories))
        .route(
            "/api/categories/menu/test-categories",
            get(categories::menu_test_categories),
        )
        .route("/api/categories/:id", get(categories::get_category))
        .route(
            "/api/categories/:id/subcategories",
            get(categories::get_subcategories),
        )
        .route(
            "/api/categories/:id/test-categories",
            get(categories::list_category_tests),
        )
        .route("/api/tests", get(tests::list_tests))
        .route("/api/tests/levels", get(tests::list_levels))
        .route(
            "/api/tests/categories/:categoryId",
            get(tests::list_test_groups),
        )
        .route(
            "/api/tests/categories/:categoryId/filters",
            get(tests::list_test_filters),
        )
        .route("/api/tests/:testId", get(tests::get_test))
        .route("/api/tests/:testId/submit", post(tests::submit_test))
        .nest("/api/toefl", exam_routes(Exam::Toefl))
        .nest("/api/ielts", exam_routes(Exam::Ielts))
        .route("/api/home/slideshow", get(home::slideshow))
        .route("/api/home/memberships", get(home::memberships))
        .route("/api/home/testimonials", get(home::testimonials))
        .route("/api/home/news", get(home::news))
        .route("/api/home/about", get(home::about))
        .route("/api/home/why-choose", get(home::why_choose))
        .route("/api/home/gallery", get(home::gallery))
        .route("/api/home/page-images", get(home::page_images))
        .route("/api/content/about", get(content::about))
        .route("/api/content/contact", get(content::contact))
        .route("/api/ads/test/:testId", get(ads::ad_for_test))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .layer(axum::middleware::from_fn_with_state(state, resolve_session))
}

/// Full application router: API, optional static media and the outer layers.
pub fn build_router(state: AppState, public_rps: u32, media_dir: Option<&str>) -> Router {
    let mut app = api_routes(state.clone()).layer(axum::middleware::from_fn_with_state(
        rate_limit::new_rps_state(public_rps),
        rate_limit::rps_middleware,
    ));

    if let Some(dir) = media_dir {
        app = app.nest_service("/vendor", ServeDir::new(dir));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(permissive_cors())
        .with_state(state)
}
