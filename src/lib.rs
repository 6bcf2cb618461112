pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use crate::services::{
    ad_service::AdService, category_service::CategoryService, content_service::ContentService,
    exam_service::ExamService, home_service::HomeService, scoring_service::ScoringService,
    session_service::SessionStore, test_service::TestService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub default_language_id: i64,
    pub category_service: CategoryService,
    pub scoring_service: ScoringService,
    pub test_service: TestService,
    pub home_service: HomeService,
    pub exam_service: ExamService,
    pub content_service: ContentService,
    pub ad_service: AdService,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(pool: PgPool, default_language_id: i64, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            category_service: CategoryService::new(pool.clone()),
            scoring_service: ScoringService::new(pool.clone()),
            test_service: TestService::new(pool.clone()),
            home_service: HomeService::new(pool.clone()),
            exam_service: ExamService::new(pool.clone()),
            content_service: ContentService::new(pool.clone()),
            ad_service: AdService::new(pool.clone()),
            default_language_id,
            sessions,
            pool,
        }
    }

    pub fn language_or_default(&self, language_id: Option<i64>) -> i64 {
        language_id.unwrap_or(self.default_language_id)
    }
}
