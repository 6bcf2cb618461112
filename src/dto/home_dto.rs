use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HomeListQuery {
    pub language_id: Option<i64>,
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<i64>,
}

pub const DEFAULT_PAGE_IMAGE_KEYS: [&str; 4] = [
    "home_page_review",
    "home_page_about_us",
    "home_page_why_section",
    "home_page_why_section_girl",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageImagesQuery {
    /// Comma-separated slot names.
    pub keys: Option<String>,
}

impl PageImagesQuery {
    pub fn keys(&self) -> Vec<String> {
        let requested: Vec<String> = self
            .keys
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        if requested.is_empty() {
            DEFAULT_PAGE_IMAGE_KEYS.iter().map(|k| k.to_string()).collect()
        } else {
            requested
        }
    }
}
