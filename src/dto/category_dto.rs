use serde::{Deserialize, Serialize};

use crate::models::category::CategoryRow;
use crate::models::test_category::{MenuTestCategory, TestCategory};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageQuery {
    #[serde(rename = "languageId")]
    pub language_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryNode {
    pub id: i64,
    pub parent_id: i64,
    pub sort_order: i32,
    pub key: Option<String>,
    pub label: Option<String>,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn from_row(row: CategoryRow, children: Vec<CategoryNode>) -> Self {
        Self {
            id: row.id,
            parent_id: row.parent_id,
            sort_order: row.sort_order,
            key: row.key,
            label: row.label,
            children,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub parent_id: i64,
    pub sort_order: i32,
    pub key: Option<String>,
    pub label: Option<String>,
}

impl From<CategoryRow> for CategoryResponse {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            parent_id: row.parent_id,
            sort_order: row.sort_order,
            key: row.key,
            label: row.label,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCategoryCard {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i64,
    pub sort_order: i32,
}

impl From<TestCategory> for TestCategoryCard {
    fn from(tc: TestCategory) -> Self {
        Self {
            id: tc.id,
            name: tc.name.unwrap_or_else(|| format!("Test {}", tc.id)),
            description: tc.description,
            category_id: tc.category_id,
            sort_order: tc.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuTestCategoryResponse {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category_name: String,
    pub sort_order: i32,
}

impl From<MenuTestCategory> for MenuTestCategoryResponse {
    fn from(tc: MenuTestCategory) -> Self {
        Self {
            id: tc.id,
            name: tc.name.unwrap_or_else(|| format!("Test {}", tc.id)),
            category_id: tc.category_id,
            category_name: tc
                .category_name
                .unwrap_or_else(|| format!("Category {}", tc.category_id)),
            sort_order: tc.sort_order,
        }
    }
}
