use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::category_dto::CategoryNode;
use crate::error::{Error, Result};
use crate::models::category::CategoryRow;

/// Read access to the category table and its per-language labels.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Active children of every id in `parent_ids`, ordered by `sort_order` then id.
    async fn children_of(&self, parent_ids: &[i64], language_id: i64) -> Result<Vec<CategoryRow>>;

    async fn find(&self, id: i64, language_id: i64) -> Result<Option<CategoryRow>>;
}

#[derive(Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn children_of(&self, parent_ids: &[i64], language_id: i64) -> Result<Vec<CategoryRow>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT c.id, c.parent_id, c.sort_order, c.key, cl.value AS label
            FROM category c
            LEFT JOIN category_label cl
                ON cl.category_id = c.id AND cl.language_id = $2
            WHERE c.parent_id = ANY($1) AND c.status = 1
            ORDER BY c.sort_order ASC, c.id ASC
            "#,
        )
        .bind(parent_ids)
        .bind(language_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64, language_id: i64) -> Result<Option<CategoryRow>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT c.id, c.parent_id, c.sort_order, c.key, cl.value AS label
            FROM category c
            LEFT JOIN category_label cl
                ON cl.category_id = c.id AND cl.language_id = $2
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .bind(language_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self::with_store(Arc::new(PgCategoryStore::new(pool)))
    }

    pub fn with_store(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    pub async fn get_category(&self, id: i64, language_id: i64) -> Result<CategoryRow> {
        self.store
            .find(id, language_id)
            .await?
            .ok_or_else(|| Error::NotFound("Category not found".to_string()))
    }

    /// Tree rooted at an existing category; 404 when the root is unknown.
    pub async fn build_subtree(&self, id: i64, language_id: i64) -> Result<Vec<CategoryNode>> {
        self.get_category(id, language_id).await?;
        self.build_tree(id, language_id).await
    }

    /// Builds the localized tree below `root_id` (0 for the top level).
    ///
    /// The walk is breadth-first with one store query per level. Every
    /// category id may be reached once; reaching one again means the
    /// parent chain loops and the build fails with [`Error::CategoryCycle`].
    /// Store errors abort the whole build.
    pub async fn build_tree(&self, root_id: i64, language_id: i64) -> Result<Vec<CategoryNode>> {
        let mut visited: HashSet<i64> = HashSet::from([root_id]);
        let mut levels: Vec<Vec<CategoryRow>> = Vec::new();
        let mut frontier = vec![root_id];

        while !frontier.is_empty() {
            let rows = self.store.children_of(&frontier, language_id).await?;
            let mut next = Vec::with_capacity(rows.len());
            for row in &rows {
                if !visited.insert(row.id) {
                    return Err(Error::CategoryCycle(row.id));
                }
                next.push(row.id);
            }
            if !rows.is_empty() {
                levels.push(rows);
            }
            frontier = next;
        }

        tracing::debug!(
            root_id,
            language_id,
            depth = levels.len(),
            nodes = visited.len() - 1,
            "built category tree"
        );
        Ok(assemble(root_id, levels))
    }
}

/// Folds levels bottom-up so every node owns its already-built children.
fn assemble(root_id: i64, levels: Vec<Vec<CategoryRow>>) -> Vec<CategoryNode> {
    let mut below: HashMap<i64, Vec<CategoryNode>> = HashMap::new();
    for level in levels.into_iter().rev() {
        let mut current: HashMap<i64, Vec<CategoryNode>> = HashMap::new();
        for row in level {
            let children = below.remove(&row.id).unwrap_or_default();
            current
                .entry(row.parent_id)
                .or_default()
                .push(CategoryNode::from_row(row, children));
        }
        below = current;
    }
    below.remove(&root_id).unwrap_or_default()
}
