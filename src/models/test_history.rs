/// One completed attempt, appended to `test_history` after scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestHistory {
    pub user_id: i64,
    pub test_category_id: i64,
    pub duration_seconds: Option<i32>,
    pub correct: i32,
    pub total: i32,
}
