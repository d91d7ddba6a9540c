use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::goal::model::{Goal, NewGoalProps};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct GoalRequest {
    /// Goal name (cannot be empty)
    pub name: String,
    /// Amount to save, in whole dollars (must be positive)
    pub target_amount: u64,
    /// When the user wants to reach the target
    pub target_date: DateTime<Utc>,
    /// Amount saved so far
    #[oai(default)]
    pub balance: f64,
    #[oai(default)]
    pub transaction_ids: Vec<String>,
    #[oai(default)]
    pub tag_ids: Vec<String>,
    /// Owner
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
    /// Emoji or icon name shown next to the goal
    #[oai(skip_serializing_if_is_none)]
    pub icon: Option<String>,
}

impl From<GoalRequest> for NewGoalProps {
    fn from(request: GoalRequest) -> Self {
        Self {
            name: request.name,
            target_amount: request.target_amount,
            target_date: request.target_date,
            balance: request.balance,
            transaction_ids: request.transaction_ids,
            tag_ids: request.tag_ids,
            user_id: request.user_id,
            icon: request.icon,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: String,
    pub name: String,
    pub target_amount: u64,
    pub target_date: DateTime<Utc>,
    pub balance: f64,
    /// Creation timestamp, kept across updates
    pub created: DateTime<Utc>,
    pub transaction_ids: Vec<String>,
    pub tag_ids: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub icon: Option<String>,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id.unwrap_or_default(),
            name: goal.name,
            target_amount: goal.target_amount,
            target_date: goal.target_date,
            balance: goal.balance,
            created: goal.created,
            transaction_ids: goal.transaction_ids,
            tag_ids: goal.tag_ids,
            user_id: goal.user_id,
            icon: goal.icon,
        }
    }
}
