use chrono::{DateTime, Utc};

use super::errors::GoalError;

/// A savings goal a user is working towards.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: Option<String>,
    pub name: String,
    pub target_amount: u64,
    pub target_date: DateTime<Utc>,
    pub balance: f64,
    pub created: DateTime<Utc>,
    pub transaction_ids: Vec<String>,
    pub tag_ids: Vec<String>,
    pub user_id: Option<String>,
    pub icon: Option<String>,
}

/// Largest target a goal document can hold as a signed 64-bit integer.
pub const MAX_TARGET_AMOUNT: u64 = i64::MAX as u64;

pub struct NewGoalProps {
    pub name: String,
    pub target_amount: u64,
    pub target_date: DateTime<Utc>,
    pub balance: f64,
    pub transaction_ids: Vec<String>,
    pub tag_ids: Vec<String>,
    pub user_id: Option<String>,
    pub icon: Option<String>,
}

impl Goal {
    pub fn new(props: NewGoalProps) -> Result<Self, GoalError> {
        if props.name.trim().is_empty() {
            return Err(GoalError::NameEmpty);
        }
        if props.target_amount == 0 {
            return Err(GoalError::TargetAmountZero);
        }
        if props.target_amount > MAX_TARGET_AMOUNT {
            return Err(GoalError::TargetAmountTooLarge);
        }

        Ok(Self {
            id: None,
            name: props.name,
            target_amount: props.target_amount,
            target_date: props.target_date,
            balance: props.balance,
            created: Utc::now(),
            transaction_ids: props.transaction_ids,
            tag_ids: props.tag_ids,
            user_id: props.user_id,
            icon: props.icon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, target_amount: u64) -> NewGoalProps {
        NewGoalProps {
            name: name.to_string(),
            target_amount,
            target_date: Utc::now(),
            balance: 0.0,
            transaction_ids: vec![],
            tag_ids: vec![],
            user_id: Some("62a29c15f4605c4c9fa7f306".to_string()),
            icon: None,
        }
    }

    #[test]
    fn should_create_goal_with_creation_timestamp() {
        let before = Utc::now();
        let goal = Goal::new(props("House deposit", 40_000)).unwrap();

        assert!(goal.created >= before);
        assert_eq!(goal.target_amount, 40_000);
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = Goal::new(props("", 100));

        assert!(matches!(result.unwrap_err(), GoalError::NameEmpty));
    }

    #[test]
    fn should_reject_when_target_amount_zero() {
        let result = Goal::new(props("Holiday", 0));

        assert!(matches!(result.unwrap_err(), GoalError::TargetAmountZero));
    }

    #[test]
    fn should_reject_target_amount_beyond_signed_range() {
        let result = Goal::new(props("Moon base", u64::MAX));

        assert!(matches!(result.unwrap_err(), GoalError::TargetAmountTooLarge));
    }

    #[test]
    fn should_accept_largest_storable_target_amount() {
        let goal = Goal::new(props("Moon base", MAX_TARGET_AMOUNT)).unwrap();

        assert_eq!(goal.target_amount, i64::MAX as u64);
    }
}
