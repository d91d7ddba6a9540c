use chrono::{DateTime, Utc};

use super::errors::TransactionError;
use super::value_objects::TransactionType;

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Option<String>,
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub date_time: DateTime<Utc>,
    pub goal_id: Option<String>,
    pub tag_ids: Vec<String>,
    pub user_id: Option<String>,
}

pub struct NewTransactionProps {
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub date_time: DateTime<Utc>,
    pub goal_id: Option<String>,
    pub tag_ids: Vec<String>,
    pub user_id: Option<String>,
}

impl Transaction {
    /// Amounts are unsigned; the direction lives in `transaction_type`.
    pub fn new(props: NewTransactionProps) -> Result<Self, TransactionError> {
        if !props.amount.is_finite() || props.amount <= 0.0 {
            return Err(TransactionError::AmountInvalid);
        }

        Ok(Self {
            id: None,
            transaction_type: props.transaction_type,
            amount: props.amount,
            date_time: props.date_time,
            goal_id: props.goal_id,
            tag_ids: props.tag_ids,
            user_id: props.user_id,
        })
    }
}
