use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::transaction::model::{NewTransactionProps, Transaction};
use business::domain::transaction::value_objects::TransactionType;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum TransactionTypeDto {
    #[oai(rename = "credit")]
    Credit,
    #[oai(rename = "debit")]
    Debit,
    #[oai(rename = "transfer")]
    Transfer,
}

impl From<TransactionType> for TransactionTypeDto {
    fn from(transaction_type: TransactionType) -> Self {
        match transaction_type {
            TransactionType::Credit => TransactionTypeDto::Credit,
            TransactionType::Debit => TransactionTypeDto::Debit,
            TransactionType::Transfer => TransactionTypeDto::Transfer,
        }
    }
}

impl From<TransactionTypeDto> for TransactionType {
    fn from(dto: TransactionTypeDto) -> Self {
        match dto {
            TransactionTypeDto::Credit => TransactionType::Credit,
            TransactionTypeDto::Debit => TransactionType::Debit,
            TransactionTypeDto::Transfer => TransactionType::Transfer,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub transaction_type: TransactionTypeDto,
    /// Unsigned amount (must be positive); direction comes from the type
    pub amount: f64,
    pub date_time: DateTime<Utc>,
    /// Goal this transaction contributes to
    #[oai(skip_serializing_if_is_none)]
    pub goal_id: Option<String>,
    #[oai(default)]
    pub tag_ids: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
}

impl From<TransactionRequest> for NewTransactionProps {
    fn from(request: TransactionRequest) -> Self {
        Self {
            transaction_type: request.transaction_type.into(),
            amount: request.amount,
            date_time: request.date_time,
            goal_id: request.goal_id,
            tag_ids: request.tag_ids,
            user_id: request.user_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: String,
    pub transaction_type: TransactionTypeDto,
    pub amount: f64,
    pub date_time: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub goal_id: Option<String>,
    pub tag_ids: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id.unwrap_or_default(),
            transaction_type: transaction.transaction_type.into(),
            amount: transaction.amount,
            date_time: transaction.date_time,
            goal_id: transaction.goal_id,
            tag_ids: transaction.tag_ids,
            user_id: transaction.user_id,
        }
    }
}
