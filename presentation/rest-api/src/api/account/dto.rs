use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::account::model::{Account, NewAccountProps};
use business::domain::account::value_objects::AccountType;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum AccountTypeDto {
    #[oai(rename = "savings")]
    Savings,
    #[oai(rename = "checking")]
    Checking,
}

impl From<AccountType> for AccountTypeDto {
    fn from(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Savings => AccountTypeDto::Savings,
            AccountType::Checking => AccountTypeDto::Checking,
        }
    }
}

impl From<AccountTypeDto> for AccountType {
    fn from(dto: AccountTypeDto) -> Self {
        match dto {
            AccountTypeDto::Savings => AccountType::Savings,
            AccountTypeDto::Checking => AccountType::Checking,
        }
    }
}

/// Body for both create and full replacement.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AccountRequest {
    /// Account number (cannot be empty)
    pub number: String,
    /// Display name (cannot be empty)
    pub name: String,
    /// Current balance
    pub balance: f64,
    /// Savings or checking
    pub account_type: AccountTypeDto,
    /// Transactions posted to this account
    #[oai(default)]
    pub transaction_ids: Vec<String>,
}

impl From<AccountRequest> for NewAccountProps {
    fn from(request: AccountRequest) -> Self {
        Self {
            number: request.number,
            name: request.name,
            balance: request.balance,
            account_type: request.account_type.into(),
            transaction_ids: request.transaction_ids,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub number: String,
    pub name: String,
    pub balance: f64,
    pub account_type: AccountTypeDto,
    pub transaction_ids: Vec<String>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.unwrap_or_default(),
            number: account.number,
            name: account.name,
            balance: account.balance,
            account_type: account.account_type.into(),
            transaction_ids: account.transaction_ids,
        }
    }
}
