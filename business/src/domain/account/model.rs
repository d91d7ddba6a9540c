use super::errors::AccountError;
use super::value_objects::AccountType;

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: Option<String>,
    pub number: String,
    pub name: String,
    pub balance: f64,
    pub account_type: AccountType,
    pub transaction_ids: Vec<String>,
}

pub struct NewAccountProps {
    pub number: String,
    pub name: String,
    pub balance: f64,
    pub account_type: AccountType,
    pub transaction_ids: Vec<String>,
}

impl Account {
    pub fn new(props: NewAccountProps) -> Result<Self, AccountError> {
        if props.name.trim().is_empty() {
            return Err(AccountError::NameEmpty);
        }
        if props.number.trim().is_empty() {
            return Err(AccountError::NumberEmpty);
        }

        Ok(Self {
            id: None,
            number: props.number,
            name: props.name,
            balance: props.balance,
            account_type: props.account_type,
            transaction_ids: props.transaction_ids,
        })
    }
}
