use super::errors::UserError;

/// A registered user. `password` always holds a bcrypt hash once persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub account_ids: Vec<String>,
    pub goal_ids: Vec<String>,
    pub transaction_ids: Vec<String>,
}

pub struct NewUserProps {
    pub name: String,
    pub email: String,
    /// Plain text; hashed by the users service before storage.
    pub password: String,
    pub account_ids: Vec<String>,
    pub goal_ids: Vec<String>,
    pub transaction_ids: Vec<String>,
}

/// Emails are compared case-insensitively, so they are stored lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        if props.name.trim().is_empty() {
            return Err(UserError::NameEmpty);
        }
        let email = normalize_email(&props.email);
        if !is_plausible_email(&email) {
            return Err(UserError::EmailInvalid);
        }
        if props.password.is_empty() {
            return Err(UserError::PasswordEmpty);
        }

        Ok(Self {
            id: None,
            name: props.name,
            email,
            password: props.password,
            account_ids: props.account_ids,
            goal_ids: props.goal_ids,
            transaction_ids: props.transaction_ids,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(email: &str, password: &str) -> NewUserProps {
        NewUserProps {
            name: "Tag Team".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            account_ids: vec![],
            goal_ids: vec![],
            transaction_ids: vec![],
        }
    }

    #[test]
    fn should_lowercase_email() {
        let user = User::new(props(" Someone@CommBank.com.au ", "hunter2")).unwrap();

        assert_eq!(user.email, "someone@commbank.com.au");
    }

    #[test]
    fn should_reject_email_without_at_sign() {
        let result = User::new(props("someone.commbank.com.au", "hunter2"));

        assert!(matches!(result.unwrap_err(), UserError::EmailInvalid));
    }

    #[test]
    fn should_reject_email_with_empty_local_part() {
        let result = User::new(props("@commbank.com.au", "hunter2"));

        assert!(matches!(result.unwrap_err(), UserError::EmailInvalid));
    }

    #[test]
    fn should_reject_empty_password() {
        let result = User::new(props("someone@commbank.com.au", ""));

        assert!(matches!(result.unwrap_err(), UserError::PasswordEmpty));
    }
}
