use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}

/// Raw form submission, as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Trimmed, non-empty credentials ready for hashing.
#[derive(Debug)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl CredentialForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn credentials(&self) -> Option<Credentials<'_>> {
        let username = self.username.trim();
        let password = self.password.trim();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Credentials { username, password })
    }
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub status: &'static str,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_both_fields() {
        let form = CredentialForm::new("  alice ", "\tsecret1\n");
        let creds = form.credentials().unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "secret1");
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(CredentialForm::new("", "pw").credentials().is_none());
        assert!(CredentialForm::new("bob", "   ").credentials().is_none());
        assert!(CredentialForm::new(" ", "").credentials().is_none());
    }
}
