// Simulated sign-in and registration. Nothing leaves the device.
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// Partial profile edit; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    // The profile form submits name, email and phone together
    pub fn from_form(name: &str, email: &str, phone: &str) -> Result<Self, AuthError> {
        if [name, email, phone].iter().any(|field| field.trim().is_empty()) {
            return Err(AuthError::MissingFields);
        }
        Ok(Self {
            name: Some(name.trim().to_string()),
            email: Some(email.trim().to_string()),
            phone: Some(phone.trim().to_string()),
            avatar: None,
        })
    }

    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            profile.phone = phone.clone();
        }
        if let Some(avatar) = &self.avatar {
            profile.avatar = Some(avatar.clone());
        }
    }
}

const DEMO_USER_ID: &str = "1";
const DEMO_USER_NAME: &str = "John Doe";
const DEMO_USER_PHONE: &str = "+90 555 123 4567";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    // Any non-empty email/password pair signs in as the demo user
    pub fn authenticate(&self) -> Result<UserProfile, AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(UserProfile {
            id: DEMO_USER_ID.to_string(),
            name: DEMO_USER_NAME.to_string(),
            email: self.email.trim().to_string(),
            phone: DEMO_USER_PHONE.to_string(),
            avatar: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

impl Registration {
    // Every field must be present; contact formats are not checked here
    pub fn register(&self) -> Result<UserProfile, AuthError> {
        let required = [&self.name, &self.email, &self.phone];
        if required.iter().any(|field| field.trim().is_empty()) || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(UserProfile {
            id: DEMO_USER_ID.to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            avatar: None,
        })
    }
}

// local@domain.tld: one '@', no whitespace, and a dot inside the domain part
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// Optional leading '+', then at least ten digits, spaces, dashes or parentheses
pub fn is_valid_phone(phone: &str) -> bool {
    let body = phone.strip_prefix('+').unwrap_or(phone);
    body.chars().count() >= 10
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}
