use std::borrow::Cow;

use serde::Serialize;

/// Body of every failed request: `{"detail": "..."}`
#[derive(Serialize, Debug)]
pub struct JsonDetail<'a> {
    pub detail: Cow<'a, str>
}

/// Body of every successful mutation: `{"message": "..."}`
#[derive(Serialize, Debug)]
pub struct JsonMessage {
    pub message: String
}

impl<'a> JsonDetail<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(detail: S) -> Self {
        Self {
            detail: detail.into()
        }
    }
}

impl JsonMessage {
    pub fn signed_up(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity_name)
        }
    }

    pub fn removed(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Removed {} from {}", email, activity_name)
        }
    }
}
