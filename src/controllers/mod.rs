use axum::{response::{Response, IntoResponse}, http::StatusCode, Json};
use tracing::info;
use crate::data::json_responses::JsonDetail;

pub mod activities;
pub mod base;

pub type ActivitiesHttpResult<T> = Result<T, ActivitiesHttpError>;

/// Rejected requests. The `Display` text is the `detail` sent back to the client, the
/// carried string is the activity name for the logs.
#[derive(thiserror::Error, Debug)]
pub enum ActivitiesHttpError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student already signed up for this activity")]
    AlreadySignedUp(String),

    #[error("Student is not signed up for this activity")]
    NotSignedUp(String),
}

macro_rules! activities_error_constructor {
    ($funct_name:ident, $item:ident) => {
        pub fn $funct_name<S: ToString>(s: S) -> Self {
            Self::$item(s.to_string())
        }
    };
}

impl ActivitiesHttpError {
    activities_error_constructor!(activity_not_found, ActivityNotFound);
    activities_error_constructor!(already_signed_up, AlreadySignedUp);
    activities_error_constructor!(not_signed_up, NotSignedUp);

    pub fn status_code(&self) -> StatusCode {
        match self {
            ActivitiesHttpError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            ActivitiesHttpError::AlreadySignedUp(_) => StatusCode::BAD_REQUEST,
            ActivitiesHttpError::NotSignedUp(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn activity_name(&self) -> &str {
        match self {
            ActivitiesHttpError::ActivityNotFound(name)
            | ActivitiesHttpError::AlreadySignedUp(name)
            | ActivitiesHttpError::NotSignedUp(name) => name,
        }
    }
}

impl IntoResponse for ActivitiesHttpError {
    fn into_response(self) -> Response {
        let http_code = self.status_code();
        info!("Rejected request on [{}]: {}", self.activity_name(), self);

        (
            http_code,
            Json(JsonDetail::new(self.to_string()))
        ).into_response()
    }
}
