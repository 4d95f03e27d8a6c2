use axum::{extract::{Path, Query, State}, Json};
use serde::Deserialize;
use tracing::info;

use crate::data::{activities_store::{ActivitiesMap, ActivitiesStore}, json_responses::JsonMessage};
use crate::controllers::ActivitiesHttpResult;

#[derive(Deserialize, Debug)]
pub struct StudentEmail {
    email: String
}

#[tracing::instrument(skip_all)]
pub async fn list_activities(State(activities): State<ActivitiesStore>) -> Json<ActivitiesMap> {
    Json(activities.get_all().await)
}

#[tracing::instrument(skip_all, fields(activity = %activity_name, email = %student.email))]
pub async fn signup(
    Path(activity_name): Path<String>,
    Query(student): Query<StudentEmail>,
    State(activities): State<ActivitiesStore>,
) -> ActivitiesHttpResult<Json<JsonMessage>> {
    activities.add_participant(&activity_name, &student.email).await?;
    info!("Signed up [{}] for [{}]", student.email, activity_name);

    Ok(Json(JsonMessage::signed_up(&student.email, &activity_name)))
}

#[tracing::instrument(skip_all, fields(activity = %activity_name, email = %student.email))]
pub async fn unregister(
    Path(activity_name): Path<String>,
    Query(student): Query<StudentEmail>,
    State(activities): State<ActivitiesStore>,
) -> ActivitiesHttpResult<Json<JsonMessage>> {
    activities.remove_participant(&activity_name, &student.email).await?;
    info!("Removed [{}] from [{}]", student.email, activity_name);

    Ok(Json(JsonMessage::removed(&student.email, &activity_name)))
}
