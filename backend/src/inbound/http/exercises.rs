//! Exercise log API handlers.
//!
//! ```text
//! POST /api/users/{id}/exercises  (form: description, duration, date?)
//! GET  /api/users/{id}/logs?from=YYYY-MM-DD&to=YYYY-MM-DD&limit=N
//! ```
//!
//! Appended exercises echo their date as `Www Mmm DD YYYY`; log entries keep
//! the stored `YYYY-MM-DD` text.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::AppendExerciseRequest;
use crate::domain::{Error, Exercise, ExerciseLog, ExerciseReceipt, LogQuery};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    DATE, FROM, TO, parse_description, parse_duration, parse_optional_date, parse_user_id,
};

/// Form body for `POST /api/users/{id}/exercises`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct AppendExerciseForm {
    /// Free-text description; must not be blank.
    pub description: Option<String>,
    /// Whole minutes, greater than zero.
    pub duration: Option<String>,
    /// Optional `YYYY-MM-DD`; defaults to today (UTC).
    pub date: Option<String>,
}

/// Query string accepted by `GET /api/users/{id}/logs`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQueryParams {
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Maximum entries; non-positive or non-numeric values are ignored.
    pub limit: Option<String>,
}

/// Response body of a successful append.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: u32,
    /// Human-readable date, e.g. `Sun Jan 15 2023`.
    #[schema(example = "Sun Jan 15 2023")]
    pub date: String,
}

impl From<ExerciseReceipt> for ExerciseResponse {
    fn from(receipt: ExerciseReceipt) -> Self {
        let ExerciseReceipt { user, exercise } = receipt;
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            description: exercise.description.as_ref().to_owned(),
            duration: exercise.duration.minutes(),
            date: exercise.date.to_day_string(),
        }
    }
}

/// One entry of a log response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LogEntryResponse {
    pub description: String,
    pub duration: u32,
    /// Stored date, e.g. `2023-01-15`.
    #[schema(example = "2023-01-15")]
    pub date: String,
}

impl From<Exercise> for LogEntryResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description.into(),
            duration: exercise.duration.minutes(),
            date: exercise.date.into(),
        }
    }
}

/// Response body of a log read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    /// Number of entries in `log`.
    pub count: usize,
    pub log: Vec<LogEntryResponse>,
}

impl From<ExerciseLog> for LogResponse {
    fn from(log: ExerciseLog) -> Self {
        let count = log.count();
        let ExerciseLog { user, entries } = log;
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            count,
            log: entries.into_iter().map(LogEntryResponse::from).collect(),
        }
    }
}

impl TryFrom<LogQueryParams> for LogQuery {
    type Error = Error;

    fn try_from(params: LogQueryParams) -> Result<Self, Self::Error> {
        Ok(Self {
            from: parse_optional_date(params.from, FROM)?,
            to: parse_optional_date(params.to, TO)?,
            limit: params.limit.as_deref().and_then(LogQuery::parse_limit),
        })
    }
}

/// Append an exercise to a user's log.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    params(("id" = String, Path, description = "User identifier")),
    request_body(content = AppendExerciseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Exercise appended", body = ExerciseResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "appendExercise"
)]
#[post("/users/{id}/exercises")]
pub async fn append_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<AppendExerciseForm>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path.into_inner())?;
    let AppendExerciseForm {
        description,
        duration,
        date,
    } = form.into_inner();
    let request = AppendExerciseRequest {
        user_id,
        description: parse_description(description)?,
        duration: parse_duration(duration)?,
        date: parse_optional_date(date, DATE)?,
    };

    let receipt = state.exercises.append_exercise(request).await?;
    Ok(HttpResponse::Ok().json(ExerciseResponse::from(receipt)))
}

/// Read a user's exercise log filtered by date window and limit.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    params(("id" = String, Path, description = "User identifier"), LogQueryParams),
    responses(
        (status = 200, description = "Exercise log", body = LogResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "exerciseLog"
)]
#[get("/users/{id}/logs")]
pub async fn exercise_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQueryParams>,
) -> ApiResult<web::Json<LogResponse>> {
    let user_id = parse_user_id(&path.into_inner())?;
    let query = LogQuery::try_from(query.into_inner())?;

    let log = state.exercises_query.exercise_log(&user_id, &query).await?;
    Ok(web::Json(LogResponse::from(log)))
}
