//! Consulta data models and API request/response types.
//!
//! This module defines:
//! - `Consulta`: Database entity representing an appointment
//! - `ConsultaPayload`: Raw request body for create/update/patch
//! - `ConsultaFilter`: Query string accepted by the list endpoint
//! - `ConsultaResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, FieldErrors};

/// Represents a consulta record from the database.
///
/// # Database Table
///
/// Maps to the `consultas` table. `profissional_id` is a foreign key to
/// `profissionais(id)` with `ON DELETE CASCADE`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Consulta {
    pub id: Uuid,

    /// Scheduled date and time of the appointment
    pub data: DateTime<Utc>,

    /// Professional attending the appointment
    pub profissional_id: Uuid,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request body shared by POST, PUT and PATCH.
///
/// # JSON Example
///
/// ```json
/// {
///   "data": "2025-12-22T14:30:00Z",
///   "profissional": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ConsultaPayload {
    #[serde(default, deserialize_with = "super::nullable")]
    pub data: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub profissional: Option<Option<Uuid>>,
}

/// Fully validated payload, used for create and full update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewConsulta {
    pub data: DateTime<Utc>,
    pub profissional_id: Uuid,
}

/// Validated partial payload. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsultaChanges {
    pub data: Option<DateTime<Utc>>,
    pub profissional_id: Option<Uuid>,
}

impl From<NewConsulta> for ConsultaChanges {
    fn from(new: NewConsulta) -> Self {
        Self {
            data: Some(new.data),
            profissional_id: Some(new.profissional_id),
        }
    }
}

impl ConsultaPayload {
    /// Validate for create / PUT: both fields must be present and non-null.
    pub fn validate(self) -> Result<NewConsulta, AppError> {
        let mut errors = FieldErrors::new();

        let data = errors.non_null("data", self.data);
        let profissional = errors.non_null("profissional", self.profissional);
        let data = errors.require("data", data);
        let profissional = errors.require("profissional", profissional);

        match (data, profissional) {
            (Some(data), Some(profissional_id)) if errors.is_empty() => Ok(NewConsulta {
                data,
                profissional_id,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }

    /// Validate for PATCH: any subset of fields, none of them `null`.
    pub fn validate_partial(self) -> Result<ConsultaChanges, AppError> {
        let mut errors = FieldErrors::new();

        let changes = ConsultaChanges {
            data: errors.non_null("data", self.data),
            profissional_id: errors.non_null("profissional", self.profissional),
        };

        errors.into_result().map(|()| changes)
    }
}

/// Field error for a `profissional` reference that matches no row.
pub fn unknown_profissional(profissional_id: Uuid) -> AppError {
    AppError::Validation(FieldErrors::single(
        "profissional",
        format!("Invalid pk \"{profissional_id}\" - object does not exist."),
    ))
}

/// Query string of the consulta list endpoint.
///
/// `?profissional=<uuid>` restricts the list to one professional. An empty
/// value is treated as no filter. When the key is repeated the last value
/// wins; other keys are ignored.
#[derive(Debug, Default)]
pub struct ConsultaFilter {
    pub profissional: Option<String>,
}

impl FromIterator<(String, String)> for ConsultaFilter {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(params: I) -> Self {
        let profissional = params
            .into_iter()
            .filter(|(key, _)| key == "profissional")
            .map(|(_, value)| value)
            .last();
        Self { profissional }
    }
}

impl ConsultaFilter {
    /// Parsed professional id, if a non-empty filter value was given.
    pub fn profissional_id(&self) -> Result<Option<Uuid>, AppError> {
        match self.profissional.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Uuid::parse_str(raw).map(Some).map_err(|_| {
                AppError::Validation(FieldErrors::single(
                    "profissional",
                    "Select a valid choice. That choice is not one of the available choices.",
                ))
            }),
        }
    }
}

/// Response body for consulta endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "data": "2025-12-22T14:30:00Z",
///   "profissional": "550e8400-e29b-41d4-a716-446655440000",
///   "created_at": "2025-12-20T10:00:00Z",
///   "updated_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultaResponse {
    pub id: Uuid,
    pub data: DateTime<Utc>,
    pub profissional: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The foreign key column is exposed under the relation name.
impl From<Consulta> for ConsultaResponse {
    fn from(consulta: Consulta) -> Self {
        Self {
            id: consulta.id,
            data: consulta.data,
            profissional: consulta.profissional_id,
            created_at: consulta.created_at,
            updated_at: consulta.updated_at,
        }
    }
}
