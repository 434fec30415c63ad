//! Profissional data models and API request types.
//!
//! This module defines:
//! - `Profissional`: Database entity, also returned as-is to clients
//! - `ProfissionalPayload`: Raw request body for create/update/patch
//! - `NewProfissional` / `ProfissionalChanges`: Validated payloads

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{AppError, FieldErrors};

/// Represents a profissional record from the database.
///
/// # Database Table
///
/// Maps to the `profissionais` table. A profissional owns zero or more
/// consultas; deleting it deletes them too.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "nome_social": "Ana Souza",
///   "profissao": "Psicóloga",
///   "endereco": "Rua das Flores, 123",
///   "contato": "ana@example.com",
///   "created_at": "2025-12-20T10:00:00Z",
///   "updated_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Profissional {
    pub id: Uuid,

    /// Name the professional goes by
    pub nome_social: String,

    pub profissao: String,

    pub endereco: String,

    /// Free-form contact (phone, e-mail)
    pub contato: String,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// Request body shared by POST, PUT and PATCH.
///
/// Fields distinguish "absent" (`None`) from an explicit `null`
/// (`Some(None)`), so each can be reported on its own. Read-only fields
/// (`id`, timestamps) are ignored if sent.
#[derive(Debug, Default, Deserialize)]
pub struct ProfissionalPayload {
    #[serde(default, deserialize_with = "super::nullable")]
    pub nome_social: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub profissao: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub endereco: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub contato: Option<Option<String>>,
}

/// Trimmed field values checked by `validator`. `None` fields are skipped.
#[derive(Debug, Default, Validate)]
struct ProfissionalForm {
    #[validate(
        custom(function = "plain_text"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    nome_social: Option<String>,

    #[validate(
        custom(function = "plain_text"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    profissao: Option<String>,

    #[validate(
        custom(function = "plain_text"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    endereco: Option<String>,

    #[validate(
        custom(function = "plain_text"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    contato: Option<String>,
}

/// Non-blank text without NUL characters, which PostgreSQL cannot store.
fn plain_text(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(
            ValidationError::new("blank").with_message(Cow::Borrowed("This field may not be blank."))
        );
    }
    if value.contains('\0') {
        return Err(ValidationError::new("null_characters")
            .with_message(Cow::Borrowed("Null characters are not allowed.")));
    }
    Ok(())
}

/// Fully validated payload, used for create and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfissional {
    pub nome_social: String,
    pub profissao: String,
    pub endereco: String,
    pub contato: String,
}

/// Validated partial payload. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfissionalChanges {
    pub nome_social: Option<String>,
    pub profissao: Option<String>,
    pub endereco: Option<String>,
    pub contato: Option<String>,
}

impl From<NewProfissional> for ProfissionalChanges {
    fn from(new: NewProfissional) -> Self {
        Self {
            nome_social: Some(new.nome_social),
            profissao: Some(new.profissao),
            endereco: Some(new.endereco),
            contato: Some(new.contato),
        }
    }
}

impl ProfissionalPayload {
    /// Validate for create / PUT: every field must be present.
    pub fn validate(self) -> Result<NewProfissional, AppError> {
        let (form, mut errors) = self.into_form();

        let nome_social = errors.require("nome_social", form.nome_social);
        let profissao = errors.require("profissao", form.profissao);
        let endereco = errors.require("endereco", form.endereco);
        let contato = errors.require("contato", form.contato);

        match (nome_social, profissao, endereco, contato) {
            (Some(nome_social), Some(profissao), Some(endereco), Some(contato))
                if errors.is_empty() =>
            {
                Ok(NewProfissional {
                    nome_social,
                    profissao,
                    endereco,
                    contato,
                })
            }
            _ => Err(AppError::Validation(errors)),
        }
    }

    /// Validate for PATCH: absent fields are allowed, present ones must be valid.
    pub fn validate_partial(self) -> Result<ProfissionalChanges, AppError> {
        let (form, errors) = self.into_form();

        errors.into_result().map(|()| ProfissionalChanges {
            nome_social: form.nome_social,
            profissao: form.profissao,
            endereco: form.endereco,
            contato: form.contato,
        })
    }

    /// Drops nulls (recording them), trims, and runs the field validators.
    fn into_form(self) -> (ProfissionalForm, FieldErrors) {
        let mut errors = FieldErrors::new();

        let form = ProfissionalForm {
            nome_social: errors.non_null("nome_social", self.nome_social).map(trimmed),
            profissao: errors.non_null("profissao", self.profissao).map(trimmed),
            endereco: errors.non_null("endereco", self.endereco).map(trimmed),
            contato: errors.non_null("contato", self.contato).map(trimmed),
        };

        if let Err(invalid) = form.validate() {
            errors.merge(invalid.into());
        }

        (form, errors)
    }
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(value: &str) -> Option<Option<String>> {
        Some(Some(value.to_string()))
    }

    fn full_payload() -> ProfissionalPayload {
        ProfissionalPayload {
            nome_social: text("Ana Souza"),
            profissao: text("Psicóloga"),
            endereco: text("Rua das Flores, 123"),
            contato: text("ana@example.com"),
        }
    }

    fn field_errors(err: AppError) -> FieldErrors {
        match err {
            AppError::Validation(fields) => fields,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn full_payload_validates() {
        let new = full_payload().validate().unwrap();
        assert_eq!(new.nome_social, "Ana Souza");
        assert_eq!(new.profissao, "Psicóloga");
    }

    #[test]
    fn values_are_trimmed() {
        let payload = ProfissionalPayload {
            nome_social: text("  Ana Souza \n"),
            ..full_payload()
        };
        assert_eq!(payload.validate().unwrap().nome_social, "Ana Souza");
    }

    #[test]
    fn missing_fields_are_reported_individually() {
        let err = ProfissionalPayload::default().validate().unwrap_err();
        let fields = field_errors(err);
        for field in ["nome_social", "profissao", "endereco", "contato"] {
            assert_eq!(
                fields.get(field),
                Some(&["This field is required.".to_string()][..]),
                "{field}"
            );
        }
    }

    #[test]
    fn blank_field_is_rejected() {
        let payload = ProfissionalPayload {
            profissao: text("   "),
            ..full_payload()
        };
        let fields = field_errors(payload.validate().unwrap_err());
        assert_eq!(
            fields.get("profissao"),
            Some(&["This field may not be blank.".to_string()][..])
        );
        assert!(fields.get("nome_social").is_none());
    }

    #[test]
    fn null_characters_are_rejected() {
        let payload = ProfissionalPayload {
            nome_social: text("A\u{0}"),
            ..full_payload()
        };
        let fields = field_errors(payload.validate().unwrap_err());
        assert_eq!(
            fields.get("nome_social"),
            Some(&["Null characters are not allowed.".to_string()][..])
        );

        let payload = ProfissionalPayload {
            contato: text("ana\u{0}@example.com"),
            ..Default::default()
        };
        let fields = field_errors(payload.validate_partial().unwrap_err());
        assert!(fields.get("contato").is_some());
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Multi-byte characters must not be counted as bytes
        let at_limit = "é".repeat(100);
        let payload = ProfissionalPayload {
            nome_social: text(&at_limit),
            ..full_payload()
        };
        assert_eq!(payload.validate().unwrap().nome_social, at_limit);

        let payload = ProfissionalPayload {
            nome_social: text(&"é".repeat(101)),
            ..full_payload()
        };
        let fields = field_errors(payload.validate().unwrap_err());
        assert_eq!(
            fields.get("nome_social"),
            Some(&["Ensure this field has no more than 100 characters.".to_string()][..])
        );
    }

    #[test]
    fn endereco_allows_longer_values() {
        let payload = ProfissionalPayload {
            endereco: text(&"a".repeat(255)),
            ..full_payload()
        };
        assert!(payload.validate().is_ok());

        let payload = ProfissionalPayload {
            endereco: text(&"a".repeat(256)),
            ..full_payload()
        };
        let fields = field_errors(payload.validate().unwrap_err());
        assert_eq!(
            fields.get("endereco"),
            Some(&["Ensure this field has no more than 255 characters.".to_string()][..])
        );
    }

    #[test]
    fn partial_accepts_missing_fields() {
        let payload = ProfissionalPayload {
            contato: text("(11) 99999-0000"),
            ..Default::default()
        };
        let changes = payload.validate_partial().unwrap();
        assert_eq!(changes.contato.as_deref(), Some("(11) 99999-0000"));
        assert!(changes.nome_social.is_none());
        assert!(changes.profissao.is_none());
        assert!(changes.endereco.is_none());
    }

    #[test]
    fn partial_still_rejects_blank_values() {
        let payload = ProfissionalPayload {
            endereco: text(""),
            ..Default::default()
        };
        let fields = field_errors(payload.validate_partial().unwrap_err());
        assert!(fields.get("endereco").is_some());
    }

    #[test]
    fn explicit_null_is_not_reported_as_missing() {
        let payload: ProfissionalPayload =
            serde_json::from_value(json!({ "nome_social": null })).unwrap();
        assert_eq!(payload.nome_social, Some(None));
        assert_eq!(payload.profissao, None);

        let fields = field_errors(payload.validate().unwrap_err());
        assert_eq!(
            fields.get("nome_social"),
            Some(&["This field may not be null.".to_string()][..])
        );
        assert_eq!(
            fields.get("profissao"),
            Some(&["This field is required.".to_string()][..])
        );
    }

    #[test]
    fn partial_rejects_explicit_null() {
        let payload: ProfissionalPayload =
            serde_json::from_value(json!({ "contato": null })).unwrap();
        let fields = field_errors(payload.validate_partial().unwrap_err());
        assert_eq!(
            fields.get("contato"),
            Some(&["This field may not be null.".to_string()][..])
        );
    }

    #[test]
    fn payload_ignores_read_only_fields() {
        let payload: ProfissionalPayload = serde_json::from_value(json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "nome_social": "Ana",
            "created_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(payload.nome_social, Some(Some("Ana".to_string())));
        assert!(payload.profissao.is_none());
    }
}
