//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! together with the request and response bodies built from them.

use serde::{Deserialize, Deserializer};

/// Appointment model
pub mod consulta;
/// Professional model
pub mod profissional;

/// Keeps an explicit `null` apart from an absent field.
///
/// Use with `#[serde(default, deserialize_with = "...")]` on an
/// `Option<Option<T>>`: absent → `None`, `null` → `Some(None)`,
/// value → `Some(Some(v))`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
