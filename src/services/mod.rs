//! Business logic services.
//!
//! Services own all database access. Handlers validate input, call a
//! service, and shape the response.

pub mod consulta_service;
pub mod profissional_service;
