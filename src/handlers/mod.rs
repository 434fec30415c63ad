//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, query string)
//! 2. Validates it and calls the matching service
//! 3. Returns HTTP response (JSON, status code)

/// Appointment endpoints
pub mod consultas;
/// Service health endpoint
pub mod health;
/// Professional endpoints
pub mod profissionais;
