//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Random short code drawing
//! - [`url_normalizer`] - Submitted URL normalization and validation
//! - [`request_origin`] - Public origin resolution for short URLs
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod request_origin;
pub mod url_normalizer;
