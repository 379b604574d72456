//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Base URL, review identifier, action and derived
//!   settings resolution tests
