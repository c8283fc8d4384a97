//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain: request parsing,
//! DTO mapping and translation of domain errors into status codes.

pub mod rest;

pub use rest::*;
