//! Shared helpers: request extractors, date handling, JWT and password hashing.

pub mod date;
pub mod jwt;
pub mod password;
pub mod validate;
