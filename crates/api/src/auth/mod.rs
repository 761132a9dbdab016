//! Authentication primitives: JWT access tokens and password hashing.

pub mod jwt;
pub mod password;
