//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, OS randomness, URL-safe Base64)
//! - Password hashing (Argon2id)
//! - Bearer token extraction from the `Authorization` header

pub mod bearer;
pub mod crypto;
pub mod password;
