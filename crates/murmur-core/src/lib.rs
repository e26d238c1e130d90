//! Business logic and repository trait definitions for Murmur.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements. It depends only on `murmur-types` --
//! never on `murmur-infra` or any database/HTTP crate.

pub mod conversation;
pub mod llm;
pub mod message;
