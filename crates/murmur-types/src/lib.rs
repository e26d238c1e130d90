//! Shared domain types for Murmur.
//!
//! This crate contains the core domain types used across the Murmur backend:
//! Conversation, Message, LLM request/response shapes, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod conversation;
pub mod error;
pub mod llm;
pub mod message;
