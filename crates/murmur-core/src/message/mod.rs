//! Message persistence abstractions and the append-and-respond workflow.

pub mod repository;
pub mod service;
