//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate roster storage, roster state and partitioning into
//!   use-case level APIs.
//! - Keep CLI callers decoupled from storage details.

pub mod dashboard;
pub mod roster_service;
pub mod upload_service;
