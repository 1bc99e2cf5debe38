//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate decode, grouping and rendering into one export call.
//! - Keep CLI layers decoupled from pipeline details.

pub mod export_service;
