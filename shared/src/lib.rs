//! # NoteVault Shared
//!
//! Cross-cutting types shared by every layer of the NoteVault backend:
//! configuration modules, the wire response envelope, and validation
//! utilities. This crate has no domain knowledge of its own.

pub mod config;
pub mod types;
pub mod utils;
