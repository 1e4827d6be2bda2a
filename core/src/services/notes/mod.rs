//! Ownership-scoped note operations.

mod service;

pub use service::NoteService;
