//! Repository interfaces for the persistence layer.

pub mod account;
pub mod note;

pub use account::{AccountRepository, MockAccountRepository};
pub use note::{MockNoteRepository, NoteRepository};
