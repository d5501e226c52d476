//! noteful-core: Domain types for the Noteful API
//!
//! This crate provides:
//! - The `Folder` and `Note` records returned by the API
//! - Loosely-typed request inputs (`FolderInput`, `NoteInput`)
//! - Validated inputs for each write operation (`NewFolder`, `FolderPatch`,
//!   `NewNote`, `NotePatch`)
//!
//! Validation happens in `TryFrom` conversions from the request inputs, so a
//! value of a validated type is always safe to hand to the store.
//!
//! # Usage
//!
//! ```rust
//! use noteful_core::{FolderInput, NewFolder, ValidationError};
//!
//! let input = FolderInput { folder_name: Some(String::new()) };
//! assert_eq!(NewFolder::try_from(input), Err(ValidationError::InvalidFolderName));
//! ```

pub mod error;
pub mod types;

pub use error::ValidationError;
pub use types::*;
