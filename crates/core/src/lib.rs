//! Cadence Core - Core types for the Cadence hybrid catalog.
//!
//! This crate provides the foundational types shared by the index crates:
//!
//! - `Record`: an immutable key/payload pair, ordered by key
//! - `Error`: Error types for the configuration surface
//!
//! # Example
//!
//! ```rust
//! use cadence_core::Record;
//!
//! let record = Record::new("Song One", "Artist A");
//!
//! assert_eq!(record.key(), "Song One");
//! assert_eq!(record.payload(), "Artist A");
//! assert_eq!(record.to_string(), "'Song One' by Artist A");
//! ```

#![no_std]

extern crate alloc;

mod error;
mod record;

pub use error::{Error, Result};
pub use record::Record;
