//! Metadata and value-normalization core.
//!
//! The [`schema`] module holds the model registry: a [`schema::Builder`] that
//! accepts model descriptors during bootstrap and produces an immutable
//! [`Schema`] for the read-only phase. The [`params`] module reduces query
//! arguments into flat lists of driver [`stmt::Value`]s.

mod error;
pub use error::{Error, IntoError};

pub mod params;
pub use params::{Arg, Identity, Record};

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses Quill's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
