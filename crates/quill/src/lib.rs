//! Model registry and query parameter binding for record types.
//!
//! ```ignore
//! let mut builder = Registry::builder();
//! builder.register::<User>()?.register::<Post>()?;
//! let registry = builder.build()?;
//!
//! let params = registry.flatten_params(None, &[Arg::record(&post), 10.into()])?;
//! ```

mod model;
pub use model::Model;

mod registry;
pub use registry::{Builder, Registry};

pub mod schema;

pub use quill_core::{
    bail, err,
    params::{Arg, Identity, Record},
    schema::TimeZones,
    stmt::{self, Value},
    Error, Result,
};

/// Re-export of the metadata layer.
pub use quill_core as core;
