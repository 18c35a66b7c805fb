//! Reduction of query arguments into driver values.

mod arg;
pub use arg::Arg;

mod flatten;

mod identity;
pub use identity::{resolve_identity, Identity};

mod record;
pub use record::Record;
