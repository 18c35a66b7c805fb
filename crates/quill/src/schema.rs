//! Model definitions, as written by users, before registration.

mod declared;
pub use declared::DeclaredTy;

mod model_def;
pub use model_def::{FieldDef, ModelDef};

mod tag;
pub use tag::{OnDeleteTag, Rel, Reverse, Tag, TagType};
