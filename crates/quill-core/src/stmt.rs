mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_chrono;
pub use value_chrono::{DATETIME_FORMAT, DATE_FORMAT};
