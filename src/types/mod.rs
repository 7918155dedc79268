pub mod column;
mod row;
mod split;

pub use column::Column;
pub use row::Row;
pub use split::{FieldError, Split};
