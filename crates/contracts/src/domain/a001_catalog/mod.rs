pub mod aggregate;

pub use aggregate::{ColumnDataType, DisplayType, ProductColumn};
