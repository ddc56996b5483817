pub mod document;
pub mod section;
pub mod table;

#[cfg(test)]
pub(crate) mod tests;

pub use section::{partition, Section};
pub use table::RawRow;
