pub mod profile;

pub use profile::{Profile, SortField, TagCategory};
