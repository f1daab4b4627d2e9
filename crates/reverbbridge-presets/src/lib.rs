pub mod catalog;
pub mod preset;

pub use crate::catalog::{PresetCatalog, GENERIC};
pub use crate::preset::ReverbPreset;
