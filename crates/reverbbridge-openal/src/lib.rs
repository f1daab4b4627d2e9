pub mod api;
pub mod efx;
pub mod loader;

pub use crate::api::EfxApi;
pub use crate::loader::{LoadError, OpenAlDriver};
