pub use traits::*;

pub mod auth;
pub mod entities;
pub mod error;
pub mod google;
mod metrics;
mod traits;
