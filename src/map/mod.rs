pub mod config;
pub mod errors;
pub mod traits;
pub use traits::Lookup;

pub mod linear;
