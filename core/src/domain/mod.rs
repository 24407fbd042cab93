//! Domain types carried inside and alongside tokens.

pub mod claims;
pub mod validity;


pub use claims::{ClaimMap, Claims, RESERVED_CLAIMS};
pub use validity::{TimeUnit, Validity};
