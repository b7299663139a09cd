pub mod fixture;
pub mod provider;
pub mod result;

pub use fixture::*;
pub use provider::*;
pub use result::*;
