pub mod builder;
pub mod collection;
pub mod statistics;
pub mod team;

pub use builder::*;
pub use collection::*;
pub use statistics::*;
pub use team::*;
