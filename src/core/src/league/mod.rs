pub mod error;
pub mod league;
pub mod result;
pub mod schedule;
pub mod season;
pub mod settings;
pub mod table;

pub use error::*;
pub use league::*;
pub use result::*;
pub use schedule::*;
pub use season::*;
pub use settings::*;
pub use table::*;
