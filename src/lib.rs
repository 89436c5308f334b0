#[macro_use]
pub mod macros;

pub mod browser;
pub mod credentials;
pub mod error;
pub mod parser;
pub mod schema;
pub mod session;

pub use error::{SchoolSoftError, ValidationError};
pub use session::SchoolSoft;
