pub mod session;
pub mod types;

pub use session::*;
pub use types::*;
