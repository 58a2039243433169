pub mod anchor;
pub mod constants;
pub mod error;
pub mod host;
pub mod nav;
pub mod visibility;

pub use anchor::*;
pub use constants::*;
pub use error::*;
pub use host::*;
pub use nav::*;
pub use visibility::*;
