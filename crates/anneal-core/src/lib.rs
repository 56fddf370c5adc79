pub mod enzyme;
pub mod primer;
pub mod tm;

pub use enzyme::*;
pub use primer::*;
pub use tm::*;
