pub mod entry;
pub mod user;
pub mod week;

pub use entry::*;
pub use user::*;
pub use week::*;
