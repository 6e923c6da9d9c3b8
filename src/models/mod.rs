//! Data models organized by type.

pub mod category;
pub mod recipe;
pub mod requests;
pub mod responses;
pub mod session;
pub mod user;

pub use category::*;
pub use recipe::*;
pub use requests::*;
pub use responses::*;
pub use session::*;
pub use user::*;
