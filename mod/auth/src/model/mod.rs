mod permission;
mod role;
mod role_permission;
mod user;
mod user_role;

pub use permission::*;
pub use role::*;
pub use role_permission::*;
pub use user::*;
pub use user_role::*;
