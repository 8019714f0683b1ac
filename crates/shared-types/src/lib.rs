pub mod error;

pub mod class_session;
pub mod config;
pub mod fixtures;
pub mod login;
pub mod role;
pub mod shell;
pub mod verification;

pub use error::*;

pub use class_session::*;
pub use config::*;
pub use fixtures::*;
pub use login::*;
pub use role::*;
pub use shell::*;
pub use verification::*;
