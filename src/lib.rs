pub mod app;
pub mod cli;
pub mod config;
pub mod identifier;
pub mod logging;
pub mod plugin;
pub mod role;
pub mod validation;

pub use identifier::CaseInsensitiveString;
pub use role::RoleUser;
pub use validation::{ErrorBag, Validatable, ValidationContext};
