//! Page components, one per routed view.

pub mod category;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod reset_password;
