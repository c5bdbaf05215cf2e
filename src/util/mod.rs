//! Small cross-cutting utilities: persistence and notifications.

pub mod notify;
pub mod storage;
