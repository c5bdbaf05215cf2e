//! Network layer: wire types plus the backend API client.

pub mod api;
pub mod types;
