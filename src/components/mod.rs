//! Reusable UI components.

pub mod category_nav;
