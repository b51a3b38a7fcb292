//! Taiwan weather dashboard library
//!
//! Everything except terminal drawing lives here so it can be exercised by
//! integration tests.

pub mod advice;
pub mod app;
pub mod cli;
pub mod data;
pub mod fetch;
pub mod icon;
pub mod logging;
pub mod period;
pub mod render;
pub mod state;
