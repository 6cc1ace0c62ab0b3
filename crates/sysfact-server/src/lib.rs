//! The sysfact collector: receives CSV fact submissions from agents over
//! HTTP and persists one artifact pair per request.

pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod state;
