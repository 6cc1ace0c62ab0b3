//! The sysfact agent: gathers host facts on demand and submits them to the
//! collector as one CSV payload per run.

pub mod config;
pub mod submit;
