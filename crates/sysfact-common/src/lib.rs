//! Shared types and the CSV wire codec for the sysfact pipeline.
//!
//! The agent and the collector exchange exactly one [`types::SystemFactRecord`]
//! per submission, encoded as a fixed-arity CSV document (see [`wire`]).

pub mod types;
pub mod wire;
