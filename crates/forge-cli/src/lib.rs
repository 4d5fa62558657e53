//! DecisionForge command-line runner library
//!
//! Configuration, engine setup and the decide/evaluate runners used by the binary.

pub mod config;
pub mod engine;
pub mod runner;
