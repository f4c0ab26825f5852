//! Tanabana command line front end: configuration, session wiring and terminal output.

pub mod config;
pub mod context;
pub mod output;
