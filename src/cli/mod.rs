//! CLI infrastructure for the noughts solver
//!
//! This module provides the command-line front end: querying the solver,
//! playing against it, and evaluating it against baseline opponents.

pub mod commands;
pub mod config;
pub mod output;

pub use config::Settings;
