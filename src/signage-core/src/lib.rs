//! Signage Core Library
//!
//! Configuration, logging and the command implementations behind the
//! `signage` binary.

pub mod colored_logger;
pub mod commands;
pub mod config;
