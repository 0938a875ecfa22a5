//! Application layer - tool invocation, config, logging

pub mod config;
pub mod logging;
pub mod observer;
pub mod tool;
