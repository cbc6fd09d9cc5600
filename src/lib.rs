//! Configuration surface of the slither server.
//!
//! The server binary loads a [`config::Config`] once at startup, installs
//! logging via [`logging::setup_logging`], and shares the record read-only
//! with everything it spawns. Nothing here mutates after load.

pub mod config;
pub mod logging;
