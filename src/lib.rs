//! Beacon - a small single-protocol request server
//!
//! Core library for request parsing, routing and response writing.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
