//! Markshelf: an in-memory bookmark library with Netscape import,
//! favicon fallback resolution and AI page summaries.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod rpc_session;
pub mod services;
pub mod types;
