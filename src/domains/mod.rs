//! Domains module containing business logic organized by bounded contexts.
//!
//! `knowledge` is the static data, `services` interpret it per framework
//! mode, and `tools` expose the services over MCP.

pub mod knowledge;
pub mod services;
pub mod tools;
