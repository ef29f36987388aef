//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the server itself, the transports and the
//! HTTP request pipeline (authentication, guards and the serverless handler).

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod guard;
pub mod server;
pub mod serverless;
pub mod transport;

pub use config::Config;
pub use context::WarmContext;
pub use error::{Error, Result};
pub use server::McpServer;
pub use serverless::{HttpEvent, HttpResponse, handle_event};
pub use transport::{TransportConfig, TransportService};
