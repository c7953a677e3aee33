//! HTTP server module.
//!
//! Serves the router over plain HTTP. TLS is expected to be terminated by the
//! cluster ingress. The server includes graceful shutdown on SIGTERM/SIGINT,
//! which is how Kubernetes stops a pod.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
