//! hello-minikube: a two-endpoint JSON service used as a smoke test and
//! liveness probe target inside Kubernetes/Minikube.
//!
//! `GET /health` answers `{"status":"ok"}` and `GET /` answers a fixed
//! greeting. The library exposes the router and server so integration tests
//! can run the real stack on an ephemeral port.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::{AppConfig, ConfigError};
pub use routes::create_router;
