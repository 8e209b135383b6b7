//! # dtserver-sdk
//!
//! Client SDK for the Dynatrace Server management REST API.
//!
//! It wraps the server's XML endpoints for incidents, system profiles and
//! memory dump jobs in typed models and async operations.
//!
//! ## Features
//!
//! - **Incidents**: list with time/state filters, read, create, update
//! - **System profiles**: list, read details, enable, disable, activate a configuration
//! - **Memory dumps**: read memory dump job snapshots
//! - **Error handling**: one error type that separates local mistakes,
//!   connection failures, bad statuses and undecodable bodies
//! - **Security**: the password is never logged or printed
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - Connection settings, in code or from environment variables
//! - [`error`] - Error types
//! - [`endpoint`] - Endpoint templates, URL resolution and date formatting
//! - [`xml`] - XML marshalling of models
//! - [`transport`] - The HTTP capability set and its `reqwest` implementation
//! - [`client`] - The client and its request/response policy
//! - [`services`] - One façade per resource family
//! - [`models`] - Data models for requests and responses
//!
//! ## Configuration
//!
//! [`Config::from_env`](config::Config::from_env) reads:
//!
//! - `DT_SERVER_URL`: Base URL of the server, e.g. `https://dynatrace.example.com:8021`
//! - `DT_USERNAME` / `DT_PASSWORD`: Basic authentication credentials
//!
//! Optional:
//! - `DT_TIMEOUT_MS`: Request timeout (default 30000)
//! - `DT_ACCEPT_INVALID_CERTS`: `true` for servers with self-signed certificates
//!
//! The library logs through `tracing`; install a subscriber to see it
//! (e.g. `RUST_LOG=dtserver_sdk=debug`).
//!
//! ## Example
//!
//! ```ignore
//! use dtserver_sdk::client::DynatraceClient;
//! use dtserver_sdk::config::Config;
//! use dtserver_sdk::models::{CreateUpdateIncidentRequest, IncidentSeverity};
//!
//! async fn example() -> Result<(), dtserver_sdk::error::SdkError> {
//!     let config = Config::from_env()?;
//!     let client = DynatraceClient::new(&config)?;
//!
//!     let request = CreateUpdateIncidentRequest::new("easyTravel", "Deployment")
//!         .with_message("Deployed build 42")
//!         .with_severity(IncidentSeverity::Warning);
//!
//!     let id = client.incidents().create_incident(&request).await?;
//!     let incident = client.incidents().get_incident("easyTravel", "Deployment", &id).await?;
//!     println!("{}: {:?}", incident.id, incident.state);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod services;
pub mod transport;
pub mod xml;

pub use client::DynatraceClient;
pub use config::Config;
pub use error::{DecodeError, SdkError};
