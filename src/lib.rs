/*!
 * # onesky-client
 *
 * A Rust client library for the OneSky translation-management REST API.
 *
 * ## Features
 *
 * - Per-request authentication (API key plus MD5-signed timestamp)
 * - List the languages configured for a project
 * - Fetch translation export files for one, several, or all languages,
 *   concurrently and in request order
 * - Upload source files for translation as multipart/form-data
 * - Pluggable transport, so every operation can be exercised
 *   deterministically without touching the network
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `client_config`: Credentials and project identity
 * - `signing`: Per-request signature computation
 * - `request`: Query parameter mapping and encoding
 * - `multipart`: Ordered multipart/form-data body builder
 * - `transport`: The injected-transport seam:
 *   - `transport::http`: Production transport over reqwest
 *   - `transport::mock`: Deterministic transport for tests
 * - `client`: The client itself and its data model
 * - `errors`: Custom error types for the crate
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod client;
pub mod client_config;
pub mod errors;
pub mod multipart;
pub mod request;
pub mod signing;
pub mod transport;

// Re-export main types for easier usage
pub use client::{Language, LocaleSet, OneSkyClient, TranslationResult};
pub use client_config::ClientConfig;
pub use errors::ClientError;
pub use multipart::MultipartBody;
pub use request::QueryParams;
pub use signing::{Signature, sign, sign_at};
pub use transport::http::HttpTransport;
pub use transport::mock::MockTransport;
pub use transport::{Method, Transport, TransportRequest, TransportResponse};
