#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Configuration sections shared across Nubo services.
//!
//! Every service owns its local configuration aggregate, but a handful of
//! sections (logging, tracing, token manager, gateway transport, `gRPC` TLS)
//! are routinely provisioned once per deployment and inherited by each
//! service that did not set them explicitly. This crate defines those
//! section types plus the [`Commons`] scope that carries them, so service
//! config crates and the platform bootstrap agree on a single shape.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default platform data root used when no override is configured.
const DEFAULT_BASE_DATA_PATH: &str = "/var/lib/nubo";

/// Structured logging section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    /// Minimum severity emitted (`trace` through `error`).
    pub level: String,
    /// Render human-friendly console output instead of JSON lines.
    pub pretty: bool,
    /// Colourise console output when `pretty` is active.
    pub color: bool,
    /// Optional log file destination; empty means stderr.
    pub file: String,
}

/// Distributed tracing section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracing {
    /// Whether span export is active.
    pub enabled: bool,
    /// Exporter flavour (e.g. `jaeger`, `otlp`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Agent endpoint spans are shipped to.
    pub endpoint: String,
    /// Collector endpoint used when the agent is bypassed.
    pub collector: String,
}

/// Token manager section holding the secret used to mint and verify
/// service-to-service auth tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenManager {
    /// Symmetric signing secret; empty until provisioned.
    pub jwt_secret: String,
}

/// Backend-connection descriptor for the platform gateway every service
/// dials for inter-service calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gateway {
    /// Gateway service address (registry name or `host:port`).
    pub address: String,
    /// Transport security applied when dialling the gateway.
    pub tls: GatewayTls,
}

/// Client-side TLS settings for gateway connections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayTls {
    /// Verification mode (`insecure`, `on`); empty disables TLS entirely.
    pub mode: String,
    /// CA certificate bundle used to verify the gateway endpoint.
    pub cacert: String,
}

/// Server-side TLS descriptor for `gRPC` listeners.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Whether the listener terminates TLS itself.
    pub enabled: bool,
    /// Path to the PEM-encoded server certificate.
    pub cert: String,
    /// Path to the PEM-encoded private key.
    pub key: String,
    /// Path to the CA bundle handed to clients for verification.
    pub ca_cert: String,
}

/// Deployment-wide configuration fragment services inherit from.
///
/// Supplied by the platform bootstrap layer; services only ever read it.
/// Every field is optional: an absent section simply means the deployment
/// did not provision a shared value for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commons {
    /// Shared logging section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<Log>,
    /// Shared tracing section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracing: Option<Tracing>,
    /// Shared token manager section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_manager: Option<TokenManager>,
    /// Shared gateway descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Gateway>,
    /// Shared TLS descriptor for `gRPC` listeners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc_service_tls: Option<TlsConfig>,
}

/// Root directory for service state, certificates, and embedded stores.
///
/// Honours the `NUBO_BASE_DATA_PATH` environment variable and falls back to
/// `/var/lib/nubo`.
#[must_use]
pub fn base_data_path() -> PathBuf {
    base_data_path_from(std::env::var("NUBO_BASE_DATA_PATH").ok().as_deref())
}

fn base_data_path_from(value: Option<&str>) -> PathBuf {
    match value {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_BASE_DATA_PATH),
    }
}

/// Gateway descriptor every service starts from: the well-known registry
/// name of the platform gateway, plaintext until certificates are rolled
/// out.
#[must_use]
pub fn default_gateway_config() -> Gateway {
    Gateway {
        address: "com.nubo.api.gateway".to_string(),
        tls: GatewayTls {
            mode: "insecure".to_string(),
            cacert: String::new(),
        },
    }
}
