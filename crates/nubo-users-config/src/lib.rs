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

//! Configuration model and default resolution for the Nubo users service.
//!
//! Layout: `model.rs` (typed configuration aggregate), `defaults.rs`
//! (baseline literals + [`full_default_config`] pipeline), `resolve.rs`
//! (commons-scope inheritance), `sanitize.rs` (post-resolution fixups).
//!
//! The service bootstrap calls [`full_default_config`] exactly once before
//! any listener or directory client starts; the returned aggregate is owned
//! by the caller for the process lifetime.

pub mod defaults;
pub mod model;
pub mod resolve;
pub mod sanitize;

pub use defaults::{default_config, full_default_config};
pub use model::{
    Config, Debug, DriverKind, Drivers, GrpcConfig, JsonDriver, LdapDriver, LdapGroupSchema,
    LdapUserSchema, Service, SqlDriver,
};
pub use resolve::{coalesce_section, ensure_defaults};
pub use sanitize::sanitize;
