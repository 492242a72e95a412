//! Typed configuration aggregate for the users service.
//!
//! # Design
//! - Pure data carriers; resolution logic lives in `resolve.rs` and the
//!   literal defaults in `defaults.rs`.
//! - Sections a deployment may inherit from the [`nubo_shared::Commons`]
//!   scope are `Option`al; [`crate::ensure_defaults`] guarantees they are
//!   populated before the aggregate is handed to the service bootstrap.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use nubo_shared::{Gateway, Log, TlsConfig, TokenManager, Tracing};

/// Root configuration aggregate for one users-service instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Debug/introspection listener settings.
    pub debug: Debug,
    /// `gRPC` listener settings.
    pub grpc: GrpcConfig,
    /// Service identity within the platform registry.
    pub service: Service,
    /// Gateway descriptor for inter-service calls; inheritable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Gateway>,
    /// Token manager section; inheritable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_manager: Option<TokenManager>,
    /// Logging section; inheritable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<Log>,
    /// Tracing section; inheritable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracing: Option<Tracing>,
    /// Which backend driver serves user lookups at runtime.
    pub driver: DriverKind,
    /// Sub-configuration for every known driver, active or not, so
    /// validation and documentation tooling can inspect all of them
    /// uniformly.
    pub drivers: Drivers,
}

/// Debug listener exposing health, pprof, and zpages endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debug {
    /// Bind address of the debug listener.
    pub addr: String,
    /// Bearer token protecting the debug endpoints; empty disables auth.
    pub token: String,
    /// Expose pprof profiles.
    pub pprof: bool,
    /// Expose zpages traces.
    pub zpages: bool,
}

/// `gRPC` listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrpcConfig {
    /// Bind address of the `gRPC` listener.
    pub addr: String,
    /// Registry namespace the service registers under.
    pub namespace: String,
    /// Listener protocol (`tcp`, `unix`).
    pub protocol: String,
    /// Server-side TLS descriptor; inheritable from the commons scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,
}

/// Service identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Registry name of this service.
    pub name: String,
}

/// Backend driver selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    /// Directory-service driver (the production default).
    #[default]
    Ldap,
    /// Flat-file driver for demo and test deployments.
    Json,
    /// Relational-storage driver for migrated legacy deployments.
    Sql,
}

impl FromStr for DriverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ldap" => Ok(Self::Ldap),
            "json" => Ok(Self::Json),
            "sql" => Ok(Self::Sql),
            other => Err(anyhow!("invalid users driver '{other}'")),
        }
    }
}

impl DriverKind {
    #[must_use]
    /// Render the driver name as its canonical lowercase string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ldap => "ldap",
            Self::Json => "json",
            Self::Sql => "sql",
        }
    }
}

/// Sub-configuration for each selectable backend driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drivers {
    /// Directory-service driver settings.
    pub ldap: LdapDriver,
    /// Flat-file driver settings.
    pub json: JsonDriver,
    /// Relational-storage driver settings.
    pub sql: SqlDriver,
}

/// Directory-service driver connection and schema settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapDriver {
    /// Directory server URI.
    pub uri: String,
    /// CA certificate used to verify the directory server.
    pub ca_cert: String,
    /// Skip certificate verification.
    pub insecure: bool,
    /// DN the service binds as.
    pub bind_dn: String,
    /// Password for the bind DN; empty until provisioned.
    pub bind_password: String,
    /// Search base for user entries.
    pub user_base_dn: String,
    /// Search base for group entries.
    pub group_base_dn: String,
    /// Search scope for user lookups (`base`, `one`, `sub`).
    pub user_scope: String,
    /// Search scope for group lookups.
    pub group_scope: String,
    /// Substring match mode for user searches (`initial`, `final`, `any`).
    pub user_substring_filter_type: String,
    /// Extra LDAP filter applied to user searches.
    pub user_filter: String,
    /// Extra LDAP filter applied to group searches.
    pub group_filter: String,
    /// Object class identifying user entries.
    pub user_object_class: String,
    /// Object class identifying group entries.
    pub group_object_class: String,
    /// How account disabling is represented (`attribute`, `group`).
    pub disable_user_mechanism: String,
    /// Group DN collecting disabled accounts when the `group` mechanism is
    /// active.
    pub disabled_users_group_dn: String,
    /// Attribute distinguishing member accounts from guests.
    pub user_type_attribute: String,
    /// Identity provider issuer recorded on provisioned users.
    pub idp: String,
    /// Attribute names for user entries.
    pub user_schema: LdapUserSchema,
    /// Attribute names for group entries.
    pub group_schema: LdapGroupSchema,
}

/// Attribute map for user entries in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapUserSchema {
    /// Stable unique identifier attribute.
    pub id: String,
    /// Mail address attribute.
    pub mail: String,
    /// Display name attribute.
    pub display_name: String,
    /// Login name attribute.
    pub username: String,
    /// Account-enabled flag attribute.
    pub enabled: String,
}

/// Attribute map for group entries in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapGroupSchema {
    /// Stable unique identifier attribute.
    pub id: String,
    /// Mail address attribute.
    pub mail: String,
    /// Display name attribute.
    pub display_name: String,
    /// Group name attribute.
    pub group_name: String,
    /// Membership attribute.
    pub member: String,
}

/// Flat-file driver settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDriver {
    /// Path of the JSON user database; empty until configured.
    pub file: String,
}

/// Relational-storage driver settings for legacy deployments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlDriver {
    /// Database account name.
    pub db_username: String,
    /// Database account password; the baseline ships a visibly wrong
    /// placeholder that must be overridden before deployment.
    pub db_password: String,
    /// Database host name.
    pub db_host: String,
    /// Database TCP port.
    pub db_port: u16,
    /// Database name.
    pub db_name: String,
    /// Identity provider issuer recorded on provisioned users.
    pub idp: String,
    /// Fallback numeric uid for accounts without one.
    pub nobody: i64,
    /// Join the username table when resolving accounts.
    pub join_username: bool,
    /// Join the platform-uuid table when resolving accounts.
    pub join_uuid: bool,
    /// Enable medial (infix) search on user names.
    pub enable_medial_search: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_kind_parses_and_formats() {
        assert_eq!(DriverKind::from_str("ldap").unwrap(), DriverKind::Ldap);
        assert_eq!(DriverKind::from_str("json").unwrap(), DriverKind::Json);
        assert_eq!(DriverKind::from_str("sql").unwrap(), DriverKind::Sql);
        assert!(DriverKind::from_str("mongodb").is_err());
        assert_eq!(DriverKind::Ldap.as_str(), "ldap");
        assert_eq!(DriverKind::Json.as_str(), "json");
        assert_eq!(DriverKind::Sql.as_str(), "sql");
    }

    #[test]
    fn driver_kind_serialises_lowercase() {
        let json = serde_json::to_string(&DriverKind::Ldap).expect("driver kind should serialize");
        assert_eq!(json, "\"ldap\"");
        let parsed: DriverKind =
            serde_json::from_str("\"sql\"").expect("lowercase name should deserialize");
        assert_eq!(parsed, DriverKind::Sql);
    }
}
