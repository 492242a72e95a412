//! Literal baseline defaults and the full-config assembly pipeline.
//!
//! # Design
//! - [`default_config`] is a pure function of no arguments: every field is a
//!   literal, so two calls always agree and nothing external is read.
//! - Bind addresses are loopback-only until explicitly overridden.
//! - Secret fields are empty, except the legacy SQL password which ships a
//!   visibly wrong placeholder so an unchanged deployment fails loudly.

use tracing::debug;

use nubo_shared::{Commons, base_data_path, default_gateway_config};

use crate::model::{
    Config, Debug, DriverKind, Drivers, GrpcConfig, JsonDriver, LdapDriver, LdapGroupSchema,
    LdapUserSchema, Service, SqlDriver,
};
use crate::resolve::ensure_defaults;
use crate::sanitize::sanitize;

const DEFAULT_GRPC_ADDR: &str = "127.0.0.1:9144";
const DEFAULT_DEBUG_ADDR: &str = "127.0.0.1:9145";
const DEFAULT_IDM_URI: &str = "ldaps://localhost:9235";
const DEFAULT_IDP_URL: &str = "https://localhost:9200";
const IDM_ORG: &str = "o=nubo-idm";

/// Build the baseline configuration for the users service.
///
/// The gateway descriptor carries its platform-wide default; the remaining
/// inheritable sections (log, tracing, token manager, `gRPC` TLS) are
/// deliberately left unset here so [`ensure_defaults`] decides their
/// provenance.
#[must_use]
pub fn default_config() -> Config {
    Config {
        debug: Debug {
            addr: DEFAULT_DEBUG_ADDR.to_string(),
            token: String::new(),
            pprof: false,
            zpages: false,
        },
        grpc: GrpcConfig {
            addr: DEFAULT_GRPC_ADDR.to_string(),
            namespace: "com.nubo.api".to_string(),
            protocol: "tcp".to_string(),
            tls: None,
        },
        service: Service {
            name: "users".to_string(),
        },
        gateway: Some(default_gateway_config()),
        token_manager: None,
        log: None,
        tracing: None,
        driver: DriverKind::Ldap,
        drivers: Drivers {
            ldap: LdapDriver {
                uri: DEFAULT_IDM_URI.to_string(),
                ca_cert: base_data_path()
                    .join("idm")
                    .join("ldap.crt")
                    .display()
                    .to_string(),
                insecure: false,
                bind_dn: format!("uid=svcuser,ou=sysusers,{IDM_ORG}"),
                bind_password: String::new(),
                user_base_dn: format!("ou=users,{IDM_ORG}"),
                group_base_dn: format!("ou=groups,{IDM_ORG}"),
                user_scope: "sub".to_string(),
                group_scope: "sub".to_string(),
                user_substring_filter_type: "any".to_string(),
                user_filter: String::new(),
                group_filter: String::new(),
                user_object_class: "inetOrgPerson".to_string(),
                group_object_class: "groupOfNames".to_string(),
                disable_user_mechanism: "attribute".to_string(),
                disabled_users_group_dn: format!("cn=DisabledUsersGroup,ou=groups,{IDM_ORG}"),
                user_type_attribute: "nuboUserType".to_string(),
                idp: DEFAULT_IDP_URL.to_string(),
                user_schema: LdapUserSchema {
                    id: "nubouuid".to_string(),
                    mail: "mail".to_string(),
                    display_name: "displayname".to_string(),
                    username: "uid".to_string(),
                    enabled: "nubouserenabled".to_string(),
                },
                group_schema: LdapGroupSchema {
                    id: "nubouuid".to_string(),
                    mail: "mail".to_string(),
                    display_name: "cn".to_string(),
                    group_name: "cn".to_string(),
                    member: "member".to_string(),
                },
            },
            json: JsonDriver::default(),
            sql: SqlDriver {
                db_username: "nubo".to_string(),
                db_password: "secret".to_string(),
                db_host: "mysql".to_string(),
                db_port: 3306,
                db_name: "nubo".to_string(),
                idp: DEFAULT_IDP_URL.to_string(),
                nobody: 90,
                join_username: false,
                join_uuid: false,
                enable_medial_search: false,
            },
        },
    }
}

/// Assemble a ready-to-use configuration: baseline, then commons
/// inheritance, then sanitization.
///
/// Total over its input; a missing commons scope degrades to zero-value
/// sections rather than failing.
#[must_use]
pub fn full_default_config(commons: Option<&Commons>) -> Config {
    let mut cfg = default_config();
    ensure_defaults(&mut cfg, commons);
    sanitize(&mut cfg);
    if let Ok(rendered) = serde_json::to_string_pretty(&cfg) {
        debug!(service = %cfg.service.name, "assembled configuration:\n{rendered}");
    }
    cfg
}
