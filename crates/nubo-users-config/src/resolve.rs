//! Commons-scope inheritance for unset configuration sections.
//!
//! # Design
//! - One generic coalesce covers every inheritable section instead of a
//!   hand-rolled nil-check/copy/zero triple per field.
//! - Inheritance is always a value copy (`Clone`); the commons scope is
//!   never mutated and never aliased into the resolved configuration.

use tracing::trace;

use nubo_shared::Commons;

use crate::model::Config;

/// Fill `local` from `shared` unless it is already set.
///
/// An explicitly set section always wins. Otherwise the shared value is
/// deep-copied; when neither side provides the section, its zero value is
/// installed so downstream code never dereferences a missing section.
pub fn coalesce_section<T: Clone + Default>(name: &str, local: &mut Option<T>, shared: Option<&T>) {
    if local.is_some() {
        return;
    }
    *local = Some(shared.map_or_else(
        || {
            trace!(section = name, "no shared value; installing zero section");
            T::default()
        },
        |value| {
            trace!(section = name, "inheriting section from commons scope");
            value.clone()
        },
    ));
}

/// Resolve the inheritable sections of `cfg` against an optional commons
/// scope.
///
/// Covers exactly the sections a deployment provisions once and shares:
/// logging, tracing, gateway descriptor, token manager, and the `gRPC` TLS
/// descriptor. Total over its inputs: with no commons scope every unset
/// section falls back to its zero value. Sections are independent, so
/// processing order carries no meaning.
pub fn ensure_defaults(cfg: &mut Config, commons: Option<&Commons>) {
    coalesce_section("log", &mut cfg.log, commons.and_then(|c| c.log.as_ref()));
    coalesce_section(
        "tracing",
        &mut cfg.tracing,
        commons.and_then(|c| c.tracing.as_ref()),
    );
    coalesce_section(
        "gateway",
        &mut cfg.gateway,
        commons.and_then(|c| c.gateway.as_ref()),
    );
    coalesce_section(
        "token_manager",
        &mut cfg.token_manager,
        commons.and_then(|c| c.token_manager.as_ref()),
    );
    coalesce_section(
        "grpc_tls",
        &mut cfg.grpc.tls,
        commons.and_then(|c| c.grpc_service_tls.as_ref()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_config;
    use nubo_shared::{Log, TlsConfig, TokenManager, Tracing};

    fn sample_commons() -> Commons {
        Commons {
            log: Some(Log {
                level: "debug".to_string(),
                pretty: true,
                color: true,
                file: "/var/log/nubo.log".to_string(),
            }),
            tracing: Some(Tracing {
                enabled: true,
                kind: "jaeger".to_string(),
                endpoint: "localhost:6831".to_string(),
                collector: String::new(),
            }),
            token_manager: Some(TokenManager {
                jwt_secret: "deployment-wide-secret".to_string(),
            }),
            gateway: None,
            grpc_service_tls: Some(TlsConfig {
                enabled: true,
                cert: "/etc/nubo/grpc.crt".to_string(),
                key: "/etc/nubo/grpc.key".to_string(),
                ca_cert: "/etc/nubo/ca.crt".to_string(),
            }),
        }
    }

    #[test]
    fn unset_sections_inherit_from_commons() {
        let mut cfg = default_config();
        let commons = sample_commons();
        ensure_defaults(&mut cfg, Some(&commons));

        assert_eq!(cfg.log.as_ref(), commons.log.as_ref());
        assert_eq!(cfg.tracing.as_ref(), commons.tracing.as_ref());
        assert_eq!(cfg.token_manager.as_ref(), commons.token_manager.as_ref());
        assert_eq!(cfg.grpc.tls.as_ref(), commons.grpc_service_tls.as_ref());
    }

    #[test]
    fn explicit_local_sections_always_win() {
        let mut cfg = default_config();
        cfg.log = Some(Log {
            level: "error".to_string(),
            pretty: false,
            color: false,
            file: String::new(),
        });
        ensure_defaults(&mut cfg, Some(&sample_commons()));

        let log = cfg.log.expect("log section must survive resolution");
        assert_eq!(
            log.level, "error",
            "a locally set section must not be overwritten by commons"
        );
    }

    #[test]
    fn missing_commons_installs_zero_sections() {
        let mut cfg = default_config();
        cfg.gateway = None;
        ensure_defaults(&mut cfg, None);

        assert_eq!(cfg.log, Some(Log::default()));
        assert_eq!(cfg.tracing, Some(Tracing::default()));
        assert_eq!(cfg.gateway, Some(nubo_shared::Gateway::default()));
        assert_eq!(cfg.token_manager, Some(TokenManager::default()));
        assert_eq!(cfg.grpc.tls, Some(TlsConfig::default()));
    }

    #[test]
    fn missing_commons_section_falls_back_to_zero() {
        // Commons is present but does not provision a gateway descriptor.
        let mut cfg = default_config();
        cfg.gateway = None;
        ensure_defaults(&mut cfg, Some(&sample_commons()));

        assert_eq!(cfg.gateway, Some(nubo_shared::Gateway::default()));
    }

    #[test]
    fn inherited_sections_are_value_copies() {
        let mut cfg = default_config();
        let commons = sample_commons();
        ensure_defaults(&mut cfg, Some(&commons));

        if let Some(log) = cfg.log.as_mut() {
            log.level = "trace".to_string();
        }

        assert_eq!(
            commons.log.as_ref().map(|log| log.level.as_str()),
            Some("debug"),
            "mutating the resolved section must not reach back into commons"
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut cfg = default_config();
        let commons = sample_commons();
        ensure_defaults(&mut cfg, Some(&commons));
        let once = cfg.clone();
        ensure_defaults(&mut cfg, Some(&commons));
        assert_eq!(cfg, once);
    }

    #[test]
    fn mixed_provenance_scenario() {
        // Logging comes from commons, tracing stays local even though
        // commons defines one too.
        let mut cfg = default_config();
        cfg.tracing = Some(Tracing {
            enabled: true,
            kind: String::new(),
            endpoint: String::new(),
            collector: String::new(),
        });
        ensure_defaults(&mut cfg, Some(&sample_commons()));

        assert_eq!(
            cfg.log.as_ref().map(|log| log.level.as_str()),
            Some("debug")
        );
        let tracing = cfg.tracing.expect("tracing section must be present");
        assert!(tracing.enabled);
        assert!(
            tracing.kind.is_empty(),
            "the local tracing section must be kept verbatim"
        );
    }
}
