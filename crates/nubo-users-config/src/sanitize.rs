//! Final normalization pass over a resolved configuration.

use crate::model::Config;

/// Normalize `cfg` after resolution.
///
/// Nothing needs fixing up at the moment; this is the seam where cross-field
/// fixups (path trimming, range clamping) land once a concrete invariant
/// calls for them. Must stay idempotent.
#[allow(clippy::missing_const_for_fn)]
pub fn sanitize(cfg: &mut Config) {
    let _ = cfg;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::full_default_config;

    #[test]
    fn sanitize_is_idempotent() {
        let mut cfg = full_default_config(None);
        sanitize(&mut cfg);
        let once = cfg.clone();
        sanitize(&mut cfg);
        assert_eq!(cfg, once);
    }

    #[test]
    fn sanitize_currently_leaves_the_configuration_untouched() {
        let mut cfg = full_default_config(None);
        let before = cfg.clone();
        sanitize(&mut cfg);
        assert_eq!(cfg, before);
    }
}
