use crate::pipeline::error::SemanticError;

/// Schema version this consumer understands.
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

// ============================================================================
// Interop version policy for UI dump bundles
// ============================================================================

/// Whether a bundle's `schemaVersion` can be consumed.
///
/// Same MAJOR is accepted regardless of MINOR. A higher MAJOR is rejected
/// unless `allow_higher_major` is set. Unparseable versions are rejected.
pub fn is_compatible(bundle_version: &str, allow_higher_major: bool) -> bool {
    let Some((bundle_major, _)) = parse_major_minor(bundle_version) else {
        return false;
    };
    let Some((current_major, _)) = parse_major_minor(CURRENT_SCHEMA_VERSION) else {
        return false;
    };

    if bundle_major > current_major {
        return allow_higher_major;
    }

    bundle_major == current_major
}

/// Gate used by the bundle reader; errors carry the offending version.
pub fn check(bundle_version: &str, allow_higher_major: bool) -> Result<(), SemanticError> {
    if is_compatible(bundle_version, allow_higher_major) {
        Ok(())
    } else {
        Err(SemanticError::IncompatibleVersion {
            found: bundle_version.to_string(),
        })
    }
}

fn parse_major_minor(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.trim().split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some((major, minor))
}
