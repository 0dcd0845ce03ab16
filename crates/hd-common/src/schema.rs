//! Schema versioning for report payloads.

/// Schema version embedded in JSON report payloads.
///
/// Bump the major component when the payload shape changes incompatibly.
pub const SCHEMA_VERSION: &str = "1.0.0";
