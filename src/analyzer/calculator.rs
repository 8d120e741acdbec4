use crate::analyzer::classifier::ClassificationCounters;
use crate::domain::{BumpClass, Version};
use crate::error::Result;

/// Derive the bump class and next version from the classification totals.
///
/// Consumes the counters; a later run must classify its own commits afresh.
/// The result is never lower than `current`, and equal only for
/// `BumpClass::None`.
pub fn next_version(
    current: Version,
    counters: ClassificationCounters,
) -> Result<(Version, BumpClass)> {
    let bump = counters.bump_class();
    let next = current.bump(bump)?;
    Ok((next, bump))
}
