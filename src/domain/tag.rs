use crate::boundary::BoundaryWarning;
use crate::domain::Version;
use tracing::debug;

/// Parse a raw tag into a version.
///
/// Malformed tags are reported at debug level and yield `None`; they never
/// abort the computation.
pub fn parse_version_tag(tag: &str) -> Option<Version> {
    match Version::parse(tag) {
        Ok(version) => Some(version),
        Err(e) => {
            let warning = BoundaryWarning::SkippedTag {
                tag: tag.to_string(),
                reason: e.to_string(),
            };
            debug!("{}", warning);
            None
        }
    }
}

/// Highest version named by any well-formed tag, or `v0.0.0` when none exist.
pub fn current_version<I, S>(tags: I) -> Version
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| parse_version_tag(tag.as_ref()))
        .max()
        .unwrap_or_else(Version::initial)
}

/// First tag (in iteration order) whose parsed version equals `version`.
pub fn find_tag_for_version<'a, I>(tags: I, version: &Version) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    tags.into_iter()
        .map(String::as_str)
        .find(|tag| Version::parse(tag).ok().as_ref() == Some(version))
}
