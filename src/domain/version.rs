use crate::error::{NextverError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic version, always rendered as `vMAJOR.MINOR.PATCH`.
///
/// Ordering is lexicographic on (major, minor, patch), which is what the
/// derived `Ord` gives for the field order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// The version assumed when a repository has no version tags.
    pub fn initial() -> Self {
        Version::default()
    }

    /// Parse version from a tag string (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// A single leading `v` or `V` is accepted. The remainder must be exactly
    /// three dot-separated decimal components without sign or leading zeros.
    pub fn parse(tag: &str) -> Result<Self> {
        let clean_tag = tag
            .strip_prefix('v')
            .or_else(|| tag.strip_prefix('V'))
            .unwrap_or(tag);

        let parts: Vec<&str> = clean_tag.split('.').collect();
        if parts.len() != 3 {
            return Err(NextverError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                tag
            )));
        }

        let major = parse_component(parts[0], "major", tag)?;
        let minor = parse_component(parts[1], "minor", tag)?;
        let patch = parse_component(parts[2], "patch", tag)?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump class
    ///
    /// `BumpClass::None` returns the version unchanged.
    pub fn bump(&self, bump: BumpClass) -> Result<Self> {
        let overflow = |component: &str| {
            NextverError::version(format!("{} component of {} overflows", component, self))
        };

        let bumped = match bump {
            BumpClass::Major => Version {
                major: self.major.checked_add(1).ok_or_else(|| overflow("major"))?,
                minor: 0,
                patch: 0,
            },
            BumpClass::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(|| overflow("minor"))?,
                patch: 0,
            },
            BumpClass::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(|| overflow("patch"))?,
            },
            BumpClass::None => *self,
        };
        Ok(bumped)
    }
}

fn parse_component(raw: &str, name: &str, tag: &str) -> Result<u64> {
    let well_formed = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));
    if !well_formed {
        return Err(NextverError::version(format!(
            "Invalid {} version '{}' in '{}'",
            name, raw, tag
        )));
    }

    raw.parse::<u64>().map_err(|_| {
        NextverError::version(format!("{} version '{}' in '{}' is too large", name, raw, tag))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = NextverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = NextverError;

    fn try_from(value: String) -> Result<Self> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

/// Severity tier of a release.
///
/// Variants are declared in ascending severity so the derived ordering gives
/// `None < Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum BumpClass {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl fmt::Display for BumpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpClass::None => "None",
            BumpClass::Patch => "Patch",
            BumpClass::Minor => "Minor",
            BumpClass::Major => "Major",
        };
        f.write_str(name)
    }
}
