use crate::error::{Result, TagBumpError};
use std::fmt;
use std::str::FromStr;

/// Prefix of the canonical tag form (`v1.2.3`)
pub const DEFAULT_PREFIX: &str = "v";

/// Semantic version representation
///
/// Ordering is numeric and component-wise, so `v1.10.0` sorts above `v1.9.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    /// Parse a version leniently (e.g., "v1.2.3" -> 1.2.3, "1.2" -> 1.2.0).
    ///
    /// Anything that does not parse yields `0.0.0`; there is no error path.
    pub fn parse(tag: &str) -> Self {
        Self::parse_with_prefix(tag, DEFAULT_PREFIX)
    }

    /// Lenient parse of a tag carrying a custom prefix (e.g., "release-1.4").
    pub fn parse_with_prefix(tag: &str, prefix: &str) -> Self {
        Self::try_parse_with_prefix(tag, prefix).unwrap_or_default()
    }

    /// Strict counterpart of [`Version::parse`]: `None` where `parse` would fall back.
    pub fn try_parse(tag: &str) -> Option<Self> {
        Self::try_parse_with_prefix(tag, DEFAULT_PREFIX)
    }

    /// Accepts one, two or more dot-separated numeric segments after the prefix.
    /// Missing minor/patch segments default to 0 and segments past the third
    /// are ignored.
    pub fn try_parse_with_prefix(tag: &str, prefix: &str) -> Option<Self> {
        let clean_tag = tag.strip_prefix(prefix).unwrap_or(tag);
        let mut parts = clean_tag.split('.');

        let major = parse_segment(parts.next())?;
        let minor = parse_segment(parts.next().or(Some("0")))?;
        let patch = parse_segment(parts.next().or(Some("0")))?;

        Some(Version::new(major, minor, patch))
    }

    /// Bump version according to bump type
    ///
    /// Fails with [`TagBumpError::Overflow`] when the bumped component is
    /// already `u64::MAX`.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow = || TagBumpError::Overflow(*self, bump_type);
        let bumped = match bump_type {
            VersionBump::Major => {
                Version::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            VersionBump::Minor => Version::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            VersionBump::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(bumped)
    }

    /// Render the version as a tag name with the given prefix.
    pub fn to_tag(&self, prefix: &str) -> String {
        format!("{}{}.{}.{}", prefix, self.major, self.minor, self.patch)
    }
}

fn parse_segment(segment: Option<&str>) -> Option<u64> {
    segment?.parse::<u64>().ok()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tag(DEFAULT_PREFIX))
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }
}

impl FromStr for VersionBump {
    type Err = TagBumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(TagBumpError::invalid_bump(other)),
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
