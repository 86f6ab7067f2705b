//! Version parsing and numeric encoding

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::VersionError;

lazy_static! {
    // `[0-9]` rather than `\d`, which is Unicode-aware in the regex crate.
    static ref VERSION_RE: Regex = Regex::new(
        r"^(?P<major>[0-9]{1,2})\.(?P<minor>[0-9]{1,2})\.(?P<patch>[0-9]{1,2})(?:-(?P<release>[^+]+))?(?:\+(?P<metadata>.+))?$"
    ).unwrap();
}

/// Pack major, minor and patch into a single orderable number.
///
/// Each component is at most 99, so the base-100 digits never overlap.
pub const fn encode(major: u32, minor: u32, patch: u32) -> u32 {
    major * 10000 + minor * 100 + patch
}

/// A parsed `MAJOR.MINOR.PATCH[-RELEASE][+METADATA]` version.
///
/// Equality through `==` is structural and includes the raw text. Use
/// [`Version::compare`] or [`Version::cmp_number`] for the numeric ordering,
/// which ignores release and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    raw: String,
    major: u32,
    minor: u32,
    patch: u32,
    release: Option<String>,
    metadata: Option<String>,
}

impl Version {
    /// Parse a version string, requiring the whole input to match the grammar.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let caps = VERSION_RE
            .captures(version)
            .ok_or_else(|| VersionError::invalid_version(version))?;

        let number = |name: &str| -> Result<u32, VersionError> {
            caps.name(name)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(|| VersionError::invalid_version(version))
        };
        // A lone "0" counts as blank, like an empty capture
        let text = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty() && *s != "0")
                .map(str::to_string)
        };

        Ok(Version {
            raw: version.to_string(),
            major: number("major")?,
            minor: number("minor")?,
            patch: number("patch")?,
            release: text("release"),
            metadata: text("metadata"),
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Pre-release qualifier, the text between `-` and the first `+`
    pub fn release(&self) -> Option<&str> {
        self.release.as_deref()
    }

    /// Build metadata, everything after the first `+`
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// The input string exactly as it was parsed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_prerelease(&self) -> bool {
        self.release.is_some()
    }

    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }

    /// Encoded number of this version, see [`encode`]
    pub fn to_number(&self) -> u32 {
        encode(self.major, self.minor, self.patch)
    }

    /// Order two versions by their encoded numbers
    pub fn cmp_number(&self, other: &Version) -> Ordering {
        self.to_number().cmp(&other.to_number())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Version::parse(&value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl serde::de::Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a MAJOR.MINOR.PATCH[-RELEASE][+METADATA] version string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Version, E> {
                Version::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
