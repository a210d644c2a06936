use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Magento product version, e.g. `2.4.0` or `2.4.3-p1`.
///
/// Patch releases order after their base release and before the next patch version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// `-pN` security patch level, 0 when absent
    pub patch_level: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            patch_level: 0,
        }
    }

    pub const fn with_patch_level(mut self, patch_level: u32) -> Self {
        self.patch_level = patch_level;
        self
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (release, patch_level) = match trimmed.split_once('-') {
            Some((release, suffix)) => {
                let level = suffix
                    .strip_prefix('p')
                    .or_else(|| suffix.strip_prefix('P'))
                    .and_then(|n| n.parse::<u32>().ok())
                    .ok_or_else(|| Error::VersionError(s.to_string()))?;
                (release, level)
            }
            None => (trimmed, 0),
        };

        let parts = release
            .split('.')
            .map(|part| part.parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::VersionError(s.to_string()))?;

        let (major, minor, patch) = match parts.as_slice() {
            [major, minor] => (*major, *minor, 0),
            [major, minor, patch] => (*major, *minor, *patch),
            _ => return Err(Error::VersionError(s.to_string())),
        };

        Ok(Version::new(major, minor, patch).with_patch_level(patch_level))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.patch_level > 0 {
            write!(f, "-p{}", self.patch_level)?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release() {
        let version: Version = "2.4.0".parse().unwrap();
        assert_eq!(version, Version::new(2, 4, 0));
        assert_eq!(version.to_string(), "2.4.0");
    }

    #[test]
    fn test_parse_patch_level() {
        let version: Version = "2.4.3-p1".parse().unwrap();
        assert_eq!(version, Version::new(2, 4, 3).with_patch_level(1));
        assert_eq!(version.to_string(), "2.4.3-p1");
    }

    #[test]
    fn test_two_part_version() {
        let version: Version = "2.3".parse().unwrap();
        assert_eq!(version, Version::new(2, 3, 0));
    }

    #[test]
    fn test_ordering() {
        let v = |s: &str| s.parse::<Version>().unwrap();
        assert!(v("2.3.7") < v("2.4.0"));
        assert!(v("2.4.3") < v("2.4.3-p1"));
        assert!(v("2.4.3-p2") < v("2.4.4"));
        assert!(v("2.4.10") > v("2.4.9"));
    }

    #[test]
    fn test_invalid_versions() {
        assert!("".parse::<Version>().is_err());
        assert!("2".parse::<Version>().is_err());
        assert!("2.4.x".parse::<Version>().is_err());
        assert!("2.4.3-beta".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let version = Version::new(2, 4, 5).with_patch_level(3);
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, r#""2.4.5-p3""#);
        let parsed: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, version);
    }
}
