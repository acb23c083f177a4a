//! API versions and per-verb overload tables.
//!
//! Servers report their API level as a `(major, minor)` pair on the coordinator's
//! host record. [`get_api_version`] maps that pair onto [`ApiVersion`]; pairs that
//! name no known release map to [`ApiVersion::Unknown`] instead of failing.
//!
//! Some verbs have grown extra positional parameters over time. An
//! [`OverloadTable`] records, newest first, the arity each release accepts so a
//! call can be trimmed to what the target pool understands.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// XenAPI protocol version, ordered by release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum ApiVersion {
    V1_1,
    V1_2,
    V1_3,
    V1_4,
    V1_5,
    V1_6,
    V1_7,
    V1_8,
    V1_9,
    V1_10,
    V2_0,
    V2_1,
    V2_2,
    V2_3,
    V2_4,
    V2_5,
    V2_6,
    V2_7,
    V2_8,
    V2_9,
    V2_10,
    V2_11,
    V2_12,
    V2_13,
    V2_14,
    V2_15,
    V2_20,
    V2_21,
    /// The newest version this library knows about
    Latest,
    /// The server reported a version this library does not know
    Unknown,
}

struct Release {
    version: ApiVersion,
    major: i64,
    minor: i64,
    codename: &'static str,
    product: &'static str,
}

const RELEASES: &[Release] = &[
    Release { version: ApiVersion::V1_1, major: 1, minor: 1, codename: "rio", product: "XenServer 4.0" },
    Release { version: ApiVersion::V1_2, major: 1, minor: 2, codename: "miami", product: "XenServer 4.1" },
    Release { version: ApiVersion::V1_3, major: 1, minor: 3, codename: "orlando", product: "XenServer 5.0" },
    Release { version: ApiVersion::V1_4, major: 1, minor: 4, codename: "", product: "Unreleased" },
    Release { version: ApiVersion::V1_5, major: 1, minor: 5, codename: "", product: "XenServer 5.0 update 3" },
    Release { version: ApiVersion::V1_6, major: 1, minor: 6, codename: "george", product: "XenServer 5.5" },
    Release { version: ApiVersion::V1_7, major: 1, minor: 7, codename: "midnight-ride", product: "XenServer 5.6" },
    Release { version: ApiVersion::V1_8, major: 1, minor: 8, codename: "cowley", product: "XenServer 5.6 FP1" },
    Release { version: ApiVersion::V1_9, major: 1, minor: 9, codename: "boston", product: "XenServer 6.0" },
    Release { version: ApiVersion::V1_10, major: 1, minor: 10, codename: "tampa", product: "XenServer 6.1" },
    Release { version: ApiVersion::V2_0, major: 2, minor: 0, codename: "clearwater", product: "XenServer 6.2" },
    Release { version: ApiVersion::V2_1, major: 2, minor: 1, codename: "vgpu-productisation", product: "XenServer 6.2 SP1" },
    Release { version: ApiVersion::V2_2, major: 2, minor: 2, codename: "clearwater-felton", product: "XenServer 6.2 SP1 Hotfix 4" },
    Release { version: ApiVersion::V2_3, major: 2, minor: 3, codename: "creedence", product: "XenServer 6.5" },
    Release { version: ApiVersion::V2_4, major: 2, minor: 4, codename: "cream", product: "XenServer 6.5 SP1" },
    Release { version: ApiVersion::V2_5, major: 2, minor: 5, codename: "dundee", product: "XenServer 7.0" },
    Release { version: ApiVersion::V2_6, major: 2, minor: 6, codename: "ely", product: "XenServer 7.1" },
    Release { version: ApiVersion::V2_7, major: 2, minor: 7, codename: "falcon", product: "XenServer 7.2" },
    Release { version: ApiVersion::V2_8, major: 2, minor: 8, codename: "inverness", product: "XenServer 7.3" },
    Release { version: ApiVersion::V2_9, major: 2, minor: 9, codename: "jura", product: "XenServer 7.4" },
    Release { version: ApiVersion::V2_10, major: 2, minor: 10, codename: "kolkata", product: "XenServer 7.5" },
    Release { version: ApiVersion::V2_11, major: 2, minor: 11, codename: "lima", product: "XenServer 7.6" },
    Release { version: ApiVersion::V2_12, major: 2, minor: 12, codename: "naples", product: "Citrix Hypervisor 8.0" },
    Release { version: ApiVersion::V2_13, major: 2, minor: 13, codename: "oslo", product: "Unreleased" },
    Release { version: ApiVersion::V2_14, major: 2, minor: 14, codename: "quebec", product: "Citrix Hypervisor 8.1" },
    Release { version: ApiVersion::V2_15, major: 2, minor: 15, codename: "stockholm", product: "Citrix Hypervisor 8.2" },
    Release { version: ApiVersion::V2_20, major: 2, minor: 20, codename: "nile-preview", product: "XenServer 8 Preview" },
    Release { version: ApiVersion::V2_21, major: 2, minor: 21, codename: "nile", product: "XenServer 8" },
];

// Release names used in per-method documentation that never shipped as their
// own API level.
const RELEASE_ALIASES: &[(&str, ApiVersion)] = &[
    ("vgpu-tech-preview", ApiVersion::V2_0),
    ("1.250.0", ApiVersion::V2_15),
];

/// Map a `(major, minor)` pair onto a known version.
///
/// Pairs that name no known release yield [`ApiVersion::Unknown`].
#[must_use]
pub fn get_api_version(major: i64, minor: i64) -> ApiVersion {
    RELEASES
        .iter()
        .find(|release| release.major == major && release.minor == minor)
        .map_or(ApiVersion::Unknown, |release| release.version)
}

impl ApiVersion {
    /// The newest concrete version.
    pub const NEWEST: Self = Self::V2_21;

    /// Every concrete version, oldest first.
    pub const ALL: &'static [Self] = &[
        Self::V1_1,
        Self::V1_2,
        Self::V1_3,
        Self::V1_4,
        Self::V1_5,
        Self::V1_6,
        Self::V1_7,
        Self::V1_8,
        Self::V1_9,
        Self::V1_10,
        Self::V2_0,
        Self::V2_1,
        Self::V2_2,
        Self::V2_3,
        Self::V2_4,
        Self::V2_5,
        Self::V2_6,
        Self::V2_7,
        Self::V2_8,
        Self::V2_9,
        Self::V2_10,
        Self::V2_11,
        Self::V2_12,
        Self::V2_13,
        Self::V2_14,
        Self::V2_15,
        Self::V2_20,
        Self::V2_21,
    ];

    fn release(self) -> Option<&'static Release> {
        let concrete = if self == Self::Latest { Self::NEWEST } else { self };
        RELEASES.iter().find(|release| release.version == concrete)
    }

    /// `(major, minor)` of a concrete version; `Latest` resolves to the newest.
    #[must_use]
    pub fn parts(self) -> Option<(i64, i64)> {
        self.release().map(|release| (release.major, release.minor))
    }

    /// Release codename, e.g. `"stockholm"`. Empty for releases without one.
    #[must_use]
    pub fn codename(self) -> &'static str {
        self.release().map_or("", |release| release.codename)
    }

    /// Product the version shipped in, e.g. `"Citrix Hypervisor 8.2"`.
    #[must_use]
    pub fn product(self) -> &'static str {
        self.release().map_or("Unknown", |release| release.product)
    }

    /// Version string as sent at login, e.g. `"2.15"`.
    #[must_use]
    pub fn to_wire_string(self) -> String {
        match self {
            Self::Unknown => "Unknown".to_string(),
            version => version
                .parts()
                .map_or_else(String::new, |(major, minor)| format!("{major}.{minor}")),
        }
    }

    /// Returns true for every version except [`ApiVersion::Unknown`].
    #[must_use]
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }

    /// Look up a version by the release name used in method documentation.
    ///
    /// Accepts codenames (`"miami"`), a few pre-release names, and plain
    /// `major.minor` strings.
    #[must_use]
    pub fn from_release_name(name: &str) -> Option<Self> {
        RELEASES
            .iter()
            .filter(|release| !release.codename.is_empty())
            .find(|release| release.codename == name)
            .map(|release| release.version)
            .or_else(|| {
                RELEASE_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == name)
                    .map(|(_, version)| *version)
            })
            .or_else(|| name.parse().ok().filter(|v: &Self| v.is_known()))
    }

    /// Returns true if a server at `self` supports something introduced in `since`.
    ///
    /// An unknown server version is assumed to support everything.
    #[must_use]
    pub fn supports(self, since: Self) -> bool {
        match self {
            Self::Unknown | Self::Latest => true,
            version => version >= since,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("Latest"),
            version => f.write_str(&version.to_wire_string()),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("latest") {
            return Ok(Self::Latest);
        }
        let invalid = || Error::ConfigError(format!("Invalid API version: {s}"));
        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        let major = major.parse().map_err(|_| invalid())?;
        let minor = minor.parse().map_err(|_| invalid())?;
        Ok(get_api_version(major, minor))
    }
}

/// One historical signature of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overload {
    /// First version that accepts this signature
    pub since: ApiVersion,
    /// Positional parameter count, session reference included
    pub arity: usize,
}

impl Overload {
    /// Describe a signature.
    #[must_use]
    pub const fn new(since: ApiVersion, arity: usize) -> Self {
        Self { since, arity }
    }
}

/// The signatures of one verb, newest first.
///
/// Older signatures are prefixes of newer ones: they drop trailing parameters
/// and let the server fill in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverloadTable {
    /// Wire method name, e.g. `"VDI.copy"`
    pub method: &'static str,
    /// Signatures, newest first
    pub overloads: &'static [Overload],
}

impl OverloadTable {
    /// Describe the signatures of `method`.
    #[must_use]
    pub const fn new(method: &'static str, overloads: &'static [Overload]) -> Self {
        Self { method, overloads }
    }

    /// Arity of the current signature.
    #[must_use]
    pub fn preferred(&self) -> usize {
        self.overloads.first().map_or(0, |overload| overload.arity)
    }

    /// Arity to use against a server at `version`.
    ///
    /// `Latest` and `Unknown` get the current signature. Otherwise the newest
    /// signature the server already had is chosen, falling back to the oldest.
    #[must_use]
    pub fn arity_for(&self, version: ApiVersion) -> usize {
        if matches!(version, ApiVersion::Latest | ApiVersion::Unknown) {
            return self.preferred();
        }
        self.overloads
            .iter()
            .find(|overload| overload.since <= version)
            .or_else(|| self.overloads.last())
            .map_or(0, |overload| overload.arity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_api_version_known_pairs() {
        assert_eq!(get_api_version(1, 1), ApiVersion::V1_1);
        assert_eq!(get_api_version(1, 10), ApiVersion::V1_10);
        assert_eq!(get_api_version(2, 15), ApiVersion::V2_15);
        assert_eq!(get_api_version(2, 21), ApiVersion::V2_21);
        for version in ApiVersion::ALL {
            let (major, minor) = version.parts().unwrap();
            assert_eq!(get_api_version(major, minor), *version);
        }
    }

    #[test]
    fn test_get_api_version_unknown_pairs() {
        assert_eq!(get_api_version(2, 16), ApiVersion::Unknown);
        assert_eq!(get_api_version(1, 0), ApiVersion::Unknown);
        assert_eq!(get_api_version(3, 0), ApiVersion::Unknown);
        assert_eq!(get_api_version(-1, 5), ApiVersion::Unknown);
    }

    #[test]
    fn test_versions_are_ordered() {
        assert!(ApiVersion::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(ApiVersion::V1_10 > ApiVersion::V1_9);
        assert!(ApiVersion::V2_0 > ApiVersion::V1_10);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(ApiVersion::V2_15.to_string(), "2.15");
        assert_eq!(ApiVersion::V1_10.to_string(), "1.10");
        assert_eq!(ApiVersion::Latest.to_string(), "Latest");
        assert_eq!(ApiVersion::Unknown.to_string(), "Unknown");
        assert_eq!("2.15".parse::<ApiVersion>().unwrap(), ApiVersion::V2_15);
        assert_eq!("latest".parse::<ApiVersion>().unwrap(), ApiVersion::Latest);
        assert_eq!("9.9".parse::<ApiVersion>().unwrap(), ApiVersion::Unknown);
        assert!("two".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_latest_resolves_to_newest() {
        assert_eq!(ApiVersion::Latest.to_wire_string(), "2.21");
        assert_eq!(ApiVersion::Latest.codename(), "nile");
    }

    #[test]
    fn test_release_metadata() {
        assert_eq!(ApiVersion::V2_15.codename(), "stockholm");
        assert_eq!(ApiVersion::V2_15.product(), "Citrix Hypervisor 8.2");
        assert_eq!(ApiVersion::V1_5.codename(), "");
        assert_eq!(ApiVersion::Unknown.product(), "Unknown");
    }

    #[test]
    fn test_from_release_name() {
        assert_eq!(ApiVersion::from_release_name("rio"), Some(ApiVersion::V1_1));
        assert_eq!(ApiVersion::from_release_name("tampa"), Some(ApiVersion::V1_10));
        assert_eq!(
            ApiVersion::from_release_name("vgpu-tech-preview"),
            Some(ApiVersion::V2_0)
        );
        assert_eq!(ApiVersion::from_release_name("1.250.0"), Some(ApiVersion::V2_15));
        assert_eq!(ApiVersion::from_release_name("2.6"), Some(ApiVersion::V2_6));
        assert_eq!(ApiVersion::from_release_name("atlantis"), None);
        assert_eq!(ApiVersion::from_release_name(""), None);
    }

    #[test]
    fn test_supports() {
        assert!(ApiVersion::V2_15.supports(ApiVersion::V2_5));
        assert!(!ApiVersion::V1_9.supports(ApiVersion::V1_10));
        assert!(ApiVersion::Unknown.supports(ApiVersion::V2_21));
        assert!(ApiVersion::Latest.supports(ApiVersion::V2_21));
    }

    const BOND_CREATE: OverloadTable = OverloadTable::new(
        "Bond.create",
        &[
            Overload::new(ApiVersion::V1_10, 6),
            Overload::new(ApiVersion::V1_9, 5),
            Overload::new(ApiVersion::V1_2, 4),
        ],
    );

    #[test]
    fn test_overload_selection() {
        assert_eq!(BOND_CREATE.preferred(), 6);
        assert_eq!(BOND_CREATE.arity_for(ApiVersion::Latest), 6);
        assert_eq!(BOND_CREATE.arity_for(ApiVersion::Unknown), 6);
        assert_eq!(BOND_CREATE.arity_for(ApiVersion::V2_15), 6);
        assert_eq!(BOND_CREATE.arity_for(ApiVersion::V1_10), 6);
        assert_eq!(BOND_CREATE.arity_for(ApiVersion::V1_9), 5);
        assert_eq!(BOND_CREATE.arity_for(ApiVersion::V1_5), 4);
        assert_eq!(BOND_CREATE.arity_for(ApiVersion::V1_2), 4);
        // Older than every signature: the oldest one is the best guess
        assert_eq!(BOND_CREATE.arity_for(ApiVersion::V1_1), 4);
    }
}
