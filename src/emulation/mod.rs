//! Browser emulation: the profile registry and fingerprint tags.
//!
//! Each registered profile maps an identifier (family + major version, e.g.
//! `chrome_142`) to the fingerprint tag consumed by the transport engine and
//! the ordered default header set applied beneath caller headers. The
//! registry is a static table: populated at compile time, never mutated, so
//! concurrent resolution needs no locking.

pub mod profiles;

use crate::base::error::RequestError;
use crate::http::Headers;
use std::fmt;

/// Opaque fingerprint identifier handed to the transport engine. The engine
/// maps it to concrete TLS/H2 parameters; this crate only carries it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FingerprintTag(&'static str);

impl FingerprintTag {
    /// The tag as a string, e.g. `chrome/142`.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FingerprintTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Browser family of a registered profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserFamily {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

/// A registered browser profile.
#[derive(Debug, Clone, Copy)]
pub struct BrowserProfile {
    id: &'static str,
    family: BrowserFamily,
    version: &'static str,
    fingerprint: FingerprintTag,
}

impl BrowserProfile {
    /// Profile identifier, e.g. `chrome_142`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Browser family.
    pub fn family(&self) -> BrowserFamily {
        self.family
    }

    /// Full browser version used in the User-Agent string.
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Fingerprint tag for the transport engine.
    pub fn fingerprint(&self) -> FingerprintTag {
        self.fingerprint
    }

    /// Build the ordered default header set for this profile.
    pub fn default_headers(&self) -> Headers {
        match self.family {
            BrowserFamily::Chrome => profiles::chrome::default_headers(self.version),
            BrowserFamily::Edge => profiles::edge::default_headers(self.version),
            BrowserFamily::Firefox => profiles::firefox::default_headers(self.version),
            BrowserFamily::Safari => profiles::safari::default_headers(self.version),
        }
    }
}

/// Static profile table. Registration order is the order reported by
/// [`profile_names`].
static REGISTRY: &[BrowserProfile] = &[
    BrowserProfile {
        id: "chrome_124",
        family: BrowserFamily::Chrome,
        version: "124.0.0.0",
        fingerprint: FingerprintTag("chrome/124"),
    },
    BrowserProfile {
        id: "chrome_128",
        family: BrowserFamily::Chrome,
        version: "128.0.0.0",
        fingerprint: FingerprintTag("chrome/128"),
    },
    BrowserProfile {
        id: "chrome_131",
        family: BrowserFamily::Chrome,
        version: "131.0.0.0",
        fingerprint: FingerprintTag("chrome/131"),
    },
    BrowserProfile {
        id: "chrome_135",
        family: BrowserFamily::Chrome,
        version: "135.0.0.0",
        fingerprint: FingerprintTag("chrome/135"),
    },
    BrowserProfile {
        id: "chrome_140",
        family: BrowserFamily::Chrome,
        version: "140.0.0.0",
        fingerprint: FingerprintTag("chrome/140"),
    },
    BrowserProfile {
        id: "chrome_142",
        family: BrowserFamily::Chrome,
        version: "142.0.0.0",
        fingerprint: FingerprintTag("chrome/142"),
    },
    BrowserProfile {
        id: "edge_127",
        family: BrowserFamily::Edge,
        version: "127.0.0.0",
        fingerprint: FingerprintTag("edge/127"),
    },
    BrowserProfile {
        id: "firefox_128",
        family: BrowserFamily::Firefox,
        version: "128.0",
        fingerprint: FingerprintTag("firefox/128"),
    },
    BrowserProfile {
        id: "firefox_133",
        family: BrowserFamily::Firefox,
        version: "133.0",
        fingerprint: FingerprintTag("firefox/133"),
    },
    BrowserProfile {
        id: "firefox_139",
        family: BrowserFamily::Firefox,
        version: "139.0",
        fingerprint: FingerprintTag("firefox/139"),
    },
    BrowserProfile {
        id: "safari_17",
        family: BrowserFamily::Safari,
        version: "17.4",
        fingerprint: FingerprintTag("safari/17"),
    },
    BrowserProfile {
        id: "safari_18",
        family: BrowserFamily::Safari,
        version: "18.0",
        fingerprint: FingerprintTag("safari/18"),
    },
];

/// Resolve a profile identifier. Exact, case-sensitive match.
pub fn resolve(id: &str) -> Result<&'static BrowserProfile, RequestError> {
    REGISTRY
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| RequestError::UnknownProfile(id.to_string()))
}

/// All registered profile identifiers in registration order.
pub fn profile_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|p| p.id).collect()
}
