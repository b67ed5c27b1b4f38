//! Typed model of the package-index manifest.
//!
//! Only the fields this tool reads or rewrites are modeled explicitly. Every
//! struct carries a flattened map of leftover keys so a load -> save round
//! trip never drops data the registry format defines but we do not touch.
//! Absent fields stay absent: scalars are `Option<String>` and the nested
//! arrays are `Option<Vec<_>>`, so a manifest without a `tools` array is not
//! rewritten with an empty one.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root of the manifest document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<Package>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named grouping of platforms and tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<Platform>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A board-support entry with an archive size/checksum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        rename = "archiveFileName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub archive_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boards: Option<Vec<Board>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An associated board name; read-only in this system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A cross-host utility entry, specialized per host via systems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systems: Option<Vec<System>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A host-specific variant of a tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct System {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        rename = "archiveFileName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub archive_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Packages in document order, empty when the key is absent.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter().flatten()
    }
}

impl Package {
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().flatten()
    }

    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter().flatten()
    }
}

impl Tool {
    pub fn systems(&self) -> impl Iterator<Item = &System> {
        self.systems.iter().flatten()
    }
}
