//! Locating and mutating manifest entries.
//!
//! Matching is exact string equality on entry names (and host triples), no
//! case folding or prefix matching. Update functions return one record per
//! applied change; an empty return means nothing matched, which callers must
//! treat as failed intent rather than an error here.
use crate::manifest::{Manifest, Platform, Tool};

/// Platform name the platform updater targets by default.
pub const DEFAULT_PLATFORM: &str = "WebSim AVR Boards";
/// Tool name the tool updater targets by default.
pub const DEFAULT_TOOL: &str = "webuploader";

/// One applied platform update, with context for operator-facing output.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformUpdate {
    pub name: String,
    pub version: Option<String>,
    pub architecture: Option<String>,
    pub url: Option<String>,
    pub old_size: Option<String>,
    pub old_checksum: Option<String>,
    pub new_size: String,
    pub new_checksum: String,
}

/// One applied system update under a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemUpdate {
    pub tool: String,
    pub host: Option<String>,
    pub old_size: Option<String>,
    pub old_checksum: Option<String>,
    pub new_size: String,
    pub new_checksum: String,
}

/// One row of the flattened platform listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformRow {
    pub package: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub architecture: Option<String>,
}

/// Platforms whose name equals `name`, across all packages, document order.
pub fn find_platforms<'a>(manifest: &'a Manifest, name: &str) -> Vec<&'a Platform> {
    manifest
        .packages()
        .flat_map(|package| package.platforms())
        .filter(|platform| platform.name.as_deref() == Some(name))
        .collect()
}

/// Tools whose name equals `name`, across all packages, document order.
pub fn find_tools<'a>(manifest: &'a Manifest, name: &str) -> Vec<&'a Tool> {
    manifest
        .packages()
        .flat_map(|package| package.tools())
        .filter(|tool| tool.name.as_deref() == Some(name))
        .collect()
}

/// Overwrite `size`/`checksum` on every platform named `name`.
pub fn update_platforms(
    manifest: &mut Manifest,
    name: &str,
    new_size: &str,
    new_checksum: &str,
) -> Vec<PlatformUpdate> {
    let mut updates = Vec::new();
    for package in manifest.packages.iter_mut().flatten() {
        for platform in package.platforms.iter_mut().flatten() {
            if platform.name.as_deref() != Some(name) {
                continue;
            }
            let old_size = platform.size.replace(new_size.to_string());
            let old_checksum = platform.checksum.replace(new_checksum.to_string());
            updates.push(PlatformUpdate {
                name: name.to_string(),
                version: platform.version.clone(),
                architecture: platform.architecture.clone(),
                url: platform.url.clone(),
                old_size,
                old_checksum,
                new_size: new_size.to_string(),
                new_checksum: new_checksum.to_string(),
            });
        }
    }
    tracing::debug!(name, count = updates.len(), "platform update pass");
    updates
}

/// Overwrite `size`/`checksum` on every system under every tool named `name`.
///
/// With a host filter, only systems whose `host` equals the filter are
/// touched; without one, every system under a matching tool is updated.
pub fn update_tool_systems(
    manifest: &mut Manifest,
    name: &str,
    new_size: &str,
    new_checksum: &str,
    host_filter: Option<&str>,
) -> Vec<SystemUpdate> {
    let mut updates = Vec::new();
    for package in manifest.packages.iter_mut().flatten() {
        for tool in package.tools.iter_mut().flatten() {
            if tool.name.as_deref() != Some(name) {
                continue;
            }
            for system in tool.systems.iter_mut().flatten() {
                if let Some(host) = host_filter {
                    if system.host.as_deref() != Some(host) {
                        continue;
                    }
                }
                let old_size = system.size.replace(new_size.to_string());
                let old_checksum = system.checksum.replace(new_checksum.to_string());
                updates.push(SystemUpdate {
                    tool: name.to_string(),
                    host: system.host.clone(),
                    old_size,
                    old_checksum,
                    new_size: new_size.to_string(),
                    new_checksum: new_checksum.to_string(),
                });
            }
        }
    }
    tracing::debug!(name, ?host_filter, count = updates.len(), "tool update pass");
    updates
}

/// Convenience alias for the default uploader tool.
pub fn update_webuploader(
    manifest: &mut Manifest,
    new_size: &str,
    new_checksum: &str,
    host_filter: Option<&str>,
) -> Vec<SystemUpdate> {
    update_tool_systems(manifest, DEFAULT_TOOL, new_size, new_checksum, host_filter)
}

/// Flatten all packages' platforms for display, preserving document order.
pub fn list_platforms(manifest: &Manifest) -> Vec<PlatformRow> {
    let mut rows = Vec::new();
    for package in manifest.packages() {
        for platform in package.platforms() {
            rows.push(PlatformRow {
                package: package.name.clone(),
                name: platform.name.clone(),
                version: platform.version.clone(),
                architecture: platform.architecture.clone(),
            });
        }
    }
    rows
}
