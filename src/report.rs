//! Human-readable reports over the manifest.
//!
//! Everything here builds plain strings so the binaries own all printing and
//! tests can assert on report content directly.
use crate::manifest::Manifest;
use crate::update::{PlatformRow, PlatformUpdate, SystemUpdate};

/// Current values of platforms, optionally restricted to one name.
///
/// An unmatched name produces a "not found" notice in the report, not an
/// error; display is read-only and zero matches is a legitimate answer.
pub fn platform_report(manifest: &Manifest, name: Option<&str>) -> String {
    let mut out = String::new();
    match name {
        Some(name) => push_line(&mut out, &format!("=== Current Platform Values: {name} ===")),
        None => push_line(&mut out, "=== Current Values for All Platforms ==="),
    }

    let mut found = false;
    for package in manifest.packages() {
        push_line(&mut out, &format!("Package: {}", or_na(&package.name)));
        for platform in package.platforms() {
            if let Some(name) = name {
                if platform.name.as_deref() != Some(name) {
                    continue;
                }
            }
            found = true;
            push_line(&mut out, &format!("  Platform: {}", or_na(&platform.name)));
            push_line(&mut out, &format!("    Version: {}", or_na(&platform.version)));
            push_line(
                &mut out,
                &format!("    Architecture: {}", or_na(&platform.architecture)),
            );
            push_line(&mut out, &format!("    Category: {}", or_na(&platform.category)));
            push_line(&mut out, &format!("    Size: {}", or_na(&platform.size)));
            push_line(&mut out, &format!("    Checksum: {}", or_na(&platform.checksum)));
            push_line(&mut out, &format!("    URL: {}", or_na(&platform.url)));
            push_line(
                &mut out,
                &format!("    Archive: {}", or_na(&platform.archive_file_name)),
            );
            let boards: Vec<&str> = platform
                .boards
                .iter()
                .flatten()
                .map(|board| board.name.as_deref().unwrap_or("N/A"))
                .collect();
            if !boards.is_empty() {
                push_line(&mut out, &format!("    Boards: {}", boards.join(", ")));
            }
            out.push('\n');
        }
    }

    if !found {
        match name {
            Some(name) => push_line(
                &mut out,
                &format!("Warning: platform '{name}' not found in the manifest."),
            ),
            None => push_line(&mut out, "Warning: no platforms found in the manifest."),
        }
    }
    out
}

/// Current values of tools and their per-host systems, optionally one name.
pub fn tool_report(manifest: &Manifest, name: Option<&str>) -> String {
    let mut out = String::new();
    match name {
        Some(name) => push_line(&mut out, &format!("=== Current Tool Values: {name} ===")),
        None => push_line(&mut out, "=== Current Values for All Tools ==="),
    }

    let mut found = false;
    for package in manifest.packages() {
        for tool in package.tools() {
            if let Some(name) = name {
                if tool.name.as_deref() != Some(name) {
                    continue;
                }
            }
            found = true;
            push_line(
                &mut out,
                &format!("Tool: {} v{}", or_na(&tool.name), or_na(&tool.version)),
            );
            for system in tool.systems() {
                push_line(&mut out, &format!("  Host: {}", or_na(&system.host)));
                push_line(&mut out, &format!("  Size: {}", or_na(&system.size)));
                push_line(&mut out, &format!("  Checksum: {}", or_na(&system.checksum)));
                push_line(&mut out, &format!("  URL: {}", or_na(&system.url)));
                out.push('\n');
            }
        }
    }

    if !found {
        match name {
            Some(name) => push_line(
                &mut out,
                &format!("Warning: tool '{name}' not found in the manifest."),
            ),
            None => push_line(&mut out, "Warning: no tools found in the manifest."),
        }
    }
    out
}

/// Flat listing of every platform, one bullet per entry plus a total.
pub fn platform_listing(rows: &[PlatformRow]) -> String {
    let mut out = String::new();
    push_line(&mut out, "=== Available Platforms ===");
    for row in rows {
        push_line(
            &mut out,
            &format!(
                "  - {} (v{}) - {} - Package: {}",
                or_na(&row.name),
                or_na(&row.version),
                or_na(&row.architecture),
                or_na(&row.package)
            ),
        );
    }
    if rows.is_empty() {
        push_line(&mut out, "Warning: no platforms found in the manifest.");
    }
    out.push('\n');
    push_line(&mut out, &format!("Total: {} platform(s)", rows.len()));
    out
}

/// Per-match lines for applied platform updates, old -> new.
pub fn render_platform_updates(updates: &[PlatformUpdate]) -> String {
    let mut out = String::new();
    for update in updates {
        push_line(&mut out, &format!("Platform: {}", update.name));
        push_line(&mut out, &format!("  Version: {}", or_na(&update.version)));
        push_line(
            &mut out,
            &format!("  Architecture: {}", or_na(&update.architecture)),
        );
        push_line(
            &mut out,
            &format!("  Size: {} -> {}", or_na(&update.old_size), update.new_size),
        );
        push_line(
            &mut out,
            &format!(
                "  Checksum: {} -> {}",
                or_na(&update.old_checksum),
                update.new_checksum
            ),
        );
        push_line(&mut out, &format!("  URL: {}", or_na(&update.url)));
        out.push('\n');
    }
    out
}

/// Per-match lines for applied system updates, old -> new.
pub fn render_system_updates(updates: &[SystemUpdate]) -> String {
    let mut out = String::new();
    for update in updates {
        push_line(&mut out, &format!("Tool: {}", update.tool));
        push_line(&mut out, &format!("Host: {}", or_na(&update.host)));
        push_line(
            &mut out,
            &format!("  Size: {} -> {}", or_na(&update.old_size), update.new_size),
        );
        push_line(
            &mut out,
            &format!(
                "  Checksum: {} -> {}",
                or_na(&update.old_checksum),
                update.new_checksum
            ),
        );
        out.push('\n');
    }
    out
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
