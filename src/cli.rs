//! Shared plumbing for the two updater binaries.
use crate::digest;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Guidance printed when an invocation requests neither explicit values nor a
/// source file. This path is a clean no-op on both surfaces, not a failure.
pub const UPDATE_GUIDANCE: &str = "To update, provide either:\n  \
    --size and --checksum together, or\n  \
    --from-file with a path to a local archive\n\n\
    Use --help for examples.";

/// Install the diagnostics subscriber. `RUST_LOG` overrides the default
/// `warn` filter; diagnostics go to stderr so stdout stays report-only.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The size/checksum pair an update will write, however it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedValues {
    pub size: String,
    pub checksum: String,
    /// Set when the pair was computed from a local file.
    pub computed_from: Option<PathBuf>,
}

/// Turn CLI inputs into the values to write.
///
/// `--from-file` wins over explicit values; explicit checksums get the
/// `SHA-256:` tag added when the caller omitted it. Returns `Ok(None)` when
/// neither combination was supplied, which callers treat as "nothing to do".
pub fn resolve_values(
    size: Option<&str>,
    checksum: Option<&str>,
    from_file: Option<&Path>,
) -> Result<Option<ResolvedValues>> {
    if let Some(file) = from_file {
        let size = digest::file_size(file)
            .with_context(|| format!("compute size of {}", file.display()))?;
        let checksum = digest::formatted_digest(file)
            .with_context(|| format!("compute digest of {}", file.display()))?;
        return Ok(Some(ResolvedValues {
            size: size.to_string(),
            checksum,
            computed_from: Some(file.to_path_buf()),
        }));
    }

    match (size, checksum) {
        (Some(size), Some(checksum)) => Ok(Some(ResolvedValues {
            size: size.to_string(),
            checksum: digest::tag_checksum(checksum),
            computed_from: None,
        })),
        _ => Ok(None),
    }
}
