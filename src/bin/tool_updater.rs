//! Update size/checksum of tool system entries in a package-index manifest.
use anyhow::{bail, Result};
use clap::Parser;
use index_updater::{cli, report, store, update};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tool-updater",
    version,
    about = "Update size/checksum values of tool system entries in a package-index manifest",
    after_help = "Examples:\n  \
        tool-updater index.json --show                                      # Show all tools\n  \
        tool-updater index.json -t webuploader -s 2507992 -c abc123         # Update every host of a tool\n  \
        tool-updater index.json -t webuploader -f webuploader.tar.gz        # Compute values from a local file\n  \
        tool-updater index.json -s 2507992 -c abc123 --host x86_64-linux-gnu  # Update one host only"
)]
struct Args {
    /// Path to the manifest JSON file to edit
    json_file: PathBuf,

    /// Tool name to target
    #[arg(long, short = 't', default_value = update::DEFAULT_TOOL)]
    tool: String,

    /// New value for the size field
    #[arg(long, short = 's', value_name = "BYTES")]
    size: Option<String>,

    /// New value for the checksum field (SHA-256: prefix added if missing)
    #[arg(long, short = 'c', value_name = "HEX")]
    checksum: Option<String>,

    /// Compute size and checksum from a local file
    #[arg(long, short = 'f', value_name = "PATH")]
    from_file: Option<PathBuf>,

    /// Only update systems matching this host triple (e.g. x86_64-linux-gnu)
    #[arg(long, value_name = "TRIPLE")]
    host: Option<String>,

    /// Only display current values, without modifying anything
    #[arg(long, short = 'v')]
    show: bool,

    /// Skip the backup copy before saving
    #[arg(long)]
    no_backup: bool,
}

fn main() -> Result<()> {
    cli::init_tracing();
    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    if !args.json_file.exists() {
        bail!("manifest '{}' not found", args.json_file.display());
    }
    let mut manifest = store::load(&args.json_file)?;

    // --show reports every tool; an update previews only the targeted one.
    if args.show {
        print!("{}", report::tool_report(&manifest, None));
        return Ok(());
    }
    print!("{}", report::tool_report(&manifest, Some(&args.tool)));

    let Some(values) = cli::resolve_values(
        args.size.as_deref(),
        args.checksum.as_deref(),
        args.from_file.as_deref(),
    )?
    else {
        println!("{}", cli::UPDATE_GUIDANCE);
        return Ok(());
    };

    if let Some(source) = &values.computed_from {
        println!("Source file: {}", source.display());
        println!("Computed size: {}", values.size);
        println!("Computed checksum: {}", values.checksum);
        println!();
    }

    // An empty --host is the same as no filter.
    let host_filter = args.host.as_deref().filter(|host| !host.is_empty());

    println!("=== Updating tool '{}' ===", args.tool);
    let updates = update::update_tool_systems(
        &mut manifest,
        &args.tool,
        &values.size,
        &values.checksum,
        host_filter,
    );
    if updates.is_empty() {
        match host_filter {
            Some(host) => bail!(
                "no system of tool '{}' matched host '{host}'; nothing was updated",
                args.tool
            ),
            None => bail!(
                "no system of tool '{}' matched; nothing was updated",
                args.tool
            ),
        }
    }
    print!("{}", report::render_system_updates(&updates));
    println!("{} system(s) updated.", updates.len());

    let outcome = store::save(&manifest, &args.json_file, !args.no_backup)?;
    if let Some(backup) = outcome.backup {
        println!("Backup created: {}", backup.display());
    }
    println!("Manifest '{}' updated.", args.json_file.display());
    Ok(())
}
