//! Update size/checksum of platform entries in a package-index manifest.
use anyhow::{bail, Result};
use clap::Parser;
use index_updater::{cli, report, store, update};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "platform-updater",
    version,
    about = "Update size/checksum values of platform entries in a package-index manifest",
    after_help = "Examples:\n  \
        platform-updater index.json --show                                        # Show all values of the default platform\n  \
        platform-updater index.json --show --platform \"WebSim AVR Boards\"         # Show a specific platform\n  \
        platform-updater index.json --list                                        # List available platforms\n  \
        platform-updater index.json -p \"WebSim AVR Boards\" -s 5588 -c abc123      # Update with explicit values\n  \
        platform-updater index.json -p \"WebSim AVR Boards\" -f websim-avr-1.0.zip  # Compute values from a local file"
)]
struct Args {
    /// Path to the manifest JSON file to edit
    json_file: PathBuf,

    /// Platform name to target
    #[arg(long, short = 'p', default_value = update::DEFAULT_PLATFORM)]
    platform: String,

    /// New value for the size field
    #[arg(long, short = 's', value_name = "BYTES")]
    size: Option<String>,

    /// New value for the checksum field (SHA-256: prefix added if missing)
    #[arg(long, short = 'c', value_name = "HEX")]
    checksum: Option<String>,

    /// Compute size and checksum from a local file
    #[arg(long, short = 'f', value_name = "PATH")]
    from_file: Option<PathBuf>,

    /// Only display current values, without modifying anything
    #[arg(long, short = 'v')]
    show: bool,

    /// List every platform in the manifest
    #[arg(long, short = 'l')]
    list: bool,

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

    if args.list {
        print!(
            "{}",
            report::platform_listing(&update::list_platforms(&manifest))
        );
        return Ok(());
    }

    // Always show the targeted platform first, whether or not we go on to
    // update it.
    print!("{}", report::platform_report(&manifest, Some(&args.platform)));
    if args.show {
        return Ok(());
    }

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

    println!("=== Updating platform '{}' ===", args.platform);
    let updates =
        update::update_platforms(&mut manifest, &args.platform, &values.size, &values.checksum);
    if updates.is_empty() {
        bail!(
            "no platform named '{}' matched; nothing was updated",
            args.platform
        );
    }
    print!("{}", report::render_platform_updates(&updates));
    println!("{} platform entry(ies) updated.", updates.len());

    let outcome = store::save(&manifest, &args.json_file, !args.no_backup)?;
    if let Some(backup) = outcome.backup {
        println!("Backup created: {}", backup.display());
    }
    println!("Manifest '{}' updated.", args.json_file.display());
    Ok(())
}
