use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use liftlog_backup::{DEFAULT_BACKUP_FILE, GuidLayout};
use strong_to_liftlog::{ConvertOptions, convert_file};

/// Convert a Strong app CSV export into a LiftLog backup file.
#[derive(Parser)]
#[command(name = "strong_to_liftlog", version)]
struct Cli {
    /// Path to the Strong CSV export (semicolon separated)
    input: PathBuf,

    /// Output path for the backup container
    #[arg(default_value = DEFAULT_BACKUP_FILE)]
    output: PathBuf,

    /// Byte layout for generated identifiers
    #[arg(long, value_enum, default_value = "dotnet")]
    guid_layout: GuidLayoutArg,

    /// Seconds between synthesized per-set completion times
    #[arg(long, default_value_t = 60)]
    set_interval: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GuidLayoutArg {
    /// Guid.ToByteArray() ordering, what the app stores natively
    Dotnet,
    /// Standard RFC 4122 byte ordering
    Rfc4122,
}

impl From<GuidLayoutArg> for GuidLayout {
    fn from(arg: GuidLayoutArg) -> Self {
        match arg {
            GuidLayoutArg::Dotnet => GuidLayout::DotNet,
            GuidLayoutArg::Rfc4122 => GuidLayout::Rfc4122,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Configure logging from `STRONG_TO_LIFTLOG_LOG` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("STRONG_TO_LIFTLOG_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();
    let opts = ConvertOptions {
        guid_layout: cli.guid_layout.into(),
        set_interval_secs: cli.set_interval,
    };

    println!("Reading Strong export: {}", cli.input.display());
    let report = convert_file(&cli.input, &cli.output, &opts)?;

    println!("  Workouts found: {}", report.stats.workouts);
    println!("  Exercise entries: {}", report.stats.exercises);
    println!("  Working sets: {}", report.stats.sets);
    println!();
    println!("Backup written to: {}", cli.output.display());
    println!("  Sessions in backup: {}", report.stats.sessions);
    println!("  Payload size: {} bytes", report.encoded_bytes);
    println!("  Compressed size: {} bytes", report.compressed_bytes);
    println!();
    println!("To import in LiftLog:");
    println!("  1. Copy the backup file to your device");
    println!("  2. Open LiftLog > Settings > Backup/Restore");
    println!("  3. Tap 'Import from backup' and select the file");

    Ok(())
}
