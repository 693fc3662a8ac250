//! Scoreline CLI
//!
//! Query derived views of a store file, build snapshots, replay actions

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{ArgAction, Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use scoreline_core::Selectors;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "scoreline")]
#[command(about = "Derived views over a sports client store", long_about = None)]
struct Cli {
    /// Config JSON (defaults to $SCORELINE_CONFIG_PATH, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct ViewParams {
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    form: Option<String>,
    #[arg(long)]
    field: Option<String>,
    #[arg(long)]
    sport: Option<String>,
    /// team_a / team_b
    #[arg(long)]
    side: Option<String>,
    /// Incident type, e.g. goal
    #[arg(long)]
    kind: Option<String>,
    /// active / upcoming / completed / other
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    group: Option<String>,
    #[arg(long)]
    operation: Option<String>,
    /// league / group / a knockout round key (final, semifinal, quaterfinal, round_16, ...)
    #[arg(long)]
    branch: Option<String>,
}

#[cfg(feature = "cli")]
impl From<ViewParams> for scoreline_cli::QueryParams {
    fn from(p: ViewParams) -> Self {
        Self {
            id: p.id,
            status: p.status,
            form: p.form,
            field: p.field,
            sport: p.sport,
            side: p.side,
            kind: p.kind,
            category: p.category,
            group: p.group,
            operation: p.operation,
            branch: p.branch,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print one view as JSON
    Query {
        /// Store file (JSON, or a .snap snapshot)
        #[arg(long)]
        store: PathBuf,

        /// View name (see `scoreline views`)
        view: String,

        #[command(flatten)]
        params: ViewParams,
    },

    /// List view names
    Views,

    /// Build a snapshot from a store JSON file
    Snapshot {
        /// Input store JSON file
        #[arg(long)]
        r#in: PathBuf,

        /// Output snapshot file
        #[arg(long)]
        out: PathBuf,

        /// Verify the snapshot after writing
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Apply actions in order and report which views changed after each
    Replay {
        #[arg(long)]
        store: PathBuf,

        /// JSON array of {"type": ..., "payload": ...}
        #[arg(long)]
        actions: PathBuf,
    },

    /// Counts overview of a store
    Summary {
        #[arg(long)]
        store: PathBuf,
    },

    /// Named snapshots in the configured `persist.dir`
    Snapshots {
        #[command(subcommand)]
        action: SnapshotAction,
    },
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum SnapshotAction {
    /// Save a store file under a name
    Save {
        #[arg(long)]
        store: PathBuf,
        name: String,
    },

    /// Print the summary of a named snapshot
    Show { name: String },

    /// List snapshot names
    List,

    /// Delete a named snapshot
    Delete { name: String },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    scoreline_cli::logging::init_logging(cli.verbose);

    let config = scoreline_cli::config::load_config(cli.config.as_deref())?;
    let selectors = Selectors::new(&config);

    match cli.command {
        Commands::Query { store, view, params } => {
            let store = scoreline_cli::load_store(&store)?;
            let output = scoreline_cli::run_query(&selectors, &store, &view, &params.into())?;
            print_json(&output)?;
        }

        Commands::Views => {
            for view in scoreline_cli::VIEWS {
                println!("{view}");
            }
        }

        Commands::Snapshot { r#in, out, verify, metadata } => {
            eprintln!("Building snapshot...");
            eprintln!("   Input:  {}", r#in.display());
            eprintln!("   Output: {}", out.display());

            let meta = scoreline_cli::build_snapshot(&r#in, &out, config.persist.max_bytes)?;
            print_metadata(&meta);

            if verify {
                verify_integrity(&out, &meta.checksum)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }

        Commands::Replay { store, actions } => {
            let store = scoreline_cli::load_store(&store)?;
            let actions = scoreline_cli::load_actions(&actions)?;
            let (_, steps) = scoreline_cli::replay(&selectors, store, actions);
            print_json(&steps)?;
        }

        Commands::Summary { store } => {
            let store = scoreline_cli::load_store(&store)?;
            print_json(&scoreline_cli::summary(&selectors, &store))?;
        }

        Commands::Snapshots { action } => {
            let snapshots = scoreline_cli::SnapshotDir::from_config(&config.persist);
            match action {
                SnapshotAction::Save { store, name } => {
                    let store = scoreline_cli::load_store(&store)?;
                    let snapshot = snapshots.save(&name, &store)?;
                    eprintln!("Saved '{name}' (version {}) in {}", snapshot.version, snapshots.dir().display());
                }
                SnapshotAction::Show { name } => {
                    let snapshot = snapshots.load(&name)?;
                    print_json(&scoreline_cli::summary(&selectors, &snapshot.store))?;
                }
                SnapshotAction::List => {
                    for name in snapshots.list()? {
                        println!("{name}");
                    }
                }
                SnapshotAction::Delete { name } => {
                    if !snapshots.delete(&name)? {
                        eprintln!("No snapshot named '{name}'");
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &scoreline_cli::SnapshotMetadata) {
    eprintln!("\nSnapshot built");
    eprintln!(
        "   Original size:   {} bytes ({:.2} KB)",
        meta.original_size,
        meta.original_size as f64 / 1024.0
    );
    eprintln!(
        "   Snapshot size:   {} bytes ({:.2} KB)",
        meta.compressed_size,
        meta.compressed_size as f64 / 1024.0
    );
    eprintln!("   Ratio:           {:.1}%", meta.compression_ratio * 100.0);
    eprintln!("   Checksum:        {}", meta.checksum);
    eprintln!("   Created:         {}", meta.created_at);
}

#[cfg(feature = "cli")]
fn verify_integrity(path: &Path, checksum: &str) -> Result<()> {
    eprintln!("\nVerifying snapshot...");
    if scoreline_cli::verify_snapshot(path, checksum)? {
        eprintln!("Snapshot verification passed");
        Ok(())
    } else {
        anyhow::bail!("Snapshot verification failed: checksum mismatch or undecodable payload")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &Path, meta: &scoreline_cli::SnapshotMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, metadata_json)
        .with_context(|| format!("Failed to write metadata: {}", path.display()))?;
    eprintln!("\nMetadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("scoreline CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
