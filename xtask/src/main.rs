use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for deskscene")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, tests and the headless smoke run
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates with warnings denied
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Fly the CLI through the scene headlessly
    Smoke {
        /// Also check every texture in this directory
        #[arg(long)]
        assets: Option<String>,
    },
}

/// One cargo invocation, labelled for the progress line.
fn cargo(label: &str, args: &[&str]) -> Result<()> {
    println!("==> {label}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        bail!("{label} failed");
    }
    Ok(())
}

const FMT: &[&str] = &["fmt", "--all", "--", "--check"];
const CLIPPY: &[&str] = &[
    "clippy",
    "--workspace",
    "--all-targets",
    "--",
    "-D",
    "warnings",
];
const TEST: &[&str] = &["test", "--workspace"];
const DOC: &[&str] = &["doc", "--workspace", "--no-deps"];

fn smoke(assets: Option<&str>) -> Result<()> {
    let cli = ["run", "--quiet", "-p", "deskscene-cli", "--"];

    let fly: Vec<&str> = cli
        .iter()
        .copied()
        .chain([
            "fly", "--frames", "120", "--hold", "forward", "--hold", "up", "--look-x", "-200",
            "--scroll", "10", "--start-orbit",
        ])
        .collect();
    cargo("scripted flight", &fly)?;

    let Some(dir) = assets else {
        return Ok(());
    };
    let check: Vec<&str> = cli
        .iter()
        .copied()
        .chain(["check-assets", "--dir", dir])
        .collect();
    cargo("texture check", &check)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            cargo("cargo fmt --check", FMT)?;
            cargo("cargo clippy", CLIPPY)?;
            cargo("cargo test", TEST)?;
            smoke(None)?;
        }
        Commands::Fmt => cargo("cargo fmt --check", FMT)?,
        Commands::Clippy => cargo("cargo clippy", CLIPPY)?,
        Commands::Test => cargo("cargo test", TEST)?,
        Commands::Doc => cargo("cargo doc", DOC)?,
        Commands::Smoke { assets } => smoke(assets.as_deref())?,
    }

    Ok(())
}
