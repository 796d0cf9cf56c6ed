use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for fractalspace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
}

const FMT: (&str, &[&str]) = ("cargo fmt --check", &["fmt", "--all", "--", "--check"]);
const CLIPPY: (&str, &[&str]) = (
    "cargo clippy",
    &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
);
const TEST: (&str, &[&str]) = ("cargo test", &["test", "--workspace"]);
const DOC: (&str, &[&str]) = ("cargo doc", &["doc", "--workspace", "--no-deps"]);
const BUILD: (&str, &[&str]) = ("cargo build", &["build", "--workspace"]);

fn run(task: (&str, &[&str])) -> Result<()> {
    let (label, args) = task;
    println!("==> Running {label}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("{label} failed");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for task in [FMT, CLIPPY, TEST, DOC] {
                run(task)?;
            }
        }
        Commands::Fmt => run(FMT)?,
        Commands::Clippy => run(CLIPPY)?,
        Commands::Test => run(TEST)?,
        Commands::Doc => run(DOC)?,
        Commands::Build => run(BUILD)?,
    }

    Ok(())
}
