use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for arspace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, tests and doc in that order
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates, warnings denied
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Print the orientation remap table through the CLI
    Table,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for step in [Commands::Fmt, Commands::Clippy, Commands::Test, Commands::Doc] {
                run(&step)?;
            }
        }
        other => run(&other)?,
    }

    Ok(())
}

fn run(step: &Commands) -> Result<()> {
    let (label, args): (&str, &[&str]) = match step {
        Commands::Fmt => ("fmt", &["fmt", "--all", "--", "--check"]),
        Commands::Clippy => (
            "clippy",
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        ),
        Commands::Test => ("test", &["test", "--workspace"]),
        Commands::Doc => ("doc", &["doc", "--workspace", "--no-deps"]),
        Commands::Table => ("table", &["run", "-q", "-p", "arspace-cli", "--", "table"]),
        Commands::Check => anyhow::bail!("check is not a single step"),
    };
    cargo(label, args)
}

fn cargo(label: &str, args: &[&str]) -> Result<()> {
    println!("==> cargo {label}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {label} failed");
    }
    Ok(())
}
