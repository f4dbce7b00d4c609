use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for softrast")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// fmt check, clippy, build and the full test suite
    Ci {
        /// Print step timings
        #[arg(long)]
        timings: bool,
    },
    /// fmt check and clippy only
    Lint {
        #[arg(long)]
        timings: bool,
    },
    /// Format the workspace
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Clippy over every target, warnings denied
    Clippy {
        #[arg(long)]
        fix: bool,
    },
    /// Build the workspace
    Build {
        #[arg(long)]
        release: bool,
    },
    /// Run tests, optionally a single suite
    Test {
        #[arg(value_enum)]
        suite: Option<Suite>,
    },
    /// Run criterion benchmarks
    Bench {
        /// Only benchmarks whose name contains this filter
        filter: Option<String>,
    },
    /// Render a command file with the release binary
    Render {
        #[arg(default_value = "demos/triangles.txt")]
        script: String,
        /// scanline or edge-function
        #[arg(short, long)]
        strategy: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Suite {
    /// Rasterizer unit and scenario tests
    Raster,
    /// Command parser and interpreter
    Command,
    /// proptest properties
    Props,
    /// End-to-end scripts and the CLI
    Integration,
    /// Doc examples
    Doc,
}

impl Suite {
    fn cargo_args(self) -> &'static [&'static str] {
        match self {
            Suite::Raster => &["test", "--lib", "core::raster"],
            Suite::Command => &["test", "--lib", "core::command"],
            Suite::Props => &["test", "--test", "raster_properties"],
            Suite::Integration => &["test", "--test", "render_scripts", "--test", "cli"],
            Suite::Doc => &["test", "--doc"],
        }
    }
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Task::Ci { timings } => pipeline(
            "CI",
            &[
                ("fmt", FMT_CHECK),
                ("clippy", CLIPPY),
                ("build", BUILD),
                ("test", TEST_ALL),
            ],
            timings,
        ),
        Task::Lint { timings } => pipeline(
            "Lint",
            &[("fmt", FMT_CHECK), ("clippy", CLIPPY)],
            timings,
        ),
        Task::Fmt { check } => {
            let mut args = vec!["fmt", "--all"];
            if check {
                args.extend(["--", "--check"]);
            }
            cargo(&args)
        }
        Task::Clippy { fix } => {
            if fix {
                cargo(&["clippy", "--all-targets", "--fix", "--allow-dirty"])
            } else {
                cargo(CLIPPY)
            }
        }
        Task::Build { release } => {
            let mut args = vec!["build", "--workspace"];
            if release {
                args.push("--release");
            }
            cargo(&args)
        }
        Task::Test { suite } => match suite {
            Some(suite) => cargo(suite.cargo_args()),
            None => cargo(TEST_ALL),
        },
        Task::Bench { filter } => {
            let mut args = vec!["bench", "--bench", "raster_bench"];
            if let Some(filter) = filter.as_deref() {
                args.extend(["--", filter]);
            }
            cargo(&args)
        }
        Task::Render { script, strategy } => render(&script, strategy.as_deref()),
    }
}

const FMT_CHECK: &[&str] = &["fmt", "--all", "--", "--check"];
const CLIPPY: &[&str] = &["clippy", "--all-targets", "--", "-D", "warnings"];
const BUILD: &[&str] = &["build", "--workspace"];
const TEST_ALL: &[&str] = &["test", "--workspace"];

/// Run steps in order, stopping at the first failure
fn pipeline(title: &str, steps: &[(&str, &[&str])], timings: bool) -> Result<()> {
    println!("{}", format!("== {} ==", title).bold().blue());
    let start = Instant::now();

    for (name, args) in steps {
        println!("{} {}", "→".blue(), name.bold());
        let step = Instant::now();

        if let Err(e) = cargo(args) {
            println!("{} {} failed", "✗".red().bold(), name);
            return Err(e);
        }

        if timings {
            println!("  {:.2}s", step.elapsed().as_secs_f64());
        }
    }

    println!(
        "{} {} in {:.2}s",
        "✓".green().bold(),
        title,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn render(script: &str, strategy: Option<&str>) -> Result<()> {
    if !Path::new(script).is_file() {
        bail!("command file not found: {}", script);
    }

    println!("{} rendering {}", "→".blue(), script.cyan());

    let mut args = vec!["run", "--release", "--bin", "softrast", "--", script];
    if let Some(strategy) = strategy {
        args.extend(["--strategy", strategy]);
    }
    cargo(&args)
}

fn cargo(args: &[&str]) -> Result<()> {
    let status = Command::new(std::env::var("CARGO").unwrap_or_else(|_| "cargo".into()))
        .args(args)
        .status()
        .with_context(|| format!("failed to spawn cargo {}", args.join(" ")))?;

    if !status.success() {
        bail!("cargo {} exited with {}", args.join(" "), status);
    }
    Ok(())
}
