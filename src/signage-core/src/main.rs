//! Signage - course slide-deck server CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use signage_core::colored_logger::{init_component_logger, Component};
use signage_core::commands;
use signage_core::config::{Config, Overrides};
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "signage")]
#[command(about = "Serve course slide decks for the classroom display")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (defaults to ./signage.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Configuration profile to apply
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<IpAddr>,

        /// Web server port
        #[arg(long)]
        port: Option<u16>,

        /// Directory with one folder of slides per course
        #[arg(long)]
        content_dir: Option<PathBuf>,

        /// Directory with front-end assets
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// List registered courses and their slide counts
    Courses,

    /// Check content and static directories and try loading every slide
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let component = match cli.command {
        Commands::Serve { .. } => Component::Server,
        Commands::Check => Component::Check,
        Commands::Courses => Component::Main,
    };
    init_component_logger(component, cli.verbose)?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(profile) = cli.profile.as_deref() {
        config = config.apply_profile(profile)?;
    }

    match cli.command {
        Commands::Serve { host, port, content_dir, static_dir } => {
            let config = config.with_overrides(Overrides {
                host,
                port,
                content_dir,
                static_dir,
            });
            cmd_serve(config)?;
        }
        Commands::Courses => {
            cmd_courses(config)?;
        }
        Commands::Check => {
            cmd_check(config)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn cmd_serve(config: Config) -> Result<()> {
    let registry = config.registry().context("Invalid course configuration")?;
    let locator = config.locator();

    info!("content directory: {:?}", config.paths.content_dir);
    info!("static directory: {:?}", config.paths.static_dir);
    if !config.paths.content_dir.is_dir() {
        error!(
            "content directory {:?} not found, every course will be empty",
            config.paths.content_dir
        );
    }

    let state =
        signage_web::AppState::new(registry, locator, config.display.slide_duration_secs);
    signage_web::serve(state, &config.paths.static_dir, config.socket_addr()).await?;

    Ok(())
}

#[tokio::main]
async fn cmd_courses(config: Config) -> Result<()> {
    let registry = config.registry().context("Invalid course configuration")?;
    let rows = commands::summarize(&registry, &config.locator()).await;

    println!("{:<8} {:<24} {:<8} {}", "CODE", "NAME", "STATUS", "SLIDES");
    for row in rows {
        let status = if row.open { "open" } else { "closed" };
        println!("{:<8} {:<24} {:<8} {}", row.code, row.name, status, row.slide_count);
    }

    Ok(())
}

#[tokio::main]
async fn cmd_check(config: Config) -> Result<()> {
    let registry = config.registry().context("Invalid course configuration")?;
    let report = commands::check(&registry, &config.locator(), &config.paths.static_dir).await;

    println!("content: {:?} ({})", report.content_dir, found(report.content_dir_exists));
    println!("static:  {:?} ({})", report.static_dir, found(report.static_dir_exists));

    for course in &report.courses {
        println!("  {:<8} {} slides", course.code, course.slide_count);
        for path in &course.unreadable {
            println!("    unreadable: {:?}", path);
        }
    }

    if !report.is_healthy() {
        anyhow::bail!("content directory {:?} not found", report.content_dir);
    }

    info!(
        "{} open courses checked, {} unreadable slides",
        report.courses.len(),
        report.unreadable_count()
    );
    Ok(())
}

fn found(exists: bool) -> &'static str {
    if exists { "ok" } else { "missing" }
}
