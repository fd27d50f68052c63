//! Command-line inspection of tutorial sources.
//!
//! - `list`: catalogue of the tutorials directory
//! - `show <SLUG>`: metadata and content outline
//! - `json <SLUG>`: the parsed tutorial as JSON
//! - `parse <FILE>`: outline of any source file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tex_tutorials_config::Config;
use tex_tutorials_engine::{
    ParseOptions, Tutorial, io, parse_tutorial_with, parsing::snapshot,
};

#[derive(Parser)]
#[command(name = "tex-tutorials", version, about)]
struct Cli {
    /// Tutorials directory; overrides the config file
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tutorials in catalogue order.
    List,
    /// Print a tutorial's metadata and content outline.
    Show { slug: String },
    /// Print a parsed tutorial as JSON.
    Json { slug: String },
    /// Print the outline of an arbitrary source file.
    Parse {
        file: PathBuf,
        /// Print JSON instead of an outline
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load config file")?;
    let options = config
        .as_ref()
        .map(Config::parse_options)
        .unwrap_or_default();

    match cli.command {
        Commands::List => {
            let dir = tutorials_dir(cli.dir, config.as_ref())?;
            for tutorial in io::load_all_tutorials(&dir, &options)? {
                println!(
                    "{}\t{}\t{}\t{}",
                    tutorial.slug(),
                    tutorial.title,
                    tutorial.category,
                    tutorial.read_time
                );
            }
        }
        Commands::Show { slug } => {
            let dir = tutorials_dir(cli.dir, config.as_ref())?;
            let tutorial = load(&slug, &dir, &options)?;
            print_tutorial(&tutorial);
        }
        Commands::Json { slug } => {
            let dir = tutorials_dir(cli.dir, config.as_ref())?;
            let tutorial = load(&slug, &dir, &options)?;
            println!("{}", serde_json::to_string_pretty(&tutorial)?);
        }
        Commands::Parse { file, json } => {
            let src = io::read_file(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let parsed = parse_tutorial_with(&src, &options);
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("# {} ({})", parsed.metadata.title, parsed.read_time);
                print!("{}", snapshot::outline(&parsed.content));
            }
        }
    }

    Ok(())
}

/// `--dir` if given, otherwise the configured tutorials path.
fn tutorials_dir(dir: Option<PathBuf>, config: Option<&Config>) -> Result<PathBuf> {
    let dir = match (dir, config) {
        (Some(dir), _) => dir,
        (None, Some(config)) => config.tutorials_path.clone(),
        (None, None) => bail!(
            "No tutorials directory given and no config file found at {}",
            Config::config_path().display()
        ),
    };
    io::validate_tutorials_dir(&dir)
        .with_context(|| format!("Tutorials path '{}' is invalid", dir.display()))?;
    Ok(dir)
}

fn load(slug: &str, dir: &Path, options: &ParseOptions) -> Result<Tutorial> {
    io::load_tutorial(slug, dir, options)
        .with_context(|| format!("Failed to load tutorial '{slug}'"))
}

fn print_tutorial(tutorial: &Tutorial) {
    println!("# {}", tutorial.title);
    println!("{}", tutorial.description);
    println!(
        "category: {} | tags: {} | {}",
        tutorial.category,
        tutorial.tags.join(", "),
        tutorial.read_time
    );
    if let Some(date) = &tutorial.date {
        println!("date: {date}");
    }
    println!();
    print!("{}", snapshot::outline(&tutorial.content));
    if !tutorial.warnings.is_empty() {
        println!();
        for warning in &tutorial.warnings {
            println!("warning: {warning}");
        }
    }
}
