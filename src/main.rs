use clap::{Parser, Subcommand};
use log::{info, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use pde_tree::Utils::config::AppConfig;
use pde_tree::Utils::files::{list_json_files, load_catalog, write_rendered};
use pde_tree::Utils::logger::init_logger;
use pde_tree::error::{PdeError, Result};
use pde_tree::generation::batch::{build_request, run_batch};
use pde_tree::generation::generator::RecordedGenerator;
use pde_tree::generation::prompt::build_description;
use pde_tree::generation::sink::DirectorySink;

#[derive(Parser, Debug)]
#[command(name = "pde_tree")]
#[command(about = "Render PDE operator-tree documents and build generator prompts")]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// off, none, debug, info, warn or error
    #[arg(long = "log-level", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print documents in readable form; PATH is a .json file or a directory of them
    Render { path: Option<PathBuf> },
    /// Print the exact prompts sent to the generator for one catalog entry
    Prompt {
        name: String,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Convert every catalog entry, replaying recorded generator replies
    Generate {
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long)]
        responses: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn render(path: &Path) -> Result<()> {
    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        list_json_files(path)?
    };
    if files.is_empty() {
        println!("No JSON files found in '{}'.", path.display());
        return Ok(());
    }
    let skipped = write_rendered(&files, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    if skipped > 0 {
        warn!("{} of {} file(s) skipped", skipped, files.len());
    }
    Ok(())
}

fn prompt(config: &AppConfig, name: &str, catalog: &Path) -> Result<()> {
    let entries = load_catalog(catalog)?;
    let entry = entries
        .iter()
        .find(|entry| entry.name() == name)
        .ok_or_else(|| PdeError::malformed(catalog.display().to_string(), format!("no entry named '{}'", name)))?;
    let request = build_request(name, &build_description(entry), &config.generation.model);
    println!("{}", "=".repeat(80));
    println!("MODEL INPUT for PDE '{}':", name);
    println!("{}", "-".repeat(80));
    println!("System message:\n{}", request.system_prompt);
    println!("{}", "-".repeat(80));
    println!("User message:\n{}", request.user_prompt);
    println!("{}", "=".repeat(80));
    Ok(())
}

fn generate(config: &AppConfig, catalog: &Path, responses: &Path, output: &Path) -> Result<bool> {
    let entries = load_catalog(catalog)?;
    let mut generator = RecordedGenerator::from_dir(responses);
    let mut sink = DirectorySink::new(output);
    let report = run_batch(&entries, &config.generation.model, &mut generator, &mut sink);
    for (name, target) in &report.saved {
        println!("Saved JSON for '{}' to: {}", name, target);
    }
    for (name, e) in &report.failed {
        println!("Failed for '{}': {}", name, e);
    }
    Ok(!report.all_failed())
}

fn run(args: Args) -> Result<bool> {
    let config = AppConfig::load_or_default(args.config.as_deref())?;
    let level = args.log_level.as_deref().unwrap_or(config.logging.level.as_str());
    init_logger(level, config.logging.file.as_deref())?;
    info!("Program started with loglevel: {}", level);

    match args.command {
        Command::Render { path } => {
            render(path.as_deref().unwrap_or(config.render.input_dir.as_path()))?;
            Ok(true)
        }
        Command::Prompt { name, catalog } => {
            prompt(&config, &name, catalog.as_deref().unwrap_or(config.generation.catalog.as_path()))?;
            Ok(true)
        }
        Command::Generate {
            catalog,
            responses,
            output,
        } => generate(
            &config,
            catalog.as_deref().unwrap_or(config.generation.catalog.as_path()),
            responses.as_deref().unwrap_or(config.generation.responses_dir.as_path()),
            output.as_deref().unwrap_or(config.generation.output_dir.as_path()),
        ),
    }
}

fn main() {
    let args = Args::parse();
    match run(args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            // the logger may not be up yet
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
