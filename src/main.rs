use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use logline_doctor::config::{Config, OutputFormat, Overrides};
use logline_doctor::error::{DoctorError, Result};
use logline_doctor::{diagnose, diagnose_seeded, report, template_catalog, ConceptInput};

#[derive(Parser)]
#[command(
    name = "logline-doctor",
    about = "Diagnose a film logline and suggest stronger rewrites",
    version
)]
struct Cli {
    /// Logline text (reads stdin if none provided)
    logline: Vec<String>,

    /// Target genre (Thriller, Horror, Drama, Comedy, Sci-Fi, Action, Romance, Fantasy)
    #[arg(short, long)]
    genre: Option<String>,

    /// Current greenlight score (0-100)
    #[arg(short, long, allow_negative_numbers = true)]
    score: Option<i32>,

    /// Seed for reproducible rewrites
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// TOML file with default settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the genre templates and exit
    #[arg(long)]
    templates: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn read_logline(words: &[String]) -> Result<String> {
    let logline = if words.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|source| DoctorError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        input.trim().to_string()
    } else {
        words.join(" ")
    };

    if logline.is_empty() {
        return Err(DoctorError::EmptyInput);
    }
    Ok(logline)
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = config.merge(Overrides {
        genre: cli.genre,
        score: cli.score,
        seed: cli.seed,
        format: cli.format,
    });

    if cli.templates {
        let templates = template_catalog(&settings.genre);
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    let input = ConceptInput::new(read_logline(&cli.logline)?, settings.genre, settings.score);
    debug!("diagnosing with seed {:?}", settings.seed);
    let diagnosis = match settings.seed {
        Some(seed) => diagnose_seeded(&input, seed),
        None => diagnose(&input),
    };

    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diagnosis)?),
        OutputFormat::Text => println!("{}", report::render_text(&diagnosis)),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
