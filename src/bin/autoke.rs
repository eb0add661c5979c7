//! autoke: print ranked keyphrases for a text file or stdin.

use std::fs::read_to_string;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use autoke::{AkeError, AkeResult, Extractor, ExtractorConfig, Keyword};

#[derive(Parser)]
#[command(name = "autoke")]
#[command(about = "Extract and rank keyphrases with RAKE scoring")]
struct Cli {
    /// Text file to analyse; reads stdin when omitted.
    file: Option<PathBuf>,

    /// Stop-word file, one word per line.
    #[arg(long, short)]
    stop_list: Option<PathBuf>,

    /// TOML config file.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Minimum phrase score to report.
    #[arg(long, short)]
    min_score: Option<f64>,

    /// Maximum number of phrases to report.
    #[arg(long, short = 'n')]
    max_results: Option<usize>,

    /// Print a JSON array instead of tab-separated lines.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("autoke: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::from_file(path)?,
        None => ExtractorConfig::default(),
    };
    if let Some(path) = &cli.stop_list {
        config.stop_list = Some(path.clone());
    }
    if let Some(min_score) = cli.min_score {
        config.min_score = min_score;
    }
    if cli.max_results.is_some() {
        config.max_results = cli.max_results;
    }

    let stop_list = config.build_stop_list()?;
    let text = read_input(cli.file.as_ref())?;

    let extractor = Extractor::new(&stop_list);
    let keywords = extractor.rank(&text, &config.analyse_params())?;
    log::debug!("{} keyphrases", keywords.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
    } else {
        print_table(&keywords);
    }
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> AkeResult<String> {
    match file {
        Some(path) => read_to_string(path).map_err(|source| AkeError::Io {
            path: path.clone(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| AkeError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(text)
        }
    }
}

fn print_table(keywords: &[Keyword]) {
    for keyword in keywords {
        println!("{:.2}\t{}", keyword.score, keyword.phrase);
    }
}
