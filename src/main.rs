use cuisinecraft_import::config::load_config;
use cuisinecraft_import::fetchers::RequestFetcher;
use cuisinecraft_import::pipelines::url::process_many;
use cuisinecraft_import::{extract_recipe, Extraction};
use log::{error, warn};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;

const USAGE: &str = "Usage: cuisinecraft-import [--json] <url>...\n       cuisinecraft-import [--json] --file <path> [--url <source>]";

struct Args {
    json: bool,
    file: Option<String>,
    source_url: Option<String>,
    urls: Vec<String>,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut args = Args {
        json: false,
        file: None,
        source_url: None,
        urls: Vec::new(),
    };

    let mut raw = raw.into_iter();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--file" => args.file = Some(raw.next().ok_or("--file needs a path")?),
            "--url" => args.source_url = Some(raw.next().ok_or("--url needs a value")?),
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with('-') => {
                return Err(format!("Unknown option: {flag}\n{USAGE}"));
            }
            _ => args.urls.push(arg),
        }
    }

    match (&args.file, args.urls.is_empty()) {
        (None, true) => return Err(USAGE.to_string()),
        (Some(_), false) => {
            return Err(format!("--file cannot be combined with URLs\n{USAGE}"));
        }
        _ => {}
    }
    Ok(args)
}

fn print(extraction: &Extraction, source: &str, json: bool) -> Result<bool, serde_json::Error> {
    match extraction {
        Extraction::Recipe(record) if json => println!("{}", serde_json::to_string_pretty(record)?),
        Extraction::Recipe(record) => println!("{}", record.to_text()),
        Extraction::NotARecipe(reason) => {
            warn!("{}: no recipe found ({})", source, reason);
            return Ok(false);
        }
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return Ok(ExitCode::from(1));
        }
    };

    if let Some(path) = &args.file {
        let html = tokio::fs::read_to_string(path).await?;
        let extraction = extract_recipe(&html, args.source_url.as_deref())?;
        let found = print(&extraction, path, args.json)?;
        return Ok(if found { ExitCode::SUCCESS } else { ExitCode::from(2) });
    }

    let config = load_config()?;
    let fetcher = Arc::new(RequestFetcher::new(&config.fetch)?);
    let results = process_many(fetcher, args.urls.clone(), config.fetch.max_concurrent).await;

    let mut found_all = true;
    for (url, result) in args.urls.iter().zip(results) {
        match result {
            Ok(extraction) => found_all &= print(&extraction, url, args.json)?,
            Err(e) => {
                error!("{}: {}", url, e);
                found_all = false;
            }
        }
    }

    Ok(if found_all { ExitCode::SUCCESS } else { ExitCode::from(2) })
}
