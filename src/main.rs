// src/main.rs
use bilingual_page::core::logging;
use bilingual_page::{Config, Result};
use std::path::PathBuf;

const USAGE: &str = "usage: bilingual-page [PAGE.json] [--config PATH]";

struct Args {
    page: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args() -> std::result::Result<Option<Args>, String> {
    let mut args = Args {
        page: None,
        config: None,
    };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-c" | "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => return Err(format!("unknown option: {}", flag)),
            page if args.page.is_none() => args.page = Some(PathBuf::from(page)),
            extra => return Err(format!("unexpected argument: {}", extra)),
        }
    }

    Ok(Some(args))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let level_from_env = logging::init();

    let config = match &args.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::load().await?,
    };

    if !level_from_env {
        logging::apply_level(&config.log_level);
    }

    if let Some(path) = config.config_path() {
        log::info!("Using config {}", path.display());
    }

    bilingual_page::run(config, args.page.as_deref()).await
}
