use clap::Parser;
use prettyip::config;
use prettyip::input::build_set;
use prettyip::output::print_candidates;
use prettyip::pretty_ipset;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Render a set of IPv4 blocks as readable text.
#[derive(Parser, Debug)]
#[command(name = "prettyip", version, about)]
struct Args {
    /// Prefixes or addresses to include, e.g. 10.0.0.0/24 or 10.0.0.7
    cidrs: Vec<String>,

    /// Prefixes or addresses to remove from the set
    #[arg(short = 'x', long)]
    exclude: Vec<String>,

    /// JSON file holding an array of prefixes to include
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print every candidate rendering with its score
    #[arg(short, long)]
    candidates: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let log_config = config::log_config_file();
    if Path::new(&log_config).exists() {
        log4rs::init_file(&log_config, Default::default()).expect("Error initializing log4rs");
    }
    log::info!("#Start main()");

    let args = Args::parse();
    let set = build_set(&args.cidrs, &args.exclude, args.file.as_deref())?;

    if args.candidates {
        print_candidates(&set)?;
    } else {
        println!("{}", pretty_ipset(&set)?);
    }

    Ok(())
}
