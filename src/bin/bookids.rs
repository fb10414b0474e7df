// src/bin/bookids.rs

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use ReviewBlaster::config::bookids::Args;
use ReviewBlaster::error::Result;
use ReviewBlaster::resolver::{resolve_book_ids, write_book_ids, HttpSearchResolver};
use ReviewBlaster::shelf::read_shelf_isbns;
use ReviewBlaster::utils::logging::init_logging;

fn run(args: &Args) -> Result<()> {
    info!(
        "Retrieving ISBNs from file {}",
        args.book_list_file.display()
    );
    let isbns = read_shelf_isbns(&args.book_list_file, &args.shelf)?;

    let resolver = HttpSearchResolver::new(args.base_url.clone())?;
    let ids = resolve_book_ids(&isbns, &resolver);

    write_book_ids(&args.output_file, &ids)?;
    info!("Output saved in {}", args.output_file.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match init_logging("get_bookids", &args.log_dir) {
        Ok((guard, _)) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Retrieving book ids failed");
            ExitCode::FAILURE
        }
    }
}
