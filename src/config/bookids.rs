use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the `bookids` binary.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Resolve shelf export ISBNs to book ids", long_about = None)]
pub struct Args {
    /// Shelf export CSV (library export with ISBN13 and Exclusive Shelf columns)
    #[arg(short, long)]
    pub book_list_file: PathBuf,

    /// Only keep books on this shelf; an empty value keeps every row
    #[arg(short, long, default_value = "read")]
    pub shelf: String,

    /// Where the list of book ids is written
    #[arg(short, long, default_value = "input_data/mybooks.txt")]
    pub output_file: PathBuf,

    /// Base URL of the catalog site searched by ISBN
    #[arg(long, default_value = "https://www.goodreads.com")]
    pub base_url: String,

    /// Directory for the debug log file
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}
