//! Command-line interface for rpcdoc
//! This binary scans a source file for RPCAPI comment blocks and prints the
//! rendered markdown reference document to stdout.
//!
//! Usage:
//!   rpcdoc `<path>`   - Scan a source file and print its method reference

use clap::{Arg, Command};
use rpcdoc_parser::rpc::loader::SourceLoader;

fn main() {
    let matches = Command::new("rpcdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate markdown documentation from RPCAPI comment blocks")
        .arg(
            Arg::new("path")
                .help("Path to the source file to scan")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");

    let loader = SourceLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    // The whole document is rendered before anything is written, so a
    // scan fault never leaves a partial page on stdout.
    let document = loader.to_markdown(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", document);
}
