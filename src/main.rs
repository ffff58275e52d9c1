// Entry point for the CLI: read the raw document, clean it, write it back out.

use clap::Parser;
use std::process;
use swagger_cleanup::cli::Args;
use swagger_cleanup::utils::init_tracing;
use swagger_cleanup::{clean_spec_file, CleanOptions};

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = CleanOptions { pretty: args.pretty };

    if let Err(err) = clean_spec_file(&args.input, &args.output, &options) {
        eprintln!("Error cleaning specification: {}", err);
        process::exit(1);
    }
}
