use clap::Parser;
use std::path::PathBuf;

/// File the generator writes the raw document to
pub const DEFAULT_INPUT: &str = "caldera_api_raw.json";

/// File the cleaned document is written to
pub const DEFAULT_OUTPUT: &str = "caldera_api.json";

#[derive(Debug, Parser)]
#[clap(
    name = "swagger-cleanup",
    about = "Normalize a generated Swagger document for strict client generators",
    version
)]
pub struct Args {
    /// Path to the raw Swagger specification file
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path the cleaned specification is written to
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Pretty-print the cleaned JSON
    #[clap(long)]
    pub pretty: bool,

    /// Log every edit as it is made
    #[clap(short, long)]
    pub verbose: bool,
}
