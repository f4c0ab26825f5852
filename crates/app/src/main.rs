//! Tanabana storefront CLI

use std::process;

use clap::Parser;
use tanabana_app::config::Config;

mod cli;

pub fn main() {
    Config::load_env();

    let cli = cli::Cli::parse();

    cli.config().init_logging();

    if let Err(error) = cli.run() {
        eprintln!("{error}");
        process::exit(1);
    }
}
