use clap::Parser;
use patodo::cli::commands::Cli;

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = patodo::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
