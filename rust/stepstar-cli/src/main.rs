use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use stepstar_cli::{run, Args};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();
    match run(&args) {
        Ok(report) => {
            print!("{}", report.text);
            if !report.result.is_found() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "stepstar failed");
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    }
}
