use clap::Parser;
use mytask::cli::commands::Cli;
use mytask::cli::logging::init_tracing;
use mytask::io::config_io::{default_config_path, read_config, resolve_data_dir};

/// Log file name inside the data directory
const LOG_FILE: &str = "mytask.log";

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match cli.config.clone().or_else(default_config_path) {
        Some(path) => read_config(&path)?,
        None => Default::default(),
    };
    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), &config);

    // Logging is best effort
    if let Err(e) = init_tracing(cli.verbose, cli.quiet, &data_dir.join(LOG_FILE)) {
        eprintln!("warning: {}", e);
    }

    mytask::tui::run(&data_dir, &config)
}
