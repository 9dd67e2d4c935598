use clap::Parser;

use pizzeria_cli::{Cli, run};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = pizzeria_observability::init(cli.log_format) {
        tracing::warn!(error = %err, "using default log configuration");
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = run(&cli, &mut stdout) {
        tracing::debug!(error = %err, "command failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
