use std::io;

use anyhow::Context;
use clap::Parser;

use school_visitors::{app, cli::Cli, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.no_color, cli.log_level.as_deref())
        .context("failed to initialize logging")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&cli, &mut out).context("failed to run the school visits")?;

    if cli.pause {
        app::pause(&mut io::stdin().lock()).context("failed to wait for acknowledgement")?;
    }

    Ok(())
}
