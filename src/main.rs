use anyhow::Result;
use clap::Parser;

use faasctl::{
    app::load_config,
    cli::{handle_command, Cli, CommandContext},
    utils::init_logger,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        // One line, whole cause chain
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let ctx = CommandContext::new(config);
    handle_command(cli.command, &ctx).await
}
