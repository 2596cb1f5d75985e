use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("rnv error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = regu_config::ReguConfig::load_with_dotenv()
        .map_err(|error| anyhow::anyhow!("failed to load configuration: {error}"))?;

    // Auth and theme run before the session gate: auth because it creates
    // the session, theme because it only touches the config file.
    match &cli.command {
        cli::Commands::Auth { action } => {
            return commands::auth::handle(action, &flags, &config).await;
        }
        cli::Commands::Theme { action } => {
            return commands::theme::handle(action, &flags, &config);
        }
        _ => {}
    }

    let ctx = context::AppContext::init(config).await?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    // --quiet outranks --verbose when both are given
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("REGUNOVA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("cannot install tracing subscriber: {error}"))?;

    Ok(())
}
