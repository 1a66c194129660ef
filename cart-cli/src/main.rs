use cart_cli::{apply_overrides, run, Args};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cart_cli=info,cart_catalog=info,cart_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cart_store::Config::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    let config = apply_overrides(&args, config);

    let total = run(&config, args.verbose)?;
    println!("{}", total);
    Ok(())
}
