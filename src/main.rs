use anyhow::{Context, Result};
use clap::Parser;
use conjtest::{cli::Cli, config, output};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = config::RunConfig::from(&args);
    let result = config::run(&config).with_context(|| {
        format!(
            "Conjunction test failed for {} -> {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    if args.print {
        println!("{}", output::render(&result, config.format)?);
    }

    Ok(())
}
