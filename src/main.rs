mod commands;

use clap::Parser;
use tokio::sync::oneshot;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

/// Convert a distance in miles into kilometers, meters, centimeters, millimeters, feet, yards,
/// inches and nautical miles.
#[derive(clap::Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Opts {
    /// A level of verbosity, and can be used multiple times
    #[clap(short, long, parse(from_occurrences))]
    verbose: i32,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Parser)]
enum Command {
    #[clap(allow_negative_numbers = true)]
    Convert(commands::convert::Opts),
    Interactive(commands::interactive::Opts),
}

#[tokio::main]
async fn main() {
    // a missing .env file is fine
    dotenv::dotenv().ok();

    let opts: Opts = Opts::parse();
    let max_level = match opts.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(filter::filter_fn(move |m| {
            m.target().starts_with("mileconv") && m.level() <= &max_level
        }))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // end the interactive session on CTRL+C
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::task::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(());
        }
    });

    let result = match opts.command {
        Command::Convert(opts) => commands::convert::execute(opts),
        Command::Interactive(opts) => commands::interactive::execute(opts, shutdown_rx).await,
    };

    let code = match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("{}", err);
            1
        }
    };

    // dropping the runtime would wait for the pending (uncancellable) stdin read
    std::process::exit(code);
}
