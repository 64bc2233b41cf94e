use clap::Parser;
use kn_source_kamelet::cli::{self, Cli};

fn initialize_tracing() {
    // The result line goes to stdout; diagnostics go to stderr, warnings only
    // unless RUST_LOG says otherwise.
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_target(false)
        .compact();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(format)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    initialize_tracing();
    let cli = Cli::parse();
    if let Err(e) = cli::run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
