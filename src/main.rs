//! `cmdshell` 바이너리 진입점.

use cmdshell::interface::cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse_args();

    if let Err(err) = cmdshell::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
