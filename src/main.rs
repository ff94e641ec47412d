//! evalview - parse and pretty-print query eval responses.

mod cli;
mod logging;

use cli::Cli;
use evalview::config::Config;
use evalview::error::Result;
use evalview::language::language_from_query_type;
use evalview::output::render;
use evalview::response::parse_multipart;
use tracing::{debug, error, info};

fn main() {
    logging::init_stderr_logging();

    if let Err(e) = run() {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if let Some(query_type) = &cli.query_type {
        println!("{}", language_from_query_type(query_type));
        return Ok(());
    }

    let config_path = cli.config_path();
    debug!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let format = cli.output_format(&config)?;
    let boundary = cli.resolve_boundary(&config);
    let payload = cli.read_input()?;

    let envelope = parse_multipart(&payload, boundary.as_deref());
    info!(
        records = envelope.len(),
        bytes = payload.len(),
        %format,
        "Parsed response"
    );

    let rendered = render(&envelope, format, cli.pretty(&config))?;
    println!("{rendered}");

    Ok(())
}
