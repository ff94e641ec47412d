//! Command-line argument parsing for evalview.

use clap::Parser;
use evalview::config::{Config, OutputFormat};
use evalview::error::{Result, ViewError};
use evalview::response::boundary_from_content_type;
use std::io::Read;
use std::path::PathBuf;

/// Parse a query eval response and print its records.
#[derive(Parser, Debug)]
#[command(name = "evalview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File containing the raw response body ("-" or absent reads stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Multipart boundary token (without the leading "--")
    #[arg(short = 'b', long, value_name = "TOKEN")]
    pub boundary: Option<String>,

    /// Response Content-Type header, used to find the multipart boundary
    #[arg(short = 't', long, value_name = "HEADER", env = "EVALVIEW_CONTENT_TYPE")]
    pub content_type: Option<String>,

    /// Output format: text, json, or aggregate
    #[arg(short = 'o', long, value_name = "FORMAT")]
    pub output: Option<String>,

    /// Print record content as received, without pretty printing
    #[arg(long)]
    pub raw: bool,

    /// Print the highlighting language for a query type and exit
    #[arg(long, value_name = "QUERY_TYPE")]
    pub query_type: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Resolves the multipart boundary with precedence:
    /// 1. --boundary
    /// 2. boundary parameter of --content-type
    /// 3. boundary from the config file
    pub fn resolve_boundary(&self, config: &Config) -> Option<String> {
        self.boundary
            .clone()
            .or_else(|| {
                self.content_type
                    .as_deref()
                    .and_then(boundary_from_content_type)
            })
            .or_else(|| config.multipart.boundary.clone())
    }

    /// Resolves the output format, preferring --output over the config file.
    pub fn output_format(&self, config: &Config) -> Result<OutputFormat> {
        match &self.output {
            Some(format) => format.parse(),
            None => Ok(config.output.format),
        }
    }

    /// Returns true if record content should be pretty printed.
    pub fn pretty(&self, config: &Config) -> bool {
        !self.raw && config.output.pretty
    }

    /// Reads the raw response from the input file or stdin.
    pub fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .map_err(|e| ViewError::input(format!("{}: {e}", path.display()))),
            _ => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| ViewError::input(format!("Failed to read stdin: {e}")))?;
                Ok(buf)
            }
        }
    }
}
