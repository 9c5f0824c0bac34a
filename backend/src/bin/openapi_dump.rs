//! Print the OpenAPI document for the employee API.
//!
//! ```text
//! openapi-dump              # JSON on stdout
//! openapi-dump --format yaml
//! ```

use backend::ApiDoc;
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// Export the OpenAPI document.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the employee API OpenAPI document")]
struct Cli {
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn render(format: Format) -> Result<String> {
    let doc = ApiDoc::openapi();
    match format {
        Format::Json => doc
            .to_pretty_json()
            .wrap_err("failed to serialise OpenAPI document as JSON"),
        Format::Yaml => doc
            .to_yaml()
            .wrap_err("failed to serialise OpenAPI document as YAML"),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    println!("{}", render(cli.format)?);
    Ok(())
}
