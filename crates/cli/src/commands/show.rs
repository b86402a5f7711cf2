//! Show command: print the resolved endpoints.

use anyhow::Result;

use api_endpoints_config::Endpoints;

use crate::args::OutputFormat;
use crate::formatters::format_endpoints;

pub fn run(endpoints: &Endpoints, output: OutputFormat) -> Result<()> {
    println!("{}", format_endpoints(endpoints, output)?);
    Ok(())
}
