//! `pdfgate serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use pdfgate_config::{CliSettings, Config, GATEWAY_URL_ENV};
use pdfgate_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover pdfgate.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Base URL of the external HTML-to-PDF renderer (overrides config and
    /// the API_HTML_TO_PDF environment variable).
    #[arg(long)]
    gateway_url: Option<String>,

    /// Enable verbose output (request and renderer logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            gateway_url: self.gateway_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        if let Some(path) = &config.config_path {
            output.info(&format!("Config file: {}", path.display()));
        }
        match &config.gateway.base_url {
            Some(url) => output.info(&format!(
                "Renderer URL: {url} (timeout {}s)",
                config.gateway.timeout_secs
            )),
            None => output.warning(&format!(
                "Renderer URL not set ({GATEWAY_URL_ENV}): PDF routes will fail"
            )),
        }

        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
