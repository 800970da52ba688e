//! `fp serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use fp_config::{CliSettings, Config};
use fp_i18n::Language;
use fp_server::{run_server, server_config_from_fp_config};

use crate::error::CliError;
use crate::output::{Output, Tone};

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover fp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Language selected at startup: en or pt (overrides config).
    #[arg(short, long, env = "FP_LANGUAGE")]
    language: Option<Language>,

    /// Enable verbose output (request tracing and startup details).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
            language: self.language,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        config.validate()?;

        let server_config = server_config_from_fp_config(&config, version.to_owned())?;

        let packages: Vec<_> = server_config
            .registry
            .packages()
            .iter()
            .map(|package| package.display_name.as_str())
            .collect();

        output.setting(
            "Listening on",
            format!("{}:{}", server_config.host, server_config.port),
        );
        output.setting("Content directory", server_config.content_dir.display());
        output.setting("Language", server_config.default_language.native_name());
        output.setting("Packages", packages.join(", "));
        if !server_config.content_dir.is_dir() {
            output.line(
                Tone::Warning,
                "Content directory does not exist, every page will be a placeholder",
            );
        }
        output.line(Tone::Highlight, &format!("Open {}", server_config.public_url()));

        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    }
}
