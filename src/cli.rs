use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Formsmith - form builder with live preview and canonical JSON export
#[derive(Parser, Debug, Clone)]
#[command(name = "formsmith", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMSMITH_CONFIG", default_value = "formsmith.toml", global = true)]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMSMITH_HOST", global = true)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMSMITH_PORT", global = true)]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FORMSMITH_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the builder UI and JSON API (default)
    Serve,
    /// Validate a definition file and write its canonical JSON
    Export {
        /// Definition file (.json, .yaml or .yml)
        input: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the canonical JSON of the seed definition
    Seed,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["formsmith"]);
        assert_eq!(cli.config, PathBuf::from("formsmith.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.log_level.is_none());
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "formsmith",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "debug",
            "serve",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_export_subcommand() {
        let cli = Cli::parse_from(["formsmith", "export", "form.yaml", "--output", "out.json"]);
        assert_eq!(
            cli.command(),
            Command::Export {
                input: PathBuf::from("form.yaml"),
                output: Some(PathBuf::from("out.json")),
            }
        );

        let cli = Cli::parse_from(["formsmith", "seed"]);
        assert_eq!(cli.command(), Command::Seed);
    }
}
