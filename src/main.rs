use clap::Parser;
use formsmith::adapters::export_sink::{FileSink, StdoutSink};
use formsmith::cli::{Cli, Command};
use formsmith::commands::{self, CommandError};
use formsmith::config::Settings;
use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(settings.log_level())
        .with_writer(std::io::stderr)
        .init();

    match cli.command() {
        Command::Serve => {
            serve(&settings).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Export { input, output } => Ok(export(&input, output.as_deref())),
        Command::Seed => {
            println!("{}", commands::seed_export()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!("Starting Formsmith on {}", addr);

    let app = formsmith::create_app();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn export(input: &Path, output: Option<&Path>) -> ExitCode {
    let result = match output {
        Some(path) => {
            let mut sink = FileSink::new(path);
            match commands::export_file(input, &mut sink) {
                Ok(_) => match sink.failure.take() {
                    Some(e) => {
                        eprintln!("Failed to write {}: {}", path.display(), e);
                        return ExitCode::FAILURE;
                    }
                    None => Ok(()),
                },
                Err(e) => Err(e),
            }
        }
        None => commands::export_file(input, &mut StdoutSink).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Export(e)) if !e.field_errors().is_empty() => {
            error!("{}", e);
            for field_error in e.field_errors() {
                eprintln!("{}", field_error);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
