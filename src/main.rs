use std::io;
use std::process::ExitCode;

use clap::Parser;

use library_catalog::application::service::CatalogService;
use library_catalog::config::init_logging;
use library_catalog::infra::json_store::JsonCatalogRepository;
use library_catalog::interface::cli::{self, Cli, Command};
use library_catalog::interface::{mcp, shell::Shell};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config();

    match cli.command.unwrap_or(Command::Shell) {
        Command::Serve => {
            mcp::run(config.data_file().to_path_buf()).await?;
        }
        Command::Shell => {
            let service = CatalogService::new(JsonCatalogRepository::new(config.data_file()));
            let stdin = io::stdin();
            Shell::new(service, stdin.lock(), io::stdout()).run()?;
        }
        Command::Op(operation) => {
            let service = CatalogService::new(JsonCatalogRepository::new(config.data_file()));
            match cli::execute(&service, &operation) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
