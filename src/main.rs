use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use discover_sync::{
    cli,
    config::{self, AuthConfig, SyncConfig},
    error,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in to Spotify and store the token in S3
    Auth,

    /// Copy saved Discover Weekly tracks into the target playlist
    Sync,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let cfg = match AuthConfig::from_env() {
                Ok(cfg) => cfg,
                Err(e) => error!("{}", e),
            };
            if let Err(e) = cli::auth(&cfg).await {
                error!("{}", e);
            }
        }
        Command::Sync => {
            let cfg = match SyncConfig::from_env() {
                Ok(cfg) => cfg,
                Err(e) => error!("{}", e),
            };
            match cli::sync(&cfg).await {
                Ok(report) => cli::print_report(&report),
                Err(e) => error!("{}", e),
            }
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
