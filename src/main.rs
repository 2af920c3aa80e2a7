use clap::Parser;

use shortlink::cli::{Cli, Commands};
use shortlink::config::{DEFAULT_CONFIG_PATH, init_config_from};
use shortlink::runtime::modes;
use shortlink::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let config = init_config_from(config_path);

    // guard 必须存活到进程结束
    let guard = init_logging(&config.logging);

    match cli.command {
        None | Some(Commands::Serve) => modes::run_server().await,
        Some(cmd) => {
            if let Err(e) = modes::run_cli(cmd).await {
                eprintln!("{}", e.format_colored());
                drop(guard);
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
