use clap::Parser;

use linkdeck::cli::Cli;
use linkdeck::runtime::lifetime::startup::{StartupOptions, client_pre_startup};
use linkdeck::runtime::modes::{Mode, detect_mode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 文件可选
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mode = detect_mode(cli.command.as_ref());

    let options = StartupOptions {
        config_path: cli.config.clone(),
        base_url: cli.base_url.clone(),
    };
    let log_guard = match client_pre_startup(&options, mode.log_target()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let exit_code = match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => match linkdeck::runtime::modes::run_tui().await {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("TUI error: {}", e);
                1
            }
        },
        #[cfg(feature = "cli")]
        Mode::Cli => match cli.command {
            Some(command) => match linkdeck::runtime::modes::run_cli(command).await {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("{}", e.format_colored());
                    1
                }
            },
            None => 0,
        },
        Mode::Unknown => {
            eprintln!("No interface enabled. Build with --features cli or --features tui");
            1
        }
    };

    // 退出前刷新日志
    drop(log_guard);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
