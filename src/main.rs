use clap::Parser;
use small_cookbook::core::ConfigProvider;
use small_cookbook::utils::error::{CookbookError, ErrorSeverity};
use small_cookbook::utils::logger;
use small_cookbook::{serve, CliConfig, Cookbook};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level.as_deref());
    }

    tracing::info!("Starting small-cookbook");
    if cli.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = serve(Cookbook::new(), &config.bind_address()).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(e: &CookbookError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
