use autopop::utils::{logger, validation::Validate};
use autopop::{ApiClient, CliConfig, PhraseBank, PopulationEngine, TextSynthesizer, ThreadIndexSource};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting autopop CLI");
    if config.verbose {
        tracing::debug!(
            "Target: {} request {} ({} comments × {} replies)",
            config.base_url,
            config.request_id,
            config.num_comments,
            config.num_replies
        );
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // 建立客戶端與引擎
    let client = ApiClient::from_config(&config)?;
    let bank = PhraseBank::builtin();
    let synthesizer = TextSynthesizer::new(&bank, ThreadIndexSource);
    let mut engine = PopulationEngine::new(client, synthesizer);

    let report = engine
        .run(&config.request_id, config.num_comments, config.num_replies)
        .await;

    if report.comments_created < report.comments_attempted
        || report.replies_created < report.replies_attempted
    {
        tracing::warn!(
            "⚠️ Shortfall: {}/{} comments and {}/{} replies created",
            report.comments_created,
            report.comments_attempted,
            report.replies_created,
            report.replies_attempted
        );
    } else {
        tracing::info!("✅ Population completed in full");
    }

    Ok(())
}
