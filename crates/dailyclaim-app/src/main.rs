use anyhow::Context;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use dailyclaim_infrastructure::config::AppConfig;
use dailyclaim_infrastructure::events::ConsoleEventSink;
use dailyclaim_infrastructure::http::HoyolabClient;
use dailyclaim_infrastructure::logging::init_logger;
use dailyclaim_infrastructure::notification::DiscordWebhookSender;
use dailyclaim_infrastructure::persistence::FileRunCounter;
use dailyclaim_lib::application::services::{plan_accounts, CheckInExecutor, Notifier, RunDriver};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // The logger may be the thing that failed
            eprintln!("dailyclaim: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns the process exit code; the log file is flushed before returning
async fn run() -> anyhow::Result<u8> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _log_guard = init_logger(None)?;
            tracing::error!(severity = ?e.severity(), "{}", e.format_with_code());
            return Ok(1);
        }
    };

    let _log_guard =
        init_logger(config.log_dir.as_deref()).context("Failed to initialise logging")?;
    tracing::info!(
        accounts = config.cookies.len(),
        webhook = config.discord_webhook.is_some(),
        "🚀 dailyclaim starting..."
    );

    let client = HoyolabClient::with_timeouts(&config.timeouts)?;
    let executor = CheckInExecutor::new(Arc::new(client));
    let mut driver = RunDriver::new(executor, config.policy);

    if let Some(url) = &config.discord_webhook {
        let sender = DiscordWebhookSender::new(url.clone(), config.timeouts.webhook);
        let mut notifier = Notifier::new(Arc::new(sender));
        if let Some(path) = &config.run_counter_file {
            notifier = notifier.with_counter(Arc::new(FileRunCounter::new(path)));
        }
        driver = driver.with_notifier(notifier);
    }

    let plans = plan_accounts(&config.cookies, &config.games);
    let mut console = ConsoleEventSink::new();

    let span = tracing::info_span!("run", run_id = %Uuid::new_v4());
    let summary = driver
        .run(&plans, config.discord_user.as_deref(), &mut console)
        .instrument(span)
        .await;

    Ok(summary.status.exit_code())
}
