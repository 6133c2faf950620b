/// E2E Test: Error Scenarios
///
/// This test validates error handling across the full stack:
/// 1. Malformed webhook destinations
/// 2. Failed deliveries and the escalation policy
/// 3. Transport failures during check-in
/// 4. Undocumented retcodes
use std::sync::Arc;
use std::time::Duration;

use dailyclaim_domain::check_in::CheckInOutcome;
use dailyclaim_domain::events::{RecordingSink, RunEvent};
use dailyclaim_domain::notification::{DeliveryResult, NotificationMessage, NotificationSender};
use dailyclaim_domain::policy::{EscalationPolicy, RunStatus};
use dailyclaim_domain::report::FailureKind;
use dailyclaim_domain::{DomainError, Game};
use dailyclaim_infrastructure::notification::DiscordWebhookSender;
use dailyclaim_infrastructure::persistence::FileRunCounter;
use dailyclaim_lib::application::services::{plan_accounts, CheckInExecutor, Notifier, RunDriver};

mod test_helpers;

use test_helpers::{owned, FakeGateway, FakeSender};

#[tokio::test]
async fn e2e_error_malformed_webhook() {
    // ============================================================
    // A non-Discord URL fails before any request is made
    // ============================================================
    let sender = DiscordWebhookSender::new("https://example.com/hook", Duration::from_secs(1));

    let result = sender.send(&NotificationMessage::new("hello")).await;

    assert!(matches!(result, Err(DomainError::InvalidWebhook(_))));

    println!("✓ Malformed webhook rejected locally");

    // ============================================================
    // The run still finishes with a failed delivery
    // ============================================================
    let driver = RunDriver::new(
        CheckInExecutor::new(Arc::new(FakeGateway::new())),
        EscalationPolicy::default(),
    )
    .with_notifier(Notifier::new(Arc::new(sender)));

    let plans = plan_accounts(&owned(&["a"]), &owned(&["gi"]));
    let mut console = RecordingSink::default();
    let summary = driver.run(&plans, None, &mut console).await;

    assert!(matches!(summary.delivery, Some(DeliveryResult::Failed(_))));
    assert!(matches!(
        console.events.last(),
        Some(RunEvent::NotificationFailed { .. })
    ));
    assert_eq!(summary.status.exit_code(), 0);

    println!("✓ Delivery failure is non-fatal by default");
}

#[tokio::test]
async fn e2e_error_delivery_escalation() {
    let policy = EscalationPolicy {
        delivery: true,
        ..Default::default()
    };
    let driver = RunDriver::new(CheckInExecutor::new(Arc::new(FakeGateway::new())), policy)
        .with_notifier(Notifier::new(FakeSender::failing("status 500")));

    let plans = plan_accounts(&owned(&["a"]), &owned(&["gi"]));
    let mut console = RecordingSink::default();
    let summary = driver.run(&plans, None, &mut console).await;

    assert_eq!(summary.status.exit_code(), 1);
    match summary.status {
        RunStatus::Failed { reasons } => assert!(reasons[0].contains("status 500")),
        RunStatus::Succeeded => panic!("run should fail"),
    }

    println!("✓ Delivery failure escalated when enabled");
}

#[tokio::test]
async fn e2e_error_auth_escalation() {
    let gateway = Arc::new(FakeGateway::new().reply("a", Game::Hsr, "-100"));
    let plans = plan_accounts(&owned(&["a"]), &owned(&["hsr"]));

    // ============================================================
    // Lenient by default
    // ============================================================
    let lenient = RunDriver::new(
        CheckInExecutor::new(gateway.clone()),
        EscalationPolicy::default(),
    );
    let summary = lenient.run(&plans, None, &mut RecordingSink::default()).await;
    assert_eq!(summary.status, RunStatus::Succeeded);

    // ============================================================
    // Fatal when the flag is set
    // ============================================================
    let strict = RunDriver::new(
        CheckInExecutor::new(gateway),
        EscalationPolicy {
            auth_errors: true,
            ..Default::default()
        },
    );
    let summary = strict.run(&plans, None, &mut RecordingSink::default()).await;
    assert_eq!(summary.status.exit_code(), 1);

    println!("✓ Invalid cookie escalates only when configured");
}

#[tokio::test]
async fn e2e_error_transport_failure_continues() {
    let gateway = Arc::new(
        FakeGateway::new()
            .fail("a", Game::Gi, "timed out")
            .reply("a", Game::Zzz, "-999"),
    );
    let sender = FakeSender::delivering();
    let driver = RunDriver::new(
        CheckInExecutor::new(gateway.clone()),
        EscalationPolicy::default(),
    )
    .with_notifier(Notifier::new(sender.clone()));

    let plans = plan_accounts(&owned(&["a"]), &owned(&["gi zzz hsr"]));
    let summary = driver.run(&plans, None, &mut RecordingSink::default()).await;

    // Every game was still attempted
    assert_eq!(gateway.calls().len(), 3);

    let kinds: Vec<&FailureKind> = summary
        .report
        .errors
        .iter()
        .map(|e| &e.failure.kind)
        .collect();
    assert!(matches!(
        kinds[0],
        FailureKind::Outcome {
            outcome: CheckInOutcome::TransportError { .. }
        }
    ));
    assert_eq!(
        kinds[1],
        &FailureKind::Outcome {
            outcome: CheckInOutcome::Undocumented {
                retcode: "-999".to_string()
            }
        }
    );

    let content = &sender.sent()[0].content;
    assert!(content.contains("your 1st account's Genshin Impact (request failed)"));
    assert!(content.contains("Zenless Zone Zero (undocumented retcode -999)"));
    assert!(content.contains("**Honkai: Star Rail**"));

    println!("✓ Transport and undocumented errors reported, run continued");
}

#[tokio::test]
async fn e2e_run_counter_numbers_messages() {
    let dir = tempfile::tempdir().unwrap();
    let counter = Arc::new(FileRunCounter::new(dir.path().join("runs")));
    let sender = FakeSender::delivering();

    let driver = RunDriver::new(
        CheckInExecutor::new(Arc::new(FakeGateway::new())),
        EscalationPolicy::default(),
    )
    .with_notifier(Notifier::new(sender.clone()).with_counter(counter));

    let plans = plan_accounts(&owned(&["a"]), &owned(&["gi"]));
    driver.run(&plans, None, &mut RecordingSink::default()).await;
    driver.run(&plans, None, &mut RecordingSink::default()).await;

    let sent = sender.sent();
    assert!(sent[0].content.ends_with("You're welcome... (run #1)"));
    assert!(sent[1].content.ends_with("You're welcome... (run #2)"));

    println!("✓ Run counter persisted between runs");
}
