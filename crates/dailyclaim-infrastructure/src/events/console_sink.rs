use dailyclaim_domain::events::{EventLevel, EventSink, RunEvent};

/// Mirrors run events to the console through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleEventSink;

impl ConsoleEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for ConsoleEventSink {
    fn emit(&mut self, event: &RunEvent) {
        // Run-level events carry neither field
        let account = event
            .account()
            .map(|a| a.number().to_string())
            .unwrap_or_else(|| "-".to_string());
        let game = event.game().unwrap_or_else(|| "-".to_string());
        let message = event.message();

        match event.level() {
            EventLevel::Debug => tracing::debug!(
                target: "dailyclaim::run",
                account = %account,
                game = %game,
                "{}",
                message
            ),
            EventLevel::Info => tracing::info!(
                target: "dailyclaim::run",
                account = %account,
                game = %game,
                "{}",
                message
            ),
            EventLevel::Warn => tracing::warn!(
                target: "dailyclaim::run",
                account = %account,
                game = %game,
                "{}",
                message
            ),
            EventLevel::Error => tracing::error!(
                target: "dailyclaim::run",
                account = %account,
                game = %game,
                "{}",
                message
            ),
        }
    }
}
