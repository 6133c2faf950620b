#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dailyclaim_domain::check_in::{CheckInGateway, ClaimResponse};
use dailyclaim_domain::notification::{NotificationMessage, NotificationSender};
use dailyclaim_domain::{DomainError, Game};

type Reply = Result<String, String>;

/// Gateway answering from a table keyed by (cookie, game)
///
/// Unknown pairs answer with retcode `0`. Every call is logged.
#[derive(Default)]
pub struct FakeGateway {
    replies: HashMap<(String, Game), Reply>,
    calls: Mutex<Vec<(String, Game)>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, cookie: &str, game: Game, retcode: &str) -> Self {
        self.replies
            .insert((cookie.to_string(), game), Ok(retcode.to_string()));
        self
    }

    pub fn fail(mut self, cookie: &str, game: Game, reason: &str) -> Self {
        self.replies
            .insert((cookie.to_string(), game), Err(reason.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(String, Game)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckInGateway for FakeGateway {
    async fn claim(&self, cookie: &str, game: Game) -> Result<ClaimResponse, DomainError> {
        self.calls.lock().unwrap().push((cookie.to_string(), game));

        match self.replies.get(&(cookie.to_string(), game)) {
            Some(Ok(retcode)) => Ok(ClaimResponse::new(retcode.clone())),
            Some(Err(reason)) => Err(DomainError::Transport(reason.clone())),
            None => Ok(ClaimResponse::new("0")),
        }
    }
}

/// Sender that keeps every message and answers with a fixed result
pub struct FakeSender {
    failure: Option<String>,
    sent: Mutex<Vec<NotificationMessage>>,
}

impl FakeSender {
    pub fn delivering() -> Arc<Self> {
        Arc::new(Self {
            failure: None,
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(reason.to_string()),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for FakeSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(message.clone());
        match &self.failure {
            Some(reason) => Err(DomainError::Delivery(reason.clone())),
            None => Ok(()),
        }
    }
}

pub fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
