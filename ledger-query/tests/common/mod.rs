//! Scripted in-memory remote port shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use ledger_query::{
    AccountInfo, AccountLine, AccountLinesPage, AccountLinesRequest, LedgerVersion, Marker,
    RemoteError, RemoteQueryPort, RemoteResult,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub const ACCOUNT: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
pub const ISSUER: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";
pub const CURRENT_LEDGER: LedgerVersion = LedgerVersion(8_819_951);

/// Port answering from pre-recorded responses
pub struct ScriptedPort {
    pages: Mutex<VecDeque<RemoteResult<AccountLinesPage>>>,
    sequence: RemoteResult<LedgerVersion>,
    account_info: RemoteResult<AccountInfo>,
    page_delay: Option<Duration>,
    pub line_requests: Mutex<Vec<AccountLinesRequest>>,
    pub info_requests: Mutex<Vec<LedgerVersion>>,
    pub sequence_calls: AtomicUsize,
}

impl ScriptedPort {
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(VecDeque::new()),
            sequence: Ok(CURRENT_LEDGER),
            account_info: Ok(AccountInfo {
                balance: "922913243".to_string(),
                sequence: 23,
            }),
            page_delay: None,
            line_requests: Mutex::new(Vec::new()),
            info_requests: Mutex::new(Vec::new()),
            sequence_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_page(self, page: RemoteResult<AccountLinesPage>) -> Self {
        self.pages.lock().unwrap().push_back(page);
        self
    }

    pub fn with_lines(self, marker: Option<&str>, lines: Vec<AccountLine>) -> Self {
        self.with_page(Ok(AccountLinesPage {
            marker: marker.map(Marker::from),
            lines,
        }))
    }

    pub fn with_sequence(mut self, sequence: RemoteResult<LedgerVersion>) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn with_account_info(mut self, info: RemoteResult<AccountInfo>) -> Self {
        self.account_info = info;
        self
    }

    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = Some(delay);
        self
    }

    pub fn sequence_calls(&self) -> usize {
        self.sequence_calls.load(Ordering::SeqCst)
    }

    pub fn line_requests(&self) -> Vec<AccountLinesRequest> {
        self.line_requests.lock().unwrap().clone()
    }

    pub fn info_requests(&self) -> Vec<LedgerVersion> {
        self.info_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteQueryPort for ScriptedPort {
    async fn request_account_lines(
        &self,
        request: &AccountLinesRequest,
    ) -> RemoteResult<AccountLinesPage> {
        self.line_requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.page_delay {
            tokio::time::sleep(delay).await;
        }
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::Malformed("no scripted page left".to_string())))
    }

    async fn get_ledger_sequence(&self) -> RemoteResult<LedgerVersion> {
        self.sequence_calls.fetch_add(1, Ordering::SeqCst);
        self.sequence.clone()
    }

    async fn request_account_info(
        &self,
        _account: &str,
        ledger_version: LedgerVersion,
    ) -> RemoteResult<AccountInfo> {
        self.info_requests.lock().unwrap().push(ledger_version);
        self.account_info.clone()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Wire trust line with the given currency and balance
pub fn line(currency: &str, balance: &str) -> AccountLine {
    AccountLine {
        account: ISSUER.to_string(),
        balance: balance.to_string(),
        currency: currency.to_string(),
        limit: "1000".to_string(),
        limit_peer: "0".to_string(),
        ..Default::default()
    }
}

/// `count` USD lines with balances `start..start + count`
pub fn usd_lines(start: usize, count: usize) -> Vec<AccountLine> {
    (start..start + count)
        .map(|i| line("USD", &i.to_string()))
        .collect()
}
