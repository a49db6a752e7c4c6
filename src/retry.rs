//! 実行全体の再試行ポリシー
//!
//! 固定回数・固定待ち時間。最後の試行の失敗はそのまま呼び出し元へ返す。

use crate::error::Result;
use std::time::Duration;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// 試行回数（初回を含む、最低1）
    attempts: u32,
    wait_minutes: u64,
}

impl RetryPolicy {
    pub fn new(attempts: u32, wait_minutes: u64) -> Self {
        Self {
            attempts: attempts.max(1),
            wait_minutes,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn wait(&self) -> Duration {
        Duration::from_secs(self.wait_minutes.saturating_mul(60))
    }

    /// `op` を最大 `attempts` 回実行する。引数は1始まりの試行番号。
    pub fn run<T, F>(&self, mut op: F) -> Result<T>
    where
        F: FnMut(u32) -> Result<T>,
    {
        let mut attempt = 1;
        loop {
            match op(attempt) {
                Ok(value) => return Ok(value),
                Err(e) if !e.is_retryable() => {
                    error!("{} (再試行しません)", e);
                    return Err(e);
                }
                Err(e) if attempt >= self.attempts => {
                    error!("{} ({}回試行して失敗)", e, attempt);
                    return Err(e);
                }
                Err(e) => {
                    warn!("Error: {}. Retrying in {} minutes...", e, self.wait_minutes);
                    std::thread::sleep(self.wait());
                    attempt += 1;
                }
            }
        }
    }
}
