use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Suspends the retry loop between attempts.
#[async_trait::async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, delay: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait::async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Records requested delays and returns immediately.
#[derive(Debug, Default, Clone)]
pub struct TrackingSleeper {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl TrackingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delays(&self) -> Vec<Duration> {
        match self.delays.lock() {
            Ok(delays) => delays.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait::async_trait]
impl Sleeper for TrackingSleeper {
    async fn sleep(&self, delay: Duration) {
        match self.delays.lock() {
            Ok(mut delays) => delays.push(delay),
            Err(poisoned) => poisoned.into_inner().push(delay),
        }
    }
}
