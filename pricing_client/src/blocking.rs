//! Blocking facade over `PricingClient`.
//!
//! The client owns a multi-threaded tokio runtime that drives the channel. `quote`
//! parks the calling thread until the call resolves, so it must not be used from
//! inside an async context. The type is `Sync`: any number of OS threads may call it
//! at once and each call still gets its own stream on the shared channel.
use std::time::Duration;

use pricing_common::{ClientConfig, PricingError, RemoteCallError};
use tokio::runtime::{Builder, Runtime};

use crate::client::PricingClient;
use crate::model::quote::{QuoteInput, QuoteResult};

/// Number of runtime workers driving the channel.
const WORKER_THREADS: usize = 2;

/// Thread-blocking pricing client.
#[derive(Debug)]
pub struct BlockingPricingClient {
    client: PricingClient,
    runtime: Runtime,
}

impl BlockingPricingClient {
    /// Builds the runtime and a lazily connecting channel for `config`.
    pub fn connect(config: &ClientConfig) -> Result<Self, PricingError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(WORKER_THREADS)
            .thread_name("pricing-client")
            .enable_all()
            .build()?;
        // The lazy channel spawns its connection worker onto the current runtime.
        let client = {
            let _guard = runtime.enter();
            PricingClient::connect_lazy(config)?
        };
        Ok(BlockingPricingClient { client, runtime })
    }

    /// Quotes `input`, blocking until the call resolves.
    pub fn quote(&self, input: &QuoteInput) -> Result<QuoteResult, RemoteCallError> {
        self.runtime.block_on(self.client.quote(input))
    }

    /// Quotes `input`, blocking for at most `timeout`.
    pub fn quote_with_timeout(
        &self,
        input: &QuoteInput,
        timeout: Duration,
    ) -> Result<QuoteResult, RemoteCallError> {
        self.runtime
            .block_on(self.client.quote_with_timeout(input, timeout))
    }
}
