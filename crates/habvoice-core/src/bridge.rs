// ── Bridge abstraction ──
//
// Full lifecycle for one openHAB connection: the self-rescheduling
// inventory sync loop, the live-snapshot accessors consumed by the agent
// layer, and the per-device-class command dispatchers.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use habvoice_api::{RawItem, RestClient, TlsMode, TransportConfig};

use crate::capabilities::{self, CapabilitySchema};
use crate::classify;
use crate::config::{BridgeConfig, TlsVerification};
use crate::error::CoreError;
use crate::instructions;
use crate::model::Snapshot;
use crate::store::SnapshotStore;

/// Shutter action whose effect is complete once the write lands. Open and
/// close keep running on the server after the request returns.
const SHUTTER_STOP: &str = "stop";

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<BridgeInner>`. The sync loop is the only
/// writer of the live snapshot; the dispatch operations are independent of
/// it and only use the configured connection.
#[derive(Clone)]
pub struct Bridge {
    inner: Arc<BridgeInner>,
}

struct BridgeInner {
    config: BridgeConfig,
    client: RestClient,
    store: SnapshotStore,
    cancel: CancellationToken,
    poll_task: Mutex<Option<JoinHandle<()>>>,
}

impl Bridge {
    /// Create a new Bridge from configuration. Does NOT poll -- call
    /// [`start()`](Self::start) for the continuous loop or
    /// [`refresh()`](Self::refresh) for a single cycle.
    pub fn new(config: BridgeConfig) -> Result<Self, CoreError> {
        let transport = build_transport(&config);
        let client = RestClient::from_token(config.url.as_str(), &config.api_token, &transport)?;

        Ok(Self {
            inner: Arc::new(BridgeInner {
                config,
                client,
                store: SnapshotStore::new(),
                cancel: CancellationToken::new(),
                poll_task: Mutex::new(None),
            }),
        })
    }

    /// Access the bridge configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.inner.config
    }

    // ── Synchronization cycle ────────────────────────────────────

    /// Run one poll-classify-publish cycle.
    ///
    /// Fetches the server version and the item inventory, classifies the
    /// items, and publishes a fresh snapshot atomically. Fetch failures
    /// degrade the affected call to absent/empty and land in the
    /// snapshot's error list -- the cycle always completes and this method
    /// never fails. There are no intra-call retries; the retry unit is
    /// the next cycle.
    pub async fn refresh(&self) {
        let mut errors = Vec::new();

        let version = self.fetch_version(&mut errors).await;
        let items = self.fetch_items(&mut errors).await;
        let classified = classify::classify(&items);

        debug!(
            locations = classified.locations.len(),
            switches = classified.switches.len(),
            shutters = classified.shutters.len(),
            errors = errors.len(),
            "sync cycle complete"
        );

        self.inner.store.publish(Snapshot {
            locations: classified.locations,
            switches: classified.switches,
            shutters: classified.shutters,
            version,
            errors,
            refreshed_at: Some(Utc::now()),
        });
    }

    async fn fetch_version(&self, errors: &mut Vec<String>) -> Option<String> {
        match self.inner.client.system_info().await {
            Ok(resp) => resp.system_info.os_version,
            Err(e) => {
                warn!(error = %e, "system info fetch failed");
                errors.push(e.to_string());
                None
            }
        }
    }

    async fn fetch_items(&self, errors: &mut Vec<String>) -> Vec<RawItem> {
        match self.inner.client.list_items().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "item inventory fetch failed");
                errors.push(e.to_string());
                Vec::new()
            }
        }
    }

    // ── Sync loop lifecycle ──────────────────────────────────────

    /// Spawn the continuous sync loop.
    ///
    /// The loop publishes its first snapshot immediately, then sleeps the
    /// configured delay *after* each cycle finishes, so cycles never
    /// overlap. It runs until [`shutdown()`](Self::shutdown).
    pub async fn start(&self) {
        let bridge = self.clone();
        let cancel = self.inner.cancel.clone();
        let delay = self.inner.config.poll_delay;

        let handle = tokio::spawn(poll_task(bridge, delay, cancel));
        *self.inner.poll_task.lock().await = Some(handle);
    }

    /// Stop the sync loop and wait for it to finish its current cycle.
    pub async fn shutdown(&self) {
        self.inner.cancel.cancel();
        if let Some(handle) = self.inner.poll_task.lock().await.take() {
            let _ = handle.await;
        }
        debug!("bridge stopped");
    }

    // ── One-shot convenience ─────────────────────────────────────

    /// One-shot: build a bridge, run a single sync cycle, hand the bridge
    /// to the closure.
    ///
    /// Optimized for the CLI: no background loop is started, so there is
    /// nothing to shut down afterwards.
    pub async fn oneshot<F, Fut, T>(config: BridgeConfig, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(Bridge) -> Fut,
        Fut: std::future::Future<Output = Result<T, CoreError>>,
    {
        let bridge = Bridge::new(config)?;
        bridge.refresh().await;
        f(bridge).await
    }

    // ── Snapshot accessors ───────────────────────────────────────
    //
    // All of these read the live snapshot at call time: once the loop has
    // published a newer cycle, the next call reflects it.

    /// The live snapshot (cheap `Arc` clone). Empty before the first
    /// cycle completes.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.inner.store.current()
    }

    /// Current rendered instruction text.
    pub fn instructions(&self) -> String {
        instructions::render(&self.snapshot())
    }

    /// Current capability schema sequence.
    pub fn capabilities(&self) -> Vec<CapabilitySchema> {
        capabilities::select(&self.snapshot())
    }

    /// Current server version, if the last system-info read succeeded.
    pub fn version(&self) -> Option<String> {
        self.snapshot().version.clone()
    }

    /// Fetch failure messages from the most recent cycle.
    pub fn errors(&self) -> Vec<String> {
        self.snapshot().errors.clone()
    }

    // ── Command dispatch ─────────────────────────────────────────
    //
    // Independent of the snapshot: only the configured connection is
    // used, so a dispatch can run concurrently with an in-flight cycle.

    /// Dispatch an action to a batch of switches.
    ///
    /// Issues one write per id, in order. The result is always a string
    /// for the agent layer: `"Done."` on full success, `"Error: ..."` as
    /// soon as one write fails (remaining ids are not attempted, and
    /// already-written ids are not rolled back).
    pub async fn update_switches(&self, action: &str, ids: &[String]) -> String {
        match self.send_to_all(action, ids).await {
            Ok(()) => "Done.".to_owned(),
            Err(e) => format!("Error: {e}"),
        }
    }

    /// Dispatch an action to a batch of shutters.
    ///
    /// Same per-id semantics as [`update_switches`](Self::update_switches).
    /// On full success, only `"stop"` reports `"Done."` -- open and close
    /// complete asynchronously on the server and report `"In progress."`.
    pub async fn update_shutters(&self, action: &str, ids: &[String]) -> String {
        match self.send_to_all(action, ids).await {
            Ok(()) if action == SHUTTER_STOP => "Done.".to_owned(),
            Ok(()) => "In progress.".to_owned(),
            Err(e) => format!("Error: {e}"),
        }
    }

    /// Send the uppercased action token to every id, strictly
    /// sequentially: id N+1 is not attempted until id N's call resolves,
    /// and the first failure aborts the rest.
    async fn send_to_all(&self, action: &str, ids: &[String]) -> Result<(), habvoice_api::Error> {
        let command = action.to_uppercase();
        for id in ids {
            self.inner.client.send_item_command(id, &command).await?;
        }
        Ok(())
    }
}

// ── Background task ──────────────────────────────────────────────────

/// The self-rescheduling sync loop.
///
/// `sleep` rather than `interval`: the delay is measured from the end of
/// one cycle to the start of the next, so a slow cycle stretches the
/// period instead of overlapping the next tick.
async fn poll_task(bridge: Bridge, delay: Duration, cancel: CancellationToken) {
    info!(delay_secs = delay.as_secs(), "inventory sync loop started");

    loop {
        bridge.refresh().await;

        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            () = tokio::time::sleep(delay) => {}
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Build a [`TransportConfig`] from the bridge configuration.
fn build_transport(config: &BridgeConfig) -> TransportConfig {
    TransportConfig {
        tls: tls_to_transport(&config.tls),
        timeout: config.timeout,
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}
