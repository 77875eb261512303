use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use board_logging::{board_debug, board_error, board_warn};
use futures_util::future::join_all;
use tokio_util::sync::CancellationToken;

use crate::policy::ClassifyPolicy;
use crate::probe::{ProbeSettings, Prober, ReqwestProber};
use crate::types::{PollEvent, ProbeError, ProbeOutcome, ProbeReport, ProbeSignal, ProbeTarget};

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub interval: Duration,
    pub settings: ProbeSettings,
    pub policy: ClassifyPolicy,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            settings: ProbeSettings::default(),
            policy: ClassifyPolicy::default(),
        }
    }
}

impl PollerConfig {
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }
}

/// Handle to the poll loop running on its own runtime thread.
///
/// Events are drained with `try_recv`/`recv_timeout`; `stop` (or dropping
/// the handle) cancels the loop, and a tick that is in flight at that point
/// is discarded rather than committed.
pub struct PollerHandle {
    event_rx: mpsc::Receiver<PollEvent>,
    cancel: CancellationToken,
}

impl PollerHandle {
    /// Starts polling `targets` over HTTP.
    pub fn start(config: PollerConfig, targets: Vec<ProbeTarget>) -> Result<Self, ProbeError> {
        let prober = Arc::new(ReqwestProber::new(&config.settings)?);
        Ok(Self::start_with_prober(config, targets, prober))
    }

    /// Starts polling with a caller-supplied prober. Tests use this seam.
    pub fn start_with_prober(
        config: PollerConfig,
        targets: Vec<ProbeTarget>,
        prober: Arc<dyn Prober>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let loop_cancel = cancel.clone();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    board_error!("Failed to start poller runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(run_poll_loop(config, targets, prober, event_tx, loop_cancel));
        });

        Self { event_rx, cancel }
    }

    pub fn try_recv(&self) -> Option<PollEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<PollEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Stops the tick loop; no event is emitted after this returns.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_poll_loop(
    config: PollerConfig,
    mut targets: Vec<ProbeTarget>,
    prober: Arc<dyn Prober>,
    event_tx: mpsc::Sender<PollEvent>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(config.interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first interval tick fires immediately; consume it so the first
    // probes go out one full interval after start.
    ticker.tick().await;

    // Backstop for probers that ignore their own timeout; a hung probe
    // resolves as Timeout instead of stalling the tick forever.
    let deadline = config.settings.request_timeout + Duration::from_millis(250);

    let mut tick: u64 = 0;
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }
        if targets.is_empty() {
            continue;
        }
        tick += 1;

        // Fan out one probe per pending target; settle-all before commit.
        let probes = targets
            .iter()
            .map(|target| probe_one(prober.as_ref(), &config.policy, target, deadline));
        let reports = tokio::select! {
            _ = cancel.cancelled() => break,
            reports = join_all(probes) => reports,
        };

        // Completed participants are terminal; never probe them again.
        targets.retain(|target| {
            !reports
                .iter()
                .any(|r| r.outcome == ProbeOutcome::Completed && r.id == target.id)
        });

        board_debug!(
            "tick {}: probed {}, {} pending remain",
            tick,
            reports.len(),
            targets.len()
        );
        if event_tx.send(PollEvent::TickCompleted { tick, reports }).is_err() {
            break;
        }
    }
}

async fn probe_one(
    prober: &dyn Prober,
    policy: &ClassifyPolicy,
    target: &ProbeTarget,
    deadline: Duration,
) -> ProbeReport {
    let signal = match tokio::time::timeout(deadline, prober.probe(target)).await {
        Ok(Ok(signal)) => signal,
        Ok(Err(err)) => {
            board_warn!("Probe for {} failed: {}", target.id, err);
            match err {
                ProbeError::InvalidUrl(_) => ProbeSignal::InvalidUrl,
                ProbeError::Timeout(_) => ProbeSignal::Timeout,
                ProbeError::Network(_) => ProbeSignal::NetworkError,
            }
        }
        Err(_elapsed) => {
            board_warn!("Probe for {} exceeded its deadline", target.id);
            ProbeSignal::Timeout
        }
    };

    ProbeReport {
        id: target.id.clone(),
        signal,
        outcome: policy.classify(signal),
    }
}
