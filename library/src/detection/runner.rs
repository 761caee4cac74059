use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::detection::findings::{sample_findings, Finding};
use crate::error::QcError;

/// Progress added on every tick of the simulated analysis.
pub const PROGRESS_STEP: u8 = 5;
/// Interval between progress ticks.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum RunState {
    Idle,
    Running,
}

/// Simulated detection pass over the loaded video.
///
/// At most one run is active at a time: `start` rejects a request while a
/// run is in flight, and `cancel` tears the timer down without leaving the
/// runner stuck in a running state. Findings are published only when a run
/// reaches 100%.
pub struct DetectionRunner {
    state: Arc<Mutex<RunState>>,
    findings: Arc<Mutex<Vec<Finding>>>,
    progress_tx: watch::Sender<u8>,
    progress_rx: watch::Receiver<u8>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl DetectionRunner {
    pub fn new() -> Self {
        let (progress_tx, progress_rx) = watch::channel(0u8);
        Self {
            state: Arc::new(Mutex::new(RunState::Idle)),
            findings: Arc::new(Mutex::new(Vec::new())),
            progress_tx,
            progress_rx,
            handle: Mutex::new(None),
        }
    }

    /// Start a detection run. Fails with `DetectionInProgress` if one is
    /// already running.
    pub fn start(&self) -> Result<(), QcError> {
        {
            let mut state = lock(&self.state)?;
            if *state == RunState::Running {
                return Err(QcError::DetectionInProgress);
            }
            *state = RunState::Running;
        }
        lock(&self.findings)?.clear();
        self.progress_tx.send_replace(0);
        log::info!("Detection run started");

        let state = Arc::clone(&self.state);
        let findings = Arc::clone(&self.findings);
        let progress_tx = self.progress_tx.clone();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(PROGRESS_INTERVAL);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;

            let mut progress: u8 = 0;
            loop {
                interval.tick().await;
                progress = progress.saturating_add(PROGRESS_STEP).min(100);
                if progress >= 100 {
                    if let Ok(mut f) = findings.lock() {
                        *f = sample_findings();
                    }
                    // Flip to idle before publishing completion so observers
                    // of the final progress value see a finished runner.
                    if let Ok(mut s) = state.lock() {
                        *s = RunState::Idle;
                    }
                    progress_tx.send_replace(100);
                    log::info!("Detection run completed");
                    break;
                }
                progress_tx.send_replace(progress);
            }
        });

        *lock(&self.handle)? = Some(task);
        Ok(())
    }

    /// Cancel an in-flight run (view teardown). Progress stops where it is
    /// and the runner returns to idle; no findings are published.
    pub fn cancel(&self) -> Result<(), QcError> {
        if let Some(task) = lock(&self.handle)?.take() {
            task.abort();
        }
        let mut state = lock(&self.state)?;
        if *state == RunState::Running {
            log::info!("Detection run cancelled");
        }
        *state = RunState::Idle;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.state
            .lock()
            .map(|s| *s == RunState::Running)
            .unwrap_or(false)
    }

    /// Current progress percentage, 0..=100.
    pub fn progress(&self) -> u8 {
        *self.progress_rx.borrow()
    }

    /// Watch progress updates.
    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.progress_rx.clone()
    }

    /// Findings of the last completed run; empty while idle or mid-run.
    pub fn findings(&self) -> Vec<Finding> {
        self.findings
            .lock()
            .map(|f| f.clone())
            .unwrap_or_default()
    }
}

impl Default for DetectionRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<std::sync::MutexGuard<'_, T>, QcError> {
    mutex
        .lock()
        .map_err(|_| QcError::Runtime("Lock Poisoned".to_string()))
}
