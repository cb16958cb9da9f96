use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, error, trace};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::errors::SceneError;
use crate::traits::RepaintSignal;

/// Update step run on every tick, before the repaint request
pub type UpdateFn = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Stopped,
    Running,
}

#[derive(Default)]
struct DriverInner {
    state: DriverState,
    interval: Option<Duration>,
    /// Present only while running; dropping it ends the timeline
    interval_tx: Option<watch::Sender<Duration>>,
    /// Bumped for every new timeline so a finished one can't stop its successor
    generation: u64,
    ticks: u64,
    last_error: Option<SceneError>,
}

/// Periodic driver: each tick runs the update step then requests a repaint
///
/// The timeline is a tokio task on `runtime`. Calling [`start`](Self::start)
/// while running re-arms the same timeline with the new interval. Calling
/// [`stop`](Self::stop) ends it after any in-flight tick finishes. Both are
/// safe to call from any thread.
pub struct TickDriver {
    runtime: Handle,
    update: UpdateFn,
    repaint: Arc<dyn RepaintSignal>,
    inner: Arc<Mutex<DriverInner>>,
}

fn lock(inner: &Mutex<DriverInner>) -> MutexGuard<'_, DriverInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

fn new_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    // Late ticks are delivered back to back, never dropped or merged
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
    ticker
}

impl TickDriver {
    pub fn new(runtime: Handle, update: UpdateFn, repaint: Arc<dyn RepaintSignal>) -> Self {
        Self {
            runtime,
            update,
            repaint,
            inner: Arc::new(Mutex::new(DriverInner::default())),
        }
    }

    /// Start firing every `interval`, or re-arm the running timeline with it
    pub fn start(&self, interval: Duration) {
        let interval = interval.max(Duration::from_millis(1));
        let mut inner = lock(&self.inner);
        inner.interval = Some(interval);

        if inner.state == DriverState::Running {
            if let Some(tx) = inner.interval_tx.as_ref() {
                // Same interval keeps the current phase; use reset() to restart it
                let rearmed = tx.send_if_modified(|current| {
                    let changed = *current != interval;
                    *current = interval;
                    changed
                });
                if rearmed {
                    debug!("Tick driver re-armed at {:?}", interval);
                }
                return;
            }
        }

        let (tx, rx) = watch::channel(interval);
        inner.generation += 1;
        inner.state = DriverState::Running;
        inner.interval_tx = Some(tx);
        inner.last_error = None;

        let timeline = Timeline {
            generation: inner.generation,
            rx,
            update: self.update.clone(),
            repaint: self.repaint.clone(),
            inner: self.inner.clone(),
        };
        self.runtime.spawn(timeline.run());
        debug!("Tick driver started at {:?}", interval);
    }

    /// Restart the running timeline's phase at its current interval
    ///
    /// The next tick lands one full interval from now. No-op when stopped.
    pub fn reset(&self) {
        let inner = lock(&self.inner);
        if let (DriverState::Running, Some(tx), Some(interval)) =
            (inner.state, inner.interval_tx.as_ref(), inner.interval)
        {
            tx.send_replace(interval);
            debug!("Tick driver reset at {:?}", interval);
        }
    }

    /// Stop firing; no-op when already stopped
    pub fn stop(&self) {
        let mut inner = lock(&self.inner);
        if inner.state == DriverState::Stopped {
            return;
        }

        inner.state = DriverState::Stopped;
        inner.interval_tx = None;
        debug!("Tick driver stopped after {} tick(s)", inner.ticks);
    }

    pub fn state(&self) -> DriverState {
        lock(&self.inner).state
    }

    pub fn is_running(&self) -> bool {
        self.state() == DriverState::Running
    }

    /// Interval of the current (or most recent) timeline
    pub fn interval(&self) -> Option<Duration> {
        lock(&self.inner).interval
    }

    /// Ticks fired since the driver was created
    pub fn ticks(&self) -> u64 {
        lock(&self.inner).ticks
    }

    /// Error that stopped the driver, if any; clears it
    pub fn take_error(&self) -> Option<SceneError> {
        lock(&self.inner).last_error.take()
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Background half of the driver, owned by the spawned task
struct Timeline {
    generation: u64,
    rx: watch::Receiver<Duration>,
    update: UpdateFn,
    repaint: Arc<dyn RepaintSignal>,
    inner: Arc<Mutex<DriverInner>>,
}

impl Timeline {
    async fn run(mut self) {
        let mut ticker = new_ticker(*self.rx.borrow_and_update());

        loop {
            tokio::select! {
                // Control changes win over a simultaneously due tick
                biased;

                changed = self.rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let period = *self.rx.borrow_and_update();
                    ticker = new_ticker(period);
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.fire() {
                        self.fail(e);
                        break;
                    }
                }
            }
        }

        trace!("Tick timeline {} finished", self.generation);
    }

    fn fire(&self) -> Result<(), SceneError> {
        (self.update)();
        let ticks = {
            let mut inner = lock(&self.inner);
            inner.ticks += 1;
            inner.ticks
        };
        trace!("Tick {}", ticks);
        self.repaint.request_repaint()
    }

    fn fail(&self, e: SceneError) {
        error!("Repaint request failed, stopping tick driver: {}", e);
        let mut inner = lock(&self.inner);
        if inner.generation == self.generation {
            inner.state = DriverState::Stopped;
            inner.interval_tx = None;
            inner.last_error = Some(e);
        }
    }
}
