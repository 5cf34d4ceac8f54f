//! A cancellable recurring ticker on a background thread.

use std::ops::ControlFlow;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

/// Owning handle to a thread that calls a closure once per interval.
///
/// The closure receives the 1-based tick number and returns
/// [`ControlFlow::Break`] to end the ticker. Dropping the handle stops the
/// thread and waits for it, so no tick runs after its owner is gone.
pub struct Ticker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the ticker thread. The first tick fires after one interval.
    pub fn start<F>(interval: Duration, mut on_tick: F) -> std::io::Result<Self>
    where
        F: FnMut(u64) -> ControlFlow<()> + Send + 'static,
    {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("taqwim-ticker".to_owned())
            .spawn(move || {
                let mut tick = 0u64;
                loop {
                    match stopped.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            tick += 1;
                            if on_tick(tick).is_break() {
                                debug!(tick, "ticker finished");
                                break;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                            debug!(tick, "ticker stopped");
                            break;
                        }
                    }
                }
            })?;

        Ok(Self {
            stop: Some(stop),
            handle: Some(handle),
        })
    }

    /// Returns `true` once the thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Waits for the closure to break. Blocks forever if it never does.
    pub fn join(mut self) {
        self.wait();
    }

    /// Signals the thread to stop and waits for it.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            // The thread may already be gone; a closed channel is fine.
            let _ = stop.send(());
        }
        self.wait();
    }

    fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("ticker thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
