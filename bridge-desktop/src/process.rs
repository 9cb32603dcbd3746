//! Process Control Implementation

use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::Duration;

use bridge_traits::recovery::ProcessController;
use tracing::{error, info};

/// Desktop process controller backed by `std::process`.
///
/// Relaunch spawns a detached instance of the current executable with the
/// same arguments. Scheduling returns immediately; the delay elapses on a
/// background thread, and [`exit`](ProcessController::exit) waits for that
/// thread so the deferred spawn is not lost when the process terminates.
pub struct DesktopProcessController {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DesktopProcessController {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(None),
        }
    }
}

impl Default for DesktopProcessController {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessController for DesktopProcessController {
    fn schedule_relaunch(&self, delay: Duration) {
        let handle = std::thread::spawn(move || {
            std::thread::sleep(delay);

            let exe = match std::env::current_exe() {
                Ok(exe) => exe,
                Err(err) => {
                    error!(error = %err, "Cannot resolve current executable; relaunch skipped");
                    return;
                }
            };

            let args: Vec<String> = std::env::args().skip(1).collect();
            match std::process::Command::new(&exe).args(&args).spawn() {
                Ok(child) => {
                    info!(pid = child.id(), exe = %exe.display(), "Relaunch instance started");
                }
                Err(err) => {
                    error!(exe = %exe.display(), error = %err, "Failed to spawn relaunch instance");
                }
            }
        });

        info!(delay_ms = delay.as_millis() as u64, "Relaunch scheduled");
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *pending = Some(handle);
    }

    fn exit(&self) {
        let handle = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(handle) = handle {
            // The new instance must launch even though this one is done.
            let _ = handle.join();
        }
        info!("Terminating process");
        std::process::exit(0);
    }
}
