//! One-shot capture of a raw signal into a file.
//!
//! The transceiver delivers the capture through a callback that may run on
//! another thread. The callback stores the buffer and only then raises the
//! session's completion flag, which the controlling thread polls.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::error::DeviceError;
use crate::raw;
use crate::timing::Timing;
use crate::transceiver::IrTransceiver;

#[derive(Debug, Default)]
struct CaptureState {
    done: AtomicBool,
    stored: AtomicBool,
    size: AtomicUsize,
}

/// Outcome of a finished capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub size: usize,
    /// Whether the buffer made it to the file
    pub stored: bool,
}

pub struct ReceiveSession {
    path: PathBuf,
    poll: Duration,
    state: Arc<CaptureState>,
}

impl ReceiveSession {
    pub fn new<P: AsRef<Path>>(path: P, poll: Duration) -> Self {
        ReceiveSession {
            path: path.as_ref().to_path_buf(),
            poll,
            state: Arc::default(),
        }
    }

    pub fn with_timing<P: AsRef<Path>>(path: P, timing: &Timing) -> Self {
        Self::new(path, timing.poll)
    }

    pub fn is_done(&self) -> bool {
        self.state.done.load(Ordering::Acquire)
    }

    /// Arm the transceiver with a callback that persists the capture
    pub fn arm<T: IrTransceiver + ?Sized>(&self, transceiver: &mut T) -> Result<(), DeviceError> {
        let state = Arc::clone(&self.state);
        let path = self.path.clone();

        let callback = Box::new(move |data: Vec<u8>| {
            log::info!("Received data {}", data.len());

            match raw::write(&path, &data) {
                Ok(()) => state.stored.store(true, Ordering::Relaxed),
                Err(err) => log::error!("Unable to store capture: {}", err),
            }
            state.size.store(data.len(), Ordering::Relaxed);
            // Publishes the stores above to the polling thread
            state.done.store(true, Ordering::Release);
        });

        transceiver.start_recv(callback).map_err(|err| {
            log::error!("Unable to receive IR: {}", err);
            err
        })
    }

    /// Block until the capture callback has run. There is no timeout.
    pub fn wait(&self) -> Capture {
        log::info!("Waiting for IR signal");

        while !self.is_done() {
            thread::sleep(self.poll);
        }

        Capture {
            size: self.state.size.load(Ordering::Relaxed),
            stored: self.state.stored.load(Ordering::Relaxed),
        }
    }

    pub fn run<T: IrTransceiver + ?Sized>(&self, transceiver: &mut T) -> Result<Capture, DeviceError> {
        self.arm(transceiver)?;
        Ok(self.wait())
    }
}
