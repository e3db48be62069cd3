use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::DeviceError;
use crate::nec::NecCode;
use crate::transceiver::{CaptureCallback, IrTransceiver};

/// A unique path under the system temp dir
pub fn temp_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("irusb-{}-{}-{}", std::process::id(), n, name))
}

/// Records everything handed to it
#[derive(Default)]
pub struct RecordingTransceiver {
    nec: Vec<NecCode>,
    raw: Vec<(u32, Vec<u8>)>,
    fail_sends: bool,
    fail_codes: Vec<NecCode>,
    fail_recv: bool,
    /// Delay and payload delivered from a worker thread once armed
    capture: Option<(Duration, Vec<u8>)>,
    pub fired_at: Arc<Mutex<Option<Instant>>>,
}

impl RecordingTransceiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        RecordingTransceiver {
            fail_sends: true,
            fail_recv: true,
            ..Self::default()
        }
    }

    pub fn fail_on(mut self, code: NecCode) -> Self {
        self.fail_codes.push(code);
        self
    }

    pub fn with_capture(mut self, delay: Duration, data: Vec<u8>) -> Self {
        self.capture = Some((delay, data));
        self
    }

    pub fn nec_sent(&self) -> Vec<NecCode> {
        self.nec.clone()
    }

    pub fn raw_sent(&self) -> Vec<(u32, Vec<u8>)> {
        self.raw.clone()
    }
}

impl IrTransceiver for RecordingTransceiver {
    fn open(&mut self) -> Result<(), DeviceError> {
        Ok(())
    }

    fn close(&mut self) {}

    fn send_ir(&mut self, carrier_hz: u32, buffer: &[u8]) -> Result<(), DeviceError> {
        self.raw.push((carrier_hz, buffer.to_vec()));
        if self.fail_sends {
            return Err(DeviceError::Send("mock".into()));
        }
        Ok(())
    }

    fn send_nec(&mut self, code: NecCode) -> Result<(), DeviceError> {
        self.nec.push(code);
        if self.fail_sends || self.fail_codes.contains(&code) {
            return Err(DeviceError::Send("mock".into()));
        }
        Ok(())
    }

    fn start_recv(&mut self, callback: CaptureCallback) -> Result<(), DeviceError> {
        if self.fail_recv {
            return Err(DeviceError::Receive("mock".into()));
        }

        if let Some((delay, data)) = self.capture.take() {
            let fired_at = Arc::clone(&self.fired_at);
            thread::spawn(move || {
                thread::sleep(delay);
                *fired_at.lock().unwrap() = Some(Instant::now());
                callback(data);
            });
        }
        Ok(())
    }
}
