//! In-process transceiver.
//!
//! Logs what would go out over the air and feeds captures back from memory,
//! so every session can run without the USB device attached.

use std::thread;
use std::time::Duration;

use crate::error::DeviceError;
use crate::nec::NecCode;
use crate::transceiver::{CaptureCallback, IrTransceiver};

#[derive(Debug, Clone)]
pub struct LoopbackConfig {
    /// Time between arming the receiver and the capture arriving
    pub capture_delay: Duration,
    /// Signal delivered on capture when nothing has been transmitted yet
    pub capture: Option<Vec<u8>>,
}

impl Default for LoopbackConfig {
    fn default() -> Self {
        LoopbackConfig {
            capture_delay: Duration::from_millis(500),
            capture: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoopbackTransceiver {
    config: LoopbackConfig,
    is_open: bool,
    /// Last raw blob sent, echoed back by the next capture
    last_raw: Option<Vec<u8>>,
}

impl LoopbackTransceiver {
    pub fn new(config: LoopbackConfig) -> Self {
        LoopbackTransceiver {
            config,
            ..Default::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    fn ensure_open(&self) -> Result<(), DeviceError> {
        if self.is_open {
            Ok(())
        } else {
            Err(DeviceError::NotOpen)
        }
    }
}

impl IrTransceiver for LoopbackTransceiver {
    fn open(&mut self) -> Result<(), DeviceError> {
        self.is_open = true;
        log::info!("Device opened");
        Ok(())
    }

    fn close(&mut self) {
        if self.is_open {
            log::info!("Closing device");
        }
        self.is_open = false;
    }

    fn send_ir(&mut self, carrier_hz: u32, buffer: &[u8]) -> Result<(), DeviceError> {
        self.ensure_open()?;
        log::debug!("send_ir: {} Hz, {} bytes", carrier_hz, buffer.len());

        self.last_raw = Some(buffer.to_vec());
        Ok(())
    }

    fn send_nec(&mut self, code: NecCode) -> Result<(), DeviceError> {
        self.ensure_open()?;
        log::debug!("send_nec: {}", code);
        Ok(())
    }

    fn start_recv(&mut self, callback: CaptureCallback) -> Result<(), DeviceError> {
        self.ensure_open()?;

        let data = self
            .last_raw
            .clone()
            .or_else(|| self.config.capture.clone())
            .ok_or_else(|| DeviceError::Receive("no signal to loop back".into()))?;
        let delay = self.config.capture_delay;

        thread::spawn(move || {
            thread::sleep(delay);
            callback(data);
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{self, RawSignal};
    use crate::receive::{Capture, ReceiveSession};
    use crate::testutil::temp_path;
    use crate::timing::Timing;
    use std::fs;

    fn quick() -> LoopbackConfig {
        LoopbackConfig {
            capture_delay: Duration::from_millis(20),
            capture: None,
        }
    }

    #[test]
    fn refuses_to_send_when_closed() {
        let mut ir = LoopbackTransceiver::new(quick());

        assert_eq!(ir.send_nec(NecCode::new(1)), Err(DeviceError::NotOpen));
        assert_eq!(ir.send_ir(38_000, &[1]), Err(DeviceError::NotOpen));

        ir.open().unwrap();
        assert!(ir.send_nec(NecCode::new(1)).is_ok());
        ir.close();
        assert!(!ir.is_open());
    }

    #[test]
    fn captures_last_transmitted_signal() {
        let path = temp_path("loopback.bin");
        let mut ir = LoopbackTransceiver::new(quick());
        ir.open().unwrap();

        raw::transmit(&mut ir, &RawSignal::new(vec![0xAA, 0x55])).unwrap();
        let capture = ReceiveSession::new(&path, Timing::POLL).run(&mut ir).unwrap();

        assert_eq!(capture, Capture { size: 2, stored: true });
        assert_eq!(raw::read(&path).unwrap().as_bytes(), &[0xAA, 0x55]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn receive_without_signal_fails() {
        let mut ir = LoopbackTransceiver::new(quick());
        ir.open().unwrap();

        let res = ReceiveSession::new(temp_path("loopback-none.bin"), Timing::POLL).run(&mut ir);
        assert!(matches!(res, Err(DeviceError::Receive(_))));
    }
}
