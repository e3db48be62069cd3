//! The contract of the IR transceiver the sessions drive.
//!
//! USB transport, waveform modulation and framing all live behind this trait.

use crate::error::DeviceError;
use crate::nec::NecCode;

/// Carrier frequency used for raw transmissions
pub const CARRIER_HZ: u32 = 38_000;

/// Invoked once with the captured waveform, possibly from another thread
pub type CaptureCallback = Box<dyn FnOnce(Vec<u8>) + Send + 'static>;

pub trait IrTransceiver {
    fn open(&mut self) -> Result<(), DeviceError>;

    fn close(&mut self);

    /// Transmit an opaque waveform blob modulated at `carrier_hz`
    fn send_ir(&mut self, carrier_hz: u32, buffer: &[u8]) -> Result<(), DeviceError>;

    fn send_nec(&mut self, code: NecCode) -> Result<(), DeviceError>;

    /// Arm the receiver. On success `callback` is called at most once with
    /// the captured data.
    fn start_recv(&mut self, callback: CaptureCallback) -> Result<(), DeviceError>;
}
