pub mod error;
pub mod hexcode;
pub mod interactive;
pub mod nec;
pub mod raw;
pub mod receive;
pub mod script;
pub mod timing;
pub mod transceiver;

#[cfg(feature = "sim")]
pub mod loopback;

#[cfg(test)]
mod testutil;

pub use error::{CodecError, DeviceError, ScriptError, ValidationError};
pub use nec::NecCode;
pub use raw::RawSignal;
pub use timing::Timing;
pub use transceiver::{CaptureCallback, IrTransceiver};

#[cfg(feature = "sim")]
pub use loopback::{LoopbackConfig, LoopbackTransceiver};
