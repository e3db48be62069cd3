use std::convert::TryFrom;
use std::fmt;

use crate::error::{DeviceError, ValidationError};
use crate::transceiver::IrTransceiver;

/// A 16-bit NEC-style address/command value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NecCode(u16);

impl NecCode {
    pub const fn new(value: u16) -> Self {
        NecCode(value)
    }

    /// Canonical uppercase four digit rendering, without prefix
    pub fn hex(&self) -> String {
        format!("{:04X}", self.0)
    }
}

impl fmt::Display for NecCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

impl TryFrom<u32> for NecCode {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map(NecCode)
            .map_err(|_| ValidationError::Range { value })
    }
}

/// Hand one code to the transceiver as a single NEC transmission
pub fn transmit<T: IrTransceiver + ?Sized>(
    transceiver: &mut T,
    code: NecCode,
) -> Result<(), DeviceError> {
    log::debug!("Sending NEC code {}", code);

    match transceiver.send_nec(code) {
        Ok(()) => {
            log::info!("Sent IR signal {}", code);
            Ok(())
        }
        Err(err) => {
            log::error!("Unable to send IR {}: {}", code, err);
            Err(err)
        }
    }
}
