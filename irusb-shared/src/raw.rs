//! Raw waveform files. The bytes are never interpreted here.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{CodecError, DeviceError};
use crate::transceiver::{IrTransceiver, CARRIER_HZ};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawSignal(Vec<u8>);

impl RawSignal {
    pub fn new(data: Vec<u8>) -> Self {
        RawSignal(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

fn io_error(path: &Path, source: std::io::Error) -> CodecError {
    CodecError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn read<P: AsRef<Path>>(path: P) -> Result<RawSignal, CodecError> {
    let path = path.as_ref();
    log::info!("Reading signal from file: {}", path.display());

    let data = fs::read(path).map_err(|e| io_error(path, e))?;
    log::debug!("Read {} bytes", data.len());

    Ok(RawSignal(data))
}

/// Store `data` verbatim. The file is closed on return, success or not.
pub fn write<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), CodecError> {
    let path = path.as_ref();
    log::info!("Writing signal to file: {}", path.display());

    let mut file = File::create(path).map_err(|e| io_error(path, e))?;
    file.write_all(data).map_err(|e| io_error(path, e))?;
    file.flush().map_err(|e| io_error(path, e))?;

    Ok(())
}

/// Send the whole blob in one transmission at 38 kHz
pub fn transmit<T: IrTransceiver + ?Sized>(
    transceiver: &mut T,
    signal: &RawSignal,
) -> Result<(), DeviceError> {
    match transceiver.send_ir(CARRIER_HZ, signal.as_bytes()) {
        Ok(()) => {
            log::info!("Sent IR signal ({} bytes)", signal.len());
            Ok(())
        }
        Err(err) => {
            log::error!("Unable to send IR: {}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{temp_path, RecordingTransceiver};

    #[test]
    fn file_round_trips_verbatim() {
        let path = temp_path("raw-roundtrip.bin");
        let data: Vec<u8> = (0..=255u8).chain(0..=255u8).collect();

        write(&path, &data).unwrap();
        let signal = read(&path).unwrap();

        assert_eq!(signal.as_bytes(), &data[..]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_file_reads_as_empty_signal() {
        let path = temp_path("raw-empty.bin");
        write(&path, &[]).unwrap();

        assert!(read(&path).unwrap().is_empty());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = temp_path("raw-does-not-exist.bin");
        let err = read(&path).unwrap_err();

        let CodecError::Io { path: p, source } = err;
        assert_eq!(p, path);
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let path = temp_path("no-such-dir").join("signal.bin");
        assert!(matches!(write(&path, b"abc"), Err(CodecError::Io { .. })));
    }

    #[test]
    fn transmit_sends_single_blob_at_38khz() {
        let mut ir = RecordingTransceiver::new();
        let signal = RawSignal::new(vec![1, 2, 3, 4, 5]);

        transmit(&mut ir, &signal).unwrap();

        assert_eq!(ir.raw_sent(), vec![(38_000, vec![1, 2, 3, 4, 5])]);
        assert!(ir.nec_sent().is_empty());
    }
}
