use std::path::Path;

use anyhow::bail;

use irusb_shared::receive::ReceiveSession;
use irusb_shared::{IrTransceiver, Timing};

pub fn command_receive<T: IrTransceiver>(
    device: &mut T,
    path: &Path,
    timing: &Timing,
) -> anyhow::Result<()> {
    let session = ReceiveSession::with_timing(path, timing);
    let capture = session.run(device)?;

    if !capture.stored {
        bail!("capture of {} bytes was not stored to {}", capture.size, path.display());
    }

    log::info!("Stored {} bytes to {}", capture.size, path.display());
    Ok(())
}
