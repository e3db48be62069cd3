use std::path::Path;

use irusb_shared::{raw, IrTransceiver};

pub fn command_send<T: IrTransceiver>(device: &mut T, path: &Path) -> anyhow::Result<()> {
    let signal = raw::read(path)?;
    raw::transmit(device, &signal)?;

    Ok(())
}
