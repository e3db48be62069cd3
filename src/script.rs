use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use irusb_shared::script::ScriptPlayer;
use irusb_shared::{IrTransceiver, Timing};

pub fn command_script<T: IrTransceiver>(
    device: &mut T,
    path: &Path,
    timing: Timing,
) -> anyhow::Result<()> {
    log::info!("Sending signal from file: {}", path.display());

    let file = File::open(path).with_context(|| format!("Unable to open {}", path.display()))?;
    ScriptPlayer::new(device, timing).run(BufReader::new(file))?;

    Ok(())
}
