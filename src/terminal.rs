use std::io;

use irusb_shared::interactive::InteractiveSession;
use irusb_shared::IrTransceiver;

pub fn command_terminal<T: IrTransceiver>(device: &mut T) -> anyhow::Result<()> {
    log::info!("Transmitting signal from terminal");

    let stdin = io::stdin();
    let report = InteractiveSession::new(device).run(stdin.lock(), io::stderr())?;

    log::debug!(
        "Terminal done: {} sent, {} failed, {} rejected",
        report.sent,
        report.failed,
        report.rejected.len()
    );

    Ok(())
}
