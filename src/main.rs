use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use structopt::StructOpt;

use irusb_shared::{IrTransceiver, LoopbackConfig, LoopbackTransceiver, Timing};

mod capture;
mod irsend;
mod script;
mod terminal;

#[derive(Debug, StructOpt)]
#[structopt(name = "irusb", about = "Infrared USB transceiver tool")]
struct Opt {
    #[structopt(short, long)]
    debug: bool,
    /// Seconds a `#wake` line waits for the target to come up
    #[structopt(long = "wake-secs", default_value = "15")]
    wake_secs: u64,
    /// Delay before the loopback device delivers a capture
    #[structopt(long = "capture-delay-ms", default_value = "500")]
    capture_delay_ms: u64,
    #[structopt(subcommand)]
    cmd: CliCommand,
}

#[derive(StructOpt, Debug)]
enum CliCommand {
    /// Send IR signal from file
    Send { path: PathBuf },
    /// Receive IR signal and store to file
    Receive {
        path: PathBuf,
        /// Signal file the loopback device plays back as the capture
        #[structopt(long = "loopback", parse(from_os_str))]
        loopback: PathBuf,
    },
    /// Transmit hex codes typed in the terminal
    Terminal {},
    /// Transmit hex codes and directives from a script file
    Script { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let loglevel = if opt.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new().filter_level(loglevel).init();

    let timing = Timing::default().with_wake(Duration::from_secs(opt.wake_secs));

    let capture = match opt.cmd {
        CliCommand::Receive { ref loopback, .. } => Some(
            irusb_shared::raw::read(loopback)
                .context("loading loopback signal")?
                .into_inner(),
        ),
        _ => None,
    };

    let mut device = LoopbackTransceiver::new(LoopbackConfig {
        capture_delay: Duration::from_millis(opt.capture_delay_ms),
        capture,
    });

    device.open().context("Unable to open the device")?;

    let res = match opt.cmd {
        CliCommand::Send { path } => irsend::command_send(&mut device, &path),
        CliCommand::Receive { path, .. } => capture::command_receive(&mut device, &path, &timing),
        CliCommand::Terminal {} => terminal::command_terminal(&mut device),
        CliCommand::Script { path } => script::command_script(&mut device, &path, timing),
    };

    device.close();

    res
}
