//! Codes typed one per line on a control channel.
//!
//! Unlike a script, a bad line only costs that line: the error is reported and
//! the prompt comes back.

use std::convert::TryFrom;
use std::io::{self, BufRead, Write};

use crate::error::ValidationError;
use crate::hexcode::{self, HexScan};
use crate::nec::{self, NecCode};
use crate::script::next_line;
use crate::transceiver::IrTransceiver;

pub const PROMPT: &str = ">:";
pub const QUIT: &str = "quit";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractiveReport {
    pub sent: usize,
    pub failed: usize,
    /// Validation problems reported, in input order
    pub rejected: Vec<ValidationError>,
}

/// What to do with one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Quit,
    Rejected(ValidationError),
    Send {
        code: NecCode,
        warning: Option<ValidationError>,
    },
}

fn interpret(line: &str) -> Entry {
    if line == QUIT {
        return Entry::Quit;
    }

    if let Err(err) = hexcode::check_shape(line) {
        return Entry::Rejected(err);
    }

    from_scan(line, hexcode::scan_hex(line))
}

fn from_scan(line: &str, scan: HexScan) -> Entry {
    let code = match NecCode::try_from(scan.value) {
        Ok(code) => code,
        Err(err) => return Entry::Rejected(err),
    };

    // An incomplete scan is only a warning here, the scanned value still goes out
    let warning = if scan.is_complete() {
        None
    } else {
        Some(ValidationError::Format {
            token: line.to_string(),
        })
    };

    Entry::Send { code, warning }
}

pub struct InteractiveSession<'a, T: ?Sized> {
    transceiver: &'a mut T,
}

impl<'a, T: IrTransceiver + ?Sized> InteractiveSession<'a, T> {
    pub fn new(transceiver: &'a mut T) -> Self {
        InteractiveSession { transceiver }
    }

    /// Read codes from `input` until `quit` or end of input, writing a
    /// prompt to `prompt` before every line
    pub fn run<R, W>(&mut self, mut input: R, mut prompt: W) -> io::Result<InteractiveReport>
    where
        R: BufRead,
        W: Write,
    {
        let mut report = InteractiveReport::default();
        let mut buf = Vec::new();

        loop {
            prompt.write_all(PROMPT.as_bytes())?;
            prompt.flush()?;

            let line = match next_line(&mut input, &mut buf)? {
                Some(line) => line,
                None => break,
            };

            match interpret(&line) {
                Entry::Quit => break,
                Entry::Rejected(err) => {
                    log::error!("{}", err);
                    report.rejected.push(err);
                }
                Entry::Send { code, warning } => {
                    match warning {
                        Some(err) => {
                            log::error!("{}", err);
                            report.rejected.push(err);
                        }
                        None => log::info!("Valid input - {}", code),
                    }

                    match nec::transmit(&mut *self.transceiver, code) {
                        Ok(()) => report.sent += 1,
                        Err(_) => report.failed += 1,
                    }
                }
            }
        }

        Ok(report)
    }
}
