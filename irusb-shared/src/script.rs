//! Scripted code sequences.
//!
//! A script is plain text, one directive or one four digit hex code per line:
//!
//! ```text
//! #wake
//! 1A2B
//! #wait
//! 3C4D
//! #quit
//! ```
//!
//! Lines are read one at a time and each line is fully executed (delays
//! included) before the next one is read.

use std::io::{self, BufRead};
use std::thread;

use crate::error::ScriptError;
use crate::hexcode;
use crate::nec;
use crate::timing::Timing;
use crate::transceiver::IrTransceiver;

/// Lines interpreted before a run stops
pub const MAX_LINES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Wait,
    Wake,
    Quit,
}

impl Directive {
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "#wait" => Some(Directive::Wait),
            "#wake" => Some(Directive::Wake),
            "#quit" => Some(Directive::Quit),
            _ => None,
        }
    }
}

/// How a run that did not fail came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    EndOfInput,
    Quit,
    LineLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptReport {
    /// Lines read and interpreted
    pub lines: usize,
    pub sent: usize,
    pub failed: usize,
    pub finish: Finish,
}

pub struct ScriptPlayer<'a, T: ?Sized> {
    transceiver: &'a mut T,
    timing: Timing,
}

impl<'a, T: IrTransceiver + ?Sized> ScriptPlayer<'a, T> {
    pub fn new(transceiver: &'a mut T, timing: Timing) -> Self {
        ScriptPlayer {
            transceiver,
            timing,
        }
    }

    pub fn run<R: BufRead>(&mut self, mut reader: R) -> Result<ScriptReport, ScriptError> {
        let mut report = ScriptReport {
            lines: 0,
            sent: 0,
            failed: 0,
            finish: Finish::EndOfInput,
        };
        let mut buf = Vec::new();

        loop {
            if report.lines == MAX_LINES {
                log::debug!("Script line limit reached");
                report.finish = Finish::LineLimit;
                break;
            }

            let line = match next_line(&mut reader, &mut buf)? {
                Some(line) => line,
                None => break,
            };
            report.lines += 1;

            match Directive::parse(&line) {
                Some(Directive::Quit) => {
                    report.finish = Finish::Quit;
                    break;
                }
                Some(Directive::Wait) => {
                    log::debug!("Waiting {:?}", self.timing.wait);
                    thread::sleep(self.timing.wait);
                }
                Some(Directive::Wake) => {
                    log::debug!("Waking, {:?}", self.timing.wake);
                    thread::sleep(self.timing.wake);
                }
                None => {
                    let code = hexcode::validate(&line).map_err(|source| {
                        log::error!("Line {}: {}", report.lines, source);
                        ScriptError::Invalid {
                            line: report.lines,
                            source,
                        }
                    })?;

                    // The device drops commands that arrive too close together
                    thread::sleep(self.timing.pace);

                    match nec::transmit(&mut *self.transceiver, code) {
                        Ok(()) => report.sent += 1,
                        Err(_) => report.failed += 1,
                    }
                }
            }
        }

        log::info!(
            "Script done: {} lines, {} sent, {} failed",
            report.lines,
            report.sent,
            report.failed
        );

        Ok(report)
    }
}

/// Read one line without its terminator. Bytes that are not UTF-8 come
/// back as U+FFFD so they fail validation like any other bad character.
pub(crate) fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    let text = String::from_utf8_lossy(buf);
    Ok(Some(strip_newline(&text).to_string()))
}

/// Drop the line terminator, `\n` or `\r\n`
fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
