//! Validation of four digit hex tokens into NEC codes.

use std::convert::TryFrom;

use crate::error::ValidationError;
use crate::nec::NecCode;

/// Number of characters in a code token
pub const TOKEN_LEN: usize = 4;

/// Result of scanning the leading hex digits of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexScan {
    pub value: u32,
    /// Characters taken by the scan
    pub consumed: usize,
    /// Characters in the token
    pub len: usize,
}

impl HexScan {
    pub fn is_complete(&self) -> bool {
        self.consumed == self.len
    }
}

/// Length and charset checks, without numeric parsing
pub fn check_shape(token: &str) -> Result<(), ValidationError> {
    let len = token.chars().count();
    if len != TOKEN_LEN {
        return Err(ValidationError::Length { len });
    }

    match token.chars().enumerate().find(|(_, ch)| !ch.is_ascii_hexdigit()) {
        Some((pos, ch)) => Err(ValidationError::Charset { ch, pos }),
        None => Ok(()),
    }
}

/// Base 16 scan that stops at the first non hex digit.
///
/// Saturates instead of overflowing, so a long token still reports a value
/// above 0xFFFF.
pub fn scan_hex(token: &str) -> HexScan {
    let mut value: u32 = 0;
    let mut consumed = 0;

    for ch in token.chars() {
        match ch.to_digit(16) {
            Some(digit) => {
                value = value.saturating_mul(16).saturating_add(digit);
                consumed += 1;
            }
            None => break,
        }
    }

    HexScan {
        value,
        consumed,
        len: token.chars().count(),
    }
}

pub fn validate(token: &str) -> Result<NecCode, ValidationError> {
    check_shape(token)?;

    let scan = scan_hex(token);
    if !scan.is_complete() {
        return Err(ValidationError::Format {
            token: token.to_string(),
        });
    }

    NecCode::try_from(scan.value)
}
