// Licensed under the Apache-2.0 license

#![cfg_attr(target_arch = "riscv32", no_std)]

use thiserror::Error;

/// Two-valued status returned across the vendor driver boundary.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum XStatus {
    Success = 0,
    Failure = 1,
}

impl XStatus {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn is_success(self) -> bool {
        matches!(self, XStatus::Success)
    }
}

impl<E> From<Result<(), E>> for XStatus {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => XStatus::Success,
            Err(_) => XStatus::Failure,
        }
    }
}

/// Errors raised by the register access layer.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum IoError {
    #[error("write verify failed at 0x{addr:x}: wrote 0x{expected:08x}, read back 0x{first:08x} and 0x{second:08x}")]
    WriteVerifyFailed {
        addr: usize,
        expected: u32,
        first: u32,
        second: u32,
    },
}

pub type IoResult<T> = Result<T, IoError>;

/// Sentinel codes the SD driver returns to its callers. They are defined here
/// so the port and the driver agree on the values; nothing in the shim
/// produces them.
#[repr(i32)]
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SdCardError {
    #[error("no card in slot")]
    CardAbsent = -1,
    #[error("SD controller initialization failed")]
    ControllerInitFailed = -2,
    #[error("SD card initialization failed")]
    CardInitFailed = -3,
}

impl SdCardError {
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for SdCardError {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, i32> {
        match code {
            -1 => Ok(SdCardError::CardAbsent),
            -2 => Ok(SdCardError::ControllerInitFailed),
            -3 => Ok(SdCardError::CardInitFailed),
            other => Err(other),
        }
    }
}
