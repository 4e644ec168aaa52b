// Licensed under the Apache-2.0 license

use crate::{IoAddr, RegisterIo};
use sdps_error::IoResult;

/// Stand-in for boards where the SD controller is not fitted.
///
/// Every read returns zero, every write is dropped and `secure_out32` always
/// reports success. No memory is touched, so any address is accepted.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoHw;

impl RegisterIo for NoHw {
    unsafe fn in8(&self, _addr: IoAddr) -> u8 {
        0
    }

    unsafe fn in16(&self, _addr: IoAddr) -> u16 {
        0
    }

    unsafe fn in32(&self, _addr: IoAddr) -> u32 {
        0
    }

    unsafe fn in64(&self, _addr: IoAddr) -> u64 {
        0
    }

    unsafe fn out8(&self, _addr: IoAddr, _value: u8) {}

    unsafe fn out16(&self, _addr: IoAddr, _value: u16) {}

    unsafe fn out32(&self, _addr: IoAddr, _value: u32) {}

    unsafe fn out64(&self, _addr: IoAddr, _value: u64) {}

    unsafe fn secure_out32(&self, _addr: IoAddr, _value: u32) -> IoResult<()> {
        Ok(())
    }
}
