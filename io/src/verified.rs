// Licensed under the Apache-2.0 license

use crate::{IoAddr, RegisterIo};
use log::error;
use sdps_error::IoResult;

/// Sends every 32-bit store through [`RegisterIo::secure_out32`].
///
/// Plain stores have nowhere to report a failed read-back, so a mismatch is
/// logged and the store returns normally. Callers that need to react to the
/// failure call `secure_out32` directly. 8, 16 and 64-bit stores and all
/// loads pass straight through.
#[derive(Debug, Default, Copy, Clone)]
pub struct Verified<A> {
    inner: A,
}

impl<A: RegisterIo> Verified<A> {
    pub const fn new(inner: A) -> Self {
        Verified { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: RegisterIo> RegisterIo for Verified<A> {
    unsafe fn in8(&self, addr: IoAddr) -> u8 {
        self.inner.in8(addr)
    }

    unsafe fn in16(&self, addr: IoAddr) -> u16 {
        self.inner.in16(addr)
    }

    unsafe fn in32(&self, addr: IoAddr) -> u32 {
        self.inner.in32(addr)
    }

    unsafe fn in64(&self, addr: IoAddr) -> u64 {
        self.inner.in64(addr)
    }

    unsafe fn out8(&self, addr: IoAddr, value: u8) {
        self.inner.out8(addr, value)
    }

    unsafe fn out16(&self, addr: IoAddr, value: u16) {
        self.inner.out16(addr, value)
    }

    unsafe fn out32(&self, addr: IoAddr, value: u32) {
        if let Err(err) = self.inner.secure_out32(addr, value) {
            error!("[xil-io] {}", err);
        }
    }

    unsafe fn out64(&self, addr: IoAddr, value: u64) {
        self.inner.out64(addr, value)
    }

    unsafe fn secure_out32(&self, addr: IoAddr, value: u32) -> IoResult<()> {
        self.inner.secure_out32(addr, value)
    }
}
