// Licensed under the Apache-2.0 license

//! Host-side register access doubles for tests.

use crate::{IoAddr, RegisterIo};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Sparse byte-addressed memory standing in for a register file.
///
/// Values are stored little-endian. Bytes that were never written read as
/// zero. Every load or store counts as one access regardless of width.
#[derive(Debug, Default)]
pub struct RamIo {
    mem: RefCell<HashMap<usize, u8>>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl RamIo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of one byte, without counting as an access.
    pub fn byte(&self, addr: IoAddr) -> u8 {
        self.mem.borrow().get(&addr.get()).copied().unwrap_or(0)
    }

    /// Number of bytes that have been written at least once.
    pub fn bytes_written(&self) -> usize {
        self.mem.borrow().len()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn load(&self, addr: IoAddr, len: usize) -> u64 {
        self.reads.set(self.reads.get() + 1);
        let mem = self.mem.borrow();
        (0..len).rev().fold(0u64, |acc, i| {
            let byte = mem.get(&addr.offset(i).get()).copied().unwrap_or(0);
            (acc << 8) | u64::from(byte)
        })
    }

    fn store(&self, addr: IoAddr, len: usize, value: u64) {
        self.writes.set(self.writes.get() + 1);
        let mut mem = self.mem.borrow_mut();
        for (i, byte) in value.to_le_bytes().iter().take(len).enumerate() {
            mem.insert(addr.offset(i).get(), *byte);
        }
    }
}

impl RegisterIo for RamIo {
    unsafe fn in8(&self, addr: IoAddr) -> u8 {
        self.load(addr, 1) as u8
    }

    unsafe fn in16(&self, addr: IoAddr) -> u16 {
        self.load(addr, 2) as u16
    }

    unsafe fn in32(&self, addr: IoAddr) -> u32 {
        self.load(addr, 4) as u32
    }

    unsafe fn in64(&self, addr: IoAddr) -> u64 {
        self.load(addr, 8)
    }

    unsafe fn out8(&self, addr: IoAddr, value: u8) {
        self.store(addr, 1, value.into())
    }

    unsafe fn out16(&self, addr: IoAddr, value: u16) {
        self.store(addr, 2, value.into())
    }

    unsafe fn out32(&self, addr: IoAddr, value: u32) {
        self.store(addr, 4, value.into())
    }

    unsafe fn out64(&self, addr: IoAddr, value: u64) {
        self.store(addr, 8, value)
    }
}

/// Replaces the result of one 32-bit load with a fixed value.
///
/// Loads are counted from 1 starting when the wrapper is created; the
/// `nth` one returns `value` instead of the inner result. Everything else is
/// forwarded unchanged.
#[derive(Debug)]
pub struct GlitchIo<A> {
    inner: A,
    nth: usize,
    value: u32,
    seen: Cell<usize>,
}

impl<A: RegisterIo> GlitchIo<A> {
    pub fn new(inner: A, nth: usize, value: u32) -> Self {
        GlitchIo {
            inner,
            nth,
            value,
            seen: Cell::new(0),
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: RegisterIo> RegisterIo for GlitchIo<A> {
    unsafe fn in8(&self, addr: IoAddr) -> u8 {
        self.inner.in8(addr)
    }

    unsafe fn in16(&self, addr: IoAddr) -> u16 {
        self.inner.in16(addr)
    }

    unsafe fn in32(&self, addr: IoAddr) -> u32 {
        let seen = self.seen.get() + 1;
        self.seen.set(seen);
        let real = self.inner.in32(addr);
        if seen == self.nth {
            self.value
        } else {
            real
        }
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
        self.inner.out32(addr, value)
    }

    unsafe fn out64(&self, addr: IoAddr, value: u64) {
        self.inner.out64(addr, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unwritten_reads_zero() {
        let io = RamIo::new();
        assert_eq!(unsafe { io.in64(IoAddr::new(0x40)) }, 0);
        assert_eq!(io.bytes_written(), 0);
        assert_eq!(io.reads(), 1);
    }

    #[test]
    fn test_store_is_little_endian() {
        let io = RamIo::new();
        unsafe { io.out32(IoAddr::new(0x10), 0x0a0b_0c0d) };
        assert_eq!(io.byte(IoAddr::new(0x10)), 0x0d);
        assert_eq!(io.byte(IoAddr::new(0x13)), 0x0a);
        assert_eq!(io.bytes_written(), 4);
    }

    #[test]
    fn test_glitch_only_hits_nth_load() {
        let io = GlitchIo::new(RamIo::new(), 3, 0xbad);
        let addr = IoAddr::new(0x8);
        unsafe {
            io.out32(addr, 0x77);
            assert_eq!(io.in32(addr), 0x77);
            assert_eq!(io.in32(addr), 0x77);
            assert_eq!(io.in32(addr), 0xbad);
            assert_eq!(io.in32(addr), 0x77);
        }
        assert_eq!(io.inner().reads(), 4);
    }
}
