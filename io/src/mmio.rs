// Licensed under the Apache-2.0 license

use crate::{IoAddr, RegisterIo};
use core::ptr::{read_volatile, write_volatile};

/// Direct volatile access to the physical register file.
#[derive(Debug, Default, Copy, Clone)]
pub struct Mmio;

impl RegisterIo for Mmio {
    #[inline(always)]
    unsafe fn in8(&self, addr: IoAddr) -> u8 {
        read_volatile(addr.as_ptr::<u8>())
    }

    #[inline(always)]
    unsafe fn in16(&self, addr: IoAddr) -> u16 {
        read_volatile(addr.as_ptr::<u16>())
    }

    #[inline(always)]
    unsafe fn in32(&self, addr: IoAddr) -> u32 {
        read_volatile(addr.as_ptr::<u32>())
    }

    #[inline(always)]
    unsafe fn in64(&self, addr: IoAddr) -> u64 {
        read_volatile(addr.as_ptr::<u64>())
    }

    #[inline(always)]
    unsafe fn out8(&self, addr: IoAddr, value: u8) {
        write_volatile(addr.as_mut_ptr::<u8>(), value)
    }

    #[inline(always)]
    unsafe fn out16(&self, addr: IoAddr, value: u16) {
        write_volatile(addr.as_mut_ptr::<u16>(), value)
    }

    #[inline(always)]
    unsafe fn out32(&self, addr: IoAddr, value: u32) {
        write_volatile(addr.as_mut_ptr::<u32>(), value)
    }

    #[inline(always)]
    unsafe fn out64(&self, addr: IoAddr, value: u64) {
        write_volatile(addr.as_mut_ptr::<u64>(), value)
    }
}
