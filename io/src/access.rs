/*++

Licensed under the Apache-2.0 license.

File Name:

    access.rs

Abstract:

    File contains the RegisterIo trait shared by the hardware, stubbed and
    verified register access implementations.

--*/

use crate::endian::{swap16, swap32};
use crate::{IoAddr, Width};
use sdps_error::{IoError, IoResult};

/// Sized register loads and stores.
///
/// Each method is a single bus access of exactly the named width; nothing is
/// buffered, merged or reordered by the implementation. Ordering between
/// separate accesses is left to the caller (see [`crate::barrier`]).
///
/// # Safety
///
/// For every method, `addr` must be a register address that is mapped for
/// the current context and aligned for the access width. Accesses may have
/// side effects on the device.
pub trait RegisterIo {
    unsafe fn in8(&self, addr: IoAddr) -> u8;
    unsafe fn in16(&self, addr: IoAddr) -> u16;
    unsafe fn in32(&self, addr: IoAddr) -> u32;
    unsafe fn in64(&self, addr: IoAddr) -> u64;

    unsafe fn out8(&self, addr: IoAddr, value: u8);
    unsafe fn out16(&self, addr: IoAddr, value: u16);
    unsafe fn out32(&self, addr: IoAddr, value: u32);
    unsafe fn out64(&self, addr: IoAddr, value: u64);

    /// Writes `value` and reads the register back twice.
    ///
    /// Succeeds only if both read-backs return exactly `value`. A single
    /// read-back could itself be the corrupted access, hence two. Nothing is
    /// retried here.
    unsafe fn secure_out32(&self, addr: IoAddr, value: u32) -> IoResult<()> {
        self.out32(addr, value);

        let first = self.in32(addr);
        let second = self.in32(addr);

        if first == value && second == value {
            Ok(())
        } else {
            Err(IoError::WriteVerifyFailed {
                addr: addr.get(),
                expected: value,
                first,
                second,
            })
        }
    }

    /// Width-generic load, dispatching to `in8`..`in64`.
    unsafe fn read<T: Width>(&self, addr: IoAddr) -> T {
        T::load(self, addr)
    }

    /// Width-generic store, dispatching to `out8`..`out64`.
    unsafe fn write<T: Width>(&self, addr: IoAddr, value: T) {
        T::store(self, addr, value)
    }

    unsafe fn in16_be(&self, addr: IoAddr) -> u16 {
        swap16(self.in16(addr))
    }

    unsafe fn in32_be(&self, addr: IoAddr) -> u32 {
        swap32(self.in32(addr))
    }

    unsafe fn out16_be(&self, addr: IoAddr, value: u16) {
        self.out16(addr, swap16(value))
    }

    unsafe fn out32_be(&self, addr: IoAddr, value: u32) {
        self.out32(addr, swap32(value))
    }

    // The supported targets are little-endian, so LE accesses are native.

    unsafe fn in16_le(&self, addr: IoAddr) -> u16 {
        self.in16(addr)
    }

    unsafe fn in32_le(&self, addr: IoAddr) -> u32 {
        self.in32(addr)
    }

    unsafe fn out16_le(&self, addr: IoAddr, value: u16) {
        self.out16(addr, value)
    }

    unsafe fn out32_le(&self, addr: IoAddr, value: u32) {
        self.out32(addr, value)
    }
}

impl<A: RegisterIo + ?Sized> RegisterIo for &A {
    unsafe fn in8(&self, addr: IoAddr) -> u8 {
        (**self).in8(addr)
    }

    unsafe fn in16(&self, addr: IoAddr) -> u16 {
        (**self).in16(addr)
    }

    unsafe fn in32(&self, addr: IoAddr) -> u32 {
        (**self).in32(addr)
    }

    unsafe fn in64(&self, addr: IoAddr) -> u64 {
        (**self).in64(addr)
    }

    unsafe fn out8(&self, addr: IoAddr, value: u8) {
        (**self).out8(addr, value)
    }

    unsafe fn out16(&self, addr: IoAddr, value: u16) {
        (**self).out16(addr, value)
    }

    unsafe fn out32(&self, addr: IoAddr, value: u32) {
        (**self).out32(addr, value)
    }

    unsafe fn out64(&self, addr: IoAddr, value: u64) {
        (**self).out64(addr, value)
    }

    unsafe fn secure_out32(&self, addr: IoAddr, value: u32) -> IoResult<()> {
        (**self).secure_out32(addr, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fake::{GlitchIo, RamIo};

    const ADDR: IoAddr = IoAddr::new(0x1000);

    #[test]
    fn test_secure_out32_matches() {
        let io = RamIo::new();
        assert_eq!(unsafe { io.secure_out32(ADDR, 0xdead_beef) }, Ok(()));
        assert_eq!(unsafe { io.in32(ADDR) }, 0xdead_beef);
    }

    #[test]
    fn test_secure_out32_second_read_corrupted() {
        let io = GlitchIo::new(RamIo::new(), 2, 0x0bad_f00d);
        assert_eq!(
            unsafe { io.secure_out32(ADDR, 0xdead_beef) },
            Err(IoError::WriteVerifyFailed {
                addr: 0x1000,
                expected: 0xdead_beef,
                first: 0xdead_beef,
                second: 0x0bad_f00d,
            })
        );
    }

    #[test]
    fn test_secure_out32_first_read_corrupted() {
        let io = GlitchIo::new(RamIo::new(), 1, 0);
        let err = unsafe { io.secure_out32(ADDR, 0x1234_5678) }.unwrap_err();
        assert_eq!(
            err,
            IoError::WriteVerifyFailed {
                addr: 0x1000,
                expected: 0x1234_5678,
                first: 0,
                second: 0x1234_5678,
            }
        );
    }

    #[test]
    fn test_secure_out32_does_two_reads() {
        let io = RamIo::new();
        unsafe { io.secure_out32(ADDR, 7) }.unwrap();
        assert_eq!(io.reads(), 2);
        assert_eq!(io.writes(), 1);
    }

    #[test]
    fn test_be_variants() {
        let io = RamIo::new();
        unsafe {
            io.out32(ADDR, 0x1122_3344);
            assert_eq!(io.in32_be(ADDR), swap32(io.in32(ADDR)));
            assert_eq!(io.in32_be(ADDR), 0x4433_2211);
            assert_eq!(io.in16_be(ADDR), swap16(io.in16(ADDR)));
            assert_eq!(io.in16_be(ADDR), 0x4433);

            io.out32_be(ADDR, 0x1122_3344);
            assert_eq!(io.in32(ADDR), 0x4433_2211);
            io.out16_be(ADDR.offset(8), 0xaabb);
            assert_eq!(io.in16(ADDR.offset(8)), 0xbbaa);
        }
        // Bytes land in bus order for a BE store.
        assert_eq!(io.byte(ADDR.offset(8)), 0xaa);
        assert_eq!(io.byte(ADDR.offset(9)), 0xbb);
    }

    #[test]
    fn test_le_variants_are_native() {
        let io = RamIo::new();
        unsafe {
            io.out32_le(ADDR, 0x1122_3344);
            assert_eq!(io.in32(ADDR), 0x1122_3344);
            io.out16_le(ADDR, 0x5566);
            assert_eq!(io.in16_le(ADDR), 0x5566);
            assert_eq!(io.in32_le(ADDR), 0x1122_5566);
        }
    }

    #[test]
    fn test_generic_read_write() {
        let io = RamIo::new();
        unsafe {
            io.write::<u8>(ADDR, 0xab);
            io.write::<u16>(ADDR.offset(2), 0xcdef);
            assert_eq!(io.read::<u32>(ADDR), 0xcdef_00ab);
            io.write(ADDR.offset(8), 0x0102_0304_0506_0708u64);
            assert_eq!(io.read::<u64>(ADDR.offset(8)), 0x0102_0304_0506_0708);
        }
    }

    #[test]
    fn test_through_reference() {
        let io = RamIo::new();
        let by_ref = &io;
        unsafe {
            by_ref.out32(ADDR, 0x55);
            assert_eq!(by_ref.secure_out32(ADDR, 0x66), Ok(()));
        }
        assert_eq!(unsafe { io.in32(ADDR) }, 0x66);
    }
}
