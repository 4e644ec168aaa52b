// Licensed under the Apache-2.0 license

use crate::{IoAddr, RegisterIo};
use core::fmt::{Debug, LowerHex};

mod sealed {
    pub trait Sealed {}
}

/// Register widths the access layer supports: `u8`, `u16`, `u32`, `u64`.
pub trait Width: Copy + Eq + Debug + LowerHex + sealed::Sealed {
    const BITS: u32;
    const ZERO: Self;

    /// # Safety
    ///
    /// See [`RegisterIo`].
    unsafe fn load<A: RegisterIo + ?Sized>(io: &A, addr: IoAddr) -> Self;

    /// # Safety
    ///
    /// See [`RegisterIo`].
    unsafe fn store<A: RegisterIo + ?Sized>(io: &A, addr: IoAddr, value: Self);
}

macro_rules! impl_width {
    ($ty:ty, $load:ident, $store:ident) => {
        impl sealed::Sealed for $ty {}

        impl Width for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;

            #[inline(always)]
            unsafe fn load<A: RegisterIo + ?Sized>(io: &A, addr: IoAddr) -> Self {
                io.$load(addr)
            }

            #[inline(always)]
            unsafe fn store<A: RegisterIo + ?Sized>(io: &A, addr: IoAddr, value: Self) {
                io.$store(addr, value)
            }
        }
    };
}

impl_width!(u8, in8, out8);
impl_width!(u16, in16, out16);
impl_width!(u32, in32, out32);
impl_width!(u64, in64, out64);
