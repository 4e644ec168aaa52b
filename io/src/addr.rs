// Licensed under the Apache-2.0 license

use core::fmt;

/// Address of a memory-mapped register.
///
/// Kept distinct from plain integers so register addresses are not mixed up
/// with register values or lengths. The only arithmetic is [`IoAddr::offset`].
/// Range and alignment are not checked.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IoAddr(usize);

impl IoAddr {
    pub const fn new(raw: usize) -> Self {
        IoAddr(raw)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Address of the register `bytes` past this one, e.g. a register offset
    /// from a controller base address.
    pub const fn offset(self, bytes: usize) -> Self {
        IoAddr(self.0.wrapping_add(bytes))
    }

    pub const fn as_ptr<T>(self) -> *const T {
        self.0 as *const T
    }

    pub const fn as_mut_ptr<T>(self) -> *mut T {
        self.0 as *mut T
    }
}

impl fmt::Debug for IoAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IoAddr(0x{:x})", self.0)
    }
}

impl fmt::Display for IoAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::LowerHex for IoAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
