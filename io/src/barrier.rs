// Licensed under the Apache-2.0 license

//! Ordering barriers for register sequences.
//!
//! Individual accesses are volatile, so the compiler keeps them in program
//! order relative to each other. These barriers are for what volatile does
//! not give: completion of earlier accesses before later ones are observed
//! by the device or by other harts. The access layer never issues them on
//! its own; callers put them around sequences that need them.

#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
use core::sync::atomic::{compiler_fence, fence, Ordering};

/// Full data synchronization barrier: all earlier loads and stores complete
/// before any later one.
#[inline(always)]
pub fn data_sync() {
    #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
    unsafe {
        core::arch::asm!("fence rw, rw", options(nostack, preserves_flags));
    }
    #[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
    fence(Ordering::SeqCst);
}

/// Instruction synchronization barrier: later instruction fetches observe
/// earlier stores.
#[inline(always)]
pub fn inst_sync() {
    #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
    unsafe {
        core::arch::asm!("fence.i", options(nostack, preserves_flags));
    }
    #[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
    compiler_fence(Ordering::SeqCst);
}

/// I/O ordering barrier: device and memory accesses before the barrier are
/// ordered before those after it.
#[inline(always)]
pub fn sync_io() {
    #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
    unsafe {
        core::arch::asm!("fence iorw, iorw", options(nostack, preserves_flags));
    }
    #[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
    fence(Ordering::SeqCst);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fake::RamIo;
    use crate::{IoAddr, RegisterIo};

    #[test]
    fn test_barriers_around_sequence() {
        let io = RamIo::new();
        let addr = IoAddr::new(0x100);
        unsafe {
            io.out32(addr, 1);
            sync_io();
            io.out32(addr.offset(4), 2);
            data_sync();
            inst_sync();
            assert_eq!(io.in64(addr), 0x0000_0002_0000_0001);
        }
    }
}
