// Licensed under the Apache-2.0 license

#[cfg(target_arch = "riscv32")]
use crate::types::IntPtr;
use log::trace;
use sdps_config::SdPsConfig;
use xil_io::IoAddr;

#[cfg(target_arch = "riscv32")]
extern "C" {
    fn Xil_DCacheInvalidateRange(adr: IntPtr, len: IntPtr);
}

/// Data-cache maintenance for buffers shared with the controller's DMA.
pub trait DCache {
    fn invalidate_range(&self, addr: IoAddr, len: usize);

    /// The platform has no separate clean operation, so a flush is an
    /// invalidate.
    fn flush_range(&self, addr: IoAddr, len: usize) {
        self.invalidate_range(addr, len)
    }
}

/// Cache handling needed by one controller instance.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DataCache {
    /// Buffers must be maintained through the platform cache routines.
    Maintained,
    /// The controller snoops the cache; maintenance is a no-op.
    Coherent,
}

impl DataCache {
    pub const fn for_config(config: &SdPsConfig) -> Self {
        if config.needs_cache_maintenance() {
            DataCache::Maintained
        } else {
            DataCache::Coherent
        }
    }
}

impl DCache for DataCache {
    fn invalidate_range(&self, addr: IoAddr, len: usize) {
        match self {
            DataCache::Maintained => {
                trace!("[sdps-shim] dcache invalidate {} +0x{:x}", addr, len);
                #[cfg(target_arch = "riscv32")]
                unsafe {
                    Xil_DCacheInvalidateRange(addr.get() as IntPtr, len as IntPtr);
                }
            }
            DataCache::Coherent => {}
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sdps_config::lookup_config;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingCache {
        invalidated: RefCell<Vec<(IoAddr, usize)>>,
    }

    impl DCache for RecordingCache {
        fn invalidate_range(&self, addr: IoAddr, len: usize) {
            self.invalidated.borrow_mut().push((addr, len));
        }
    }

    #[test]
    fn test_flush_is_invalidate() {
        let cache = RecordingCache::default();
        cache.flush_range(IoAddr::new(0x8000_0000), 512);
        cache.invalidate_range(IoAddr::new(0x8000_0200), 64);
        assert_eq!(
            *cache.invalidated.borrow(),
            vec![
                (IoAddr::new(0x8000_0000), 512),
                (IoAddr::new(0x8000_0200), 64)
            ]
        );
    }

    #[test]
    fn test_for_config() {
        let mut config = *lookup_config(0).unwrap();
        assert_eq!(DataCache::for_config(&config), DataCache::Maintained);
        config.is_cache_coherent = true;
        assert_eq!(DataCache::for_config(&config), DataCache::Coherent);

        // Neither variant touches memory on the host.
        DataCache::Maintained.flush_range(IoAddr::new(0x1000), 32);
        DataCache::Coherent.invalidate_range(IoAddr::new(0x1000), 32);
    }
}
