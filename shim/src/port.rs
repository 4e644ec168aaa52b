// Licensed under the Apache-2.0 license

use crate::cache::DataCache;
use sdps_config::{lookup_config, SdPsConfig};
use xil_io::{platform_io, IoAddr, IoResult, PlatformIo, RegisterIo, Width};

/// One SD controller instance as the driver sees it: its board record, the
/// register access implementation for this build and its cache policy.
pub struct SdPsPort<A: RegisterIo = PlatformIo> {
    config: &'static SdPsConfig,
    io: A,
}

impl SdPsPort<PlatformIo> {
    /// Looks up `device_id` in the board table.
    pub fn new(device_id: u16) -> Option<Self> {
        let config = lookup_config(device_id)?;
        Some(Self::with_io(config, platform_io()))
    }
}

impl<A: RegisterIo> SdPsPort<A> {
    pub const fn with_io(config: &'static SdPsConfig, io: A) -> Self {
        SdPsPort { config, io }
    }

    pub fn config(&self) -> &'static SdPsConfig {
        self.config
    }

    pub fn io(&self) -> &A {
        &self.io
    }

    pub fn dcache(&self) -> DataCache {
        DataCache::for_config(self.config)
    }

    /// Address of the `T`-sized register at `offset` from the controller
    /// base. Halts unless every byte of the access lies inside the
    /// controller's window.
    pub fn reg<T: Width>(&self, offset: usize) -> IoAddr {
        let addr = self.config.base_address.offset(offset);
        let last = addr.offset((T::BITS / 8) as usize - 1);
        crate::xil_assert_nonvoid!(
            last.get() >= addr.get() && self.config.contains(addr) && self.config.contains(last)
        );
        addr
    }

    pub fn read8(&self, offset: usize) -> u8 {
        let addr = self.reg::<u8>(offset);
        // SAFETY: `addr` is inside the controller window from the board table.
        unsafe { self.io.in8(addr) }
    }

    pub fn read16(&self, offset: usize) -> u16 {
        let addr = self.reg::<u16>(offset);
        // SAFETY: see `read8`.
        unsafe { self.io.in16(addr) }
    }

    pub fn read32(&self, offset: usize) -> u32 {
        let addr = self.reg::<u32>(offset);
        // SAFETY: see `read8`.
        unsafe { self.io.in32(addr) }
    }

    pub fn write8(&self, offset: usize, value: u8) {
        let addr = self.reg::<u8>(offset);
        // SAFETY: see `read8`.
        unsafe { self.io.out8(addr, value) }
    }

    pub fn write16(&self, offset: usize, value: u16) {
        let addr = self.reg::<u16>(offset);
        // SAFETY: see `read8`.
        unsafe { self.io.out16(addr, value) }
    }

    pub fn write32(&self, offset: usize, value: u32) {
        let addr = self.reg::<u32>(offset);
        // SAFETY: see `read8`.
        unsafe { self.io.out32(addr, value) }
    }

    pub fn secure_write32(&self, offset: usize, value: u32) -> IoResult<()> {
        let addr = self.reg::<u32>(offset);
        // SAFETY: see `read8`.
        unsafe { self.io.secure_out32(addr, value) }
    }
}
