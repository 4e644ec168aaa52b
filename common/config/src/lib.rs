// Licensed under the Apache-2.0 license

#![cfg_attr(target_arch = "riscv32", no_std)]

use xil_io::IoAddr;

// Board parameters for the SD controller instances, named the way the vendor
// driver's generated parameter header names them.
pub const XPAR_XSDPS_NUM_INSTANCES: usize = 1;

pub const XPAR_XSDPS_0_DEVICE_ID: u16 = 0;
pub const XPAR_XSDPS_0_BASEADDR: usize = 0xFF17_0000;
pub const XPAR_XSDPS_0_HIGHADDR: usize = 0xFF17_FFFF;
pub const XPAR_XSDPS_0_SDIO_CLK_FREQ_HZ: u32 = 50_000_000;
pub const XPAR_XSDPS_0_HAS_CD: bool = true;
pub const XPAR_XSDPS_0_HAS_WP: bool = true;
pub const XPAR_XSDPS_0_BUS_WIDTH: u32 = 1;
pub const XPAR_XSDPS_0_MIO_BANK: u32 = 0;
pub const XPAR_XSDPS_0_HAS_EMIO: bool = false;
pub const XPAR_XSDPS_0_IS_CACHE_COHERENT: bool = false;

/// Fixed hardware parameters of one SD controller instance.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SdPsConfig {
    /// Index of this record in [`SDPS_CONFIG_TABLE`].
    pub device_id: u16,
    pub base_address: IoAddr,
    /// Last address of the controller's register window.
    pub high_address: IoAddr,
    pub input_clock_hz: u32,
    pub card_detect: bool,
    pub write_protect: bool,
    pub bus_width: u32,
    pub mio_bank: u32,
    pub has_emio: bool,
    pub is_cache_coherent: bool,
}

impl SdPsConfig {
    /// Whether `addr` falls inside this controller's register window.
    pub fn contains(&self, addr: IoAddr) -> bool {
        self.base_address <= addr && addr <= self.high_address
    }

    /// DMA buffers shared with a non-coherent controller have to be cleaned
    /// and invalidated by software around each transfer.
    pub const fn needs_cache_maintenance(&self) -> bool {
        !self.is_cache_coherent
    }

    #[cfg(not(target_arch = "riscv32"))]
    pub fn hash_map(&self) -> std::collections::HashMap<String, String> {
        let prefix = format!("XPAR_XSDPS_{}", self.device_id);
        let flag = |b: bool| String::from(if b { "1" } else { "0" });
        let mut map = std::collections::HashMap::new();
        map.insert(format!("{prefix}_DEVICE_ID"), self.device_id.to_string());
        map.insert(
            format!("{prefix}_BASEADDR"),
            format!("0x{:x}", self.base_address),
        );
        map.insert(
            format!("{prefix}_HIGHADDR"),
            format!("0x{:x}", self.high_address),
        );
        map.insert(
            format!("{prefix}_SDIO_CLK_FREQ_HZ"),
            self.input_clock_hz.to_string(),
        );
        map.insert(format!("{prefix}_HAS_CD"), flag(self.card_detect));
        map.insert(format!("{prefix}_HAS_WP"), flag(self.write_protect));
        map.insert(format!("{prefix}_BUS_WIDTH"), self.bus_width.to_string());
        map.insert(format!("{prefix}_MIO_BANK"), self.mio_bank.to_string());
        map.insert(format!("{prefix}_HAS_EMIO"), flag(self.has_emio));
        map.insert(
            format!("{prefix}_IS_CACHE_COHERENT"),
            flag(self.is_cache_coherent),
        );
        map
    }
}

/// One record per SD controller on the board, indexed by device id.
pub static SDPS_CONFIG_TABLE: [SdPsConfig; XPAR_XSDPS_NUM_INSTANCES] = [SdPsConfig {
    device_id: XPAR_XSDPS_0_DEVICE_ID,
    base_address: IoAddr::new(XPAR_XSDPS_0_BASEADDR),
    high_address: IoAddr::new(XPAR_XSDPS_0_HIGHADDR),
    input_clock_hz: XPAR_XSDPS_0_SDIO_CLK_FREQ_HZ,
    card_detect: XPAR_XSDPS_0_HAS_CD,
    write_protect: XPAR_XSDPS_0_HAS_WP,
    bus_width: XPAR_XSDPS_0_BUS_WIDTH,
    mio_bank: XPAR_XSDPS_0_MIO_BANK,
    has_emio: XPAR_XSDPS_0_HAS_EMIO,
    is_cache_coherent: XPAR_XSDPS_0_IS_CACHE_COHERENT,
}];

pub fn config_table() -> &'static [SdPsConfig] {
    &SDPS_CONFIG_TABLE
}

/// Finds the configuration record for `device_id`.
pub fn lookup_config(device_id: u16) -> Option<&'static SdPsConfig> {
    SDPS_CONFIG_TABLE
        .iter()
        .find(|config| config.device_id == device_id)
}
