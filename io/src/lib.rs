/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    Register access layer for the SD host controller port: sized volatile
    loads and stores, endian-swapped variants, read-back verified writes and
    the I/O barriers that callers place around register sequences.

--*/

#![cfg_attr(target_arch = "riscv32", no_std)]

mod access;
pub use access::*;
mod addr;
pub use addr::IoAddr;
pub mod barrier;
mod endian;
pub use endian::*;
mod mmio;
pub use mmio::Mmio;
mod no_hw;
pub use no_hw::NoHw;
mod verified;
pub use verified::Verified;
mod width;
pub use width::Width;

#[cfg(not(target_arch = "riscv32"))]
pub mod fake;

pub use sdps_error::{IoError, IoResult, XStatus};

/// Register access implementation selected for this build.
///
/// | `no-hw` | `safety` | `PlatformIo`       |
/// |---------|----------|--------------------|
/// | off     | off      | `Mmio`             |
/// | off     | on       | `Verified<Mmio>`   |
/// | on      | off      | `NoHw`             |
/// | on      | on       | `Verified<NoHw>`   |
///
/// With `no-hw` every register reads as zero and every write is silently
/// dropped. A driver built that way will appear to work against a controller
/// that is not there, so the feature must never reach a board image that has
/// the controller fitted.
#[cfg(all(not(feature = "no-hw"), not(feature = "safety")))]
pub type PlatformIo = Mmio;
#[cfg(all(not(feature = "no-hw"), feature = "safety"))]
pub type PlatformIo = Verified<Mmio>;
#[cfg(all(feature = "no-hw", not(feature = "safety")))]
pub type PlatformIo = NoHw;
#[cfg(all(feature = "no-hw", feature = "safety"))]
pub type PlatformIo = Verified<NoHw>;

/// Returns the register access implementation selected for this build.
pub fn platform_io() -> PlatformIo {
    #[cfg(feature = "no-hw")]
    log::warn!("[xil-io] built with no-hw: register reads return 0 and writes are dropped");
    PlatformIo::default()
}
