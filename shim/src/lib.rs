/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    Board support for running the SD host controller driver on the RISC-V
    RTOS target: type aliases, assertions, cache maintenance, task delay and
    the per-instance controller handle, on top of the register access layer
    and the board configuration table.

--*/

#![cfg_attr(target_arch = "riscv32", no_std)]

pub mod assert;
pub use assert::{set_fatal_error_handler, FatalErrorHandler};
pub mod cache;
pub use cache::{DCache, DataCache};
pub mod delay;
pub use delay::{usleep, TaskDelay};
mod port;
pub use port::SdPsPort;
pub mod types;
pub use types::*;

pub use sdps_config as config;
pub use sdps_error::{IoError, IoResult, SdCardError, XStatus};
pub use xil_io as io;
pub use xil_io::barrier::{data_sync, inst_sync, sync_io};
