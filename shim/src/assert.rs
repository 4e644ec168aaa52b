// Licensed under the Apache-2.0 license

//! Assertions for the ported driver.
//!
//! A failed assertion is a programming error in the driver or in its caller.
//! It never returns. The installed [`FatalErrorHandler`] runs first, if there
//! is one; otherwise the target traps into the debugger and then idles
//! forever, and the host panics so tests can observe it.

use core::panic::Location;
use log::error;

/// Code passed to the fatal handler when an assertion condition is false.
pub const FATAL_ASSERT_FAILED: u32 = 0x5d00_0001;
/// Code passed to the fatal handler for an unconditional halt.
pub const FATAL_HALT: u32 = 0x5d00_0002;

pub trait FatalErrorHandler {
    fn fatal_error(&mut self, code: u32) -> !;
}

#[cfg(target_arch = "riscv32")]
static mut FATAL_ERROR_HANDLER: Option<&'static mut dyn FatalErrorHandler> = None;

// Host builds keep the handler per thread so concurrently running tests do
// not see each other's handlers.
#[cfg(not(target_arch = "riscv32"))]
std::thread_local! {
    static FATAL_ERROR_HANDLER: core::cell::Cell<Option<&'static mut dyn FatalErrorHandler>> =
        const { core::cell::Cell::new(None) };
}

/// Set the fatal error handler.
///
/// SAFETY: the passed handler must not be used otherwise and no other
/// references to it may exist. Create a single instance, pass it in
/// immediately and never touch it again.
pub fn set_fatal_error_handler(handler: &'static mut dyn FatalErrorHandler) {
    #[cfg(target_arch = "riscv32")]
    unsafe {
        FATAL_ERROR_HANDLER = Some(handler);
    }
    #[cfg(not(target_arch = "riscv32"))]
    FATAL_ERROR_HANDLER.with(|slot| slot.set(Some(handler)));
}

fn take_fatal_error_handler() -> Option<&'static mut dyn FatalErrorHandler> {
    #[cfg(target_arch = "riscv32")]
    #[allow(static_mut_refs)]
    let handler = unsafe { FATAL_ERROR_HANDLER.take() };
    #[cfg(not(target_arch = "riscv32"))]
    let handler = FATAL_ERROR_HANDLER.with(|slot| slot.take());
    handler
}

fn run_fatal_error_handler(code: u32) {
    if let Some(handler) = take_fatal_error_handler() {
        handler.fatal_error(code);
    }
}

/// Halts when `cond` is false. For use in functions without a return value.
#[macro_export]
macro_rules! xil_assert_void {
    ($cond:expr) => {
        if !($cond) {
            $crate::assert::assert_failed(stringify!($cond));
        }
    };
}

/// Halts when `cond` is false. For use in functions that return a value;
/// behaves exactly like [`xil_assert_void!`].
#[macro_export]
macro_rules! xil_assert_nonvoid {
    ($cond:expr) => {
        if !($cond) {
            $crate::assert::assert_failed(stringify!($cond));
        }
    };
}

/// Halts unconditionally.
#[macro_export]
macro_rules! xil_assert_void_always {
    () => {
        $crate::assert::halt()
    };
}

/// Halts unconditionally.
#[macro_export]
macro_rules! xil_assert_nonvoid_always {
    () => {
        $crate::assert::halt()
    };
}

#[cold]
#[inline(never)]
#[track_caller]
pub fn assert_failed(condition: &str) -> ! {
    let location = Location::caller();
    error!(
        "[sdps-shim] assertion `{}` failed at {}:{}",
        condition,
        location.file(),
        location.line()
    );
    run_fatal_error_handler(FATAL_ASSERT_FAILED);

    #[cfg(target_arch = "riscv32")]
    trap();
    #[cfg(not(target_arch = "riscv32"))]
    panic!(
        "assertion `{}` failed at {}:{}",
        condition,
        location.file(),
        location.line()
    );
}

#[cold]
#[inline(never)]
#[track_caller]
pub fn halt() -> ! {
    let location = Location::caller();
    error!(
        "[sdps-shim] halted at {}:{}",
        location.file(),
        location.line()
    );
    run_fatal_error_handler(FATAL_HALT);

    #[cfg(target_arch = "riscv32")]
    trap();
    #[cfg(not(target_arch = "riscv32"))]
    panic!("halted at {}:{}", location.file(), location.line());
}

#[cfg(target_arch = "riscv32")]
#[allow(clippy::empty_loop)]
fn trap() -> ! {
    unsafe {
        core::arch::asm!("ebreak");
    }
    loop {}
}
