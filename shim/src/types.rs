// Licensed under the Apache-2.0 license

// Integer aliases the vendor driver is written against.
pub type UintPtr = usize;
pub type IntPtr = isize;
pub type PtrDiff = isize;

/// Written to a driver instance's `is_ready` field once it is initialized.
pub const XIL_COMPONENT_IS_READY: u32 = 0x1111_1111;
/// Written to a driver instance's `is_started` field while it is running.
pub const XIL_COMPONENT_IS_STARTED: u32 = 0x2222_2222;
