//! Stub for architectures without the CPUID instruction.

use crate::source::CpuIdResult;

/// Answer every query with all-zero registers.
///
/// Zero registers decode as "nothing supported" upstream;
/// [`crate::arch::CPUID_AVAILABLE`] distinguishes a missing instruction
/// from a leaf the processor answers with zeroes.
#[inline]
pub fn query(leaf: u32, subleaf: u32) -> CpuIdResult {
    log::trace!(
        "cpuid: query({:#x}, {}) on a target without CPUID",
        leaf,
        subleaf
    );
    CpuIdResult::ZERO
}
