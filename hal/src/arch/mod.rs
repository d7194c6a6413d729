//! # Architecture Dispatch
//!
//! Selects the CPUID issuing primitive for the compilation target. x86 and
//! x86_64 get the real instruction; everything else gets a stub that keeps
//! the crate compiling and reports the instruction as unavailable.

use crate::source::CpuIdResult;

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        mod x86;
        use x86 as imp;

        /// Whether the compilation target can issue CPUID at all.
        pub const CPUID_AVAILABLE: bool = true;
    } else {
        mod unsupported;
        use unsupported as imp;

        /// Whether the compilation target can issue CPUID at all.
        pub const CPUID_AVAILABLE: bool = false;
    }
}

/// Issue CPUID for `leaf` / `subleaf` on the current processor.
///
/// On targets without the instruction this returns all-zero registers;
/// check [`CPUID_AVAILABLE`] to distinguish that case from a leaf the
/// processor genuinely answers with zeroes.
#[inline]
pub fn query(leaf: u32, subleaf: u32) -> CpuIdResult {
    imp::query(leaf, subleaf)
}
