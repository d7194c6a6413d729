//! # CPUID on x86 / x86_64
//!
//! Thin wrapper over the `__cpuid_count` intrinsic. CPUID is unprivileged,
//! non-blocking, and side-effect free: it reads processor identification
//! state selected by EAX (leaf) and ECX (sub-leaf) into the four general
//! purpose result registers.

#[cfg(target_arch = "x86")]
use core::arch::x86::__cpuid_count;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::__cpuid_count;

use crate::source::CpuIdResult;

/// Execute CPUID with an explicit leaf and sub-leaf.
///
/// The sub-leaf matters for leaves that enumerate multiple feature groups
/// (structured extended features, leaf 7, use sub-leaf 0); plain
/// identification leaves ignore it.
#[inline]
pub fn query(leaf: u32, subleaf: u32) -> CpuIdResult {
    // CPUID is present on every x86_64 part and everything newer than the
    // i486; the intrinsic carries `unsafe` as an arch intrinsic only.
    let r = unsafe { __cpuid_count(leaf, subleaf) };
    CpuIdResult {
        eax: r.eax,
        ebx: r.ebx,
        ecx: r.ecx,
        edx: r.edx,
    }
}
