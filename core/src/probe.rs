//! One-time hardware snapshot
//!
//! Processor features are immutable for the life of the process, so the
//! probe detects once and hands the same snapshot to every caller. First
//! calls racing from concurrent threads are serialized by [`spin::Once`].

use spin::Once;

use crate::features::{CpuId, SimdFeatures};
use crate::ProbeResult;

static SIMD_FEATURES: Once<ProbeResult<SimdFeatures>> = Once::new();

/// The host processor's SIMD snapshot, detected on first call and cached.
///
/// Every call observes the same result, including the error on hosts
/// without the CPUID instruction.
pub fn simd_features() -> ProbeResult<&'static SimdFeatures> {
    SIMD_FEATURES
        .call_once(|| {
            let cpuid = CpuId::new()?;
            Ok(SimdFeatures::detect(&cpuid))
        })
        .as_ref()
        .map_err(|&err| err)
}
