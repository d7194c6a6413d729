//! The probe report and its fixed output format
//!
//! Six lines, byte exact:
//!
//! ```text
//! GenuineIntel,  maxcall 32
//! SSE2 1
//! SSE42 1
//! AVX 1
//! AVX2 1
//! AVX512F 0
//! ```
//!
//! Line one is the vendor string, a comma, two spaces, `maxcall` and the
//! maximum basic leaf in decimal. Each feature line is the feature label,
//! one space, `1` or `0`. Diagnostic logging never prints here; the report
//! is the program's entire stdout.

use cpuprobe_hal::CpuIdSource;

use crate::features::{CpuId, Feature, SimdFeatures};
use crate::vendor::VendorString;

/// The probe's complete result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    /// Vendor identification string
    pub vendor: VendorString,
    /// Maximum basic leaf, printed as `maxcall`
    pub max_leaf: u32,
    /// The five SIMD flags
    pub features: SimdFeatures,
}

impl ProbeReport {
    /// Capture a report through a reader.
    pub fn detect<S: CpuIdSource>(cpuid: &CpuId<S>) -> Self {
        Self {
            vendor: cpuid.vendor_string(),
            max_leaf: cpuid.max_leaf(),
            features: SimdFeatures::detect(cpuid),
        }
    }
}

impl core::fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{},  maxcall {}", self.vendor, self.max_leaf)?;
        for feature in Feature::ALL {
            writeln!(
                f,
                "{} {}",
                feature.name(),
                u8::from(self.features.get(feature))
            )?;
        }
        Ok(())
    }
}
