//! # Typed CPUID Reader
//!
//! The [`CpuId`] reader wraps any [`CpuIdSource`] and answers the probe's
//! questions: vendor identification, leaf range, brand string, and the
//! instruction-set feature bits.
//!
//! ## Query Surfaces
//!
//! Feature bits come in two surfaces with identical decoding:
//!
//! - **Lenient** (`has_*`, [`CpuId::has_feature`]): a feature whose leaf
//!   lies above the processor's reported maximum reads as absent. This is
//!   the surface the report uses.
//! - **Strict** ([`CpuId::try_feature`]): the same condition reports
//!   [`ProbeError::UnsupportedLeaf`] instead of degrading.
//!
//! Construction snapshots leaf 0 once (vendor string and maximum leaf);
//! every other query goes to the source on demand.

use cpuprobe_hal::{CpuIdResult, CpuIdSource, HardwareCpuId};

use crate::brand::BrandString;
use crate::flags::{Leaf1Ecx, Leaf1Edx, Leaf7Ebx};
use crate::leaf;
use crate::vendor::{Vendor, VendorString};
use crate::{ProbeError, ProbeResult};

// =============================================================================
// Feature Catalog
// =============================================================================

/// Output register of a CPUID query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// EAX output register
    Eax,
    /// EBX output register
    Ebx,
    /// ECX output register
    Ecx,
    /// EDX output register
    Edx,
}

impl Register {
    /// Pick this register out of a query result.
    #[inline]
    pub const fn extract(self, result: CpuIdResult) -> u32 {
        match self {
            Register::Eax => result.eax,
            Register::Ebx => result.ebx,
            Register::Ecx => result.ecx,
            Register::Edx => result.edx,
        }
    }
}

/// Instruction-set features the probe reports
///
/// Each variant names one bit of one register of one leaf; the accessors
/// below are the single place that mapping lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Streaming SIMD extensions 2
    Sse2,
    /// Streaming SIMD extensions 4.2
    Sse42,
    /// Advanced vector extensions
    Avx,
    /// Advanced vector extensions 2
    Avx2,
    /// AVX-512 foundation
    Avx512f,
}

impl Feature {
    /// Every reported feature, in report order.
    pub const ALL: [Feature; 5] = [
        Feature::Sse2,
        Feature::Sse42,
        Feature::Avx,
        Feature::Avx2,
        Feature::Avx512f,
    ];

    /// The leaf that carries this feature's bit.
    pub const fn leaf(self) -> u32 {
        match self {
            Feature::Sse2 | Feature::Sse42 | Feature::Avx => leaf::FEATURES,
            Feature::Avx2 | Feature::Avx512f => leaf::STRUCTURED_EXT,
        }
    }

    /// The sub-leaf selector for this feature's leaf.
    pub const fn subleaf(self) -> u32 {
        // Every reported feature lives in sub-leaf 0.
        0
    }

    /// The output register that carries this feature's bit.
    pub const fn register(self) -> Register {
        match self {
            Feature::Sse2 => Register::Edx,
            Feature::Sse42 | Feature::Avx => Register::Ecx,
            Feature::Avx2 | Feature::Avx512f => Register::Ebx,
        }
    }

    /// The single-bit mask inside [`register`](Self::register).
    pub const fn mask(self) -> u32 {
        match self {
            Feature::Sse2 => Leaf1Edx::SSE2.bits(),
            Feature::Sse42 => Leaf1Ecx::SSE42.bits(),
            Feature::Avx => Leaf1Ecx::AVX.bits(),
            Feature::Avx2 => Leaf7Ebx::AVX2.bits(),
            Feature::Avx512f => Leaf7Ebx::AVX512F.bits(),
        }
    }

    /// The label the report prints.
    pub const fn name(self) -> &'static str {
        match self {
            Feature::Sse2 => "SSE2",
            Feature::Sse42 => "SSE42",
            Feature::Avx => "AVX",
            Feature::Avx2 => "AVX2",
            Feature::Avx512f => "AVX512F",
        }
    }
}

// =============================================================================
// CpuId Reader
// =============================================================================

/// Typed reader over a CPUID source.
///
/// Cheap to copy, no interior state. All queries are pure reads; any
/// number of readers over the same source agree.
#[derive(Debug, Clone, Copy)]
pub struct CpuId<S: CpuIdSource> {
    source: S,
    vendor_string: VendorString,
    max_leaf: u32,
}

impl CpuId<HardwareCpuId> {
    /// Probe the processor this program runs on.
    ///
    /// Fails with [`ProbeError::CpuidUnavailable`] on targets without the
    /// CPUID instruction.
    pub fn new() -> ProbeResult<Self> {
        Self::with_source(HardwareCpuId::new())
    }
}

impl<S: CpuIdSource> CpuId<S> {
    /// Probe through a caller-supplied source.
    ///
    /// This is the injection point for recorded tables in tests.
    pub fn with_source(source: S) -> ProbeResult<Self> {
        if !source.is_available() {
            return Err(ProbeError::CpuidUnavailable);
        }
        let id = source.query(leaf::VENDOR, 0);
        let reader = Self {
            vendor_string: VendorString::from_registers(id.ebx, id.edx, id.ecx),
            max_leaf: id.eax,
            source,
        };
        log::debug!(
            "cpuid: vendor {} ({}), max leaf {:#x}",
            reader.vendor_string,
            reader.vendor_string.vendor(),
            reader.max_leaf
        );
        Ok(reader)
    }

    /// Raw query passthrough to the underlying source.
    #[inline]
    pub fn query(&self, leaf: u32, subleaf: u32) -> CpuIdResult {
        self.source.query(leaf, subleaf)
    }

    /// The 12-byte vendor identification string from leaf 0.
    #[inline]
    pub const fn vendor_string(&self) -> VendorString {
        self.vendor_string
    }

    /// Vendor classification.
    #[inline]
    pub fn vendor(&self) -> Vendor {
        self.vendor_string.vendor()
    }

    /// Maximum basic leaf, EAX of leaf 0, unmodified.
    #[inline]
    pub const fn max_leaf(&self) -> u32 {
        self.max_leaf
    }

    /// Maximum extended leaf, EAX of leaf 0x8000_0000.
    #[inline]
    pub fn max_extended_leaf(&self) -> u32 {
        self.source.query(leaf::EXT_MAX, 0).eax
    }

    /// The 48-byte brand string, when the extended leaves carry one.
    pub fn brand_string(&self) -> Option<BrandString> {
        if self.max_extended_leaf() < leaf::BRAND_2 {
            return None;
        }
        Some(BrandString::from_registers([
            self.source.query(leaf::BRAND_0, 0),
            self.source.query(leaf::BRAND_1, 0),
            self.source.query(leaf::BRAND_2, 0),
        ]))
    }

    /// Lenient feature query.
    ///
    /// A feature whose leaf lies above the reported maximum reads as
    /// absent; the query is not issued.
    pub fn has_feature(&self, feature: Feature) -> bool {
        match self.try_feature(feature) {
            Ok(present) => present,
            Err(_) => {
                log::debug!(
                    "cpuid: leaf {:#x} above max leaf {:#x}, {} reads as absent",
                    feature.leaf(),
                    self.max_leaf,
                    feature.name()
                );
                false
            }
        }
    }

    /// Strict feature query.
    ///
    /// Reports [`ProbeError::UnsupportedLeaf`] where the lenient surface
    /// degrades to `false`.
    pub fn try_feature(&self, feature: Feature) -> ProbeResult<bool> {
        let wanted = feature.leaf();
        if wanted > self.max_leaf {
            return Err(ProbeError::UnsupportedLeaf {
                leaf: wanted,
                max_leaf: self.max_leaf,
            });
        }
        let regs = self.source.query(wanted, feature.subleaf());
        Ok(feature.register().extract(regs) & feature.mask() != 0)
    }

    /// Streaming SIMD extensions 2 (leaf 1, EDX bit 26).
    #[inline]
    pub fn has_sse2(&self) -> bool {
        self.has_feature(Feature::Sse2)
    }

    /// Streaming SIMD extensions 4.2 (leaf 1, ECX bit 20).
    #[inline]
    pub fn has_sse42(&self) -> bool {
        self.has_feature(Feature::Sse42)
    }

    /// Advanced vector extensions (leaf 1, ECX bit 28).
    #[inline]
    pub fn has_avx(&self) -> bool {
        self.has_feature(Feature::Avx)
    }

    /// Advanced vector extensions 2 (leaf 7 sub-leaf 0, EBX bit 5).
    #[inline]
    pub fn has_avx2(&self) -> bool {
        self.has_feature(Feature::Avx2)
    }

    /// AVX-512 foundation (leaf 7 sub-leaf 0, EBX bit 16).
    #[inline]
    pub fn has_avx512f(&self) -> bool {
        self.has_feature(Feature::Avx512f)
    }
}

// =============================================================================
// SIMD Snapshot
// =============================================================================

/// SIMD feature snapshot
///
/// The five reported flags captured in one pass. Detection uses the
/// lenient surface, so the snapshot exists on every processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimdFeatures {
    /// Streaming SIMD extensions 2
    pub sse2: bool,
    /// Streaming SIMD extensions 4.2
    pub sse42: bool,
    /// Advanced vector extensions
    pub avx: bool,
    /// Advanced vector extensions 2
    pub avx2: bool,
    /// AVX-512 foundation
    pub avx512f: bool,
}

impl SimdFeatures {
    /// Capture the five flags through a reader.
    pub fn detect<S: CpuIdSource>(cpuid: &CpuId<S>) -> Self {
        let features = Self {
            sse2: cpuid.has_sse2(),
            sse42: cpuid.has_sse42(),
            avx: cpuid.has_avx(),
            avx2: cpuid.has_avx2(),
            avx512f: cpuid.has_avx512f(),
        };
        log::debug!("cpuid: simd snapshot {:?}", features);
        features
    }

    /// Look up one flag by its [`Feature`] tag.
    pub const fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::Sse2 => self.sse2,
            Feature::Sse42 => self.sse42,
            Feature::Avx => self.avx,
            Feature::Avx2 => self.avx2,
            Feature::Avx512f => self.avx512f,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cpuprobe_hal::FixedCpuId;

    // "GenuineIntel" split across EBX, EDX, ECX.
    const VENDOR_INTEL: CpuIdResult = CpuIdResult {
        eax: 0x20,
        ebx: 0x756e_6547,
        ecx: 0x6c65_746e,
        edx: 0x4965_6e69,
    };

    fn reader(table: &[(u32, u32, CpuIdResult)]) -> CpuId<FixedCpuId<'_>> {
        match CpuId::with_source(FixedCpuId::new(table)) {
            Ok(cpuid) => cpuid,
            Err(err) => panic!("fixed source rejected: {}", err),
        }
    }

    fn leaf1(ecx: u32, edx: u32) -> (u32, u32, CpuIdResult) {
        (
            leaf::FEATURES,
            0,
            CpuIdResult {
                eax: 0,
                ebx: 0,
                ecx,
                edx,
            },
        )
    }

    fn leaf7(ebx: u32) -> (u32, u32, CpuIdResult) {
        (
            leaf::STRUCTURED_EXT,
            0,
            CpuIdResult {
                eax: 0,
                ebx,
                ecx: 0,
                edx: 0,
            },
        )
    }

    #[test]
    fn test_max_leaf_passthrough() {
        let cpuid = reader(&[(leaf::VENDOR, 0, VENDOR_INTEL)]);
        assert_eq!(cpuid.max_leaf(), 0x20);
        assert_eq!(cpuid.vendor(), Vendor::Intel);
    }

    #[test]
    fn test_sse2_bit_toggles() {
        let set = [(leaf::VENDOR, 0, VENDOR_INTEL), leaf1(0, 1 << 26)];
        let clear = [(leaf::VENDOR, 0, VENDOR_INTEL), leaf1(0, !(1 << 26))];
        assert!(reader(&set).has_sse2());
        assert!(!reader(&clear).has_sse2());
    }

    #[test]
    fn test_sse42_and_avx_bits() {
        let table = [(leaf::VENDOR, 0, VENDOR_INTEL), leaf1(1 << 20, 0)];
        let cpuid = reader(&table);
        assert!(cpuid.has_sse42());
        assert!(!cpuid.has_avx());

        let table = [(leaf::VENDOR, 0, VENDOR_INTEL), leaf1(1 << 28, 0)];
        let cpuid = reader(&table);
        assert!(!cpuid.has_sse42());
        assert!(cpuid.has_avx());
    }

    #[test]
    fn test_avx2_and_avx512f_are_independent() {
        let avx2_only = [(leaf::VENDOR, 0, VENDOR_INTEL), leaf7(1 << 5)];
        let cpuid = reader(&avx2_only);
        assert!(cpuid.has_avx2());
        assert!(!cpuid.has_avx512f());

        let avx512_only = [(leaf::VENDOR, 0, VENDOR_INTEL), leaf7(1 << 16)];
        let cpuid = reader(&avx512_only);
        assert!(!cpuid.has_avx2());
        assert!(cpuid.has_avx512f());
    }

    #[test]
    fn test_leaf7_gated_by_max_leaf() {
        // Max leaf 1: the leaf 7 entry exists in the table but the lenient
        // surface must not read it.
        let table = [
            (
                leaf::VENDOR,
                0,
                CpuIdResult {
                    eax: 1,
                    ..VENDOR_INTEL
                },
            ),
            leaf1(1 << 20, 1 << 26),
            leaf7(1 << 5),
        ];
        let cpuid = reader(&table);
        assert!(cpuid.has_sse2());
        assert!(!cpuid.has_avx2());
        assert!(!cpuid.has_avx512f());
    }

    #[test]
    fn test_strict_surface_reports_unsupported_leaf() {
        let table = [
            (
                leaf::VENDOR,
                0,
                CpuIdResult {
                    eax: 1,
                    ..VENDOR_INTEL
                },
            ),
            leaf1(0, 1 << 26),
        ];
        let cpuid = reader(&table);
        assert_eq!(cpuid.try_feature(Feature::Sse2), Ok(true));
        assert_eq!(
            cpuid.try_feature(Feature::Avx2),
            Err(ProbeError::UnsupportedLeaf {
                leaf: 7,
                max_leaf: 1
            })
        );
    }

    #[test]
    fn test_unavailable_source_is_rejected() {
        struct Unavailable;
        impl CpuIdSource for Unavailable {
            fn query(&self, _leaf: u32, _subleaf: u32) -> CpuIdResult {
                CpuIdResult::ZERO
            }
            fn is_available(&self) -> bool {
                false
            }
        }
        assert_eq!(
            CpuId::with_source(Unavailable).map(|_| ()),
            Err(ProbeError::CpuidUnavailable)
        );
    }

    #[test]
    fn test_brand_string_gated_on_extended_range() {
        // Extended range stops before the brand leaves.
        let table = [
            (leaf::VENDOR, 0, VENDOR_INTEL),
            (
                leaf::EXT_MAX,
                0,
                CpuIdResult {
                    eax: 0x8000_0001,
                    ebx: 0,
                    ecx: 0,
                    edx: 0,
                },
            ),
        ];
        assert!(reader(&table).brand_string().is_none());
    }

    #[test]
    fn test_snapshot_matches_individual_queries() {
        let table = [
            (leaf::VENDOR, 0, VENDOR_INTEL),
            leaf1((1 << 20) | (1 << 28), 1 << 26),
            leaf7(1 << 5),
        ];
        let cpuid = reader(&table);
        let simd = SimdFeatures::detect(&cpuid);
        assert_eq!(simd.sse2, cpuid.has_sse2());
        assert_eq!(simd.sse42, cpuid.has_sse42());
        assert_eq!(simd.avx, cpuid.has_avx());
        assert_eq!(simd.avx2, cpuid.has_avx2());
        assert_eq!(simd.avx512f, cpuid.has_avx512f());
        assert!(simd.get(Feature::Avx2));
        assert!(!simd.get(Feature::Avx512f));
    }

    #[test]
    fn test_feature_catalog() {
        let names: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["SSE2", "SSE42", "AVX", "AVX2", "AVX512F"]);

        assert_eq!(Feature::Sse2.leaf(), 1);
        assert_eq!(Feature::Sse2.register(), Register::Edx);
        assert_eq!(Feature::Sse2.mask(), 1 << 26);

        assert_eq!(Feature::Avx512f.leaf(), 7);
        assert_eq!(Feature::Avx512f.subleaf(), 0);
        assert_eq!(Feature::Avx512f.register(), Register::Ebx);
        assert_eq!(Feature::Avx512f.mask(), 1 << 16);
    }

    #[test]
    fn test_register_extract() {
        let result = CpuIdResult {
            eax: 1,
            ebx: 2,
            ecx: 3,
            edx: 4,
        };
        assert_eq!(Register::Eax.extract(result), 1);
        assert_eq!(Register::Ebx.extract(result), 2);
        assert_eq!(Register::Ecx.extract(result), 3);
        assert_eq!(Register::Edx.extract(result), 4);
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_hardware_probe() {
        let cpuid = match CpuId::new() {
            Ok(cpuid) => cpuid,
            Err(err) => panic!("hardware probe failed: {}", err),
        };
        assert!(cpuid.max_leaf() >= 1);
        // SSE2 is part of the x86_64 baseline.
        assert!(cpuid.has_sse2());
        assert!(cpuid
            .vendor_string()
            .as_bytes()
            .iter()
            .all(|b| b.is_ascii()));
    }
}
