//! # CPUID Sources
//!
//! The probe separates *issuing* CPUID from *decoding* it. A source is
//! anything that can answer a leaf/sub-leaf query with a register
//! quadruple: the real instruction on hardware, or a recorded table
//! in tests. Decoding code is written once against [`CpuIdSource`] and
//! exercised against both.

use crate::arch;

// =============================================================================
// Register Quadruple
// =============================================================================

/// The four registers one CPUID invocation fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuIdResult {
    /// EAX output register
    pub eax: u32,
    /// EBX output register
    pub ebx: u32,
    /// ECX output register
    pub ecx: u32,
    /// EDX output register
    pub edx: u32,
}

impl CpuIdResult {
    /// All four registers zero.
    pub const ZERO: Self = Self {
        eax: 0,
        ebx: 0,
        ecx: 0,
        edx: 0,
    };

    /// Check whether every register is zero.
    ///
    /// This is what an unsupported leaf typically reads as, and what the
    /// non-x86 stub always returns.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.eax == 0 && self.ebx == 0 && self.ecx == 0 && self.edx == 0
    }
}

// =============================================================================
// Source Trait
// =============================================================================

/// A provider of CPUID register data.
///
/// This is the single capability the decoding layer consumes. Queries are
/// stateless and independent: issuing them in any order, any number of
/// times, from any thread produces identical results.
pub trait CpuIdSource {
    /// Execute (or simulate) CPUID for `leaf` / `subleaf`.
    ///
    /// Selectors the source cannot answer read as all-zero registers rather
    /// than undefined output.
    fn query(&self, leaf: u32, subleaf: u32) -> CpuIdResult;

    /// Whether this source can answer queries on the current host.
    ///
    /// Defaults to `true`; only sources tied to a hardware instruction
    /// report `false` (cross-compiled [`HardwareCpuId`]).
    #[inline]
    fn is_available(&self) -> bool {
        true
    }
}

// =============================================================================
// Hardware Source
// =============================================================================

/// Source backed by the real CPUID instruction.
///
/// Zero-sized; construct it freely. On targets without the instruction it
/// still exists, reports itself unavailable, and answers with zeroes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HardwareCpuId;

impl HardwareCpuId {
    /// Create a hardware source.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl CpuIdSource for HardwareCpuId {
    #[inline]
    fn query(&self, leaf: u32, subleaf: u32) -> CpuIdResult {
        arch::query(leaf, subleaf)
    }

    #[inline]
    fn is_available(&self) -> bool {
        arch::CPUID_AVAILABLE
    }
}

// =============================================================================
// Fixed Source (recorded tables)
// =============================================================================

/// Source backed by a fixed `(leaf, subleaf) -> registers` table.
///
/// Intended for tests: feed it a recorded dump and run the probe against
/// it. Selectors without an entry read as all-zero registers, matching how
/// real processors commonly answer out-of-range leaves.
#[derive(Debug, Clone, Copy)]
pub struct FixedCpuId<'a> {
    entries: &'a [(u32, u32, CpuIdResult)],
}

impl<'a> FixedCpuId<'a> {
    /// Create a source over a `(leaf, subleaf, registers)` table.
    #[inline]
    pub const fn new(entries: &'a [(u32, u32, CpuIdResult)]) -> Self {
        Self { entries }
    }
}

impl CpuIdSource for FixedCpuId<'_> {
    fn query(&self, leaf: u32, subleaf: u32) -> CpuIdResult {
        for &(l, s, result) in self.entries {
            if l == leaf && s == subleaf {
                return result;
            }
        }
        log::trace!(
            "cpuid: fixed source has no entry for ({:#x}, {}), reading as zeroes",
            leaf,
            subleaf
        );
        CpuIdResult::ZERO
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const LEAF_1: CpuIdResult = CpuIdResult {
        eax: 0x0001_0000,
        ebx: 0,
        ecx: 1 << 20,
        edx: 1 << 26,
    };

    const LEAF_7_0: CpuIdResult = CpuIdResult {
        eax: 0,
        ebx: 1 << 5,
        ecx: 0,
        edx: 0,
    };

    const LEAF_7_1: CpuIdResult = CpuIdResult {
        eax: 1 << 4,
        ebx: 0,
        ecx: 0,
        edx: 0,
    };

    #[test]
    fn test_fixed_source_returns_table_entries() {
        let source = FixedCpuId::new(&[(1, 0, LEAF_1), (7, 0, LEAF_7_0)]);
        assert_eq!(source.query(1, 0), LEAF_1);
        assert_eq!(source.query(7, 0), LEAF_7_0);
    }

    #[test]
    fn test_fixed_source_distinguishes_subleaves() {
        let source = FixedCpuId::new(&[(7, 0, LEAF_7_0), (7, 1, LEAF_7_1)]);
        assert_eq!(source.query(7, 0), LEAF_7_0);
        assert_eq!(source.query(7, 1), LEAF_7_1);
    }

    #[test]
    fn test_fixed_source_unknown_selector_reads_zero() {
        let source = FixedCpuId::new(&[(1, 0, LEAF_1)]);
        assert!(source.query(0x16, 0).is_zero());
        assert!(source.query(7, 0).is_zero());
        assert!(source.query(1, 1).is_zero());
    }

    #[test]
    fn test_fixed_source_is_always_available() {
        let source = FixedCpuId::new(&[]);
        assert!(source.is_available());
    }

    #[test]
    fn test_hardware_availability_matches_target() {
        let expected = cfg!(any(target_arch = "x86", target_arch = "x86_64"));
        assert_eq!(HardwareCpuId::new().is_available(), expected);
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[test]
    fn test_hardware_leaf_zero_is_nonzero() {
        let result = HardwareCpuId::new().query(0, 0);
        // Max leaf plus a 12-byte vendor string: none of these registers is
        // zero on real or virtual silicon.
        assert!(result.eax != 0);
        assert!(result.ebx != 0 && result.ecx != 0 && result.edx != 0);
    }

    #[test]
    fn test_zero_constant() {
        assert!(CpuIdResult::ZERO.is_zero());
        assert!(!LEAF_1.is_zero());
    }
}
