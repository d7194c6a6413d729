//! Named CPUID feature bits, one flag set per decoded register
//!
//! Each set maps the architecturally defined bits of a single output
//! register of a single leaf/sub-leaf. Decoding code tests flags by name;
//! no bit position appears outside this module.

bitflags::bitflags! {
    /// Feature flags in EDX of leaf 1 (baseline feature set)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Leaf1Edx: u32 {
        /// x87 FPU on chip (bit 0)
        const FPU = 1 << 0;
        /// Time stamp counter (bit 4)
        const TSC = 1 << 4;
        /// CMPXCHG8B instruction (bit 8)
        const CX8 = 1 << 8;
        /// CMOV instructions (bit 15)
        const CMOV = 1 << 15;
        /// MMX technology (bit 23)
        const MMX = 1 << 23;
        /// FXSAVE/FXRSTOR instructions (bit 24)
        const FXSR = 1 << 24;
        /// Streaming SIMD extensions (bit 25)
        const SSE = 1 << 25;
        /// Streaming SIMD extensions 2 (bit 26)
        const SSE2 = 1 << 26;
        /// Max APIC IDs field is valid (bit 28)
        const HTT = 1 << 28;
    }
}

bitflags::bitflags! {
    /// Feature flags in ECX of leaf 1 (post-SSE2 extensions)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Leaf1Ecx: u32 {
        /// Streaming SIMD extensions 3 (bit 0)
        const SSE3 = 1 << 0;
        /// Supplemental SSE3 (bit 9)
        const SSSE3 = 1 << 9;
        /// Fused multiply-add (bit 12)
        const FMA = 1 << 12;
        /// CMPXCHG16B instruction (bit 13)
        const CX16 = 1 << 13;
        /// Streaming SIMD extensions 4.1 (bit 19)
        const SSE41 = 1 << 19;
        /// Streaming SIMD extensions 4.2 (bit 20)
        const SSE42 = 1 << 20;
        /// POPCNT instruction (bit 23)
        const POPCNT = 1 << 23;
        /// AES instruction set (bit 25)
        const AESNI = 1 << 25;
        /// XSAVE/XRSTOR processor state management (bit 26)
        const XSAVE = 1 << 26;
        /// XSAVE enabled by the OS (bit 27)
        const OSXSAVE = 1 << 27;
        /// Advanced vector extensions (bit 28)
        const AVX = 1 << 28;
        /// Half-precision float conversion (bit 29)
        const F16C = 1 << 29;
        /// RDRAND instruction (bit 30)
        const RDRAND = 1 << 30;
    }
}

bitflags::bitflags! {
    /// Feature flags in EBX of leaf 7, sub-leaf 0 (structured extensions)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Leaf7Ebx: u32 {
        /// FSGSBASE instructions (bit 0)
        const FSGSBASE = 1 << 0;
        /// IA32_TSC_ADJUST MSR (bit 1)
        const TSC_ADJUST = 1 << 1;
        /// Bit manipulation instruction set 1 (bit 3)
        const BMI1 = 1 << 3;
        /// Advanced vector extensions 2 (bit 5)
        const AVX2 = 1 << 5;
        /// Bit manipulation instruction set 2 (bit 8)
        const BMI2 = 1 << 8;
        /// AVX-512 foundation (bit 16)
        const AVX512F = 1 << 16;
        /// AVX-512 doubleword/quadword instructions (bit 17)
        const AVX512DQ = 1 << 17;
        /// RDSEED instruction (bit 18)
        const RDSEED = 1 << 18;
        /// ADX multi-precision add-carry (bit 19)
        const ADX = 1 << 19;
        /// SHA extensions (bit 29)
        const SHA = 1 << 29;
        /// AVX-512 byte/word instructions (bit 30)
        const AVX512BW = 1 << 30;
        /// AVX-512 vector length extensions (bit 31)
        const AVX512VL = 1 << 31;
    }
}

// The five reported bits sit exactly where the SDM defines them.
static_assertions::const_assert_eq!(Leaf1Edx::SSE2.bits(), 1 << 26);
static_assertions::const_assert_eq!(Leaf1Ecx::SSE42.bits(), 1 << 20);
static_assertions::const_assert_eq!(Leaf1Ecx::AVX.bits(), 1 << 28);
static_assertions::const_assert_eq!(Leaf7Ebx::AVX2.bits(), 1 << 5);
static_assertions::const_assert_eq!(Leaf7Ebx::AVX512F.bits(), 1 << 16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_sets_are_disjoint_within_register() {
        // Truncation from raw register values must keep each flag separate.
        let ecx = Leaf1Ecx::from_bits_truncate((1 << 20) | (1 << 28));
        assert!(ecx.contains(Leaf1Ecx::SSE42));
        assert!(ecx.contains(Leaf1Ecx::AVX));
        assert!(!ecx.contains(Leaf1Ecx::SSE3));

        let ebx = Leaf7Ebx::from_bits_truncate(1 << 5);
        assert!(ebx.contains(Leaf7Ebx::AVX2));
        assert!(!ebx.contains(Leaf7Ebx::AVX512F));
    }
}
