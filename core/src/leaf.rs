//! CPUID leaf selectors organized by range
//!
//! Every leaf the probe queries has a named constant here; decoding code
//! never passes a literal leaf number.

// =============================================================================
// Basic Leaves (0x0000_0000 range)
// =============================================================================

/// Vendor identification string and maximum basic leaf
pub const VENDOR: u32 = 0x0000_0000;
/// Processor signature and baseline feature flags (EDX/ECX)
pub const FEATURES: u32 = 0x0000_0001;
/// Structured extended feature flags (sub-leaf indexed)
pub const STRUCTURED_EXT: u32 = 0x0000_0007;

// =============================================================================
// Extended Leaves (0x8000_0000 range)
// =============================================================================

/// Maximum extended leaf
pub const EXT_MAX: u32 = 0x8000_0000;
/// Processor brand string, bytes 0..16
pub const BRAND_0: u32 = 0x8000_0002;
/// Processor brand string, bytes 16..32
pub const BRAND_1: u32 = 0x8000_0003;
/// Processor brand string, bytes 32..48
pub const BRAND_2: u32 = 0x8000_0004;
