//! # cpuprobe Core
//!
//! Decoding layer of the probe. It turns raw CPUID register quadruples,
//! obtained through any [`CpuIdSource`], into typed identification and
//! feature data, and renders the fixed probe report.
//!
//! ## Components
//!
//! - **Leaf selectors** ([`leaf`]): named constants for every leaf queried
//! - **Register flags** ([`flags`]): one `bitflags` set per decoded register
//! - **Identification** ([`vendor`], [`brand`]): vendor and brand strings
//! - **Feature queries** ([`features`]): the typed [`CpuId`] reader and the
//!   [`SimdFeatures`] snapshot
//! - **Cached probe** ([`probe`]): one-time hardware snapshot
//! - **Report** ([`report`]): the six-line output format
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ report::ProbeReport        (fixed output)     │
//! ├───────────────────────────────────────────────┤
//! │ features::CpuId<S>         (typed queries)    │
//! │   leaf / flags / vendor / brand (decoding)    │
//! ├───────────────────────────────────────────────┤
//! │ hal: CpuIdSource           (raw registers)    │
//! │   HardwareCpuId │ FixedCpuId                  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Everything above the source trait is pure decoding: no I/O, no shared
//! state, no allocation.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod brand;
pub mod features;
pub mod flags;
pub mod leaf;
pub mod probe;
pub mod report;
pub mod vendor;

pub use brand::BrandString;
pub use features::{CpuId, Feature, Register, SimdFeatures};
pub use report::ProbeReport;
pub use vendor::{Vendor, VendorString};

// Re-exported so binaries and tests need only this crate.
pub use cpuprobe_hal::{CpuIdResult, CpuIdSource, FixedCpuId, HardwareCpuId};

/// Result type for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Probe error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    /// A strict query needed a leaf above the processor's reported maximum
    UnsupportedLeaf {
        /// Leaf the query needed
        leaf: u32,
        /// Maximum basic leaf the processor reports
        max_leaf: u32,
    },
    /// The CPUID instruction is not available on this host
    CpuidUnavailable,
}

impl core::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProbeError::UnsupportedLeaf { leaf, max_leaf } => write!(
                f,
                "CPUID leaf {:#x} not supported (maximum leaf {:#x})",
                leaf, max_leaf
            ),
            ProbeError::CpuidUnavailable => {
                write!(f, "CPUID instruction not available on this host")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProbeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProbeError::UnsupportedLeaf {
            leaf: 7,
            max_leaf: 1,
        };
        assert_eq!(
            err.to_string(),
            "CPUID leaf 0x7 not supported (maximum leaf 0x1)"
        );
        assert_eq!(
            ProbeError::CpuidUnavailable.to_string(),
            "CPUID instruction not available on this host"
        );
    }
}
