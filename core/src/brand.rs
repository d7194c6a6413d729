//! Processor brand string from the extended leaves
//!
//! Leaves 0x8000_0002 through 0x8000_0004 each return 16 bytes of the
//! 48-byte marketing name, all four registers in EAX, EBX, ECX, EDX order.
//! The text is NUL terminated inside the buffer and, on Intel parts, often
//! right justified with leading spaces.

use crate::CpuIdResult;

/// The 48-byte processor brand string.
///
/// Informational only; it is logged, never part of the report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandString {
    bytes: [u8; 48],
}

static_assertions::const_assert_eq!(core::mem::size_of::<BrandString>(), 48);

impl BrandString {
    /// Assemble the string from the three brand leaves, 16 bytes each.
    pub fn from_registers(parts: [CpuIdResult; 3]) -> Self {
        let mut bytes = [0u8; 48];
        for (i, part) in parts.iter().enumerate() {
            let base = i * 16;
            bytes[base..base + 4].copy_from_slice(&part.eax.to_le_bytes());
            bytes[base + 4..base + 8].copy_from_slice(&part.ebx.to_le_bytes());
            bytes[base + 8..base + 12].copy_from_slice(&part.ecx.to_le_bytes());
            bytes[base + 12..base + 16].copy_from_slice(&part.edx.to_le_bytes());
        }
        Self { bytes }
    }

    /// The raw 48 bytes, padding included.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 48] {
        &self.bytes
    }

    /// The brand text with NUL and space padding trimmed off both ends.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes)
            .unwrap_or("<invalid>")
            .trim_matches(|c| c == '\0' || c == ' ')
    }
}

impl core::fmt::Display for BrandString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
