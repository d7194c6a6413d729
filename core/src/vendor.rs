//! Vendor identification string and vendor classification
//!
//! CPUID leaf 0 returns a 12-byte identification string split across EBX,
//! EDX and ECX, in that order (not register order). `"GenuineIntel"` lands
//! as EBX=`"Genu"`, EDX=`"ineI"`, ECX=`"ntel"`.

// =============================================================================
// Vendor String
// =============================================================================

/// The 12-byte vendor identification string from leaf 0.
///
/// Owned inline, no allocation. Bytes are kept exactly as the processor
/// returned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorString {
    bytes: [u8; 12],
}

static_assertions::const_assert_eq!(core::mem::size_of::<VendorString>(), 12);

impl VendorString {
    /// Assemble the string from the leaf 0 output registers.
    ///
    /// The architectural byte order is EBX, then EDX, then ECX, each
    /// register contributing its four bytes little-endian.
    pub fn from_registers(ebx: u32, edx: u32, ecx: u32) -> Self {
        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&ebx.to_le_bytes());
        bytes[4..8].copy_from_slice(&edx.to_le_bytes());
        bytes[8..12].copy_from_slice(&ecx.to_le_bytes());
        Self { bytes }
    }

    /// The raw 12 bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.bytes
    }

    /// View the string as text.
    ///
    /// Real processors return printable ASCII here; a source that returns
    /// bytes that are not valid UTF-8 reads as `"<invalid>"`.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes).unwrap_or("<invalid>")
    }

    /// Classify the vendor this string identifies.
    pub fn vendor(&self) -> Vendor {
        match &self.bytes {
            b"GenuineIntel" => Vendor::Intel,
            b"AuthenticAMD" => Vendor::Amd,
            _ => Vendor::Unknown,
        }
    }
}

impl core::fmt::Display for VendorString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Vendor Classification
// =============================================================================

/// Processor vendor decoded from the identification string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    /// `"GenuineIntel"`
    Intel,
    /// `"AuthenticAMD"`
    Amd,
    /// Any other identification string
    Unknown,
}

impl core::fmt::Display for Vendor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Vendor::Intel => f.write_str("Intel"),
            Vendor::Amd => f.write_str("AMD"),
            Vendor::Unknown => f.write_str("unknown"),
        }
    }
}
