//! GUID text layouts
//!
//! GUIDs render in one of five layouts, selected by a single-letter
//! specifier (`n`, `d`, `b`, `p`, `x`, case-insensitive). Hex digits are
//! always uppercase.

use uuid::Uuid;

/// GUID text layout, named after its single-letter specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidFormat {
    /// `n`: 32 hex digits
    Simple,
    /// `d`: 8-4-4-4-12 hyphenated groups
    Hyphenated,
    /// `b`: hyphenated groups wrapped in braces
    Braced,
    /// `p`: hyphenated groups wrapped in parentheses
    Parenthesized,
    /// `x`: hexadecimal field-initialiser layout
    Fields,
}

impl GuidFormat {
    /// Look up a layout from its specifier, ignoring case
    pub fn from_specifier(specifier: &str) -> Option<Self> {
        match specifier.to_ascii_lowercase().as_str() {
            "n" => Some(GuidFormat::Simple),
            "d" => Some(GuidFormat::Hyphenated),
            "b" => Some(GuidFormat::Braced),
            "p" => Some(GuidFormat::Parenthesized),
            "x" => Some(GuidFormat::Fields),
            _ => None,
        }
    }
}

impl Default for GuidFormat {
    fn default() -> Self {
        GuidFormat::Hyphenated
    }
}

/// Render a GUID in the given layout
pub fn format_guid(id: &Uuid, format: GuidFormat) -> String {
    match format {
        GuidFormat::Simple => id.simple().to_string().to_ascii_uppercase(),
        GuidFormat::Hyphenated => id.hyphenated().to_string().to_ascii_uppercase(),
        GuidFormat::Braced => format!("{{{}}}", id.hyphenated().to_string().to_ascii_uppercase()),
        GuidFormat::Parenthesized => {
            format!("({})", id.hyphenated().to_string().to_ascii_uppercase())
        }
        GuidFormat::Fields => {
            let (a, b, c, d) = id.as_fields();
            let tail = d
                .iter()
                .map(|byte| format!("0x{byte:02X}"))
                .collect::<Vec<_>>()
                .join(",");
            format!("{{0x{a:08X},0x{b:04X},0x{c:04X},{{{tail}}}}}")
        }
    }
}
