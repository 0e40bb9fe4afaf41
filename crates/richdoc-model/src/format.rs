//! Inline character formatting bitmask.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Inline formatting flags for a text leaf, as encoded by the editor.
///
/// The raw integer is preserved as-is, including bits this crate does not
/// recognize. [`unknown_bits`](Self::unknown_bits) exposes those so the
/// renderer can treat a malformed mask as a per-node fault instead of
/// silently reinterpreting it.
///
/// Nesting order for rendered output is fixed: `CODE` innermost, then
/// `BOLD`, `ITALIC`, `UNDERLINE`, with `STRIKETHROUGH` outermost. Bitmasks
/// have no inherent order, so fixing one keeps output byte-identical across
/// renders of the same document.
#[derive(Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextFormat(u32);

impl TextFormat {
    /// Bold text.
    pub const BOLD: TextFormat = TextFormat(1);
    /// Italic text.
    pub const ITALIC: TextFormat = TextFormat(2);
    /// Struck-through text.
    pub const STRIKETHROUGH: TextFormat = TextFormat(4);
    /// Underlined text.
    pub const UNDERLINE: TextFormat = TextFormat(8);
    /// Inline code.
    pub const CODE: TextFormat = TextFormat(16);

    /// All recognized flags, innermost wrapper first.
    pub const NESTING: [TextFormat; 5] = [
        Self::CODE,
        Self::BOLD,
        Self::ITALIC,
        Self::UNDERLINE,
        Self::STRIKETHROUGH,
    ];

    const KNOWN: u32 = 1 | 2 | 4 | 8 | 16;

    /// No formatting.
    #[must_use]
    pub const fn empty() -> Self {
        TextFormat(0)
    }

    /// Wrap a raw editor bitmask without validating it.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        TextFormat(bits)
    }

    /// The raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: TextFormat) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flags are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Bits set outside the five recognized flags.
    #[must_use]
    pub const fn unknown_bits(self) -> u32 {
        self.0 & !Self::KNOWN
    }
}

impl BitOr for TextFormat {
    type Output = TextFormat;

    fn bitor(self, rhs: TextFormat) -> TextFormat {
        TextFormat(self.0 | rhs.0)
    }
}

impl fmt::Debug for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(TextFormat, &str); 5] = [
            (TextFormat::BOLD, "BOLD"),
            (TextFormat::ITALIC, "ITALIC"),
            (TextFormat::STRIKETHROUGH, "STRIKETHROUGH"),
            (TextFormat::UNDERLINE, "UNDERLINE"),
            (TextFormat::CODE, "CODE"),
        ];

        if self.is_empty() {
            return f.write_str("TextFormat()");
        }
        f.write_str("TextFormat(")?;
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if self.unknown_bits() != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{:#x}", self.unknown_bits())?;
        }
        f.write_str(")")
    }
}
