//! Text measurement seam.

/// Measures the rendered width of a label in pixels.
///
/// Implementations are expected to be pure: the same text always has the same width.
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> u32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> u32,
{
    fn measure(&self, text: &str) -> u32 {
        self(text)
    }
}

/// Fixed-pitch measurer: every character is `glyph_width` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMeasurer {
    pub glyph_width: u32,
}

impl MonospaceMeasurer {
    pub fn new(glyph_width: u32) -> Self {
        Self { glyph_width }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self { glyph_width: 1 }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str) -> u32 {
        let glyphs = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        glyphs.saturating_mul(self.glyph_width)
    }
}
