/// Default 20-entry brightness ramp, darkest to brightest.
pub const CLASSIC_RAMP: &[char] = &[
    ' ', '´', '.', ':', ';', 'i', '/', 'l', 'j', 'h', 'N', 'S', 'k', 'W', 'M', 'G', '0', '@', '#',
    '#',
];

/// Ordered glyph ramp used to approximate brightness with ink density.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphTable {
    chars: Vec<char>,
}

impl GlyphTable {
    /// Builds a table from the given characters, darkest first. An empty
    /// table is representable but rejected when a session is constructed.
    pub fn new(chars: impl Into<String>) -> Self {
        Self { chars: chars.into().chars().collect() }
    }

    pub fn classic() -> Self {
        Self { chars: CLASSIC_RAMP.to_vec() }
    }

    pub fn standard() -> Self {
        Self::new(" .:-=+*#%@")
    }

    pub fn blocks() -> Self {
        Self::new(" ░▒▓█")
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Glyph lookup, clamped to the last entry.
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::classic()
    }
}
