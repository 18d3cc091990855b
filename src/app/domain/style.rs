/// Font families offered by the toolbar and the Font dialog.
///
/// FLTK ships four built-in families; each maps to a regular, bold,
/// italic and bold-italic face in `ui::theme::fltk_font`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Sans,
    Mono,
    Serif,
    Screen,
}

impl FontFamily {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sans => "Helvetica",
            Self::Mono => "Courier",
            Self::Serif => "Times",
            Self::Screen => "Screen",
        }
    }

    pub fn all() -> &'static [FontFamily] {
        &[Self::Sans, Self::Mono, Self::Serif, Self::Screen]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<FontFamily> {
        Self::all().get(index).copied()
    }
}

/// Sizes listed in the size drop-downs.
pub const FONT_SIZES: [u32; 16] = [8, 9, 10, 11, 12, 14, 16, 18, 20, 22, 24, 26, 28, 36, 48, 72];

pub const DEFAULT_FONT_SIZE: u32 = 12;

const MIN_FONT_SIZE: u32 = 8;
const MAX_FONT_SIZE: u32 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Formatting of one tab. Colours are `None` until the user picks one,
/// in which case the theme colours apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub size: u32,
    pub bold: bool,
    pub italic: bool,
    pub text_color: Option<Rgb>,
    pub background: Option<Rgb>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            size: DEFAULT_FONT_SIZE,
            bold: false,
            italic: false,
            text_color: None,
            background: None,
        }
    }
}

impl TextStyle {
    pub fn toggle_bold(&mut self) {
        self.bold = !self.bold;
    }

    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;
    }

    pub fn set_family(&mut self, family: FontFamily) {
        self.family = family;
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    pub fn set_text_color(&mut self, color: Rgb) {
        self.text_color = Some(color);
    }

    pub fn set_background_color(&mut self, color: Rgb) {
        self.background = Some(color);
    }

    /// Index of the current size in `FONT_SIZES`, or of the nearest
    /// smaller entry for sizes not in the list.
    pub fn size_index(&self) -> usize {
        FONT_SIZES
            .iter()
            .rposition(|&s| s <= self.size)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = TextStyle::default();
        assert_eq!(style.family, FontFamily::Sans);
        assert_eq!(style.size, 12);
        assert!(!style.bold);
        assert!(!style.italic);
        assert!(style.text_color.is_none());
        assert!(style.background.is_none());
    }

    #[test]
    fn test_toggles_flip_back() {
        let mut style = TextStyle::default();
        style.toggle_bold();
        style.toggle_italic();
        assert!(style.bold && style.italic);
        style.toggle_bold();
        assert!(!style.bold);
        assert!(style.italic);
    }

    #[test]
    fn test_size_is_clamped() {
        let mut style = TextStyle::default();
        style.set_size(2);
        assert_eq!(style.size, 8);
        style.set_size(500);
        assert_eq!(style.size, 72);
        style.set_size(14);
        assert_eq!(style.size, 14);
    }

    #[test]
    fn test_size_index() {
        let mut style = TextStyle::default();
        assert_eq!(FONT_SIZES[style.size_index()], 12);
        style.set_size(13);
        assert_eq!(FONT_SIZES[style.size_index()], 12);
        style.set_size(72);
        assert_eq!(style.size_index(), FONT_SIZES.len() - 1);
    }

    #[test]
    fn test_family_index_round_trip() {
        for family in FontFamily::all() {
            assert_eq!(FontFamily::from_index(family.index()), Some(*family));
        }
        assert_eq!(FontFamily::from_index(99), None);
    }
}
