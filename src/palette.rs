use std::fmt;

#[derive(Clone, Copy, Debug)]
pub struct PaletteColor {
    ansi: &'static str,
}

impl PaletteColor {
    pub const fn new(ansi: &'static str) -> Self {
        Self { ansi }
    }

    pub const fn ansi(self) -> &'static str {
        self.ansi
    }
}

pub struct Palette;

impl Palette {
    pub const RESET: &'static str = "\x1b[0m";
    pub const DIM: &'static str = "\x1b[2m";

    pub const ACCENT: PaletteColor = PaletteColor::new("\x1b[34m");
    pub const INFO: PaletteColor = PaletteColor::new("\x1b[36m");
    pub const SUCCESS: PaletteColor = PaletteColor::new("\x1b[32m");
    pub const WARNING: PaletteColor = PaletteColor::new("\x1b[33m");
    pub const DANGER: PaletteColor = PaletteColor::new("\x1b[31m");

    pub fn paint(color: PaletteColor, value: impl fmt::Display) -> String {
        format!("{}{}{}", color.ansi(), value, Self::RESET)
    }

    pub fn dim(value: impl fmt::Display) -> String {
        format!("{}{}{}", Self::DIM, value, Self::RESET)
    }
}

/// Paints through [`Palette`] when enabled, passes text through untouched
/// otherwise (piped output, `--json`).
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, color: PaletteColor, value: impl fmt::Display) -> String {
        if self.enabled {
            Palette::paint(color, value)
        } else {
            value.to_string()
        }
    }

    pub fn dim(&self, value: impl fmt::Display) -> String {
        if self.enabled {
            Palette::dim(value)
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painter_only_colors_when_enabled() {
        assert_eq!(
            Painter::new(true).paint(Palette::SUCCESS, "ok"),
            "\u{1b}[32mok\u{1b}[0m"
        );
        assert_eq!(Painter::new(false).paint(Palette::SUCCESS, "ok"), "ok");
        assert_eq!(Painter::new(false).dim(3), "3");
    }
}
