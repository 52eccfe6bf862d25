use inksac::prelude::*;

/// Styles the banner lines (greeting, location, farewell). Error strings
/// and command output stay unstyled so their text is byte-exact.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color_support: ColorSupport,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn banner(&self, text: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let banner_style = Style::builder()
            .foreground(Color::Cyan)
            .bold()
            .build();

        text.style(banner_style).to_string()
    }

    pub fn location(&self, text: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let location_style = Style::builder()
            .foreground(Color::Green)
            .build();

        text.style(location_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_keeps_text() {
        let palette = Palette::new();
        assert!(palette.banner("Welcome").contains("Welcome"));
    }

    #[test]
    fn test_location_keeps_text() {
        let palette = Palette::new();
        assert!(palette.location("/tmp").contains("/tmp"));
    }
}
