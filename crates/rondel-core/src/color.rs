use ratatui::style::Color;

/// Fill color for active markers.
///
/// Two fixed swatches; `c` flips between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveColor {
    White,
    #[default]
    Ember,
}

impl ActiveColor {
    /// Toggle between the two swatches.
    pub fn toggle(self) -> Self {
        match self {
            ActiveColor::White => ActiveColor::Ember,
            ActiveColor::Ember => ActiveColor::White,
        }
    }

    /// The swatch as an RGB triple.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ActiveColor::White => (0xFF, 0xFF, 0xFF),
            ActiveColor::Ember => (0xFC, 0x58, 0x00),
        }
    }

    /// Convert the swatch to a Ratatui color.
    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }

    /// Name used in config files and the status readout.
    pub fn name(self) -> &'static str {
        match self {
            ActiveColor::White => "white",
            ActiveColor::Ember => "ember",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_both_swatches() {
        assert_eq!(ActiveColor::Ember.toggle(), ActiveColor::White);
        assert_eq!(ActiveColor::White.toggle(), ActiveColor::Ember);
    }

    #[test]
    fn ember_is_the_expected_hex() {
        assert_eq!(ActiveColor::Ember.rgb(), (252, 88, 0));
        assert_eq!(ActiveColor::Ember.color(), Color::Rgb(252, 88, 0));
    }
}
