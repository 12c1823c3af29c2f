use folio_core::ThemeMode;
use ratatui::style::Color;

/// Runtime palette selected by the persisted theme preference
#[derive(Debug, Clone)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub faint: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    /// Progress ring gradient endpoints
    pub ring_start: (u8, u8, u8),
    pub ring_end: (u8, u8, u8),
}

pub fn load_palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Dark => dark(),
        ThemeMode::Light => light(),
    }
}

pub fn light() -> Palette {
    Palette {
        bg: Color::Rgb(0xfa, 0xf7, 0xf0),
        surface: Color::Rgb(0xee, 0xe8, 0xdc),
        text: Color::Rgb(0x2d, 0x2a, 0x24),
        muted: Color::Rgb(0x6b, 0x64, 0x58),
        faint: Color::Rgb(0xb8, 0xb0, 0xa0),
        accent: Color::Rgb(0xa8, 0x92, 0x62),
        accent_alt: Color::Rgb(0x52, 0xc0, 0xb8),
        highlight: Color::Rgb(0xc9, 0xb0, 0x7a),
        error: Color::Rgb(0xc4, 0x3d, 0x3d),
        success: Color::Rgb(0x4e, 0x8a, 0x4e),
        ring_start: (82, 192, 184),
        ring_end: (228, 24, 112),
    }
}

pub fn dark() -> Palette {
    Palette {
        bg: Color::Rgb(0x1c, 0x1b, 0x19),
        surface: Color::Rgb(0x2a, 0x28, 0x24),
        text: Color::Rgb(0xe4, 0xde, 0xd2),
        muted: Color::Rgb(0x9a, 0x93, 0x85),
        faint: Color::Rgb(0x55, 0x50, 0x48),
        accent: Color::Rgb(0xc9, 0xb0, 0x7a),
        accent_alt: Color::Rgb(0x52, 0xc0, 0xb8),
        highlight: Color::Rgb(0xe6, 0xd3, 0xa3),
        error: Color::Rgb(0xe0, 0x6c, 0x5e),
        success: Color::Rgb(0x8f, 0xc9, 0x7f),
        ring_start: (82, 192, 184),
        ring_end: (228, 24, 112),
    }
}

impl Palette {
    /// Progress ring color: interpolate toward the end color through the
    /// first half of the page, then hold it.
    pub fn ring_color(&self, progress: f64) -> Color {
        let t = (progress / 0.5).clamp(0.0, 1.0);
        let (r0, g0, b0) = self.ring_start;
        let (r1, g1, b1) = self.ring_end;
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_color_endpoints() {
        let palette = dark();
        assert!(matches!(palette.ring_color(0.0), Color::Rgb(82, 192, 184)));
        assert!(matches!(palette.ring_color(0.5), Color::Rgb(228, 24, 112)));
        // Held past the midpoint
        assert!(matches!(palette.ring_color(0.9), Color::Rgb(228, 24, 112)));
    }
}
