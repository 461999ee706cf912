//! Colour palette and fills
//!
//! Terminals have no gradients or alpha, so both are emulated here:
//! opacity is blended against the screen background, and a gradient is
//! a per-row lightening from the top edge down to the base colour.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, style::Style};

/// Screen background the whole UI is painted over
pub const BACKGROUND: Rgb = Rgb(28, 28, 30);

/// Fill behind the floating sheet panel
pub const SURFACE: Rgb = Rgb(44, 44, 46);

/// How much lighter the top row of a gradient is than its base colour
const GRADIENT_SPREAD: f32 = 0.22;

/// A plain 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Composite `self` at `alpha` over `base`
    pub fn over(self, base: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| -> u8 {
            (top as f32 * alpha + bottom as f32 * (1.0 - alpha)).round() as u8
        };
        Rgb(mix(self.0, base.0), mix(self.1, base.1), mix(self.2, base.2))
    }

    /// Move towards white by `amount` (0.0 = unchanged, 1.0 = white)
    pub fn lighten(self, amount: f32) -> Rgb {
        Rgb(255, 255, 255).over(self, amount)
    }

    /// Sum of channels, handy for comparing brightness
    #[cfg(test)]
    pub fn luma(self) -> u16 {
        self.0 as u16 + self.1 as u16 + self.2 as u16
    }

    pub fn color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

/// Named accent colours used by buttons, badges and text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Blue,
    Green,
    Gray,
    White,
    /// Default text colour of the screen
    Primary,
    /// Primary at 8% opacity, a quiet fill for secondary actions
    Neutral,
}

impl Tint {
    pub fn rgb(self) -> Rgb {
        match self {
            Tint::Red => Rgb(255, 69, 58),
            Tint::Blue => Rgb(10, 132, 255),
            Tint::Green => Rgb(48, 209, 88),
            Tint::Gray => Rgb(142, 142, 147),
            Tint::White => Rgb(255, 255, 255),
            Tint::Primary => Rgb(235, 235, 245),
            Tint::Neutral => Tint::Primary.rgb().over(SURFACE, 0.08),
        }
    }

    pub fn color(self) -> Color {
        self.rgb().color()
    }

    /// The tint at reduced opacity over the screen background
    pub fn with_opacity(self, alpha: f32) -> Color {
        self.rgb().over(BACKGROUND, alpha).color()
    }

    /// Colour of `row` within a gradient fill spanning `rows` rows
    pub fn gradient(self, row: u16, rows: u16) -> Color {
        let position = if rows <= 1 {
            0.5
        } else {
            row.min(rows - 1) as f32 / (rows - 1) as f32
        };
        self.rgb().lighten(GRADIENT_SPREAD * (1.0 - position)).color()
    }
}

/// Paint `area` with a vertical gradient of `tint`
pub fn paint_gradient(buf: &mut Buffer, area: Rect, tint: Tint) {
    for row in 0..area.height {
        let line = Rect::new(area.x, area.y + row, area.width, 1);
        buf.set_style(line, Style::default().bg(tint.gradient(row, area.height)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_extremes() {
        assert_eq!(Tint::Red.with_opacity(0.0), BACKGROUND.color());
        assert_eq!(Tint::Red.with_opacity(1.0), Tint::Red.color());
    }

    #[test]
    fn test_half_opacity_sits_between() {
        let half = Tint::Blue.rgb().over(BACKGROUND, 0.5);
        assert!(half.luma() > BACKGROUND.luma());
        assert!(half.luma() < Tint::Blue.rgb().luma());
    }

    #[test]
    fn test_gradient_top_is_lighter_than_bottom() {
        let (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) =
            (Tint::Green.gradient(0, 3), Tint::Green.gradient(2, 3))
        else {
            panic!("gradient should produce rgb colours");
        };
        assert!(Rgb(r0, g0, b0).luma() > Rgb(r1, g1, b1).luma());
        assert_eq!(Tint::Green.gradient(2, 3), Tint::Green.color());
    }

    #[test]
    fn test_gradient_single_row() {
        let single = Tint::Red.gradient(0, 1);
        assert_ne!(single, Tint::Red.color());
        assert_eq!(Tint::Red.gradient(5, 1), single);
    }

    #[test]
    fn test_neutral_is_faint() {
        let neutral = Tint::Neutral.rgb();
        assert!(neutral.luma() > SURFACE.luma());
        assert!(neutral.luma() < Tint::Gray.rgb().luma());
    }

    #[test]
    fn test_paint_gradient_fills_every_row() {
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        paint_gradient(&mut buf, area, Tint::Blue);
        let last_row_start = (area.width * 2) as usize;
        assert_eq!(buf.content[0].bg, Tint::Blue.gradient(0, 3));
        assert_eq!(buf.content[last_row_start].bg, Tint::Blue.color());
    }
}
