/// 8-bit sRGB triple, the form palette entries are authored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` literal.
    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xFF) as u8,
            g: ((v >> 8) & 0xFF) as u8,
            b: (v & 0xFF) as u8,
        }
    }

    pub fn to_hsba(self) -> Hsba {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta <= f32::EPSILON {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let saturation = if max <= f32::EPSILON {
            0.0
        } else {
            delta / max * 100.0
        };

        Hsba {
            h: hue,
            s: saturation,
            b: max * 100.0,
            a: 1.0,
        }
    }
}

/// Hue in degrees `[0, 360)`, saturation and brightness in `[0, 100]`,
/// alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsba {
    pub h: f32,
    pub s: f32,
    pub b: f32,
    pub a: f32,
}

impl Hsba {
    pub const fn new(h: f32, s: f32, b: f32, a: f32) -> Self {
        Self { h, s, b, a }
    }

    /// Channel-wise linear blend; hue is interpolated without wrapping.
    pub fn lerp(self, other: Hsba, t: f32) -> Hsba {
        let t = t.clamp(0.0, 1.0);
        Hsba {
            h: self.h + (other.h - self.h) * t,
            s: self.s + (other.s - self.s) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn with_alpha(self, a: f32) -> Hsba {
        Hsba { a, ..self }
    }

    pub fn to_rgb(self) -> Rgb {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.b / 100.0).clamp(0.0, 1.0);
        let h = self.h.rem_euclid(360.0) / 60.0;
        let c = v * s;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r1, g1, b1) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        let to_u8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: to_u8(r1),
            g: to_u8(g1),
            b: to_u8(b1),
        }
    }

    /// CSS `rgba()` string accepted by canvas fill styles.
    pub fn to_css(self) -> String {
        let Rgb { r, g, b } = self.to_rgb();
        format!("rgba({},{},{},{:.3})", r, g, b, self.a.clamp(0.0, 1.0))
    }
}

impl From<Rgb> for Hsba {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsba()
    }
}
