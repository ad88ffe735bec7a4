use super::color::{Hsba, Rgb};

/// Background plus the three colours a shard blends between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub primary: Rgb,
    pub accent1: Rgb,
    pub accent2: Rgb,
}

impl Palette {
    pub fn background_hsba(&self) -> Hsba {
        self.background.into()
    }

    /// Two-stage blend: primary -> accent1 over `[0, 0.5)`, accent1 -> accent2 over `[0.5, 1]`.
    pub fn blend(&self, t: f32) -> Hsba {
        let primary: Hsba = self.primary.into();
        let accent1: Hsba = self.accent1.into();
        let accent2: Hsba = self.accent2.into();
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            primary.lerp(accent1, t * 2.0)
        } else {
            accent1.lerp(accent2, (t - 0.5) * 2.0)
        }
    }
}

// Dark grey ground with vermilion, gold and electric purple.
pub const PALETTE_EMBER: Palette = Palette {
    background: Rgb::hex(0x111111),
    primary: Rgb::hex(0xFF4500),
    accent1: Rgb::hex(0xFFD700),
    accent2: Rgb::hex(0x8A2BE2),
};

// Dark purple ground with deep pink, cyan and amber.
pub const PALETTE_NEON: Palette = Palette {
    background: Rgb::hex(0x1A0A2A),
    primary: Rgb::hex(0xE91E63),
    accent1: Rgb::hex(0x00BCD4),
    accent2: Rgb::hex(0xFFC107),
};

/// Flash colours shown while a burst holds the field frozen.
pub const ALARM_COLORS: [Rgb; 3] = [Rgb::hex(0xFF0000), Rgb::hex(0x00FF00), Rgb::hex(0x0000FF)];

/// Which of the two normal palettes is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaletteId {
    #[default]
    Ember,
    Neon,
}

impl PaletteId {
    pub fn palette(self) -> &'static Palette {
        match self {
            PaletteId::Ember => &PALETTE_EMBER,
            PaletteId::Neon => &PALETTE_NEON,
        }
    }

    pub fn toggled(self) -> PaletteId {
        match self {
            PaletteId::Ember => PaletteId::Neon,
            PaletteId::Neon => PaletteId::Ember,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteId::Ember => "ember",
            PaletteId::Neon => "neon",
        }
    }
}

#[inline]
pub fn alarm_color(index: usize) -> Hsba {
    ALARM_COLORS[index % ALARM_COLORS.len()].into()
}
