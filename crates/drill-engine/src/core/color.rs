use std::fmt;

/// A color in HSL space with integer channels.
///
/// - `hue`: degrees in `0..360` (circular)
/// - `saturation`: percent in `0..=100`
/// - `lightness`: percent in `0..=100`
///
/// Constructors and setters normalize their inputs, so every value of this type is
/// within range. A hue of 360 (an inclusive slider end) becomes 0.
///
/// ```
/// use drill_engine::{ColorChannel, ColorSample};
///
/// let color = ColorSample::new(359, 50, 50).stepped(ColorChannel::Hue, 1);
/// assert_eq!(color.hue(), 0);
/// assert_eq!(color.to_string(), "hsl(0, 50%, 50%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSample {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl ColorSample {
    pub const HUE_RANGE: u16 = 360;
    pub const PERCENT_MAX: u8 = 100;

    #[must_use]
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % Self::HUE_RANGE,
            saturation: min_u8(saturation, Self::PERCENT_MAX),
            lightness: min_u8(lightness, Self::PERCENT_MAX),
        }
    }

    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    #[must_use]
    pub const fn lightness(&self) -> u8 {
        self.lightness
    }

    #[must_use]
    pub fn channel(&self, channel: ColorChannel) -> u16 {
        match channel {
            ColorChannel::Hue => self.hue,
            ColorChannel::Saturation => u16::from(self.saturation),
            ColorChannel::Lightness => u16::from(self.lightness),
        }
    }

    /// Returns a copy with one channel replaced, normalized like [`Self::new`].
    #[must_use]
    pub fn with_channel(self, channel: ColorChannel, value: u16) -> Self {
        let percent = u8::try_from(value).unwrap_or(u8::MAX);
        match channel {
            ColorChannel::Hue => Self::new(value, self.saturation, self.lightness),
            ColorChannel::Saturation => Self::new(self.hue, percent, self.lightness),
            ColorChannel::Lightness => Self::new(self.hue, self.saturation, percent),
        }
    }

    /// Moves one channel by `delta`.
    ///
    /// Hue wraps around the color wheel; saturation and lightness stop at 0 and 100.
    #[must_use]
    pub fn stepped(self, channel: ColorChannel, delta: i32) -> Self {
        let current = i32::from(self.channel(channel));
        let next = match channel {
            ColorChannel::Hue => (current + delta).rem_euclid(i32::from(Self::HUE_RANGE)),
            ColorChannel::Saturation | ColorChannel::Lightness => {
                (current + delta).clamp(0, i32::from(Self::PERCENT_MAX))
            }
        };
        // `next` is non-negative and below 360 in every arm
        self.with_channel(channel, u16::try_from(next).unwrap_or_default())
    }

    /// Shortest angular distance between two hues, in `0..=180` degrees.
    #[must_use]
    pub fn hue_distance(&self, other: &Self) -> u16 {
        let diff = self.hue.abs_diff(other.hue);
        if diff > Self::HUE_RANGE / 2 {
            Self::HUE_RANGE - diff
        } else {
            diff
        }
    }

    /// Converts to 8-bit sRGB components for display.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb(&self) -> [u8; 3] {
        let h = f64::from(self.hue) / 60.0;
        let s = f64::from(self.saturation) / 100.0;
        let l = f64::from(self.lightness) / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h {
            h if h < 1.0 => (chroma, x, 0.0),
            h if h < 2.0 => (x, chroma, 0.0),
            h if h < 3.0 => (0.0, chroma, x),
            h if h < 4.0 => (0.0, x, chroma),
            h if h < 5.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        [r, g, b].map(|c| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8)
    }
}

impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

const fn min_u8(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}

/// One adjustable channel of a [`ColorSample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum ColorChannel {
    #[display("Hue")]
    Hue,
    #[display("Saturation")]
    Saturation,
    #[display("Lightness")]
    Lightness,
}

impl ColorChannel {
    pub const ALL: [Self; 3] = [Self::Hue, Self::Saturation, Self::Lightness];

    /// Largest value the channel's control offers.
    #[must_use]
    pub const fn max(self) -> u16 {
        match self {
            Self::Hue => ColorSample::HUE_RANGE - 1,
            Self::Saturation | Self::Lightness => 100,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Hue => Self::Saturation,
            Self::Saturation => Self::Lightness,
            Self::Lightness => Self::Hue,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Hue => Self::Lightness,
            Self::Saturation => Self::Hue,
            Self::Lightness => Self::Saturation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_out_of_range_channels() {
        let color = ColorSample::new(360, 120, 101);
        assert_eq!(color.hue(), 0);
        assert_eq!(color.saturation(), 100);
        assert_eq!(color.lightness(), 100);
    }

    #[test]
    fn test_hue_distance_is_circular() {
        let a = ColorSample::new(359, 50, 50);
        let b = ColorSample::new(1, 50, 50);
        assert_eq!(a.hue_distance(&b), 2);
        assert_eq!(b.hue_distance(&a), 2);

        let c = ColorSample::new(0, 50, 50);
        let d = ColorSample::new(180, 50, 50);
        assert_eq!(c.hue_distance(&d), 180);
    }

    #[test]
    fn test_hue_step_wraps_both_ways() {
        let color = ColorSample::new(0, 50, 50);
        assert_eq!(color.stepped(ColorChannel::Hue, -1).hue(), 359);
        assert_eq!(color.stepped(ColorChannel::Hue, 725).hue(), 5);
    }

    #[test]
    fn test_percent_steps_clamp() {
        let color = ColorSample::new(0, 95, 3);
        assert_eq!(color.stepped(ColorChannel::Saturation, 10).saturation(), 100);
        assert_eq!(color.stepped(ColorChannel::Lightness, -10).lightness(), 0);
    }

    #[test]
    fn test_to_rgb_primary_colors() {
        assert_eq!(ColorSample::new(0, 100, 50).to_rgb(), [255, 0, 0]);
        assert_eq!(ColorSample::new(120, 100, 50).to_rgb(), [0, 255, 0]);
        assert_eq!(ColorSample::new(240, 100, 50).to_rgb(), [0, 0, 255]);
        assert_eq!(ColorSample::new(0, 0, 100).to_rgb(), [255, 255, 255]);
        assert_eq!(ColorSample::new(200, 40, 0).to_rgb(), [0, 0, 0]);
    }

    #[test]
    fn test_channel_cycle() {
        for channel in ColorChannel::ALL {
            assert_eq!(channel.next().prev(), channel);
        }
    }
}
