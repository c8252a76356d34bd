//! RGB <-> HSV conversion
//!
//! Hue is kept in unit turns: a value in [0, 1) where 1.0 is a full circle
//! (degrees / 360). Saturation and value are in [0, 1]. Offsets applied by
//! the harmony engine use the same convention, so rotating by `d` degrees
//! adds `d / 360` to the hue and wraps modulo 1.0.

use crate::color::HexColor;

/// A color in hue/saturation/value form
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Hue in unit turns, [0, 1)
    pub h: f64,
    /// Saturation, [0, 1]
    pub s: f64,
    /// Value (brightness of the strongest channel), [0, 1]
    pub v: f64,
}

impl Hsv {
    #[must_use]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Hue in degrees, [0, 360)
    #[must_use]
    pub fn hue_degrees(self) -> f64 {
        self.h * 360.0
    }

    /// True when the color has no hue (a gray, black or white)
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }

    /// Rotate the hue by `degrees`, keeping saturation and value.
    ///
    /// The offset is reduced modulo 360 before conversion to turns, so
    /// `-30.0` and `330.0` give bit-identical results. The new hue always
    /// lands in [0, 1), including for negative offsets.
    #[must_use]
    pub fn rotated(self, degrees: f64) -> Self {
        let turns = degrees.rem_euclid(360.0) / 360.0;
        Self {
            h: (self.h + turns).rem_euclid(1.0),
            ..self
        }
    }

    /// Convert back to an 8-bit color
    #[must_use]
    pub fn to_color(self) -> HexColor {
        let (r, g, b) = hsv_to_rgb(self.h, self.s, self.v);
        HexColor::new(r, g, b)
    }
}

impl From<HexColor> for Hsv {
    fn from(color: HexColor) -> Self {
        let (r, g, b) = color.channels();
        rgb_to_hsv(r, g, b)
    }
}

/// Convert 8-bit RGB to HSV.
///
/// Six-sector formula: the hue sector is picked by whichever channel is the
/// maximum. Achromatic input (max == min) gets hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    if chroma == 0.0 {
        return Hsv::new(0.0, 0.0, max);
    }

    let s = chroma / max;

    // distance of each channel from the max, relative to chroma
    let rc = (max - r) / chroma;
    let gc = (max - g) / chroma;
    let bc = (max - b) / chroma;

    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hsv::new((sector / 6.0).rem_euclid(1.0), s, max)
}

/// Convert HSV back to 8-bit RGB.
///
/// Each channel is computed in [0, 1], scaled by 255 and rounded to the
/// nearest integer. Hue outside [0, 1) is wrapped first.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    if s == 0.0 {
        let gray = to_channel(v);
        return (gray, gray, gray);
    }

    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as u8) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (to_channel(r), to_channel(g), to_channel(b))
}

#[inline]
fn to_channel(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_primary_hues() {
        let red = rgb_to_hsv(255, 0, 0);
        assert!(red.h.abs() < EPS);
        assert!((red.s - 1.0).abs() < EPS);
        assert!((red.v - 1.0).abs() < EPS);

        let green = rgb_to_hsv(0, 255, 0);
        assert!((green.hue_degrees() - 120.0).abs() < EPS);

        let blue = rgb_to_hsv(0, 0, 255);
        assert!((blue.hue_degrees() - 240.0).abs() < EPS);

        let magenta = rgb_to_hsv(255, 0, 255);
        assert!((magenta.hue_degrees() - 300.0).abs() < EPS);
    }

    #[test]
    fn test_steel_blue() {
        let hsv = rgb_to_hsv(70, 130, 180);
        // (4 - 60/110) / 6 turns
        assert!((hsv.hue_degrees() - 207.272_727_272_727_3).abs() < 1e-6);
        assert!((hsv.s - 110.0 / 180.0).abs() < EPS);
        assert!((hsv.v - 180.0 / 255.0).abs() < EPS);
    }

    #[test]
    fn test_achromatic_input() {
        let black = rgb_to_hsv(0, 0, 0);
        assert_eq!(black, Hsv::new(0.0, 0.0, 0.0));

        let gray = rgb_to_hsv(128, 128, 128);
        assert!(gray.is_achromatic());
        assert!(gray.h.abs() < EPS);
        assert!((gray.v - 128.0 / 255.0).abs() < EPS);
    }

    #[test]
    fn test_hsv_to_rgb_sectors() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(1.0 / 6.0, 1.0, 1.0), (255, 255, 0));
        assert_eq!(hsv_to_rgb(2.0 / 6.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(3.0 / 6.0, 1.0, 1.0), (0, 255, 255));
        assert_eq!(hsv_to_rgb(4.0 / 6.0, 1.0, 1.0), (0, 0, 255));
        assert_eq!(hsv_to_rgb(5.0 / 6.0, 1.0, 1.0), (255, 0, 255));
    }

    #[test]
    fn test_hsv_to_rgb_rounds_instead_of_truncating() {
        // v * 255 = 127.6 rounds up to 128
        let v = 127.6 / 255.0;
        assert_eq!(hsv_to_rgb(0.0, 0.0, v), (128, 128, 128));
    }

    #[test]
    fn test_hsv_to_rgb_wraps_hue() {
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-0.5, 1.0, 1.0), hsv_to_rgb(0.5, 1.0, 1.0));
    }

    #[test]
    fn test_round_trip_exact_for_every_channel_grid_point() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let hsv = rgb_to_hsv(r, g, b);
                    assert_eq!(hsv_to_rgb(hsv.h, hsv.s, hsv.v), (r, g, b));
                }
            }
        }
    }

    #[test]
    fn test_rotated_wraps_negative_offsets() {
        let red = Hsv::new(0.0, 1.0, 1.0);
        let rotated = red.rotated(-30.0);
        assert!((rotated.h - 330.0 / 360.0).abs() < EPS);
        assert!(rotated.h >= 0.0 && rotated.h < 1.0);

        assert_eq!(red.rotated(-30.0), red.rotated(330.0));
        assert_eq!(red.rotated(720.0 + 90.0), red.rotated(90.0));
    }

    #[test]
    fn test_rotated_keeps_saturation_and_value() {
        let base = rgb_to_hsv(70, 130, 180);
        for degrees in [-270.0, -30.0, 0.0, 45.0, 180.0, 359.0] {
            let rotated = base.rotated(degrees);
            assert_eq!(rotated.s, base.s);
            assert_eq!(rotated.v, base.v);
        }
    }

    #[test]
    fn test_conversion_traits() {
        let color = HexColor::new(255, 87, 51);
        let hsv = Hsv::from(color);
        assert_eq!(hsv.to_color(), color);
    }
}
