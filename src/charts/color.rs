//! Colour ramps: HCL interpolation, quantization and ordinal assignment.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
/// Country fill on the map.
pub const LAND: Rgb = Rgb::new(0xc0, 0xc0, 0xc0);
/// Point-of-interest marker fill.
pub const MARKER: Rgb = Rgb::new(0x96, 0x6f, 0xd6);
/// Ends of the bar colour ramp (plum to lavender).
pub const RAMP_START: Rgb = Rgb::new(0xdd, 0xa0, 0xdd);
pub const RAMP_END: Rgb = Rgb::new(0x96, 0x78, 0xb6);
/// Number of distinct colours taken from the ramp.
pub const RAMP_STEPS: usize = 10;

// CIE Lab reference white (D50) and companding constants.
const XN: f64 = 0.96422;
const YN: f64 = 1.0;
const ZN: f64 = 0.82521;
const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

#[derive(Debug, Clone, Copy)]
struct Hcl {
    h: f64,
    c: f64,
    l: f64,
}

fn rgb_to_linear(channel: u8) -> f64 {
    let x = channel as f64 / 255.0;
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_rgb(x: f64) -> u8 {
    let v = 255.0
        * if x <= 0.0031308 {
            12.92 * x
        } else {
            1.055 * x.powf(1.0 / 2.4) - 0.055
        };
    v.round().clamp(0.0, 255.0) as u8
}

fn xyz_to_lab(t: f64) -> f64 {
    if t > T3 {
        t.cbrt()
    } else {
        t / T2 + T0
    }
}

fn lab_to_xyz(t: f64) -> f64 {
    if t > T1 {
        t * t * t
    } else {
        T2 * (t - T0)
    }
}

impl From<Rgb> for Hcl {
    fn from(color: Rgb) -> Self {
        let r = rgb_to_linear(color.r);
        let g = rgb_to_linear(color.g);
        let b = rgb_to_linear(color.b);
        let y = xyz_to_lab((0.2225045 * r + 0.7168786 * g + 0.0606169 * b) / YN);
        let (x, z) = if color.r == color.g && color.g == color.b {
            (y, y)
        } else {
            (
                xyz_to_lab((0.4360747 * r + 0.3850649 * g + 0.1430804 * b) / XN),
                xyz_to_lab((0.0139322 * r + 0.0971045 * g + 0.7141733 * b) / ZN),
            )
        };

        let l = 116.0 * y - 16.0;
        let a = 500.0 * (x - y);
        let bb = 200.0 * (y - z);

        if a.abs() < 1e-12 && bb.abs() < 1e-12 {
            return Hcl { h: f64::NAN, c: 0.0, l };
        }

        let mut h = bb.atan2(a).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        Hcl {
            h,
            c: (a * a + bb * bb).sqrt(),
            l,
        }
    }
}

impl From<Hcl> for Rgb {
    fn from(hcl: Hcl) -> Self {
        let (a, b) = if hcl.h.is_nan() {
            (0.0, 0.0)
        } else {
            let h = hcl.h.to_radians();
            (h.cos() * hcl.c, h.sin() * hcl.c)
        };

        let y = (hcl.l + 16.0) / 116.0;
        let x = XN * lab_to_xyz(y + a / 500.0);
        let z = ZN * lab_to_xyz(y - b / 200.0);
        let y = YN * lab_to_xyz(y);

        Rgb::new(
            linear_to_rgb(3.1338561 * x - 1.6168667 * y - 0.4906146 * z),
            linear_to_rgb(-0.9787684 * x + 1.9161415 * y + 0.0334540 * z),
            linear_to_rgb(0.0719453 * x - 0.2289914 * y + 1.4052427 * z),
        )
    }
}

/// Hue travels the shorter way around the circle; an undefined hue borrows
/// the other end's.
fn lerp_hue(a: f64, b: f64, t: f64) -> f64 {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => f64::NAN,
        (true, false) => b,
        (false, true) => a,
        (false, false) => {
            let mut d = b - a;
            if !(-180.0..=180.0).contains(&d) {
                d -= 360.0 * (d / 360.0).round();
            }
            a + d * t
        }
    }
}

/// Colour at `t` in `[0, 1]` along an HCL ramp from `start` to `end`.
pub fn interpolate_hcl(start: Rgb, end: Rgb, t: f64) -> Rgb {
    let a = Hcl::from(start);
    let b = Hcl::from(end);
    Rgb::from(Hcl {
        h: lerp_hue(a.h, b.h, t),
        c: a.c + (b.c - a.c) * t,
        l: a.l + (b.l - a.l) * t,
    })
}

/// `n` evenly spaced samples of the ramp, both ends included.
pub fn quantize(start: Rgb, end: Rgb, n: usize) -> Vec<Rgb> {
    match n {
        0 => Vec::new(),
        1 => vec![interpolate_hcl(start, end, 0.0)],
        _ => (0..n)
            .map(|i| interpolate_hcl(start, end, i as f64 / (n - 1) as f64))
            .collect(),
    }
}

/// Assigns ramp colours to categories in domain order, cycling when there are
/// more categories than colours.
#[derive(Debug, Clone)]
pub struct OrdinalColors {
    index: HashMap<String, usize>,
    palette: Vec<Rgb>,
}

impl OrdinalColors {
    pub fn new<I, S>(keys: I, palette: Vec<Rgb>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = HashMap::new();
        for key in keys {
            let next = index.len();
            index.entry(key.into()).or_insert(next);
        }
        Self { index, palette }
    }

    /// The plum-to-lavender bar ramp used by both bar charts.
    pub fn bar_ramp<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(keys, quantize(RAMP_START, RAMP_END, RAMP_STEPS))
    }

    pub fn get(&self, key: &str) -> Option<Rgb> {
        if self.palette.is_empty() {
            return None;
        }
        self.index
            .get(key)
            .map(|&i| self.palette[i % self.palette.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: Rgb, b: Rgb) -> bool {
        let d = |x: u8, y: u8| (x as i16 - y as i16).abs() <= 1;
        d(a.r, b.r) && d(a.g, b.g) && d(a.b, b.b)
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(Rgb::from_hex("#dda0dd"), Some(RAMP_START));
        assert_eq!(RAMP_END.to_hex(), "#9678b6");
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("zzzzzz"), None);
    }

    #[test]
    fn ramp_ends_reproduce_endpoints() {
        let ramp = quantize(RAMP_START, RAMP_END, RAMP_STEPS);
        assert_eq!(ramp.len(), 10);
        assert!(near(ramp[0], RAMP_START), "{:?}", ramp[0]);
        assert!(near(ramp[9], RAMP_END), "{:?}", ramp[9]);
    }

    #[test]
    fn ramp_darkens_monotonically() {
        let ramp = quantize(RAMP_START, RAMP_END, RAMP_STEPS);
        let lum: Vec<f64> = ramp.iter().map(|c| Hcl::from(*c).l).collect();
        assert!(lum.windows(2).all(|w| w[0] >= w[1] - 0.5));
    }

    #[test]
    fn grey_round_trips_without_hue() {
        let grey = Rgb::new(128, 128, 128);
        assert!(Hcl::from(grey).h.is_nan());
        assert!(near(interpolate_hcl(grey, grey, 0.5), grey));
    }

    #[test]
    fn ordinal_colors_follow_domain_order_and_cycle() {
        let palette = vec![Rgb::new(1, 0, 0), Rgb::new(2, 0, 0)];
        let colors = OrdinalColors::new(["a", "b", "c"], palette);
        assert_eq!(colors.get("a"), Some(Rgb::new(1, 0, 0)));
        assert_eq!(colors.get("b"), Some(Rgb::new(2, 0, 0)));
        assert_eq!(colors.get("c"), Some(Rgb::new(1, 0, 0)));
        assert_eq!(colors.get("d"), None);
    }
}
