//! Natural Earth world projection (polynomial approximation, Šavrič et al.).

/// Projects longitude/latitude in degrees onto pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaturalEarth {
    scale: f64,
    translate: (f64, f64),
}

impl Default for NaturalEarth {
    fn default() -> Self {
        Self {
            scale: 175.295,
            translate: (480.0, 250.0),
        }
    }
}

impl NaturalEarth {
    pub fn with_scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn translate(self, x: f64, y: f64) -> Self {
        Self {
            translate: (x, y),
            ..self
        }
    }

    /// `(longitude, latitude)` in degrees to `(x, y)` pixels, y growing down.
    pub fn project(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        let (x, y) = Self::raw(longitude.to_radians(), latitude.to_radians());
        (
            self.translate.0 + x * self.scale,
            self.translate.1 - y * self.scale,
        )
    }

    fn raw(lambda: f64, phi: f64) -> (f64, f64) {
        let phi2 = phi * phi;
        let phi4 = phi2 * phi2;
        let x = lambda
            * (0.8707 - 0.131979 * phi2
                + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4)));
        let y = phi
            * (1.007226
                + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4)));
        (x, y)
    }
}
