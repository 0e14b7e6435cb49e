//! Shape parameters and named presets.

use std::fmt;
use std::str::FromStr;

use friendshape_core::{Result, ShapeError, Validate};
use serde::{Deserialize, Serialize};

/// Smallest exponent control that [`ShapeParameters::clamped`] lets through.
pub const MIN_EXPONENT: f64 = 0.1;

/// The full set of knobs a user turns to sculpt a shape.
///
/// `roundness` and `stretch` are divisors of the superquadric exponents
/// (`2 / roundness`, `2 / stretch`), so they must stay strictly positive.
/// `shape`, `color` and `wireframe` never reach the generator; they are kept so
/// the exported parameter record describes the whole session.
///
/// Fields missing from a deserialized record fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParameters {
    pub shape: Preset,
    /// Longitudinal (phi) cross-section control.
    pub roundness: f64,
    /// Latitudinal (theta) cross-section control.
    pub stretch: f64,
    pub size: f64,
    pub wireframe: bool,
    pub randomness: f64,
    pub spikiness: f64,
    pub asymmetry: f64,
    pub bulge: f64,
    pub indentations: f64,
    pub color: String,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            shape: Preset::Sphere,
            roundness: 2.0,
            stretch: 2.0,
            size: 10.0,
            wireframe: false,
            randomness: 0.5,
            spikiness: 0.0,
            asymmetry: 0.0,
            bulge: 0.0,
            indentations: 0.0,
            color: "#fcc2ec".to_string(),
        }
    }
}

impl ShapeParameters {
    /// Default parameters with `preset` merged on top.
    pub fn from_preset(preset: Preset) -> Self {
        Self::default().with_preset(preset)
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.apply_preset(preset);
        self
    }

    /// Merge the preset's override record into these parameters and remember
    /// the selection. Fields the preset does not name are left alone.
    pub fn apply_preset(&mut self, preset: Preset) {
        preset.overrides().apply_to(self);
        self.shape = preset;
        tracing::debug!(%preset, "applied shape preset");
    }

    /// Copy with both exponent controls lifted to at least [`MIN_EXPONENT`].
    pub fn clamped(&self) -> Self {
        Self {
            roundness: self.roundness.max(MIN_EXPONENT),
            stretch: self.stretch.max(MIN_EXPONENT),
            ..self.clone()
        }
    }

    /// True when no deformation stage can move a vertex off the base surface.
    pub fn is_undeformed(&self) -> bool {
        (self.randomness == 0.0 || self.spikiness == 0.0)
            && self.asymmetry == 0.0
            && self.bulge == 0.0
            && self.indentations == 0.0
    }
}

impl Validate for ShapeParameters {
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("roundness", self.roundness),
            ("stretch", self.stretch),
            ("size", self.size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ShapeError::invalid_param(name, value, "must be finite and > 0"));
            }
        }

        for (name, value) in [
            ("randomness", self.randomness),
            ("spikiness", self.spikiness),
            ("asymmetry", self.asymmetry),
            ("bulge", self.bulge),
            ("indentations", self.indentations),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ShapeError::invalid_param(name, value, "must be finite and >= 0"));
            }
        }

        Ok(())
    }
}

/// Whether `s` is a `#rrggbb` hex color.
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Named starting points for sculpting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Sphere,
    Cube,
    Cylinder,
    Octahedron,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Sphere,
        Preset::Cube,
        Preset::Cylinder,
        Preset::Octahedron,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Sphere => "sphere",
            Preset::Cube => "cube",
            Preset::Cylinder => "cylinder",
            Preset::Octahedron => "octahedron",
        }
    }

    pub fn overrides(self) -> PresetOverrides {
        match self {
            Preset::Sphere => PresetOverrides::plain(2.0, 2.0),
            Preset::Cube => PresetOverrides::plain(10.0, 10.0),
            Preset::Cylinder => PresetOverrides::plain(2.0, 10.0),
            Preset::Octahedron => PresetOverrides::plain(1.0, 1.0),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShapeError::NotFound(format!("shape preset '{wanted}'")))
    }
}

/// Partial parameter record a preset merges into [`ShapeParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PresetOverrides {
    pub roundness: Option<f64>,
    pub stretch: Option<f64>,
    pub bulge: Option<f64>,
    pub randomness: Option<f64>,
    pub spikiness: Option<f64>,
    pub asymmetry: Option<f64>,
}

impl PresetOverrides {
    /// Exponents set, bulge/spikiness/asymmetry switched off. `randomness` is
    /// left alone so a later spikiness edit still has noise to scale.
    const fn plain(roundness: f64, stretch: f64) -> Self {
        Self {
            roundness: Some(roundness),
            stretch: Some(stretch),
            bulge: Some(0.0),
            randomness: None,
            spikiness: Some(0.0),
            asymmetry: Some(0.0),
        }
    }

    pub fn apply_to(&self, params: &mut ShapeParameters) {
        let fields = [
            (self.roundness, &mut params.roundness),
            (self.stretch, &mut params.stretch),
            (self.bulge, &mut params.bulge),
            (self.randomness, &mut params.randomness),
            (self.spikiness, &mut params.spikiness),
            (self.asymmetry, &mut params.asymmetry),
        ];
        for (value, slot) in fields {
            if let Some(v) = value {
                *slot = v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_startup_state() {
        let p = ShapeParameters::default();
        assert_eq!(p.shape, Preset::Sphere);
        assert_eq!(p.roundness, 2.0);
        assert_eq!(p.stretch, 2.0);
        assert_eq!(p.size, 10.0);
        assert_eq!(p.randomness, 0.5);
        assert_eq!(p.color, "#fcc2ec");
        assert!(!p.wireframe);
        p.validate().unwrap();
    }

    #[test]
    fn test_cube_preset_merges_only_named_fields() {
        let mut p = ShapeParameters {
            size: 4.0,
            indentations: 1.5,
            bulge: 3.0,
            color: "#112233".to_string(),
            wireframe: true,
            ..ShapeParameters::default()
        };
        p.apply_preset(Preset::Cube);

        assert_eq!(p.shape, Preset::Cube);
        assert_eq!(p.roundness, 10.0);
        assert_eq!(p.stretch, 10.0);
        assert_eq!(p.bulge, 0.0);
        assert_eq!(p.spikiness, 0.0);
        // Untouched by any preset.
        assert_eq!(p.randomness, 0.5);
        assert_eq!(p.size, 4.0);
        assert_eq!(p.indentations, 1.5);
        assert_eq!(p.color, "#112233");
        assert!(p.wireframe);
    }

    #[test]
    fn test_cylinder_and_octahedron_exponents() {
        let cyl = ShapeParameters::from_preset(Preset::Cylinder);
        assert_eq!((cyl.roundness, cyl.stretch), (2.0, 10.0));
        let oct = ShapeParameters::from_preset(Preset::Octahedron);
        assert_eq!((oct.roundness, oct.stretch), (1.0, 1.0));
        assert_eq!(oct.randomness, 0.5);
        assert!(oct.is_undeformed());
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("cube".parse::<Preset>().unwrap(), Preset::Cube);
        assert_eq!(" Octahedron ".parse::<Preset>().unwrap(), Preset::Octahedron);
        let err = "torus".parse::<Preset>().unwrap_err();
        assert!(matches!(err, ShapeError::NotFound(_)));
    }

    #[test]
    fn test_preset_display_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_validate_rejects_zero_exponent() {
        let p = ShapeParameters {
            stretch: 0.0,
            ..ShapeParameters::default()
        };
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("stretch"), "{err}");
    }

    #[test]
    fn test_validate_rejects_bad_size_and_amplitudes() {
        for p in [
            ShapeParameters { size: 0.0, ..Default::default() },
            ShapeParameters { size: -1.0, ..Default::default() },
            ShapeParameters { roundness: f64::NAN, ..Default::default() },
            ShapeParameters { bulge: -0.5, ..Default::default() },
            ShapeParameters { randomness: f64::INFINITY, ..Default::default() },
        ] {
            assert!(p.validate().is_err(), "expected rejection for {p:?}");
        }
    }

    #[test]
    fn test_clamped_lifts_exponents() {
        let p = ShapeParameters {
            roundness: 0.0,
            stretch: 0.05,
            ..ShapeParameters::default()
        };
        let c = p.clamped();
        assert_eq!(c.roundness, MIN_EXPONENT);
        assert_eq!(c.stretch, MIN_EXPONENT);
        assert_eq!(c.size, p.size);
        c.validate().unwrap();
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#fcc2ec"));
        assert!(is_hex_color("#A0A0A0"));
        assert!(!is_hex_color("fcc2ec"));
        assert!(!is_hex_color("#fcc2e"));
        assert!(!is_hex_color("#zzzzzz"));
    }

    #[test]
    fn test_partial_record_uses_defaults() {
        let p: ShapeParameters =
            serde_json::from_str(r#"{ "shape": "cylinder", "bulge": 2.5 }"#).unwrap();
        assert_eq!(p.shape, Preset::Cylinder);
        assert_eq!(p.bulge, 2.5);
        assert_eq!(p.size, 10.0);
        assert_eq!(p.color, "#fcc2ec");
    }
}
