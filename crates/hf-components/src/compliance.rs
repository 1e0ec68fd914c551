//! Compliance: a volume-holding element with a non-linear pressure law.
//!
//! The canonical reservoir of a lumped-parameter circuit. Pressure follows
//! an explicit quadratic-stiffening spring law on the volume above the
//! unstressed volume:
//!
//! ```text
//! v_above   = vol - u_vol
//! elastance = el_base + el_k * v_above^2
//! recoil    = v_above * elastance
//! pres      = recoil + pres_out
//! ```
//!
//! Volume moves in and out through [`Compliance::add_volume`] and
//! [`Compliance::remove_volume`]. Both apply the mass-balance guard: a
//! withdrawal that would drive the volume negative is clamped to zero and
//! the undisplaced amount is returned to the caller, so a network of
//! reservoirs exchanging volume every step can detect (and decide what to
//! do about) conservation deficits instead of silently corrupting total
//! system volume.

use crate::error::{ComponentError, ComponentResult};
use crate::mixing::{ContentKind, ContentMixer};
use crate::traits::Component;
use hf_core::units::{Pressure, Volume, litre, mmhg};
use hf_core::{ParamReader, Params};
use std::any::Any;

/// Validated, typed configuration for a [`Compliance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplianceConfig {
    /// Initial volume (L).
    pub vol_l: f64,
    /// Unstressed volume: the volume at zero recoil pressure (L).
    pub u_vol_l: f64,
    /// Baseline elastance (mmHg/L).
    pub el_base_mmhg_per_l: f64,
    /// Non-linear elastance coefficient (mmHg/L^3).
    pub el_k_mmhg_per_l3: f64,
    /// Pressure exerted on the compliance from the outside (mmHg).
    pub pres_out_mmhg: f64,
    pub is_enabled: bool,
    pub content: ContentKind,
}

impl ComplianceConfig {
    /// Build a config from a definition's parameter bag.
    ///
    /// `vol_l`, `u_vol_l` and `el_base_mmhg_per_l` are required; everything
    /// else defaults. Returns the keys the compliance does not understand so
    /// the loader can surface them as warnings.
    pub fn from_params(params: &Params) -> ComponentResult<(Self, Vec<String>)> {
        let mut reader = ParamReader::new(params);

        let vol_l = reader.require_f64("vol_l")?;
        let u_vol_l = reader.require_f64("u_vol_l")?;
        let el_base_mmhg_per_l = reader.require_f64("el_base_mmhg_per_l")?;
        let el_k_mmhg_per_l3 = reader.f64_or("el_k_mmhg_per_l3", 0.0)?;
        let pres_out_mmhg = reader.f64_or("pres_out_mmhg", 0.0)?;
        let is_enabled = reader.bool_or("is_enabled", true)?;
        let content = ContentKind::parse(&reader.text_or("content", "blood")?)?;
        let unknown = reader.unknown_keys();

        let config = Self {
            vol_l,
            u_vol_l,
            el_base_mmhg_per_l,
            el_k_mmhg_per_l3,
            pres_out_mmhg,
            is_enabled,
            content,
        };
        config.validate()?;

        Ok((config, unknown))
    }

    fn validate(&self) -> ComponentResult<()> {
        check_non_negative_finite("vol_l", self.vol_l)?;
        check_non_negative_finite("u_vol_l", self.u_vol_l)?;
        check_non_negative_finite("el_base_mmhg_per_l", self.el_base_mmhg_per_l)?;
        check_finite("el_k_mmhg_per_l3", self.el_k_mmhg_per_l3)?;
        check_finite("pres_out_mmhg", self.pres_out_mmhg)?;
        Ok(())
    }
}

fn check_finite(key: &str, value: f64) -> ComponentResult<()> {
    if !value.is_finite() {
        return Err(ComponentError::InvalidParam {
            key: key.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    Ok(())
}

fn check_non_negative_finite(key: &str, value: f64) -> ComponentResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ComponentError::InvalidParam {
            key: key.to_string(),
            reason: "must be non-negative and finite".to_string(),
        });
    }
    Ok(())
}

/// A compliant fluid or gas reservoir.
pub struct Compliance {
    name: String,
    content: ContentKind,
    is_enabled: bool,
    vol_l: f64,
    u_vol_l: f64,
    el_base_mmhg_per_l: f64,
    el_k_mmhg_per_l3: f64,
    pres_out_mmhg: f64,
    // Derived outputs, recomputed every step.
    recoil_mmhg: f64,
    pres_mmhg: f64,
    mixer: Option<Box<dyn ContentMixer>>,
}

impl std::fmt::Debug for Compliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compliance")
            .field("name", &self.name)
            .field("content", &self.content)
            .field("is_enabled", &self.is_enabled)
            .field("vol_l", &self.vol_l)
            .field("u_vol_l", &self.u_vol_l)
            .field("el_base_mmhg_per_l", &self.el_base_mmhg_per_l)
            .field("el_k_mmhg_per_l3", &self.el_k_mmhg_per_l3)
            .field("pres_out_mmhg", &self.pres_out_mmhg)
            .field("recoil_mmhg", &self.recoil_mmhg)
            .field("pres_mmhg", &self.pres_mmhg)
            .field("mixer", &self.mixer.as_ref().map(|_| "<dyn ContentMixer>"))
            .finish()
    }
}

impl Compliance {
    pub const KIND: &'static str = "Compliance";

    pub fn new(name: impl Into<String>, config: ComplianceConfig) -> Self {
        Self {
            name: name.into(),
            content: config.content,
            is_enabled: config.is_enabled,
            vol_l: config.vol_l,
            u_vol_l: config.u_vol_l,
            el_base_mmhg_per_l: config.el_base_mmhg_per_l,
            el_k_mmhg_per_l3: config.el_k_mmhg_per_l3,
            pres_out_mmhg: config.pres_out_mmhg,
            recoil_mmhg: 0.0,
            pres_mmhg: 0.0,
            mixer: None,
        }
    }

    /// Construct straight from a parameter bag, also returning any unknown
    /// parameter keys for the loader's warning list.
    pub fn from_params(
        name: impl Into<String>,
        params: &Params,
    ) -> ComponentResult<(Self, Vec<String>)> {
        let (config, unknown) = ComplianceConfig::from_params(params)?;
        Ok((Self::new(name, config), unknown))
    }

    /// Install the content-mixing collaborator invoked on every inflow.
    pub fn set_mixer(&mut self, mixer: Box<dyn ContentMixer>) {
        self.mixer = Some(mixer);
    }

    pub fn content(&self) -> ContentKind {
        self.content
    }

    /// Current volume (L).
    pub fn vol_l(&self) -> f64 {
        self.vol_l
    }

    pub fn u_vol_l(&self) -> f64 {
        self.u_vol_l
    }

    /// Recoil pressure from the last update (mmHg).
    pub fn recoil_mmhg(&self) -> f64 {
        self.recoil_mmhg
    }

    /// Transmural pressure from the last update (mmHg).
    pub fn pres_mmhg(&self) -> f64 {
        self.pres_mmhg
    }

    pub fn pres_out_mmhg(&self) -> f64 {
        self.pres_out_mmhg
    }

    /// External pressure is an input; a pleural or thoracic component may
    /// update it between steps.
    pub fn set_pres_out_mmhg(&mut self, pres_out_mmhg: f64) {
        self.pres_out_mmhg = pres_out_mmhg;
    }

    /// Current volume as a typed quantity.
    pub fn volume(&self) -> Volume {
        litre(self.vol_l)
    }

    /// Transmural pressure as a typed quantity.
    pub fn pressure(&self) -> Pressure {
        mmhg(self.pres_mmhg)
    }

    /// Recoil pressure for a given volume above the unstressed volume.
    pub fn pressure_law(&self, v_above_l: f64) -> f64 {
        let elastance = self.el_base_mmhg_per_l + self.el_k_mmhg_per_l3 * v_above_l * v_above_l;
        v_above_l * elastance
    }

    fn calculate_pressure(&mut self) {
        let v_above_l = self.vol_l - self.u_vol_l;
        self.recoil_mmhg = self.pressure_law(v_above_l);
        self.pres_mmhg = self.recoil_mmhg + self.pres_out_mmhg;
    }

    /// Add `dvol_l` litres arriving from `source`.
    ///
    /// Triggers the content-mixing hook, then the mass-balance guard.
    /// Returns the volume that could not be represented (0.0 in practice for
    /// inflow, and always 0.0 when disabled).
    pub fn add_volume(&mut self, dvol_l: f64, source: &str) -> f64 {
        if !self.is_enabled {
            return 0.0;
        }
        self.vol_l += dvol_l;

        if let Some(mixer) = self.mixer.as_mut() {
            mixer.mix(self.content, &self.name, source, dvol_l, self.vol_l);
        }

        self.protect_mass_balance()
    }

    /// Remove `dvol_l` litres toward `dest`.
    ///
    /// Returns the shortfall: the part of the request that was not there to
    /// remove. Always 0.0 when disabled.
    pub fn remove_volume(&mut self, dvol_l: f64, dest: &str) -> f64 {
        if !self.is_enabled {
            return 0.0;
        }
        let _ = dest;
        self.vol_l -= dvol_l;

        self.protect_mass_balance()
    }

    /// Mass-balance guard: clamp a negative volume to exactly zero and
    /// return the magnitude of the deficit.
    ///
    /// Several donors drawing from the same reservoir in one step can
    /// overdraw it; the guard makes the failure visible and quantifiable to
    /// the caller instead of letting total system volume drift.
    fn protect_mass_balance(&mut self) -> f64 {
        if self.vol_l < 0.0 {
            let nondisplaced_l = -self.vol_l;
            self.vol_l = 0.0;
            nondisplaced_l
        } else {
            0.0
        }
    }
}

impl Component for Compliance {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    fn step(&mut self, _dt_s: f64) {
        if self.is_enabled {
            self.calculate_pressure();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn reservoir(vol_l: f64) -> Compliance {
        Compliance::new(
            "res",
            ComplianceConfig {
                vol_l,
                u_vol_l: 0.0,
                el_base_mmhg_per_l: 100.0,
                el_k_mmhg_per_l3: 0.0,
                pres_out_mmhg: 0.0,
                is_enabled: true,
                content: ContentKind::Blood,
            },
        )
    }

    proptest! {
        #[test]
        fn volume_never_goes_negative(
            vol in 0.0_f64..2.0,
            draws in prop::collection::vec(0.0_f64..0.5, 1..20),
        ) {
            let mut c = reservoir(vol);
            for draw in draws {
                let shortfall = c.remove_volume(draw, "out");
                prop_assert!(c.vol_l() >= 0.0);
                prop_assert!(shortfall >= 0.0);
            }
        }

        #[test]
        fn moved_plus_shortfall_equals_request(
            vol in 0.0_f64..1.0,
            draw in 0.0_f64..2.0,
        ) {
            let mut c = reservoir(vol);
            let before = c.vol_l();
            let shortfall = c.remove_volume(draw, "out");
            let moved = before - c.vol_l();
            prop_assert!((moved + shortfall - draw).abs() < 1e-9);
        }
    }
}
