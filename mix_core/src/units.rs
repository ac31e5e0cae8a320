//! # Unit Types
//!
//! Typed quantities for the mass/volume conversions of the absolute-volume
//! method. Plain f64 newtypes: JSON stays clean (just numbers) and there is
//! no runtime overhead.
//!
//! Mass and absolute volume are related through specific gravity and the
//! density of water (1000 kg/m³):
//!
//! ```rust
//! use mix_core::units::{KgPerM3, SpecificGravity};
//!
//! let cement = KgPerM3(315.0);
//! let volume = cement.absolute_volume(SpecificGravity(3.15));
//! assert!((volume.0 - 0.1).abs() < 1e-12);
//!
//! let back = volume.mass(SpecificGravity(3.15));
//! assert!((back.0 - 315.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::proportioning::{absolute_volume, mass_from_volume};

/// Density of water used for SG conversions (kg/m³)
pub const WATER_DENSITY_KG_M3: f64 = 1000.0;

/// Material content in kilograms per cubic metre of concrete
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM3(pub f64);

/// Absolute volume in cubic metres (per cubic metre of concrete)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Specific gravity (dimensionless, relative to water)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecificGravity(pub f64);

impl KgPerM3 {
    /// Absolute volume occupied by this mass: V = M / (SG × 1000)
    pub fn absolute_volume(self, sg: SpecificGravity) -> CubicMeters {
        CubicMeters(absolute_volume(self.0, sg.0))
    }
}

impl CubicMeters {
    /// Mass of material filling this volume: M = V × SG × 1000
    pub fn mass(self, sg: SpecificGravity) -> KgPerM3 {
        KgPerM3(mass_from_volume(self.0, sg.0))
    }
}
