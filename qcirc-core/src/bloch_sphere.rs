//! Bloch sphere coordinates for single-qubit states
//!
//! Any pure single-qubit state can be written as:
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! where θ ∈ [0, π] and φ ∈ [0, 2π) define a point on the unit sphere.
//!
//! # Example
//!
//! ```
//! use qcirc_core::{BlochAngles, BlochVector};
//! use num_complex::Complex64;
//!
//! // |+⟩ lies on the equator, P(|1⟩) = 0.5
//! let angles = BlochAngles::from_excited_probability(0.5);
//! assert!((angles.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let plus = [
//!     Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
//!     Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
//! ];
//! let bloch = BlochVector::from_state(&plus);
//! assert!((bloch.x - 1.0).abs() < 1e-10);
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A point on the Bloch sphere in Cartesian coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct BlochVector {
    /// X coordinate (-1 to 1)
    pub x: f64,
    /// Y coordinate (-1 to 1)
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

/// Bloch sphere angles (spherical coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Exact projection of a single-qubit pure state [α, β]
    ///
    /// Uses the Pauli expectation values, so it keeps the relative phase that
    /// a probability-only projection discards.
    pub fn from_state(state: &[Complex64; 2]) -> Self {
        let alpha = state[0];
        let beta = state[1];

        // x = 2Re(α*β), y = 2Im(α*β), z = |α|² - |β|²
        let alpha_conj_beta = alpha.conj() * beta;

        Self {
            x: 2.0 * alpha_conj_beta.re,
            y: 2.0 * alpha_conj_beta.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Convert to spherical coordinates
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        if r < 1e-10 {
            return BlochAngles::north_pole();
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    /// Length of the vector; 1.0 for pure states
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Check if this represents a pure state (magnitude ≈ 1.0)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlochVector({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl BlochAngles {
    /// The |0⟩ state
    pub const fn north_pole() -> Self {
        Self { theta: 0.0, phi: 0.0 }
    }

    /// Angles of a qubit whose probability of measuring |1⟩ is `p1`
    ///
    /// θ = 2·arcsin(√p1) and φ = 0. `p1` is clamped to [0, 1] so rounding
    /// noise never produces NaN.
    pub fn from_excited_probability(p1: f64) -> Self {
        let p1 = p1.clamp(0.0, 1.0);
        Self {
            theta: 2.0 * p1.sqrt().asin(),
            phi: 0.0,
        }
    }

    /// Convert spherical coordinates to a Bloch vector
    pub fn to_vector(&self) -> BlochVector {
        BlochVector {
            x: self.theta.sin() * self.phi.cos(),
            y: self.theta.sin() * self.phi.sin(),
            z: self.theta.cos(),
        }
    }

    /// Probability of measuring |1⟩, sin²(θ/2)
    pub fn excited_probability(&self) -> f64 {
        (self.theta / 2.0).sin().powi(2)
    }
}

impl fmt::Display for BlochAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "θ={:.4}, φ={:.4}", self.theta, self.phi)
    }
}
