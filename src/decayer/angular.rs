//! Angular distributions of the decay products

use std::f64::consts;
use rand::prelude::*;
use rand_distr::UnitSphere;

use crate::geometry::{FourVector, ThreeVector};

/// Returns a pseudorandomly sampled cos(theta), distributed as
/// `1 + a cos^2 theta` on [-1, 1], or `None` if `max_attempts`
/// proposals were all rejected.
///
/// `a` must be no smaller than -1.
pub(super) fn sample_cos_theta<R: Rng>(a: f64, max_attempts: usize, rng: &mut R) -> Option<f64> {
    let max = 1.0f64.max(1.0 + a);

    (0..max_attempts).find_map(|_| {
        let c = 2.0 * rng.gen::<f64>() - 1.0;
        let u = rng.gen::<f64>();
        if u * max <= 1.0 + a * c * c {
            Some(c)
        } else {
            None
        }
    })
}

/// Coefficient of cos^2 theta in the angular distribution of
/// leptons from the conversion of a real photon into a pair of
/// mass `pair_mass`
pub(super) fn real_photon_anisotropy(pair_mass: f64, lepton_mass: f64) -> f64 {
    let beta2 = 1.0 - 4.0 * (lepton_mass / pair_mass).powi(2);
    beta2 / (2.0 - beta2)
}

/// Azimuthal angle, uniform in [0, 2 pi)
pub(super) fn sample_phi<R: Rng>(rng: &mut R) -> f64 {
    2.0 * consts::PI * rng.gen::<f64>()
}

/// Isotropically distributed unit vector
pub(super) fn isotropic<R: Rng>(rng: &mut R) -> ThreeVector {
    let n: [f64; 3] = rng.sample(UnitSphere);
    ThreeVector::from(n)
}

/// Four-momenta of the lepton and antilepton, of mass `lepton_mass`,
/// in the rest frame of a pair with invariant mass `pair_mass`:
/// the lepton moves along (theta, phi) and the antilepton opposite.
pub(super) fn back_to_back(pair_mass: f64, lepton_mass: f64, cos_theta: f64, phi: f64) -> (FourVector, FourVector) {
    let e = 0.5 * pair_mass;
    let p = ((e + lepton_mass) * (e - lepton_mass)).max(0.0).sqrt();
    let n = ThreeVector::from_polar(p, cos_theta, phi);
    let lepton = FourVector::new(e, n[0], n[1], n[2]);
    let antilepton = FourVector::new(e, -n[0], -n[1], -n[2]);
    (lepton, antilepton)
}
