//! Two-body decays of resonances, V -> l- l+

use rand::prelude::*;

use crate::constants::*;
use crate::channel::{Channel, ResonanceChannel};
use crate::geometry::{FourVector, ThreeVector};
use crate::particle::*;
use crate::settings::Settings;
use crate::spectrum::MassSpectrum;
use super::{angular, sample_pair_mass, DecayEvent, DecayError};

/// Decays `parent` in the given channel.
///
/// The pair mass is drawn from the line shape of the resonance and
/// the energy of the parent is adjusted to match it, keeping its
/// three-momentum. The lepton angular distribution is
/// `1 + a cos^2 theta` in the Collins-Soper frame of the resonance.
pub(super) fn decay<T: ParticleTable, R: Rng>(
    channel: ResonanceChannel,
    parent: FourVector,
    spectrum: &MassSpectrum,
    settings: &Settings,
    table: &T,
    rng: &mut R) -> Result<DecayEvent, DecayError>
{
    let parent_mass = parent.mass();
    let lepton_mass = table.mass(settings.leptons.lepton());

    let forbidden = DecayError::KinematicallyForbidden {
        channel: Channel::Resonance(channel),
        parent_mass,
    };

    if parent_mass < 2.0 * lepton_mass {
        return Err(forbidden);
    }

    let m = sample_pair_mass(
        spectrum,
        |m| 2.0 * m > parent_mass && m > 2.0 * lepton_mass,
        settings.max_attempts,
        rng,
    ).ok_or(forbidden)?;

    // Leptons in the resonance rest frame, z along the Collins-Soper axis
    let cos_theta = angular::sample_cos_theta(settings.polarization, settings.max_attempts, rng)
        .ok_or(forbidden)?;
    let phi = angular::sample_phi(rng);
    let (lepton, antilepton) = angular::back_to_back(m, lepton_mass, cos_theta, phi);

    let parent = parent.with_sqr(m * m);
    let u = parent.four_velocity();
    let axis = collins_soper_axis(u, settings.beam_energy);

    let lepton = lepton.rotate_uz(axis).boost_by(u.reverse());
    let antilepton = antilepton.rotate_uz(axis).boost_by(u.reverse());

    Ok(DecayEvent {
        channel: Channel::Resonance(channel),
        pair_mass: m,
        products: vec![
            Product::new(settings.leptons.lepton(), lepton),
            Product::new(settings.leptons.antilepton(), antilepton),
        ],
    })
}

/// The z-axis of the Collins-Soper frame of a particle with four-velocity
/// `u`: the bisector of the projectile and (reversed) target directions,
/// where projectile and target are protons with momentum `beam_energy`
/// along -z and +z in the lab, boosted into the rest frame of the
/// particle.
///
/// Falls back to the lab z-axis if the bisector is undefined.
pub fn collins_soper_axis(u: FourVector, beam_energy: f64) -> ThreeVector {
    let projectile = FourVector::new(0.0, 0.0, 0.0, -beam_energy).with_sqr(PROTON_MASS * PROTON_MASS);
    let target = FourVector::new(0.0, 0.0, 0.0, beam_energy).with_sqr(PROTON_MASS * PROTON_MASS);

    let projectile = ThreeVector::from(projectile.boost_by(u)).normalize();
    let target = ThreeVector::from(target.boost_by(u)).normalize();

    projectile.zip(target)
        .and_then(|(p, t)| (p - t).normalize())
        .unwrap_or(ThreeVector::new(0.0, 0.0, 1.0))
}
