//! Three-body Dalitz decays, P -> l- l+ X

use rand::prelude::*;

use crate::constants::*;
use crate::channel::{Channel, DalitzChannel};
use crate::geometry::FourVector;
use crate::particle::*;
use crate::settings::Settings;
use crate::spectrum::MassSpectrum;
use super::{angular, sample_pair_mass, DecayEvent, DecayError};

/// Decays `parent`, whose invariant mass sets the kinematics,
/// in the given channel.
///
/// The lepton pair is first constructed in its own rest frame. The
/// recoil is emitted isotropically in the rest frame of the parent,
/// the pair recoiling against it, and finally all three products are
/// boosted into the lab frame with the velocity of the parent.
pub(super) fn decay<T: ParticleTable, R: Rng>(
    channel: DalitzChannel,
    parent: FourVector,
    spectrum: &MassSpectrum,
    settings: &Settings,
    table: &T,
    rng: &mut R) -> Result<DecayEvent, DecayError>
{
    let parent_mass = parent.mass();
    let lepton_mass = table.mass(settings.leptons.lepton());
    let recoil_mass = table.mass(channel.recoil());

    let forbidden = DecayError::KinematicallyForbidden {
        channel: Channel::Dalitz(channel),
        parent_mass,
    };

    if !(parent_mass - recoil_mass > 2.0 * lepton_mass) {
        return Err(forbidden);
    }

    let m = sample_pair_mass(
        spectrum,
        |m| parent_mass - recoil_mass > m && 0.5 * m > lepton_mass,
        settings.max_attempts,
        rng,
    ).ok_or(forbidden)?;

    // Leptons in the pair rest frame. For a real photon recoil,
    // the pair is transversely polarized.
    let cos_theta = if recoil_mass < REAL_PHOTON_THRESHOLD {
        let lambda = angular::real_photon_anisotropy(m, lepton_mass);
        angular::sample_cos_theta(lambda, settings.max_attempts, rng).ok_or(forbidden)?
    } else {
        2.0 * rng.gen::<f64>() - 1.0
    };
    let phi = angular::sample_phi(rng);
    let (lepton, antilepton) = angular::back_to_back(m, lepton_mass, cos_theta, phi);

    // Recoil in the parent rest frame
    let e3 = (parent_mass * parent_mass + recoil_mass * recoil_mass - m * m) / (2.0 * parent_mass);
    let p3 = ((e3 + recoil_mass) * (e3 - recoil_mass)).max(0.0).sqrt();
    let n = angular::isotropic(rng);
    let recoil = FourVector::new(0.0, p3 * n[0], p3 * n[1], p3 * n[2]).with_sqr(recoil_mass * recoil_mass);

    // Pair moves opposite to the recoil
    let u_pair = FourVector::new(0.0, -p3 * n[0], -p3 * n[1], -p3 * n[2])
        .with_sqr(m * m)
        .four_velocity();
    let lepton = lepton.boost_by(u_pair.reverse());
    let antilepton = antilepton.boost_by(u_pair.reverse());

    // and then everything into the lab
    let u = parent.four_velocity().reverse();
    let products = vec![
        Product::new(settings.leptons.lepton(), lepton.boost_by(u)),
        Product::new(settings.leptons.antilepton(), antilepton.boost_by(u)),
        Product::new(channel.recoil(), recoil.boost_by(u)),
    ];

    Ok(DecayEvent {
        channel: Channel::Dalitz(channel),
        pair_mass: m,
        products,
    })
}
