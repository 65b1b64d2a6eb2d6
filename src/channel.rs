//! Decay channels and the combined species codes that request them

use std::fmt;
use std::str::FromStr;

use crate::lineshape::FormFactor;
use crate::particle::Species;

/// Which lepton pair is produced
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
pub enum Leptons {
    Electron,
    Muon,
}

impl Leptons {
    /// The negatively charged lepton
    pub fn lepton(self) -> Species {
        match self {
            Leptons::Electron => Species::Electron,
            Leptons::Muon => Species::Muon,
        }
    }

    /// The positively charged lepton
    pub fn antilepton(self) -> Species {
        self.lepton().antiparticle()
    }
}

impl fmt::Display for Leptons {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Leptons::Electron => write!(f, "e+e-"),
            Leptons::Muon => write!(f, "mu+mu-"),
        }
    }
}

impl FromStr for Leptons {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "electron" | "electrons" | "dielectron" | "ee" | "e" => Ok(Leptons::Electron),
            "muon" | "muons" | "dimuon" | "mumu" | "mu" => Ok(Leptons::Muon),
            other => Err(format!("'{}' is neither 'electron' nor 'muon'", other)),
        }
    }
}

/// Three-body decays, P -> l+ l- X, labelled by parent and recoil X
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
pub enum DalitzChannel {
    /// pi0 -> l+ l- gamma
    Pion,
    /// eta -> l+ l- gamma
    Eta,
    /// omega -> l+ l- pi0
    Omega,
    /// eta' -> l+ l- gamma
    EtaPrimeToPhoton,
    /// eta' -> l+ l- omega
    EtaPrimeToOmega,
    /// phi -> l+ l- eta
    PhiToEta,
    /// phi -> l+ l- pi0
    PhiToPion,
    /// phi -> l+ l- gamma
    PhiToPhoton,
}

impl DalitzChannel {
    pub const ALL: [DalitzChannel; 8] = [
        DalitzChannel::Pion,
        DalitzChannel::Eta,
        DalitzChannel::Omega,
        DalitzChannel::EtaPrimeToPhoton,
        DalitzChannel::EtaPrimeToOmega,
        DalitzChannel::PhiToEta,
        DalitzChannel::PhiToPion,
        DalitzChannel::PhiToPhoton,
    ];

    pub fn parent(self) -> Species {
        match self {
            DalitzChannel::Pion => Species::Pion,
            DalitzChannel::Eta => Species::Eta,
            DalitzChannel::Omega => Species::Omega,
            DalitzChannel::EtaPrimeToPhoton | DalitzChannel::EtaPrimeToOmega => Species::EtaPrime,
            DalitzChannel::PhiToEta | DalitzChannel::PhiToPion | DalitzChannel::PhiToPhoton => Species::Phi,
        }
    }

    /// The third body
    pub fn recoil(self) -> Species {
        match self {
            DalitzChannel::Pion | DalitzChannel::Eta | DalitzChannel::EtaPrimeToPhoton | DalitzChannel::PhiToPhoton => Species::Photon,
            DalitzChannel::Omega | DalitzChannel::PhiToPion => Species::Pion,
            DalitzChannel::EtaPrimeToOmega => Species::Omega,
            DalitzChannel::PhiToEta => Species::Eta,
        }
    }

    pub fn form_factor(self) -> FormFactor {
        match self {
            DalitzChannel::Pion => FormFactor::pion(),
            DalitzChannel::Eta => FormFactor::eta(),
            DalitzChannel::Omega => FormFactor::omega(),
            DalitzChannel::EtaPrimeToPhoton | DalitzChannel::EtaPrimeToOmega => FormFactor::eta_prime(),
            DalitzChannel::PhiToEta | DalitzChannel::PhiToPion | DalitzChannel::PhiToPhoton => FormFactor::Unity,
        }
    }

    /// Whether the channel is generated for the given lepton pair.
    /// The eta' -> omega and phi -> eta, pi0 modes are dielectron only;
    /// phi -> gamma replaces them for dimuons.
    pub fn is_enabled(self, leptons: Leptons) -> bool {
        match (self, leptons) {
            (DalitzChannel::EtaPrimeToOmega, Leptons::Muon) => false,
            (DalitzChannel::PhiToEta, Leptons::Muon) => false,
            (DalitzChannel::PhiToPion, Leptons::Muon) => false,
            (DalitzChannel::PhiToPhoton, Leptons::Electron) => false,
            _ => true,
        }
    }

    /// Finds the enabled channel with the given parent and recoil
    pub fn find(parent: Species, recoil: Species, leptons: Leptons) -> Option<Self> {
        Self::ALL.iter()
            .copied()
            .find(|c| c.parent() == parent && c.recoil() == recoil && c.is_enabled(leptons))
    }
}

/// Two-body decays of vector (and pseudoscalar) mesons, V -> l+ l-
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
pub enum ResonanceChannel {
    Eta,
    Rho,
    Omega,
    Phi,
    JPsi,
    Psi2S,
    Upsilon,
}

impl ResonanceChannel {
    pub const ALL: [ResonanceChannel; 7] = [
        ResonanceChannel::Eta,
        ResonanceChannel::Rho,
        ResonanceChannel::Omega,
        ResonanceChannel::Phi,
        ResonanceChannel::JPsi,
        ResonanceChannel::Psi2S,
        ResonanceChannel::Upsilon,
    ];

    pub fn parent(self) -> Species {
        match self {
            ResonanceChannel::Eta => Species::Eta,
            ResonanceChannel::Rho => Species::Rho,
            ResonanceChannel::Omega => Species::Omega,
            ResonanceChannel::Phi => Species::Phi,
            ResonanceChannel::JPsi => Species::JPsi,
            ResonanceChannel::Psi2S => Species::Psi2S,
            ResonanceChannel::Upsilon => Species::Upsilon,
        }
    }

    pub fn find(parent: Species) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.parent() == parent)
    }
}

/// A physically distinct decay mode, which owns one pair-mass spectrum
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
pub enum Channel {
    Dalitz(DalitzChannel),
    Resonance(ResonanceChannel),
}

impl Channel {
    pub fn parent(self) -> Species {
        match self {
            Channel::Dalitz(c) => c.parent(),
            Channel::Resonance(c) => c.parent(),
        }
    }

    /// The combined code that requests this decay
    pub fn code(self) -> i32 {
        match self {
            Channel::Dalitz(c) => decay_code(c.parent(), Some(c.recoil())),
            Channel::Resonance(c) => decay_code(c.parent(), None),
        }
    }

    /// Every channel enabled for the given lepton pair
    pub fn all(leptons: Leptons) -> Vec<Channel> {
        DalitzChannel::ALL.iter()
            .filter(|c| c.is_enabled(leptons))
            .map(|&c| Channel::Dalitz(c))
            .chain(ResonanceChannel::ALL.iter().map(|&c| Channel::Resonance(c)))
            .collect()
    }

    /// Identifies the channel requested by the combined code
    /// `1000 * partner + parent` (see [`split_code`]).
    pub fn classify(code: i32, leptons: Leptons) -> Option<Self> {
        let (parent, partner) = split_code(code);
        let parent = Species::from_pdg(parent)?;

        if partner == 0 {
            ResonanceChannel::find(parent).map(Channel::Resonance)
        } else {
            let partner = Species::from_pdg(partner)?;
            DalitzChannel::find(parent, partner, leptons).map(Channel::Dalitz)
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Channel::Dalitz(c) => write!(f, "{} -> l+ l- {}", c.parent(), c.recoil()),
            Channel::Resonance(c) => write!(f, "{} -> l+ l-", c.parent()),
        }
    }
}

/// Splits a combined code into (parent, partner) PDG numbers.
///
/// The last three digits give the parent, the rest the partner,
/// which is zero for two-body decays. psi(2S), whose own PDG number
/// is 100443, is never split.
pub fn split_code(code: i32) -> (i32, i32) {
    if code == Species::Psi2S.pdg() {
        (code, 0)
    } else {
        (code % 1000, code / 1000)
    }
}

/// Builds the combined code that requests the decay of `parent`,
/// with recoil `partner` for Dalitz decays.
pub fn decay_code(parent: Species, partner: Option<Species>) -> i32 {
    match partner {
        Some(p) => 1000 * p.pdg() + parent.pdg(),
        None => parent.pdg(),
    }
}
