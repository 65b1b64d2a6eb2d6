//! Particle species and their properties

use std::fmt;
use std::str::FromStr;

use crate::geometry::FourVector;

mod table;
pub use table::*;

/// The particle species known to the decayer: the leptons it
/// produces, the recoils of Dalitz decays and the decaying mesons.
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
pub enum Species {
    Electron,
    Positron,
    Muon,
    AntiMuon,
    Photon,
    Proton,
    Pion,
    Eta,
    Rho,
    Omega,
    EtaPrime,
    Phi,
    JPsi,
    Psi2S,
    Upsilon,
}

impl Species {
    /// The PDG Monte Carlo particle number
    pub fn pdg(self) -> i32 {
        match self {
            Species::Electron => 11,
            Species::Positron => -11,
            Species::Muon => 13,
            Species::AntiMuon => -13,
            Species::Photon => 22,
            Species::Proton => 2212,
            Species::Pion => 111,
            Species::Eta => 221,
            Species::Rho => 113,
            Species::Omega => 223,
            Species::EtaPrime => 331,
            Species::Phi => 333,
            Species::JPsi => 443,
            Species::Psi2S => 100443,
            Species::Upsilon => 553,
        }
    }

    /// Looks up a species by PDG number
    pub fn from_pdg(code: i32) -> Option<Self> {
        let species = match code {
            11 => Species::Electron,
            -11 => Species::Positron,
            13 => Species::Muon,
            -13 => Species::AntiMuon,
            22 => Species::Photon,
            2212 => Species::Proton,
            111 => Species::Pion,
            221 => Species::Eta,
            113 => Species::Rho,
            223 => Species::Omega,
            331 => Species::EtaPrime,
            333 => Species::Phi,
            443 => Species::JPsi,
            100443 => Species::Psi2S,
            553 => Species::Upsilon,
            _ => return None,
        };
        Some(species)
    }

    /// The species with the same mass and width, but opposite charge
    /// (for the leptons) or itself (for everything else)
    pub fn antiparticle(self) -> Self {
        match self {
            Species::Electron => Species::Positron,
            Species::Positron => Species::Electron,
            Species::Muon => Species::AntiMuon,
            Species::AntiMuon => Species::Muon,
            other => other,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Species::Electron => "electron",
            Species::Positron => "positron",
            Species::Muon => "muon",
            Species::AntiMuon => "antimuon",
            Species::Photon => "photon",
            Species::Proton => "proton",
            Species::Pion => "pi0",
            Species::Eta => "eta",
            Species::Rho => "rho",
            Species::Omega => "omega",
            Species::EtaPrime => "eta'",
            Species::Phi => "phi",
            Species::JPsi => "J/psi",
            Species::Psi2S => "psi(2S)",
            Species::Upsilon => "upsilon",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Species {
    type Err = String;

    /// Parses either a name ("eta", "J/psi", "jpsi") or a PDG number ("221").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.trim().parse::<i32>() {
            return Species::from_pdg(code).ok_or_else(|| format!("unknown PDG code {}", code));
        }

        match s.trim().to_lowercase().as_str() {
            "electron" | "e-" => Ok(Species::Electron),
            "positron" | "e+" => Ok(Species::Positron),
            "muon" | "mu-" => Ok(Species::Muon),
            "antimuon" | "mu+" => Ok(Species::AntiMuon),
            "photon" | "gamma" => Ok(Species::Photon),
            "proton" | "p" => Ok(Species::Proton),
            "pi0" | "pion" => Ok(Species::Pion),
            "eta" => Ok(Species::Eta),
            "rho" | "rho0" => Ok(Species::Rho),
            "omega" => Ok(Species::Omega),
            "eta'" | "etaprime" | "eta_prime" => Ok(Species::EtaPrime),
            "phi" => Ok(Species::Phi),
            "j/psi" | "jpsi" => Ok(Species::JPsi),
            "psi(2s)" | "psi2s" => Ok(Species::Psi2S),
            "upsilon" => Ok(Species::Upsilon),
            other => Err(format!("'{}' is not a known species", other)),
        }
    }
}

/// One particle produced by a decay: its species and
/// four-momentum in the lab frame, in GeV
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct Product {
    pub species: Species,
    pub momentum: FourVector,
}

impl Product {
    pub fn new(species: Species, momentum: FourVector) -> Self {
        Product { species, momentum }
    }
}

impl fmt::Display for Product {
    // "PDG_NUM E (GeV) px py pz (GeV)"
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
            "{}\t{:.6e}\t{:.6e}\t{:.6e}\t{:.6e}",
            self.species.pdg(),
            self.momentum[0],
            self.momentum[1], self.momentum[2], self.momentum[3],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdg_round_trip() {
        let all = [
            Species::Electron, Species::Positron, Species::Muon, Species::AntiMuon,
            Species::Photon, Species::Proton, Species::Pion, Species::Eta,
            Species::Rho, Species::Omega, Species::EtaPrime, Species::Phi,
            Species::JPsi, Species::Psi2S, Species::Upsilon,
        ];
        for s in all.iter() {
            assert_eq!(Species::from_pdg(s.pdg()), Some(*s));
        }
        assert_eq!(Species::from_pdg(999), None);
    }

    #[test]
    fn parse_species() {
        assert_eq!("eta".parse::<Species>(), Ok(Species::Eta));
        assert_eq!("J/psi".parse::<Species>(), Ok(Species::JPsi));
        assert_eq!("100443".parse::<Species>(), Ok(Species::Psi2S));
        assert!("kaon".parse::<Species>().is_err());
    }
}
