//! Tabulated pair-mass spectra and sampling from them

use std::fmt;
use std::error::Error;
use rand::prelude::*;

use crate::lineshape::LineShape;

mod builder;
pub use builder::*;

/// Why a spectrum could not be tabulated
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum SpectrumError {
    /// The upper edge does not lie above the lower
    EmptyRange(f64, f64),
    /// No bins were requested
    NoBins,
    /// Every bin has zero weight
    ZeroWeight,
}

impl fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpectrumError::EmptyRange(min, max) => write!(f, "mass range [{:.6e}, {:.6e}] is empty", min, max),
            SpectrumError::NoBins => write!(f, "spectrum requires at least one bin"),
            SpectrumError::ZeroWeight => write!(f, "line shape vanishes everywhere in the mass range"),
        }
    }
}

impl Error for SpectrumError {}

/// A line shape, discretized into equal-width bins over [min, max).
///
/// Weights are non-negative and finite: bins where the line shape
/// is undefined, or evaluates to NaN or a negative number, are
/// given zero weight and counted in `invalid_bins`.
#[derive(Clone,Debug)]
pub struct MassSpectrum {
    min: f64,
    max: f64,
    weights: Vec<f64>,
    // cdf[i] is the fraction of the total weight below bin i,
    // cdf[0] = 0 and cdf[bins] = 1
    cdf: Vec<f64>,
    invalid_bins: usize,
}

impl MassSpectrum {
    /// Evaluates `shape` at the centres of `bins` equal-width bins
    /// spanning [min, max).
    pub fn tabulate<S: LineShape>(shape: &S, min: f64, max: f64, bins: usize) -> Result<Self, SpectrumError> {
        if !(max > min) {
            return Err(SpectrumError::EmptyRange(min, max));
        }

        if bins == 0 {
            return Err(SpectrumError::NoBins);
        }

        let width = (max - min) / (bins as f64);
        let mut invalid_bins = 0;

        let weights: Vec<f64> = (0..bins)
            .map(|i| min + (i as f64 + 0.5) * width)
            .map(|m| match shape.weight(m) {
                Some(w) if w.is_finite() && w >= 0.0 => w,
                _ => {
                    invalid_bins += 1;
                    0.0
                }
            })
            .collect();

        let total: f64 = weights.iter().sum();
        if !(total > 0.0) || !total.is_finite() {
            return Err(SpectrumError::ZeroWeight);
        }

        let mut cdf = Vec::with_capacity(bins + 1);
        let mut cumsum = 0.0;
        cdf.push(0.0);
        for w in weights.iter() {
            cumsum += w;
            cdf.push(cumsum / total);
        }
        cdf[bins] = 1.0;

        Ok(MassSpectrum { min, max, weights, cdf, invalid_bins })
    }

    /// Lower edge of the first bin
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper edge of the last bin
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn bins(&self) -> usize {
        self.weights.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / (self.bins() as f64)
    }

    pub fn bin_center(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.bin_width()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Iterates over (bin centre, weight) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.weights.iter()
            .enumerate()
            .map(move |(i, &w)| (self.bin_center(i), w))
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Number of bins in which the line shape was undefined
    /// and which were floored to zero
    pub fn invalid_bins(&self) -> usize {
        self.invalid_bins
    }

    /// Weighted mean of the bin centres
    pub fn mean(&self) -> f64 {
        self.iter().map(|(m, w)| m * w).sum::<f64>() / self.total()
    }

    /// Pseudorandomly draws a pair mass: picks a bin with
    /// probability proportional to its weight, then a mass
    /// uniformly within that bin.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        let r = rng.gen::<f64>();
        // last i for which cdf[i] <= r; bins of zero weight are never chosen
        let i = self.cdf.partition_point(|&c| c <= r) - 1;
        let i = i.min(self.bins() - 1);
        let frac = if self.cdf[i + 1] > self.cdf[i] {
            (r - self.cdf[i]) / (self.cdf[i + 1] - self.cdf[i])
        } else {
            0.5
        };
        self.min + (i as f64 + frac) * self.bin_width()
    }
}

#[cfg(test)]
mod tests {
    use rand_xoshiro::*;
    use super::*;
    use crate::lineshape::BreitWigner;

    struct Triangle;

    impl LineShape for Triangle {
        fn weight(&self, m: f64) -> Option<f64> {
            if m < 0.5 { Some(m) } else { None }
        }
    }

    #[test]
    fn invalid_bins_are_floored() {
        let spectrum = MassSpectrum::tabulate(&Triangle, 0.0, 1.0, 100).unwrap();
        assert_eq!(spectrum.invalid_bins(), 50);
        assert!(spectrum.weights()[50..].iter().all(|&w| w == 0.0));
        assert!(spectrum.weights().iter().all(|w| w.is_finite() && *w >= 0.0));
        assert!(spectrum.total() > 0.0);
    }

    #[test]
    fn samples_never_fall_in_empty_bins() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let spectrum = MassSpectrum::tabulate(&Triangle, 0.0, 1.0, 100).unwrap();
        for _ in 0..10_000 {
            let m = spectrum.sample(&mut rng);
            assert!(m >= 0.0 && m < 0.5, "m = {}", m);
        }
    }

    #[test]
    fn sample_mean_matches_spectrum() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let spectrum = MassSpectrum::tabulate(&Triangle, 0.0, 1.0, 100).unwrap();
        let n = 100_000;
        let mean = (0..n).map(|_| spectrum.sample(&mut rng)).sum::<f64>() / (n as f64);
        // density proportional to m on [0, 0.5): mean = 1/3
        println!("sample mean = {:.4}, expected = {:.4}", mean, 1.0 / 3.0);
        assert!((mean - 1.0 / 3.0).abs() < 0.005);
        assert!((spectrum.mean() - 1.0 / 3.0).abs() < 0.005);
    }

    #[test]
    fn narrow_peak_sampled_in_its_bin() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let bw = BreitWigner::new(3.0969, 1.0e-6);
        let spectrum = MassSpectrum::tabulate(&bw, 0.279, 10.0, 2000).unwrap();
        let width = spectrum.bin_width();
        let hits = (0..1000)
            .map(|_| spectrum.sample(&mut rng))
            .filter(|m| (m - 3.0969).abs() < 10.0 * width)
            .count();
        println!("{} of 1000 samples within ten bins of the pole", hits);
        assert!(hits > 950);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(MassSpectrum::tabulate(&Triangle, 1.0, 1.0, 10).unwrap_err(), SpectrumError::EmptyRange(1.0, 1.0));
        assert_eq!(MassSpectrum::tabulate(&Triangle, 0.0, 1.0, 0).unwrap_err(), SpectrumError::NoBins);
        assert_eq!(MassSpectrum::tabulate(&Triangle, 0.6, 1.0, 10).unwrap_err(), SpectrumError::ZeroWeight);
    }
}
