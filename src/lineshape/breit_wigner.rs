//! Non-relativistic Breit-Wigner (Lorentz) shape for narrow states

use super::LineShape;

#[derive(Copy, Clone, Debug)]
pub struct BreitWigner {
    pub mass: f64,
    pub width: f64,
}

impl BreitWigner {
    pub fn new(mass: f64, width: f64) -> Self {
        BreitWigner { mass, width }
    }
}

impl LineShape for BreitWigner {
    /// Equal to one at the pole, one half at `mass +- width / 2`.
    fn weight(&self, m: f64) -> Option<f64> {
        let g2 = 0.25 * self.width * self.width;
        Some(g2 / (g2 + (self.mass - m).powi(2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_maximum() {
        let bw = BreitWigner::new(3.0969, 9.26e-5);
        assert_eq!(bw.weight(3.0969), Some(1.0));
        let w = bw.weight(3.0969 + 0.5 * 9.26e-5).unwrap();
        assert!((w - 0.5).abs() < 1.0e-6);
    }
}
