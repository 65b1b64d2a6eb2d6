//! Defines a relativistic 4-vector: (E, px, py, pz)

use super::ThreeVector;

/// A four-vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourVector(f64, f64, f64, f64);

impl FourVector {
    /// Creates a new four-vector with the specified components.
    pub fn new(t: f64, x: f64, y: f64, z: f64) -> Self {
        FourVector {0: t, 1: x, 2: y, 3: z}
    }

    /// Returns a new four vector `s` that has norm squared `b`, i.e. `s * s == b`,
    /// but unchanged spatial components
    pub fn with_sqr(&self, b: f64) -> Self {
        FourVector {
            0: (b + self.1.powi(2) + self.2.powi(2) + self.3.powi(2)).sqrt(),
            1: self.1,
            2: self.2,
            3: self.3,
        }
    }

    /// Returns the squared norm of the four-vector
    pub fn norm_sqr(self) -> f64 {
        self * self
    }

    /// Returns the invariant mass, `sqrt(p.p)`. Spacelike vectors,
    /// which only arise from rounding, are assigned zero mass.
    pub fn mass(self) -> f64 {
        self.norm_sqr().max(0.0).sqrt()
    }

    /// Returns the magnitude of the spatial part
    pub fn momentum(self) -> f64 {
        ThreeVector::from(self).norm()
    }

    /// Returns the four-velocity `p / m` of a massive four-momentum,
    /// i.e. `(gamma, gamma beta)`.
    pub fn four_velocity(self) -> Self {
        self / self.mass()
    }

    /// Returns the equivalent four vector in a new inertial frame,
    /// which is travelling with four-velocity `u` with respect to
    /// the current frame.
    ///
    /// `u` is expected to be normalized (i.e. gamma v / c). A frame
    /// at rest leaves the vector unchanged.
    pub fn boost_by(self, u: FourVector) -> Self {
        let gamma = u[0];
        let gamma_beta = ThreeVector::from(u).norm();
        if gamma_beta == 0.0 {
            return self;
        }
        let n = ThreeVector::from(u) / gamma_beta;
        // gamma - 1, without the cancellation for slow frames
        let gm1 = gamma_beta * gamma_beta / (gamma + 1.0);
        let a = self[0];
        let z = ThreeVector::from(self);
        let nz = n * z;
        FourVector {
            0: gamma * a - gamma_beta * nz,
            1: z[0] + gm1 * nz * n[0] - gamma_beta * a * n[0],
            2: z[1] + gm1 * nz * n[1] - gamma_beta * a * n[1],
            3: z[2] + gm1 * nz * n[2] - gamma_beta * a * n[2]
        }
    }

    /// Reverses the spatial components of the four-vector
    pub fn reverse(self) -> Self {
        FourVector {0: self.0, 1: -self.1, 2: -self.2, 3: -self.3}
    }

    /// Rotates the spatial part so that the old z-axis points along
    /// `axis`, leaving the time component unchanged.
    /// See [`ThreeVector::rotate_uz`].
    pub fn rotate_uz(self, axis: ThreeVector) -> Self {
        let p = ThreeVector::from(self).rotate_uz(axis);
        FourVector {0: self.0, 1: p[0], 2: p[1], 3: p[2]}
    }
}

// Index into four vector
impl std::ops::Index<i32> for FourVector {
    type Output = f64;
    fn index(&self, index: i32) -> &Self::Output {
        match index {
            0 => &self.0,
            1 => &self.1,
            2 => &self.2,
            3 => &self.3,
            _ => panic!("index out of bounds: a four vector has 4 components but the index is {}", index)
        }
    }
}

// Add two four vectors together
impl std::ops::Add for FourVector {
    type Output = FourVector;
    fn add(self, other: FourVector) -> FourVector {
        FourVector {
            0: self.0 + other.0,
            1: self.1 + other.1,
            2: self.2 + other.2,
            3: self.3 + other.3
        }
    }
}

// Subtract two four vectors
impl std::ops::Sub for FourVector {
    type Output = FourVector;
    fn sub(self, other: FourVector) -> FourVector {
        FourVector {
            0: self.0 - other.0,
            1: self.1 - other.1,
            2: self.2 - other.2,
            3: self.3 - other.3
        }
    }
}

// Multiply (i.e. dot) two four vectors together
impl std::ops::Mul for FourVector {
    type Output = f64;
    fn mul(self, other: FourVector) -> f64 {
        self.0 * other.0 - self.1 * other.1 - self.2 * other.2 - self.3 * other.3
    }
}

// Multiply a four vector by a scalar
impl std::ops::Mul<f64> for FourVector {
    type Output = FourVector;
    fn mul (self, other: f64) -> FourVector {
        FourVector {
            0: self.0 * other,
            1: self.1 * other,
            2: self.2 * other,
            3: self.3 * other
        }
    }
}

// and multiply a scalar by a four vector
impl std::ops::Mul<FourVector> for f64 {
    type Output = FourVector;
    fn mul(self, other: FourVector) -> FourVector {
        FourVector {
            0: self * other.0,
            1: self * other.1,
            2: self * other.2,
            3: self * other.3
        }
    }
}

impl std::ops::Neg for FourVector {
    type Output = FourVector;
    fn neg(self) -> FourVector {
        -1.0 * self
    }
}

// Divide four vector by scalar. Other way round doesn't exist.
impl std::ops::Div<f64> for FourVector {
    type Output = FourVector;
    fn div(self, other: f64) -> FourVector {
        FourVector {
            0: self.0 / other,
            1: self.1 / other,
            2: self.2 / other,
            3: self.3 / other
        }
    }
}

impl std::iter::Sum for FourVector {
    fn sum<I: Iterator<Item = FourVector>>(iter: I) -> Self {
        iter.fold(FourVector::new(0.0, 0.0, 0.0, 0.0), |acc, p| acc + p)
    }
}

impl std::fmt::Display for FourVector {
    fn fmt(&self, f : &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.0, self.1, self.2, self.3)
    }
}
