//! Defines a spatial 3-vector: (x, y, z)

use super::FourVector;

/// A three-vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreeVector {
    x: f64,
    y: f64,
    z: f64,
}

impl ThreeVector {
    /// Creates a new three-vector with the specified components.
    pub fn new(x: f64, y: f64, z: f64) -> ThreeVector {
        ThreeVector{x: x, y: y, z: z}
    }

    /// Creates the vector of length `p` pointing along the direction
    /// given by polar angle `acos(cos_theta)` and azimuth `phi`.
    pub fn from_polar(p: f64, cos_theta: f64, phi: f64) -> ThreeVector {
        let sin_theta = ((1.0 + cos_theta) * (1.0 - cos_theta)).sqrt();
        let (sin_phi, cos_phi) = phi.sin_cos();
        ThreeVector {
            x: p * sin_theta * cos_phi,
            y: p * sin_theta * sin_phi,
            z: p * cos_theta,
        }
    }

    /// Returns the squared magnitude of the three-vector.
    pub fn norm_sqr(self) -> f64 {
        self * self
    }

    /// Returns the magnitude of the three-vector.
    pub fn norm(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Returns the unit vector parallel to `self`, or `None` if
    /// `self` has zero or non-finite magnitude.
    pub fn normalize(self) -> Option<Self> {
        let mag = self.norm();
        if mag > 0.0 && mag.is_finite() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Rotates `self` so that the z-axis of its current frame is
    /// carried onto the unit vector `axis`, i.e. the components of
    /// `self` are reinterpreted as (x, y, z) in a frame whose z-axis
    /// is `axis`. The new x-axis lies in the plane of `axis` and the
    /// old z-axis.
    ///
    /// If `axis` is (anti)parallel to z, the rotation is the identity,
    /// or a half-turn about the y-axis, respectively.
    pub fn rotate_uz(self, axis: ThreeVector) -> Self {
        let (u1, u2, u3) = (axis.x, axis.y, axis.z);
        let up = u1 * u1 + u2 * u2;
        if up > 0.0 {
            let up = up.sqrt();
            let (px, py, pz) = (self.x, self.y, self.z);
            ThreeVector {
                x: (u1 * u3 * px - u2 * py + u1 * up * pz) / up,
                y: (u2 * u3 * px + u1 * py + u2 * up * pz) / up,
                z: (u3 * u3 * px - px + u3 * up * pz) / up,
            }
        } else if u3 < 0.0 {
            ThreeVector {x: -self.x, y: self.y, z: -self.z}
        } else {
            self
        }
    }
}

impl std::ops::Index<i32> for ThreeVector {
    type Output = f64;
    fn index(&self, index: i32) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: a three vector has 3 components but the index is {}", index)
        }
    }
}

impl std::convert::From<FourVector> for ThreeVector {
    fn from(fv: FourVector) -> Self {
        ThreeVector {
            x: fv[1],
            y: fv[2],
            z: fv[3],
        }
    }
}

impl std::fmt::Display for ThreeVector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl std::ops::Add for ThreeVector {
    type Output = ThreeVector;
    fn add(self, other: ThreeVector) -> ThreeVector {
        ThreeVector {x: self.x + other.x, y: self.y + other.y, z: self.z + other.z}
    }
}

impl std::ops::Sub for ThreeVector {
    type Output = ThreeVector;
    fn sub(self, other: ThreeVector) -> ThreeVector {
        ThreeVector {x: self.x - other.x, y: self.y - other.y, z: self.z - other.z}
    }
}

impl std::ops::Mul for ThreeVector {
    type Output = f64;
    fn mul(self, other: ThreeVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl std::ops::Mul<f64> for ThreeVector {
    type Output = ThreeVector;
    fn mul(self, other: f64) -> ThreeVector {
        ThreeVector{x: self.x * other, y: self.y * other, z: self.z * other}
    }
}

impl std::ops::Mul<ThreeVector> for f64 {
    type Output = ThreeVector;
    fn mul(self, other: ThreeVector) -> ThreeVector {
        ThreeVector{x: self * other.x, y: self * other.y, z: self * other.z}
    }
}

impl std::ops::Neg for ThreeVector {
    type Output = ThreeVector;
    fn neg(self) -> ThreeVector {
        -1.0 * self
    }
}

impl std::ops::Div<f64> for ThreeVector {
    type Output = ThreeVector;
    fn div(self, other: f64) -> ThreeVector {
        ThreeVector{x: self.x / other, y: self.y / other, z: self.z / other}
    }
}

impl std::convert::From<[f64; 3]> for ThreeVector {
    fn from(item: [f64; 3]) -> Self {
        ThreeVector::new(item[0], item[1], item[2])
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;
    use super::*; // import from outer scope

    #[test]
    fn polar_construction() {
        let v = ThreeVector::from_polar(2.0, 0.0, consts::FRAC_PI_2); // along y
        println!("v = {:?}", v);
        assert!((v - ThreeVector::new(0.0, 2.0, 0.0)).norm() < 1.0e-12);
        let v = ThreeVector::from_polar(1.5, -1.0, 0.3); // along -z
        assert!((v - ThreeVector::new(0.0, 0.0, -1.5)).norm() < 1.0e-12);
    }

    #[test]
    fn rotate_uz_maps_z_onto_axis() {
        let axis = ThreeVector::new(1.0, -2.0, 0.5).normalize().unwrap();
        let z = ThreeVector::new(0.0, 0.0, 3.0).rotate_uz(axis);
        println!("axis = {}, z' = {}", axis, z);
        assert!((z - 3.0 * axis).norm() < 1.0e-12);
    }

    #[test]
    fn rotate_uz_preserves_length_and_angles() {
        let axis = ThreeVector::new(-0.3, 0.4, -0.8).normalize().unwrap();
        let a = ThreeVector::new(0.2, -1.0, 0.7);
        let b = ThreeVector::new(1.1, 0.3, -0.4);
        let (ra, rb) = (a.rotate_uz(axis), b.rotate_uz(axis));
        assert!((ra.norm() - a.norm()).abs() < 1.0e-12);
        assert!((ra * rb - a * b).abs() < 1.0e-12);
    }

    #[test]
    fn zero_vector_has_no_direction() {
        assert_eq!(ThreeVector::new(0.0, 0.0, 0.0).normalize(), None);
        assert_eq!(ThreeVector::new(f64::NAN, 1.0, 0.0).normalize(), None);
        let n = ThreeVector::new(0.0, -4.0, 3.0).normalize().unwrap();
        assert_eq!(n, ThreeVector::new(0.0, -0.8, 0.6));
    }

    #[test]
    fn rotate_uz_antiparallel() {
        let v = ThreeVector::new(0.1, 0.2, 0.3).rotate_uz(ThreeVector::new(0.0, 0.0, -1.0));
        assert_eq!(v, ThreeVector::new(-0.1, 0.2, -0.3));
        let w = ThreeVector::new(0.1, 0.2, 0.3).rotate_uz(ThreeVector::new(0.0, 0.0, 1.0));
        assert_eq!(w, ThreeVector::new(0.1, 0.2, 0.3));
    }
}
