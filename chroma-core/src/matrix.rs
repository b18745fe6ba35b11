//! 3x3 and length-3 linear algebra used by the RGB working space and
//! chromatic adaptation layers.

use crate::error::Error;
use crate::numeric::round_float;

/// Determinant magnitude below which a 3x3 matrix is considered singular.
pub const SINGULAR_THRESHOLD: f64 = 1e-12;

/// A row-major 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3(pub [[f64; 3]; 3]);

/// A length-3 column vector (tristimulus values, RGB triples, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3(pub [f64; 3]);

impl Matrix3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Matrix3 = Matrix3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// A diagonal matrix with `d` on the main diagonal.
    pub fn diagonal(d: Vec3) -> Matrix3 {
        Matrix3([
            [d.0[0], 0.0, 0.0],
            [0.0, d.0[1], 0.0],
            [0.0, 0.0, d.0[2]],
        ])
    }

    /// Matrix-matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Matrix3) -> Matrix3 {
        let a = self.0;
        let b = rhs.0;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Matrix3(out)
    }

    /// Matrix-vector product `self * v`.
    pub fn linear_transform(&self, v: Vec3) -> Vec3 {
        let m = self.0;
        Vec3([
            m[0][0] * v.0[0] + m[0][1] * v.0[1] + m[0][2] * v.0[2],
            m[1][0] * v.0[0] + m[1][1] * v.0[1] + m[1][2] * v.0[2],
            m[2][0] * v.0[0] + m[2][1] * v.0[1] + m[2][2] * v.0[2],
        ])
    }

    /// Determinant via cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let m = self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse via the cofactor/adjugate matrix divided by the determinant.
    /// Fails with [`Error::Singular`] when `|det| < SINGULAR_THRESHOLD`.
    pub fn invert(&self) -> Result<Matrix3, Error> {
        let m = self.0;
        let det = self.determinant();
        if det.abs() < SINGULAR_THRESHOLD {
            return Err(Error::Singular {
                threshold: SINGULAR_THRESHOLD,
                context: "Matrix3::invert".into(),
            });
        }

        let cofactor = |r0: usize, r1: usize, c0: usize, c1: usize| -> f64 {
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        };

        // adjugate = transpose of the cofactor matrix
        let adj = [
            [
                cofactor(1, 2, 1, 2),
                -cofactor(0, 2, 1, 2),
                cofactor(0, 1, 1, 2),
            ],
            [
                -cofactor(1, 2, 0, 2),
                cofactor(0, 2, 0, 2),
                -cofactor(0, 1, 0, 2),
            ],
            [
                cofactor(1, 2, 0, 1),
                -cofactor(0, 2, 0, 1),
                cofactor(0, 1, 0, 1),
            ],
        ];

        let mut out = [[0.0; 3]; 3];
        for (i, row) in adj.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                out[i][j] = cell / det;
            }
        }
        Ok(Matrix3(out))
    }

    /// Applies [`round_float`] elementwise.
    pub fn round(&self, digits: i32) -> Matrix3 {
        let mut out = self.0;
        for row in out.iter_mut() {
            for cell in row.iter_mut() {
                *cell = round_float(*cell, digits);
            }
        }
        Matrix3(out)
    }
}

impl Vec3 {
    /// Elementwise division `self / rhs`.
    pub fn div(&self, rhs: &Vec3) -> Vec3 {
        Vec3([
            self.0[0] / rhs.0[0],
            self.0[1] / rhs.0[1],
            self.0[2] / rhs.0[2],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips() {
        let v = Vec3([1.0, 2.0, 3.0]);
        assert_eq!(Matrix3::IDENTITY.linear_transform(v), v);
    }

    #[test]
    fn invert_then_multiply_is_identity() {
        let m = Matrix3([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 0.5]]);
        let inv = m.invert().unwrap();
        let product = m.multiply(&inv);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((product.0[i][j] - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn singular_matrix_fails() {
        let m = Matrix3([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(m.invert().is_err());
    }

    #[test]
    fn round_matrix_elementwise() {
        let m = Matrix3([[0.1 + 0.2, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        assert_eq!(m.round(4).0[0][0], 0.3);
    }
}
