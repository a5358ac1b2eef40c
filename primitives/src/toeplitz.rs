//! Fast Toeplitz-by-vector products via a 2n circulant embedding.
//!
//! An n x n Toeplitz matrix is described by a single vector of 2n-1 entries:
//! the first row read left to right followed by the first column read top to
//! bottom, with the shared diagonal element stored once. Embedding the matrix
//! in a 2n x 2n circulant turns the product into a cyclic convolution, which
//! the FFT evaluates in O(n log n).

use ark_bn254::Fr;
use ark_std::{vec, vec::Vec, Zero};

use crate::{errors::KzgError, fft::FFTDomain, helpers};

extern crate alloc;
use alloc::string::ToString;

#[derive(Clone, Debug)]
pub struct ToeplitzMatrix<'a> {
    /// Descriptor vector of odd length 2n-1: first row, then the first
    /// column below the diagonal in bottom-up order.
    v: Vec<Fr>,
    fs: &'a FFTDomain,
}

impl<'a> ToeplitzMatrix<'a> {
    /// The domain must be at least as wide as the 2n circulant embedding;
    /// wider domains are evaluated on the matching subgroup by striding.
    pub fn new(v: Vec<Fr>, fs: &'a FFTDomain) -> Result<Self, KzgError> {
        if v.is_empty() || v.len() % 2 == 0 {
            return Err(KzgError::InvalidInputLength);
        }
        let n = (v.len() + 1) / 2;
        if fs.max_width() < 2 * n as u64 {
            return Err(KzgError::GenericError(
                "domain is narrower than the circulant embedding".to_string(),
            ));
        }
        Ok(Self { v, fs })
    }

    /// Dimension n of the square matrix.
    pub fn rows(&self) -> usize {
        (self.v.len() + 1) / 2
    }

    pub fn descriptor(&self) -> &[Fr] {
        &self.v
    }

    /// First column of the 2n x 2n circulant that embeds this matrix: the
    /// diagonal element, the column entries reversed, a zero pad slot, then
    /// the row entries reversed.
    pub fn circulant_embedding(&self) -> Vec<Fr> {
        let n = self.rows();
        let mut cv = vec![Fr::zero(); 2 * n];
        cv[0] = self.v[0];
        for i in 1..n {
            cv[i] = self.v[2 * n - 1 - i];
        }
        // cv[n] stays zero
        for (j, cv_j) in cv.iter_mut().enumerate().skip(n + 1) {
            *cv_j = self.v[2 * n - j];
        }
        cv
    }

    /// Evaluations of the circulant column over the 2n subgroup, ready for
    /// pointwise multiplication against other transformed operands.
    pub fn get_fft_coeff(&self) -> Result<Vec<Fr>, KzgError> {
        let cv = self.circulant_embedding();
        Ok(self.fs.fft_fr(&cv, false)?)
    }

    /// Matrix-vector product T * x in O(n log n). `x` must have length n and
    /// n must be a power of two.
    pub fn multiply(&self, x: &[Fr]) -> Result<Vec<Fr>, KzgError> {
        let n = self.rows();
        if x.len() != n || !helpers::is_power_of_two(n as u64) {
            return Err(KzgError::InvalidInputLength);
        }

        let cv_fft = self.get_fft_coeff()?;

        let mut x_padded = vec![Fr::zero(); 2 * n];
        x_padded[..n].copy_from_slice(x);
        let x_fft = self.fs.fft_fr(&x_padded, false)?;

        let pointwise: Vec<Fr> = cv_fft
            .iter()
            .zip(x_fft.iter())
            .map(|(a, b)| *a * b)
            .collect();
        let mut product = self.fs.fft_fr(&pointwise, true)?;
        product.truncate(n);
        Ok(product)
    }
}
