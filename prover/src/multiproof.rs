//! Amortized KZG opening proofs for every coset of a polynomial.
//!
//! One opening proof per coset would cost a full MSM each; instead the
//! quotient commitments for all cosets are produced together. The quotient
//! coefficients form Toeplitz systems, one per position inside a chunk, so
//! each system collapses to a circulant FFT, a batch of MSMs against the
//! precomputed SRS table, and a pair of G1 FFTs over the proof domain.

use ark_bn254::{Fr, G1Affine, G1Projective};
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_std::{vec, vec::Vec, Zero};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rust_fk20_bn254_primitives::errors::KzgError;
use rust_fk20_bn254_primitives::fft::FFTDomain;
use rust_fk20_bn254_primitives::toeplitz::ToeplitzMatrix;

extern crate alloc;
use alloc::string::ToString;

/// Produces the opening proofs for all cosets of one polynomial. The CPU
/// implementation is normative; alternative backends may offload the MSM and
/// FFT phases.
pub trait ProofBackend: Send + Sync {
    /// `poly_coeffs` must be zero padded to `num_chunks * chunk_length`.
    /// Output index `m` is the proof for the coset whose leading root is
    /// `w^m` on the evaluation domain.
    fn compute_multiframe_proofs(&self, poly_coeffs: &[Fr]) -> Result<Vec<G1Affine>, KzgError>;
}

#[derive(Debug)]
pub struct CpuBackend {
    num_chunks: u64,
    chunk_length: u64,
    /// Proof domain of width `2 * num_chunks`.
    proof_domain: FFTDomain,
    /// Transposed SRS table, `[2 * num_chunks][chunk_length]`.
    fft_points_t: Vec<Vec<G1Affine>>,
}

impl CpuBackend {
    pub fn new(
        num_chunks: u64,
        chunk_length: u64,
        proof_domain: FFTDomain,
        fft_points_t: Vec<Vec<G1Affine>>,
    ) -> Result<Self, KzgError> {
        if proof_domain.max_width() != 2 * num_chunks {
            return Err(KzgError::GenericError(
                "proof domain width must be twice the chunk count".to_string(),
            ));
        }
        if fft_points_t.len() != 2 * num_chunks as usize
            || fft_points_t
                .iter()
                .any(|row| row.len() != chunk_length as usize)
        {
            return Err(KzgError::GenericError(
                "SRS table shape does not match the encoding parameters".to_string(),
            ));
        }
        Ok(Self {
            num_chunks,
            chunk_length,
            proof_domain,
            fft_points_t,
        })
    }

    /// Circulant transform of the Toeplitz column for coset position `j`:
    /// the polynomial coefficients gathered top-down at stride
    /// `chunk_length`, zero padded to the odd descriptor length.
    fn toeplitz_coeffs_fft(&self, poly_coeffs: &[Fr], j: usize) -> Result<Vec<Fr>, KzgError> {
        let dim_e = self.num_chunks as usize;
        let l = self.chunk_length as usize;
        let m = poly_coeffs.len() - 1;
        let dim = (m - j) / l;

        let mut toe_v = vec![Fr::zero(); 2 * dim_e - 1];
        for (i, toe_v_i) in toe_v.iter_mut().enumerate().take(dim) {
            *toe_v_i = poly_coeffs[m - (j + i * l)];
        }
        let matrix = ToeplitzMatrix::new(toe_v, &self.proof_domain)?;
        matrix.get_fft_coeff()
    }
}

impl ProofBackend for CpuBackend {
    fn compute_multiframe_proofs(&self, poly_coeffs: &[Fr]) -> Result<Vec<G1Affine>, KzgError> {
        let dim_e = self.num_chunks as usize;
        let l = self.chunk_length as usize;
        if poly_coeffs.len() != dim_e * l {
            return Err(KzgError::InvalidInputLength);
        }

        // one circulant transform per coset position, first error wins
        let coeff_store: Vec<Vec<Fr>> = (0..l)
            .into_par_iter()
            .map(|j| self.toeplitz_coeffs_fft(poly_coeffs, j))
            .collect::<Result<_, _>>()?;

        // one MSM per transformed row against the matching table row
        let sum_vec: Vec<G1Projective> = (0..2 * dim_e)
            .into_par_iter()
            .map(|i| -> Result<G1Projective, KzgError> {
                let scalars: Vec<Fr> = coeff_store.iter().map(|column| column[i]).collect();
                G1Projective::msm(&self.fft_points_t[i], &scalars)
                    .map_err(|_| KzgError::MsmError("scalar and point counts differ".to_string()))
            })
            .collect::<Result<_, _>>()?;

        // quotient commitments live in the first half of the inverse
        // transform; the doubling pad is discarded and the proofs read off a
        // forward FFT over the chunk count
        let sum_vec_inv = self.proof_domain.fft_g1(&sum_vec, true)?;
        let h = &sum_vec_inv[..dim_e];
        let proofs = self.proof_domain.fft_g1(h, false)?;
        Ok(G1Projective::normalize_batch(&proofs))
    }
}
