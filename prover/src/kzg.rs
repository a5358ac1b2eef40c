use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use rust_fk20_bn254_primitives::{
    blob::Blob,
    consts::MAX_LENGTH_PROOF_LOG2,
    errors::{FFTError, KzgError},
    helpers,
    polynomial::{PolynomialCoeffForm, PolynomialEvalForm},
};

use crate::srs::SRS;

/// Everything a DA node needs to accept a blob: the KZG commitment itself,
/// plus a commitment/proof pair in G2 attesting that the blob polynomial has
/// at most `length` coefficients.
#[derive(Debug, PartialEq, Clone)]
pub struct BlobCommitments {
    pub commitment: G1Affine,
    pub length_commitment: G2Affine,
    pub length_proof: G2Affine,
    /// Claimed coefficient bound, always a power of two.
    pub length: u64,
}

/// Commitment engine over a loaded [SRS]. Holds no state of its own; all
/// methods take the polynomial (or [Blob]) and the SRS to commit against.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct KZG {}

impl KZG {
    pub fn new() -> Self {
        Self {}
    }

    /// Commit the polynomial in evaluation form. The monomial SRS points are
    /// transformed to lagrange form with an IFFT before taking the inner
    /// product.
    pub fn commit_eval_form(
        &self,
        polynomial: &PolynomialEvalForm,
        srs: &SRS,
    ) -> Result<G1Affine, KzgError> {
        if polynomial.len() > srs.g1.len() {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: polynomial.len(),
                srs_len: srs.g1.len(),
            });
        }

        let bases = self.g1_ifft(polynomial.len(), srs)?;

        match G1Projective::msm(&bases, polynomial.evaluations()) {
            Ok(res) => Ok(res.into_affine()),
            Err(err) => Err(KzgError::CommitError(err.to_string())),
        }
    }

    /// Commit the polynomial in coefficient form against the monomial SRS
    /// points.
    pub fn commit_coeff_form(
        &self,
        polynomial: &PolynomialCoeffForm,
        srs: &SRS,
    ) -> Result<G1Affine, KzgError> {
        if polynomial.len() > srs.g1.len() {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: polynomial.len(),
                srs_len: srs.g1.len(),
            });
        }
        // When the polynomial is in coefficient form, use the original srs
        // points (in monomial form).
        let bases = &srs.g1[..polynomial.len()];

        match G1Projective::msm(bases, polynomial.coeffs()) {
            Ok(res) => Ok(res.into_affine()),
            Err(err) => Err(KzgError::CommitError(err.to_string())),
        }
    }

    /// Commit to a [Blob]. Blob symbols are the polynomial's coefficients,
    /// so this goes through [KZG::commit_coeff_form].
    pub fn commit_blob(&self, blob: &Blob, srs: &SRS) -> Result<G1Affine, KzgError> {
        let polynomial = blob.to_polynomial_coeff_form();
        self.commit_coeff_form(&polynomial, srs)
    }

    /// Computes the commitment bundle for a blob: the G1 commitment, the G2
    /// length commitment and the proof that the polynomial degree is below
    /// the claimed power-of-two length.
    pub fn blob_commitments(&self, blob: &Blob, srs: &SRS) -> Result<BlobCommitments, KzgError> {
        let polynomial = blob.to_polynomial_coeff_form();
        let coeffs = polynomial.coeffs();
        let length = (blob.len_symbols().next_power_of_two()) as u64;

        if length.trailing_zeros() > MAX_LENGTH_PROOF_LOG2 {
            return Err(KzgError::GenericError(
                "blob length exceeds the maximum provable length".to_string(),
            ));
        }

        // The three MSMs share no state, so they run on separate rayon jobs.
        let (commitment, (length_commitment, length_proof)) = rayon::join(
            || self.commit_coeff_form(&polynomial, srs),
            || {
                rayon::join(
                    || self.length_commitment(coeffs, srs),
                    || self.length_proof(coeffs, length as usize, srs),
                )
            },
        );
        let (commitment, length_commitment, length_proof) =
            (commitment?, length_commitment?, length_proof?);

        Ok(BlobCommitments {
            commitment,
            length_commitment,
            length_proof,
            length,
        })
    }

    /// G2 commitment to the blob polynomial, the counterpart of the G1
    /// commitment on the other side of the length pairing check.
    pub fn length_commitment(&self, coeffs: &[Fr], srs: &SRS) -> Result<G2Affine, KzgError> {
        if coeffs.len() > srs.g2.len() {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: coeffs.len(),
                srs_len: srs.g2.len(),
            });
        }
        helpers::g2_lincomb(&srs.g2[..coeffs.len()], coeffs)
    }

    /// Low-degree proof: the blob coefficients committed against the
    /// trailing window of G2 powers, shifting every coefficient up by
    /// tau^(order - length). The pairing check only balances when no
    /// coefficient at index >= length is present, since its shifted power
    /// would fall outside the SRS.
    pub fn length_proof(
        &self,
        coeffs: &[Fr],
        length: usize,
        srs: &SRS,
    ) -> Result<G2Affine, KzgError> {
        if !helpers::is_power_of_two(length as u64) {
            return Err(KzgError::GenericError(
                "proven length must be a power of two".to_string(),
            ));
        }
        if length > srs.g2_trailing.len() || coeffs.len() > length {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: length,
                srs_len: srs.g2_trailing.len(),
            });
        }
        let start = srs.g2_trailing.len() - length;
        helpers::g2_lincomb(&srs.g2_trailing[start..start + coeffs.len()], coeffs)
    }

    /// Inverse FFT of the first `length` SRS points, yielding lagrange form
    /// bases for committing to polynomials in evaluation form.
    pub fn g1_ifft(&self, length: usize, srs: &SRS) -> Result<Vec<G1Affine>, KzgError> {
        if !length.is_power_of_two() {
            return Err(KzgError::FFTError(FFTError::NotPowerOfTwo(length)));
        }
        if length > srs.g1.len() {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: length,
                srs_len: srs.g1.len(),
            });
        }

        let points_projective: Vec<G1Projective> = srs.g1[..length]
            .par_iter()
            .map(|&p| G1Projective::from(p))
            .collect();
        let ifft_result: Vec<_> = GeneralEvaluationDomain::<Fr>::new(length)
            .ok_or(KzgError::GenericError(
                "Could not perform IFFT due to domain construction error".to_string(),
            ))?
            .ifft(&points_projective)
            .par_iter()
            .map(|p| p.into_affine())
            .collect();

        Ok(ifft_result)
    }
}
