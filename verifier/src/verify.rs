//! Single-frame opening checks and blob length proofs.

use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Field;
use ark_std::vec::Vec;
use rust_fk20_bn254_primitives::{
    consts::MAX_LENGTH_PROOF_LOG2, errors::KzgError, fft::FFTDomain, frame::Frame, helpers,
    params::EncodingParams,
};

extern crate alloc;
use alloc::string::ToString;

/// Verifier specialized to one encoding shape. Holds the first
/// `chunk_length` monomial G1 SRS points (to commit to frame interpolation
/// polynomials) and the single G2 power `[tau^chunk_length]_2` the pairing
/// check divides by.
pub struct ParametrizedVerifier {
    params: EncodingParams,
    fs: FFTDomain,
    g1: Vec<G1Affine>,
    g2_tau_pow_d: G2Affine,
}

impl ParametrizedVerifier {
    pub fn new(
        params: EncodingParams,
        g1: &[G1Affine],
        g2_tau_pow_d: G2Affine,
    ) -> Result<Self, KzgError> {
        params.validate()?;
        if (g1.len() as u64) < params.chunk_length {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: params.chunk_length as usize,
                srs_len: g1.len(),
            });
        }
        let fs = FFTDomain::new(params.num_evaluations().trailing_zeros() as u8)?;
        Ok(Self {
            params,
            fs,
            g1: g1[..params.chunk_length as usize].to_vec(),
            g2_tau_pow_d,
        })
    }

    pub fn params(&self) -> EncodingParams {
        self.params
    }

    pub(crate) fn g1_window(&self) -> &[G1Affine] {
        &self.g1
    }

    pub(crate) fn g2_tau_pow_d(&self) -> &G2Affine {
        &self.g2_tau_pow_d
    }

    /// Leading root of the coset assigned to `chunk_index`.
    pub(crate) fn leading_root(&self, chunk_index: u64) -> Fr {
        let x = helpers::reverse_bits_limited(self.params.num_chunks, chunk_index) as usize;
        self.fs.expanded_roots_of_unity()[x]
    }

    /// Checks one frame against the blob commitment at its chunk index:
    /// `e(commitment - I(tau), G2) == e(proof, [tau^D - w^D]_2)` where `I` is
    /// the frame's interpolation polynomial, `D` the chunk length and `w` the
    /// leading root of the frame's coset.
    ///
    /// Returns `Ok(false)` for a well-formed frame whose proof does not
    /// check out; malformed inputs are errors.
    pub fn verify_frame(
        &self,
        commitment: &G1Affine,
        frame: &Frame,
        chunk_index: u64,
    ) -> Result<bool, KzgError> {
        helpers::validate_g1_point(commitment)?;
        helpers::validate_g1_point(&frame.proof)?;
        if chunk_index >= self.params.num_chunks {
            return Err(KzgError::GenericError(
                "chunk index out of range".to_string(),
            ));
        }
        if frame.coeffs.len() != self.params.chunk_length as usize {
            return Err(KzgError::GenericError(
                "frame length does not match the chunk length".to_string(),
            ));
        }

        let w = self.leading_root(chunk_index);
        let w_pow_d = w.pow([self.params.chunk_length]);
        let w_pow_d_g2 = (G2Affine::generator() * w_pow_d).into_affine();
        let tau_minus_w = (self.g2_tau_pow_d.into_group() - w_pow_d_g2).into_affine();

        let interpolation_g1 = helpers::g1_lincomb(&self.g1, &frame.coeffs)?;
        let commit_minus_interpolation = (commitment.into_group() - interpolation_g1).into_affine();

        Ok(helpers::pairings_verify(
            commit_minus_interpolation,
            G2Affine::generator(),
            frame.proof,
            tau_minus_w,
        ))
    }
}

/// Checks a blob length proof: `e(challenge, lengthCommitment) == e(G1,
/// lengthProof)` where `challenge` is the G1 SRS point at index
/// `srs_order - claimed_length`. Non-power-of-two or oversized lengths are
/// rejected before any pairing work.
pub fn verify_length_proof(
    length_commitment: &G2Affine,
    length_proof: &G2Affine,
    claimed_length: u64,
    challenge: &G1Affine,
) -> Result<bool, KzgError> {
    if claimed_length == 0 || !helpers::is_power_of_two(claimed_length) {
        return Err(KzgError::GenericError(
            "claimed length must be a power of two".to_string(),
        ));
    }
    if claimed_length.trailing_zeros() > MAX_LENGTH_PROOF_LOG2 {
        return Err(KzgError::GenericError(
            "claimed length exceeds the supported degree bound".to_string(),
        ));
    }
    helpers::validate_g2_point(length_commitment)?;
    helpers::validate_g2_point(length_proof)?;

    Ok(helpers::pairings_verify(
        *challenge,
        *length_commitment,
        G1Affine::generator(),
        *length_proof,
    ))
}
