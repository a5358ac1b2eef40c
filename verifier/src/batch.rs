//! Batched pairing checks.
//!
//! Both checks here amortize many individually-expensive pairings into one
//! random linear combination: a dishonest batch passes with probability at
//! most `1/|Fr|` per random draw.

use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::Field;
use ark_std::{vec, vec::Vec, UniformRand, Zero};
use rand::thread_rng;
use rust_fk20_bn254_primitives::{errors::KzgError, frame::Frame, helpers};

use crate::verify::ParametrizedVerifier;

extern crate alloc;
use alloc::string::ToString;

/// One chunk presented for batched verification, together with the blob it
/// opens against.
#[derive(Clone, Debug)]
pub struct Sample {
    /// Row in the verification matrix: index into the commitment slice.
    pub blob_index: usize,
    /// Chunk assignment index within the blob's encoding.
    pub chunk_index: u64,
    pub frame: Frame,
}

/// Universal verification equation over a batch of frames sharing one
/// encoding shape. Checks
/// `e(sum_k r_k proof_k, [tau^D]_2) == e(rhs, G2)` with
/// `rhs = sum_k r_k C_k - [sum_k r_k I_k(tau)]_1 + sum_k r_k w_k^D proof_k`,
/// which aggregates every per-frame opening check into a single pairing.
///
/// See the universal verification equation for data availability sampling,
/// https://ethresear.ch/t/a-universal-verification-equation-for-data-availability-sampling/13240
pub fn universal_verify(
    verifier: &ParametrizedVerifier,
    commitments: &[G1Affine],
    samples: &[Sample],
) -> Result<bool, KzgError> {
    if samples.is_empty() {
        return Err(KzgError::InvalidInputLength);
    }
    let params = verifier.params();
    let d = params.chunk_length as usize;
    for sample in samples {
        if sample.blob_index >= commitments.len() {
            return Err(KzgError::GenericError(
                "sample blob index out of range".to_string(),
            ));
        }
        if sample.chunk_index >= params.num_chunks {
            return Err(KzgError::GenericError(
                "chunk index out of range".to_string(),
            ));
        }
        if sample.frame.coeffs.len() != d {
            return Err(KzgError::GenericError(
                "frame length does not match the chunk length".to_string(),
            ));
        }
    }

    let mut rng = thread_rng();
    let randoms: Vec<Fr> = (0..samples.len()).map(|_| Fr::rand(&mut rng)).collect();
    let proofs: Vec<G1Affine> = samples.iter().map(|s| s.frame.proof).collect();

    let lhs_g1 = helpers::g1_lincomb(&proofs, &randoms)?;

    // first term: commitments weighted by the sum of the randoms of the
    // samples opening against each of them
    let mut commit_coeffs = vec![Fr::zero(); commitments.len()];
    for (sample, r) in samples.iter().zip(randoms.iter()) {
        commit_coeffs[sample.blob_index] += r;
    }
    let agg_commit = G1Projective::msm(commitments, &commit_coeffs)
        .map_err(|_| KzgError::MsmError("scalar and point counts differ".to_string()))?;

    // second term: the aggregated interpolation polynomial, committed once
    let mut poly_coeffs = vec![Fr::zero(); d];
    for (sample, r) in samples.iter().zip(randoms.iter()) {
        for (agg, coeff) in poly_coeffs.iter_mut().zip(sample.frame.coeffs.iter()) {
            *agg += *coeff * r;
        }
    }
    let agg_poly = G1Projective::msm(verifier.g1_window(), &poly_coeffs)
        .map_err(|_| KzgError::MsmError("scalar and point counts differ".to_string()))?;

    // third term: proofs weighted by r_k * w_k^D, which folds each frame's
    // coset vanishing offset into the right-hand side
    let lc_coeffs: Vec<Fr> = samples
        .iter()
        .zip(randoms.iter())
        .map(|(sample, r)| {
            let w = verifier.leading_root(sample.chunk_index);
            w.pow([params.chunk_length]) * r
        })
        .collect();
    let offset = G1Projective::msm(&proofs, &lc_coeffs)
        .map_err(|_| KzgError::MsmError("scalar and point counts differ".to_string()))?;

    let rhs_g1 = (agg_commit - agg_poly + offset).into_affine();

    Ok(helpers::pairings_verify(
        lhs_g1,
        *verifier.g2_tau_pow_d(),
        rhs_g1,
        G2Affine::generator(),
    ))
}

/// Batched consistency check between G1 commitments and their G2 length
/// commitments: accepts when `e(C_i, G2) == e(G1, LC_i)` holds for every
/// pair, using one random field element per pair and a single pairing.
pub fn verify_commitment_equivalence_batch(
    pairs: &[(G1Affine, G2Affine)],
) -> Result<bool, KzgError> {
    if pairs.is_empty() {
        return Ok(true);
    }

    let mut rng = thread_rng();
    let randoms: Vec<Fr> = (0..pairs.len()).map(|_| Fr::rand(&mut rng)).collect();

    let commitments: Vec<G1Affine> = pairs.iter().map(|(c, _)| *c).collect();
    let length_commitments: Vec<G2Affine> = pairs.iter().map(|(_, lc)| *lc).collect();

    let lhs = helpers::g1_lincomb(&commitments, &randoms)?;
    let rhs = helpers::g2_lincomb(&length_commitments, &randoms)?;

    Ok(helpers::pairings_verify(
        lhs,
        G2Affine::generator(),
        G1Affine::generator(),
        rhs,
    ))
}
