//! Erasure recovery of polynomial evaluations from a partial sample set.
//!
//! Multiplying the known evaluations by the zero polynomial of the missing
//! positions gives a polynomial that agrees with poly * zero everywhere, so
//! dividing the two out in evaluation form recovers the original. The
//! division happens on a coset (domain shifted by a small primitive element)
//! where the zero polynomial has no roots.

use ark_bn254::Fr;
use ark_ff::Field;
use ark_std::{vec, vec::Vec, One, Zero};

use crate::{
    consts::RECOVERY_SHIFT_FACTOR,
    errors::KzgError,
    fft::FFTDomain,
    zero_poly::zero_poly_via_multiplication,
};

extern crate alloc;
use alloc::string::ToString;

/// Scales coefficient i by factor^i, mapping an evaluation domain onto the
/// coset factor * domain.
fn shift_poly(poly: &mut [Fr], factor: &Fr) {
    let mut scale = Fr::one();
    for p in poly.iter_mut() {
        *p *= scale;
        scale *= factor;
    }
}

/// Recovers the full evaluation vector from samples, where `None` marks a
/// missing position. Sample positions are indices into the evaluation
/// domain of size samples.len(), which must be a power of two no larger
/// than the domain width. `data_len` is the number of field elements the
/// original payload occupies; the underlying polynomial must have degree
/// below it.
///
/// The reconstruction interpolates through every present sample, so a
/// corrupted sample cannot be caught by re-checking the present positions.
/// It shows up as excess degree instead: any nonzero coefficient at index
/// `data_len` or above surfaces as [KzgError::RecoveryMismatch] naming the
/// first offending coefficient.
pub fn recover_poly_from_samples(
    domain: &FFTDomain,
    samples: &[Option<Fr>],
    data_len: usize,
) -> Result<Vec<Fr>, KzgError> {
    if data_len == 0 || data_len > samples.len() {
        return Err(KzgError::GenericError(
            "data length must be between 1 and the sample count".to_string(),
        ));
    }

    let missing: Vec<u64> = samples
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.is_none().then_some(i as u64))
        .collect();

    if missing.is_empty() {
        return Ok(samples.iter().map(|s| s.unwrap_or_default()).collect());
    }
    if samples.len() - missing.len() < data_len {
        return Err(KzgError::GenericError(
            "not enough samples to recover the polynomial".to_string(),
        ));
    }

    let (zero_eval, mut zero_poly) =
        zero_poly_via_multiplication(domain, &missing, samples.len())?;

    for (s, z) in samples.iter().zip(zero_eval.iter()) {
        if s.is_none() != z.is_zero() {
            return Err(KzgError::GenericError(
                "zero polynomial does not vanish exactly on missing indices".to_string(),
            ));
        }
    }

    let poly_evaluations_with_zero: Vec<Fr> = samples
        .iter()
        .zip(zero_eval.iter())
        .map(|(s, z)| match s {
            Some(sample) => *sample * z,
            None => Fr::zero(),
        })
        .collect();
    let mut poly_with_zero = domain.fft_fr(&poly_evaluations_with_zero, true)?;

    // Move both polynomials onto a coset where the zero poly never vanishes.
    let shift_factor = Fr::from(RECOVERY_SHIFT_FACTOR);
    let shift_inv = shift_factor
        .inverse()
        .ok_or(KzgError::InvalidDenominator)?;
    shift_poly(&mut poly_with_zero, &shift_factor);
    shift_poly(&mut zero_poly, &shift_factor);

    let eval_shifted_poly_with_zero = domain.fft_fr(&poly_with_zero, false)?;
    let eval_shifted_zero_poly = domain.fft_fr(&zero_poly, false)?;

    let mut eval_shifted_reconstructed_poly = vec![Fr::zero(); samples.len()];
    for (i, out) in eval_shifted_reconstructed_poly.iter_mut().enumerate() {
        let denom_inv = eval_shifted_zero_poly[i]
            .inverse()
            .ok_or(KzgError::InvalidDenominator)?;
        *out = eval_shifted_poly_with_zero[i] * denom_inv;
    }

    let mut shifted_reconstructed_poly =
        domain.fft_fr(&eval_shifted_reconstructed_poly, true)?;
    shift_poly(&mut shifted_reconstructed_poly, &shift_inv);

    // An honest sample set comes from a polynomial of degree < data_len, so
    // every coefficient above it must vanish. A tampered sample pushes the
    // interpolant past that bound.
    for (i, coeff) in shifted_reconstructed_poly.iter().enumerate().skip(data_len) {
        if !coeff.is_zero() {
            return Err(KzgError::RecoveryMismatch { index: i });
        }
    }

    let reconstructed_data = domain.fft_fr(&shifted_reconstructed_poly, false)?;

    Ok(reconstructed_data)
}
