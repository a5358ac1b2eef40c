//! Zero polynomial construction for erasure recovery.
//!
//! Given the set of missing evaluation indices, builds the polynomial that
//! vanishes exactly on the corresponding roots of unity. Small sets use a
//! direct product of monomials; larger sets split into leaves of at most 63
//! roots each and multiply the leaves together in evaluation form, reducing
//! four at a time until one polynomial remains.

use ark_bn254::Fr;
use ark_std::{vec, vec::Vec, One, Zero};
use core::cmp;

use crate::{
    consts::{ZERO_POLY_PER_LEAF, ZERO_POLY_PER_LEAF_POLY, ZERO_POLY_REDUCTION_FACTOR},
    errors::FFTError,
    fft::FFTDomain,
    helpers,
};

extern crate alloc;

/// Writes the coefficients of prod_{v in indices} (x - root^(v * stride))
/// into `dst`, zero padding the tail. `dst` must have room for
/// indices.len() + 1 coefficients.
pub fn make_zero_poly_mul_leaf(
    domain: &FFTDomain,
    dst: &mut [Fr],
    indices: &[u64],
    domain_stride: u64,
) -> Result<(), FFTError> {
    if dst.len() < indices.len() + 1 {
        return Err(FFTError::InvalidDestinationLength {
            needed: indices.len() + 1,
            actual: dst.len(),
        });
    }
    let roots = domain.expanded_roots_of_unity();

    dst[indices.len()] = Fr::one();
    for (i, v) in indices.iter().enumerate() {
        let root_index = (*v as usize) * (domain_stride as usize);
        if root_index >= roots.len() {
            return Err(FFTError::LengthMismatch {
                max_width: domain.max_width() as usize,
                actual: *v as usize,
            });
        }
        let neg_di = -roots[root_index];
        dst[i] = neg_di;
        if i > 0 {
            dst[i] += dst[i - 1];
            for j in (1..i).rev() {
                dst[j] *= neg_di;
                let prev = dst[j - 1];
                dst[j] += prev;
            }
            dst[0] *= neg_di;
        }
    }
    for d in dst.iter_mut().skip(indices.len() + 1) {
        *d = Fr::zero();
    }
    Ok(())
}

/// Multiplies the leaf polynomials together in evaluation form over a domain
/// of size `dst_len`. `scratch` provides three working buffers of `dst_len`
/// elements each. Returns the product truncated to its true degree.
fn reduce_leaves(
    domain: &FFTDomain,
    scratch: &mut [Fr],
    dst_len: usize,
    ps: &[Vec<Fr>],
) -> Result<Vec<Fr>, FFTError> {
    debug_assert!(!ps.is_empty());
    let n = dst_len;
    if !helpers::is_power_of_two(n as u64) {
        return Err(FFTError::NotPowerOfTwo(n));
    }
    if scratch.len() < 3 * n {
        return Err(FFTError::InvalidDestinationLength {
            needed: 3 * n,
            actual: scratch.len(),
        });
    }

    // The degree of the output polynomial is the sum of the degrees of the
    // input polynomials.
    let mut out_degree = 0usize;
    for p in ps {
        out_degree += p.len() - 1;
    }
    if out_degree + 1 > n {
        return Err(FFTError::ZeroPolyTooLarge {
            actual: out_degree + 1,
            requested: n,
        });
    }

    let (p_padded, rest) = scratch.split_at_mut(n);
    let (mul_eval_ps, p_eval) = rest.split_at_mut(n);
    let p_eval = &mut p_eval[..n];

    let last = &ps[ps.len() - 1];
    p_padded[..last.len()].copy_from_slice(last);
    p_padded[last.len()..].fill(Fr::zero());
    domain.fft_fr_into(p_padded, false, mul_eval_ps)?;

    for p in &ps[..ps.len() - 1] {
        p_padded[..p.len()].copy_from_slice(p);
        p_padded[p.len()..].fill(Fr::zero());
        domain.fft_fr_into(p_padded, false, p_eval)?;
        for (acc, e) in mul_eval_ps.iter_mut().zip(p_eval.iter()) {
            *acc *= e;
        }
    }

    let mut dst = vec![Fr::zero(); n];
    domain.fft_fr_into(mul_eval_ps, true, &mut dst)?;
    dst.truncate(out_degree + 1);
    Ok(dst)
}

/// Computes the zero polynomial for `missing_indices` over an evaluation
/// domain of `length` points. Returns (evaluations, coefficients), both of
/// `length` elements. An empty missing set yields two all-zero vectors,
/// which callers treat as "nothing to recover".
pub fn zero_poly_via_multiplication(
    domain: &FFTDomain,
    missing_indices: &[u64],
    length: usize,
) -> Result<(Vec<Fr>, Vec<Fr>), FFTError> {
    if missing_indices.is_empty() {
        return Ok((vec![Fr::zero(); length], vec![Fr::zero(); length]));
    }
    if length as u64 > domain.max_width() {
        return Err(FFTError::LengthMismatch {
            max_width: domain.max_width() as usize,
            actual: length,
        });
    }
    if !helpers::is_power_of_two(length as u64) {
        return Err(FFTError::NotPowerOfTwo(length));
    }
    let domain_stride = domain.max_width() / length as u64;

    let per_leaf_poly = ZERO_POLY_PER_LEAF_POLY;
    // The leaf isn't a full domain: one coefficient slot goes to the leading
    // term of the monomial product.
    let per_leaf = ZERO_POLY_PER_LEAF;

    // Fast path: the whole product fits in a single leaf.
    if missing_indices.len() <= per_leaf {
        let mut zero_poly = vec![Fr::zero(); length];
        make_zero_poly_mul_leaf(domain, &mut zero_poly, missing_indices, domain_stride)?;
        let zero_eval = domain.fft_fr(&zero_poly, false)?;
        return Ok((zero_eval, zero_poly));
    }

    if missing_indices.len() > length {
        return Err(FFTError::ZeroPolyTooLarge {
            actual: missing_indices.len(),
            requested: length,
        });
    }

    let leaf_count = missing_indices.len().div_ceil(per_leaf);
    let n = cmp::min(
        (leaf_count * per_leaf_poly).next_power_of_two(),
        domain.max_width() as usize,
    );

    let mut leaves: Vec<Vec<Fr>> = Vec::with_capacity(leaf_count);
    for chunk in missing_indices.chunks(per_leaf) {
        let mut leaf = vec![Fr::zero(); per_leaf_poly];
        make_zero_poly_mul_leaf(domain, &mut leaf, chunk, domain_stride)?;
        leaves.push(leaf);
    }

    // Reduce the leaves tree-style until a single polynomial remains.
    let reduction_factor = ZERO_POLY_REDUCTION_FACTOR;
    let mut scratch = vec![Fr::zero(); 3 * n];
    while leaves.len() > 1 {
        let reduced_count = leaves.len().div_ceil(reduction_factor);
        let leaf_size = leaves[0].len().next_power_of_two();
        let mut reduced: Vec<Vec<Fr>> = Vec::with_capacity(reduced_count);
        for i in 0..reduced_count {
            let start = i * reduction_factor;
            let end = cmp::min(start + reduction_factor, leaves.len());
            let out_end = cmp::min((start + reduction_factor) * leaf_size, n);
            let dst_len = out_end - start * leaf_size;
            if end > start + 1 {
                reduced.push(reduce_leaves(domain, &mut scratch, dst_len, &leaves[start..end])?);
            } else {
                reduced.push(leaves[start].clone());
            }
        }
        leaves = reduced;
    }

    let mut zero_poly = leaves.swap_remove(0);
    match zero_poly.len().cmp(&length) {
        cmp::Ordering::Less => zero_poly.resize(length, Fr::zero()),
        cmp::Ordering::Greater => {
            return Err(FFTError::ZeroPolyTooLarge {
                actual: zero_poly.len(),
                requested: length,
            })
        }
        cmp::Ordering::Equal => {}
    }

    let zero_eval = domain.fft_fr(&zero_poly, false)?;
    Ok((zero_eval, zero_poly))
}
