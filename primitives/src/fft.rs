//! Radix-2 FFT over bn254's scalar field and over G1, sharing a single
//! precomputed root table so that coefficient extraction, erasure recovery
//! and proof generation all agree on evaluation order.

use ark_bn254::{Fr, G1Projective};
use ark_ff::Field;
use ark_std::{vec, vec::Vec, One, Zero};

use crate::{consts::MAX_FFT_SCALE, errors::FFTError, helpers};

extern crate alloc;

/// Computes [1, root, root^2, ...] until the sequence cycles back to one.
/// The returned vector has length order+1 and ends with the element one.
pub fn expand_root_of_unity(root: &Fr) -> Vec<Fr> {
    let mut roots = vec![Fr::one(), *root];
    while !roots[roots.len() - 1].is_one() {
        let next = roots[roots.len() - 1] * root;
        roots.push(next);
    }
    roots
}

/// Precomputed domain of size 2^scale. Forward transforms stride over
/// `expanded_roots_of_unity`, inverse transforms over
/// `reverse_roots_of_unity`; both tables carry the cyclic wrap-around
/// element so strided indexing never goes out of bounds.
#[derive(Clone, Debug)]
pub struct FFTDomain {
    max_width: u64,
    root_of_unity: Fr,
    expanded_roots_of_unity: Vec<Fr>,
    reverse_roots_of_unity: Vec<Fr>,
}

impl FFTDomain {
    pub fn new(scale: u8) -> Result<Self, FFTError> {
        if scale > MAX_FFT_SCALE {
            return Err(FFTError::ScaleTooLarge(scale));
        }
        let root_of_unity = helpers::get_primitive_root_of_unity(scale as usize)
            .map_err(|_| FFTError::ScaleTooLarge(scale))?;
        let expanded_roots_of_unity = expand_root_of_unity(&root_of_unity);
        let mut reverse_roots_of_unity = expanded_roots_of_unity.clone();
        reverse_roots_of_unity.reverse();

        Ok(Self {
            max_width: 1u64 << scale,
            root_of_unity,
            expanded_roots_of_unity,
            reverse_roots_of_unity,
        })
    }

    pub fn max_width(&self) -> u64 {
        self.max_width
    }

    pub fn root_of_unity(&self) -> &Fr {
        &self.root_of_unity
    }

    /// Roots in forward order, length max_width + 1.
    pub fn expanded_roots_of_unity(&self) -> &[Fr] {
        &self.expanded_roots_of_unity
    }

    /// Roots in inverse order, length max_width + 1.
    pub fn reverse_roots_of_unity(&self) -> &[Fr] {
        &self.reverse_roots_of_unity
    }

    fn check_width(&self, n: usize) -> Result<(), FFTError> {
        if n as u64 > self.max_width {
            return Err(FFTError::LengthMismatch {
                max_width: self.max_width as usize,
                actual: n,
            });
        }
        if !helpers::is_power_of_two(n as u64) {
            return Err(FFTError::NotPowerOfTwo(n));
        }
        Ok(())
    }

    /// FFT (or inverse FFT) of scalar field elements. The input may be any
    /// power-of-two length up to the domain width; smaller inputs stride
    /// over the root table.
    pub fn fft_fr(&self, vals: &[Fr], inverse: bool) -> Result<Vec<Fr>, FFTError> {
        let mut out = vec![Fr::zero(); vals.len()];
        self.fft_fr_into(vals, inverse, &mut out)?;
        Ok(out)
    }

    /// Like [Self::fft_fr] but writes into a caller-provided buffer of the
    /// same length, avoiding the allocation for hot paths.
    pub fn fft_fr_into(&self, vals: &[Fr], inverse: bool, out: &mut [Fr]) -> Result<(), FFTError> {
        self.check_width(vals.len())?;
        if out.len() != vals.len() {
            return Err(FFTError::InvalidDestinationLength {
                needed: vals.len(),
                actual: out.len(),
            });
        }
        let stride = (self.max_width / vals.len() as u64) as usize;
        if inverse {
            fft_fr_fast(out, vals, 0, 1, &self.reverse_roots_of_unity, stride);
            let inv_len = Fr::from(vals.len() as u64)
                .inverse()
                .ok_or(FFTError::NotPowerOfTwo(0))?;
            for v in out.iter_mut() {
                *v *= inv_len;
            }
        } else {
            fft_fr_fast(out, vals, 0, 1, &self.expanded_roots_of_unity, stride);
        }
        Ok(())
    }

    /// FFT (or inverse FFT) over G1, used to transform SRS point tables and
    /// proof vectors. Same shape rules as [Self::fft_fr].
    pub fn fft_g1(&self, vals: &[G1Projective], inverse: bool) -> Result<Vec<G1Projective>, FFTError> {
        self.check_width(vals.len())?;
        let stride = (self.max_width / vals.len() as u64) as usize;
        let mut out = vec![G1Projective::zero(); vals.len()];
        if inverse {
            fft_g1_fast(&mut out, vals, 0, 1, &self.reverse_roots_of_unity, stride);
            let inv_len = Fr::from(vals.len() as u64)
                .inverse()
                .ok_or(FFTError::NotPowerOfTwo(0))?;
            for v in out.iter_mut() {
                *v *= inv_len;
            }
        } else {
            fft_g1_fast(&mut out, vals, 0, 1, &self.expanded_roots_of_unity, stride);
        }
        Ok(out)
    }
}

/// Unrolled DFT for the recursion base case.
fn simple_ft_fr(
    out: &mut [Fr],
    vals: &[Fr],
    vals_offset: usize,
    vals_stride: usize,
    roots: &[Fr],
    roots_stride: usize,
) {
    let l = out.len();
    for (i, out_i) in out.iter_mut().enumerate() {
        let mut last = vals[vals_offset] * roots[0];
        for j in 1..l {
            last += vals[vals_offset + j * vals_stride] * roots[((i * j) % l) * roots_stride];
        }
        *out_i = last;
    }
}

fn fft_fr_fast(
    out: &mut [Fr],
    vals: &[Fr],
    vals_offset: usize,
    vals_stride: usize,
    roots: &[Fr],
    roots_stride: usize,
) {
    if out.len() <= 4 {
        simple_ft_fr(out, vals, vals_offset, vals_stride, roots, roots_stride);
        return;
    }
    let half = out.len() >> 1;
    let (left, right) = out.split_at_mut(half);
    fft_fr_fast(left, vals, vals_offset, vals_stride << 1, roots, roots_stride << 1);
    fft_fr_fast(
        right,
        vals,
        vals_offset + vals_stride,
        vals_stride << 1,
        roots,
        roots_stride << 1,
    );
    for i in 0..half {
        let y_times_root = right[i] * roots[i * roots_stride];
        let x = left[i];
        left[i] = x + y_times_root;
        right[i] = x - y_times_root;
    }
}

fn simple_ft_g1(
    out: &mut [G1Projective],
    vals: &[G1Projective],
    vals_offset: usize,
    vals_stride: usize,
    roots: &[Fr],
    roots_stride: usize,
) {
    let l = out.len();
    for (i, out_i) in out.iter_mut().enumerate() {
        let mut last = vals[vals_offset] * roots[0];
        for j in 1..l {
            last += vals[vals_offset + j * vals_stride] * roots[((i * j) % l) * roots_stride];
        }
        *out_i = last;
    }
}

fn fft_g1_fast(
    out: &mut [G1Projective],
    vals: &[G1Projective],
    vals_offset: usize,
    vals_stride: usize,
    roots: &[Fr],
    roots_stride: usize,
) {
    if out.len() <= 4 {
        simple_ft_g1(out, vals, vals_offset, vals_stride, roots, roots_stride);
        return;
    }
    let half = out.len() >> 1;
    let (left, right) = out.split_at_mut(half);
    fft_g1_fast(left, vals, vals_offset, vals_stride << 1, roots, roots_stride << 1);
    fft_g1_fast(
        right,
        vals,
        vals_offset + vals_stride,
        vals_stride << 1,
        roots,
        roots_stride << 1,
    );
    for i in 0..half {
        let y_times_root = right[i] * roots[i * roots_stride];
        let x = left[i];
        left[i] = x + y_times_root;
        right[i] = x - y_times_root;
    }
}
