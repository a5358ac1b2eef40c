use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{BigInteger, Field, LegendreSymbol, PrimeField};
use ark_std::{str::FromStr, vec, vec::Vec, One, Zero};

extern crate alloc;
use alloc::string::ToString;
use core::cmp;
use sha2::{Digest, Sha256};

use crate::{
    consts::{
        BYTES_PER_FIELD_ELEMENT, PRIMITIVE_ROOTS_OF_UNITY, SIZE_OF_G1_AFFINE_COMPRESSED,
        SIZE_OF_G2_AFFINE_COMPRESSED,
    },
    errors::KzgError,
};

pub fn set_bytes_canonical(data: &[u8]) -> Fr {
    Fr::from_be_bytes_mod_order(data)
}

pub fn get_num_element(data_len: usize, symbol_size: usize) -> usize {
    data_len.div_ceil(symbol_size)
}

/// Interprets the byte slice as a sequence of big-endian 32-byte field
/// elements, zero-extending a trailing partial chunk.
pub fn to_fr_array(data: &[u8]) -> Vec<Fr> {
    let num_ele = get_num_element(data.len(), BYTES_PER_FIELD_ELEMENT);
    let mut eles = vec![Fr::zero(); num_ele];

    for (i, element) in eles.iter_mut().enumerate().take(num_ele) {
        let start = i * BYTES_PER_FIELD_ELEMENT;
        let end = (i + 1) * BYTES_PER_FIELD_ELEMENT;

        if end > data.len() {
            // Handle the last chunk that may be incomplete
            let mut padded = vec![0u8; BYTES_PER_FIELD_ELEMENT];
            padded[..data.len() - start].copy_from_slice(&data[start..]);
            *element = set_bytes_canonical(&padded);
        } else {
            *element = set_bytes_canonical(&data[start..end]);
        }
    }
    eles
}

/// Converts a slice of field elements back to big-endian bytes, truncated to
/// `max_output_size`. Inverse of [to_fr_array] for data that fit the field.
pub fn to_byte_array(data_fr: &[Fr], max_output_size: usize) -> Vec<u8> {
    let n = data_fr.len();
    let data_size = cmp::min(n * BYTES_PER_FIELD_ELEMENT, max_output_size);
    let mut data = vec![0u8; data_size];

    for (i, element) in data_fr.iter().enumerate().take(n) {
        let start = i * BYTES_PER_FIELD_ELEMENT;
        if start >= data_size {
            break;
        }
        let v: Vec<u8> = element.into_bigint().to_bytes_be();
        let actual_end = cmp::min(start + BYTES_PER_FIELD_ELEMENT, data_size);
        data[start..actual_end].copy_from_slice(&v[..actual_end - start]);
    }

    data
}

/// Copies the referenced bytes array argument into a Vec, inserting an empty
/// byte at the front of every 31 bytes. The empty byte is padded at the low
/// address, because we use big endian to interpret a field element.
/// This ensures every 32 bytes is within the valid range of a field element
/// for the bn254 curve. If the input data is not a multiple of 31 bytes, the
/// remainder is added to the output by inserting a 0 and the remainder. The
/// output is thus not necessarily a multiple of 32.
pub fn convert_by_padding_empty_byte(data: &[u8]) -> Vec<u8> {
    let data_size = data.len();
    let parse_size = BYTES_PER_FIELD_ELEMENT - 1;
    let put_size = BYTES_PER_FIELD_ELEMENT;

    let data_len = data_size.div_ceil(parse_size);
    let mut valid_data = vec![0u8; data_len * put_size];
    let mut valid_end = valid_data.len();

    for i in 0..data_len {
        let start = i * parse_size;
        let mut end = (i + 1) * parse_size;
        if end > data_size {
            end = data_size;
            valid_end = end - start + 1 + i * put_size;
        }

        // Set the first byte of each chunk to 0
        valid_data[i * BYTES_PER_FIELD_ELEMENT] = 0x00;
        // Copy data from original to new vector, adjusting for the initial zero byte
        valid_data[i * BYTES_PER_FIELD_ELEMENT + 1..i * BYTES_PER_FIELD_ELEMENT + 1 + end - start]
            .copy_from_slice(&data[start..end]);
    }

    valid_data.truncate(valid_end);
    valid_data
}

/// Removes the first byte from each 32-byte chunk in a byte slice (including
/// the last potentially incomplete one). Reverse of
/// [convert_by_padding_empty_byte]; assumes without verification that the
/// input is 0-byte prefixed per 32-byte chunk.
pub fn remove_empty_byte_from_padded_bytes_unchecked(data: &[u8]) -> Vec<u8> {
    data.chunks(BYTES_PER_FIELD_ELEMENT)
        .flat_map(|chunk| &chunk[1..])
        .copied()
        .collect()
}

/// Power-of-two check used by every domain-shaped argument. Zero is not a
/// power of two.
pub fn is_power_of_two(n: u64) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

/// Reverses the lowest log2(length) bits of `value`. `length` must be a
/// power of two; values >= length wrap into the same bit budget.
pub fn reverse_bits_limited(length: u64, value: u64) -> u64 {
    let bits = length.trailing_zeros();
    if bits == 0 {
        return 0;
    }
    value.reverse_bits() >> (64 - bits)
}

/// Computes powers of a field element up to a given exponent.
///
/// For a given field element x, computes [1, x, x², x³, ..., x^(count-1)]
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

/// Evaluates a polynomial given in coefficient form at `x`, via Horner's
/// method.
pub fn evaluate_polynomial(coeffs: &[Fr], x: &Fr) -> Fr {
    let mut last = Fr::zero();
    for coeff in coeffs.iter().rev() {
        last = last * x + coeff;
    }
    last
}

/// Computes a linear combination of G1 points weighted by scalar coefficients.
///
/// Given points P₁, P₂, ..., Pₙ and scalars s₁, s₂, ..., sₙ
/// computes s₁P₁ + s₂P₂ + ... + sₙPₙ via Multi-Scalar Multiplication (MSM).
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Affine, KzgError> {
    let lincomb =
        G1Projective::msm(points, scalars).map_err(|e| KzgError::MsmError(e.to_string()))?;
    Ok(lincomb.into_affine())
}

/// G2 counterpart of [g1_lincomb], used by length commitments and length
/// proofs.
pub fn g2_lincomb(points: &[G2Affine], scalars: &[Fr]) -> Result<G2Affine, KzgError> {
    let lincomb =
        G2Projective::msm(points, scalars).map_err(|e| KzgError::MsmError(e.to_string()))?;
    Ok(lincomb.into_affine())
}

/// Gets the primitive root of unity of order 2^power.
/// For example, power=3 returns a primitive 8th root of unity.
pub fn get_primitive_root_of_unity(power: usize) -> Result<Fr, KzgError> {
    let litteral = PRIMITIVE_ROOTS_OF_UNITY
        .get(power)
        .ok_or_else(|| KzgError::GenericError("power must be <= 28".to_string()))?;
    Fr::from_str(litteral).map_err(|_| {
        KzgError::GenericError("failed to parse primitive root of unity".to_string())
    })
}

/// Maps a byte slice to a field element (`Fr`) using SHA-256.
pub fn hash_to_field_element(msg: &[u8]) -> Fr {
    let msg_digest = Sha256::digest(msg);
    let hash_elements = msg_digest.as_slice();

    Fr::from_be_bytes_mod_order(hash_elements)
}

/// Checks e(a1, a2) == e(b1, b2) with a single multi-pairing of (a1, a2) and
/// (-b1, b2).
pub fn pairings_verify(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    let neg_b1 = -b1;
    let p = [a1, neg_b1];
    let q = [a2, b2];
    let result = Bn254::multi_pairing(p, q);
    result.is_zero()
}

pub fn is_zeroed(first_byte: u8, buf: Vec<u8>) -> bool {
    if first_byte != 0 {
        return false;
    }

    for byte in &buf {
        if *byte != 0 {
            return false;
        }
    }
    true
}

/// gnark's compression flag picks the lexicographically larger of the two
/// square roots; an element is "largest" when it exceeds (p - 1) / 2.
pub fn lexicographically_largest(z: &Fq) -> bool {
    z.into_bigint() > <Fq as PrimeField>::MODULUS_MINUS_ONE_DIV_TWO
}

/// Parses a gnark compressed big-endian G1 point, as found in the ceremony
/// SRS files.
pub fn read_g1_point_from_bytes_be(g1_bytes_be: &[u8]) -> Result<G1Affine, &str> {
    if g1_bytes_be.len() != SIZE_OF_G1_AFFINE_COMPRESSED {
        return Err("not enough bytes for g1 point");
    }

    let m_mask: u8 = 0b11 << 6;
    let m_compressed_infinity: u8 = 0b01 << 6;
    let m_compressed_smallest: u8 = 0b10 << 6;
    let m_compressed_largest: u8 = 0b11 << 6;

    let m_data = g1_bytes_be[0] & m_mask;

    if m_data == m_compressed_infinity {
        if !is_zeroed(g1_bytes_be[0] & !m_mask, g1_bytes_be[1..32].to_vec()) {
            return Err("point at infinity not coded properly for g1");
        }
        return Ok(G1Affine::zero());
    }

    let mut x_bytes = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
    x_bytes.copy_from_slice(g1_bytes_be);
    x_bytes[0] &= !m_mask;
    let x = Fq::from_be_bytes_mod_order(&x_bytes);
    let y_squared = x * x * x + Fq::from(3);
    let mut y_sqrt = y_squared.sqrt().ok_or("point not on curve")?;

    if lexicographically_largest(&y_sqrt) {
        if m_data == m_compressed_smallest {
            y_sqrt = -y_sqrt;
        }
    } else if m_data == m_compressed_largest {
        y_sqrt = -y_sqrt;
    }
    let point = G1Affine::new_unchecked(x, y_sqrt);
    if !point.is_in_correct_subgroup_assuming_on_curve()
        && is_on_curve_g1(&G1Projective::from(point))
    {
        return Err("point couldn't be created");
    }
    Ok(point)
}

fn get_b_twist_curve_coeff() -> Fq2 {
    let twist_c0 = Fq::from(9);
    let twist_c1 = Fq::from(1);

    // this is bTwistCurveCoeff
    let mut twist_curve_coeff = Fq2::new(twist_c0, twist_c1);
    twist_curve_coeff = *twist_curve_coeff
        .inverse_in_place()
        .expect("nonzero element has an inverse");

    twist_curve_coeff.c0 *= Fq::from(3);
    twist_curve_coeff.c1 *= Fq::from(3);
    twist_curve_coeff
}

/// Parses a gnark compressed big-endian G2 point.
pub fn read_g2_point_from_bytes_be(g2_bytes_be: &[u8]) -> Result<G2Affine, &str> {
    if g2_bytes_be.len() != SIZE_OF_G2_AFFINE_COMPRESSED {
        return Err("not enough bytes for g2 point");
    }

    let m_mask: u8 = 0b11 << 6;
    let m_compressed_infinity: u8 = 0b01 << 6;
    let m_compressed_smallest: u8 = 0b10 << 6;
    let m_compressed_largest: u8 = 0b11 << 6;

    let m_data = g2_bytes_be[0] & m_mask;

    if m_data == m_compressed_infinity {
        if !is_zeroed(
            g2_bytes_be[0] & !m_mask,
            g2_bytes_be[1..SIZE_OF_G2_AFFINE_COMPRESSED].to_vec(),
        ) {
            return Err("point at infinity not coded properly for g2");
        }
        return Ok(G2Affine::zero());
    }

    let mut x_bytes = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
    x_bytes.copy_from_slice(g2_bytes_be);
    x_bytes[0] &= !m_mask;
    let half_size = SIZE_OF_G2_AFFINE_COMPRESSED / 2;

    let c1 = Fq::from_be_bytes_mod_order(&x_bytes[..half_size]);
    let c0 = Fq::from_be_bytes_mod_order(&x_bytes[half_size..]);
    let x = Fq2::new(c0, c1);
    let y_squared = x * x * x;

    let twist_curve_coeff = get_b_twist_curve_coeff();

    let added_result = y_squared + twist_curve_coeff;
    if added_result.legendre() == LegendreSymbol::QuadraticNonResidue {
        return Err("invalid compressed coordinate: square root doesn't exist");
    }

    let mut y_sqrt = added_result.sqrt().ok_or("no square root found")?;

    let lexicographical_check_result = if y_sqrt.c1.is_zero() {
        lexicographically_largest(&y_sqrt.c0)
    } else {
        lexicographically_largest(&y_sqrt.c1)
    };

    if lexicographical_check_result {
        if m_data == m_compressed_smallest {
            y_sqrt = -y_sqrt;
        }
    } else if m_data == m_compressed_largest {
        y_sqrt = -y_sqrt;
    }

    let point = G2Affine::new_unchecked(x, y_sqrt);
    if !point.is_in_correct_subgroup_assuming_on_curve()
        && is_on_curve_g2(&G2Projective::from(point))
    {
        return Err("point couldn't be created");
    }
    Ok(point)
}

pub fn is_on_curve_g1(g1: &G1Projective) -> bool {
    let b_curve_coeff = Fq::from(3);

    let mut left = g1.y;
    left.square_in_place();

    let mut right = g1.x;
    right.square_in_place();
    right *= &g1.x;

    let mut tmp = g1.z;
    tmp.square_in_place();
    tmp.square_in_place();
    tmp *= &g1.z;
    tmp *= &g1.z;
    tmp *= b_curve_coeff;
    right += &tmp;
    left == right
}

pub fn is_on_curve_g2(g2: &G2Projective) -> bool {
    let mut left = g2.y;
    left.square_in_place();

    let mut right = g2.x;
    right.square_in_place();
    right *= &g2.x;

    let mut tmp = g2.z;
    tmp.square_in_place();
    tmp.square_in_place();
    tmp *= &g2.z;
    tmp *= &g2.z;
    tmp *= &get_b_twist_curve_coeff();
    right += &tmp;
    left == right
}

/// Validates that a G1 point is usable as a commitment or proof: on curve
/// and in the correct subgroup. The identity is accepted; a proof for a
/// zero quotient polynomial is legitimately the point at infinity.
pub fn validate_g1_point(point: &G1Affine) -> Result<(), KzgError> {
    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not on curve".to_string(),
        ));
    }

    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not in correct subgroup".to_string(),
        ));
    }

    Ok(())
}

/// G2 counterpart of [validate_g1_point].
pub fn validate_g2_point(point: &G2Affine) -> Result<(), KzgError> {
    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point not on curve".to_string(),
        ));
    }

    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point not in correct subgroup".to_string(),
        ));
    }

    Ok(())
}
