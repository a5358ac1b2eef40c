#[cfg(test)]
mod tests {
    use ark_bn254::{Fq, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
    use ark_ec::{AffineRepr, CurveGroup, Group};
    use ark_ff::{Field, UniformRand};
    use ark_std::{One, Zero};
    use rand::Rng;
    use rust_fk20_bn254_primitives::helpers;

    #[test]
    fn test_is_power_of_two() {
        for n in 0u64..=1024 {
            let expected = n != 0 && n.count_ones() == 1;
            assert_eq!(helpers::is_power_of_two(n), expected, "n = {}", n);
        }
        assert!(helpers::is_power_of_two(1 << 40));
        assert!(!helpers::is_power_of_two((1 << 40) + 1));
    }

    #[test]
    fn test_reverse_bits_limited() {
        assert_eq!(helpers::reverse_bits_limited(8, 0), 0);
        assert_eq!(helpers::reverse_bits_limited(8, 1), 4);
        assert_eq!(helpers::reverse_bits_limited(8, 3), 6);
        assert_eq!(helpers::reverse_bits_limited(1, 0), 0);

        // reversing twice is the identity on [0, length)
        for length in [2u64, 16, 64, 1024] {
            for value in 0..length.min(64) {
                let once = helpers::reverse_bits_limited(length, value);
                assert!(once < length);
                assert_eq!(helpers::reverse_bits_limited(length, once), value);
            }
        }
    }

    #[test]
    fn test_to_fr_array_round_trip() {
        let mut rng = rand::thread_rng();
        for len in [1usize, 31, 32, 33, 100, 1000] {
            // keep every 32-byte chunk canonical by zeroing the lead byte
            let mut data: Vec<u8> = (0..len).map(|_| rng.gen::<u8>()).collect();
            for chunk_start in (0..len).step_by(32) {
                data[chunk_start] = 0;
            }
            let frs = helpers::to_fr_array(&data);
            assert_eq!(frs.len(), len.div_ceil(32));
            assert_eq!(
                helpers::to_byte_array(&frs, len),
                data,
                "round trip for length {}",
                len
            );
        }
    }

    #[test]
    fn test_padding_round_trip() {
        let mut rng = rand::thread_rng();
        for len in [0usize, 1, 30, 31, 32, 62, 500] {
            let data: Vec<u8> = (0..len).map(|_| rng.gen::<u8>()).collect();
            let padded = helpers::convert_by_padding_empty_byte(&data);
            // every 32-byte boundary carries the canonicalizing zero byte
            for chunk in padded.chunks(32) {
                assert_eq!(chunk[0], 0);
            }
            assert_eq!(
                helpers::remove_empty_byte_from_padded_bytes_unchecked(&padded),
                data
            );
        }
    }

    #[test]
    fn test_compute_powers() {
        let mut rng = rand::thread_rng();
        let base = Fr::rand(&mut rng);
        let powers = helpers::compute_powers(&base, 10);
        assert_eq!(powers.len(), 10);
        assert_eq!(powers[0], Fr::one());
        let mut expected = Fr::one();
        for p in &powers {
            assert_eq!(*p, expected);
            expected *= base;
        }
        assert!(helpers::compute_powers(&base, 0).is_empty());
    }

    #[test]
    fn test_evaluate_polynomial() {
        // 3 + 2x + x^3 at x = 2 is 15
        let coeffs = [Fr::from(3u64), Fr::from(2u64), Fr::zero(), Fr::one()];
        assert_eq!(
            helpers::evaluate_polynomial(&coeffs, &Fr::from(2u64)),
            Fr::from(15u64)
        );
        assert_eq!(helpers::evaluate_polynomial(&[], &Fr::from(2u64)), Fr::zero());
    }

    #[test]
    fn test_primitive_roots_of_unity() {
        for power in [1usize, 3, 10] {
            let root = helpers::get_primitive_root_of_unity(power).unwrap();
            let order = [1u64 << power];
            assert!(root.pow(order).is_one(), "root^order must be one");
            if power > 0 {
                assert!(
                    !root.pow([1u64 << (power - 1)]).is_one(),
                    "root must have exact order 2^{}",
                    power
                );
            }
        }
        assert!(helpers::get_primitive_root_of_unity(29).is_err());
    }

    #[test]
    fn test_hash_to_field_element_is_deterministic() {
        let a = helpers::hash_to_field_element(b"some transcript bytes");
        let b = helpers::hash_to_field_element(b"some transcript bytes");
        let c = helpers::hash_to_field_element(b"other transcript bytes");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_g1_lincomb_matches_naive_sum() {
        let mut rng = rand::thread_rng();
        let points: Vec<G1Affine> = (0..8)
            .map(|_| (G1Projective::generator() * Fr::rand(&mut rng)).into_affine())
            .collect();
        let scalars: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();

        let msm = helpers::g1_lincomb(&points, &scalars).unwrap();
        let naive: G1Projective = points
            .iter()
            .zip(scalars.iter())
            .map(|(p, s)| *p * s)
            .sum();
        assert_eq!(msm, naive.into_affine());

        assert!(
            helpers::g1_lincomb(&points, &scalars[..4]).is_err(),
            "mismatched lengths must be rejected"
        );
    }

    #[test]
    fn test_pairings_verify() {
        let mut rng = rand::thread_rng();
        let s = Fr::rand(&mut rng);
        let a1 = (G1Projective::generator() * s).into_affine();
        let b2 = (G2Projective::generator() * s).into_affine();

        // e(s * G1, G2) == e(G1, s * G2)
        assert!(helpers::pairings_verify(
            a1,
            G2Affine::generator(),
            G1Affine::generator(),
            b2
        ));
        assert!(!helpers::pairings_verify(
            a1,
            G2Affine::generator(),
            G1Affine::generator(),
            G2Affine::generator()
        ));
    }

    #[test]
    fn test_read_g1_point_from_bytes_be() {
        // gnark flags the point at infinity with 0b01 in the top bits
        let mut infinity = [0u8; 32];
        infinity[0] = 0b01 << 6;
        assert_eq!(
            helpers::read_g1_point_from_bytes_be(&infinity).unwrap(),
            G1Affine::zero()
        );

        assert!(helpers::read_g1_point_from_bytes_be(&[0u8; 31]).is_err());
    }

    #[test]
    fn test_validate_g1_point() {
        let mut rng = rand::thread_rng();
        let good = (G1Projective::generator() * Fr::rand(&mut rng)).into_affine();
        helpers::validate_g1_point(&good).unwrap();

        // proofs for zero quotient polynomials are the identity
        helpers::validate_g1_point(&G1Affine::zero()).unwrap();

        let off_curve = G1Affine::new_unchecked(Fq::from(3u64), Fq::from(5u64));
        assert!(!off_curve.is_on_curve());
        helpers::validate_g1_point(&off_curve).unwrap_err();
    }

    #[test]
    fn test_validate_g2_point() {
        let mut rng = rand::thread_rng();
        let good = (G2Projective::generator() * Fr::rand(&mut rng)).into_affine();
        helpers::validate_g2_point(&good).unwrap();
        helpers::validate_g2_point(&G2Affine::zero()).unwrap();

        let good_x = good.x;
        let off_curve = G2Affine::new_unchecked(good_x, good_x);
        assert!(!off_curve.is_on_curve());
        helpers::validate_g2_point(&off_curve).unwrap_err();
    }
}
