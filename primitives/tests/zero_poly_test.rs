#[cfg(test)]
mod tests {
    use ark_bn254::Fr;
    use ark_std::Zero;
    use rand::seq::SliceRandom;
    use rand::Rng;
    use rust_fk20_bn254_primitives::errors::FFTError;
    use rust_fk20_bn254_primitives::fft::FFTDomain;
    use rust_fk20_bn254_primitives::helpers;
    use rust_fk20_bn254_primitives::zero_poly::{
        make_zero_poly_mul_leaf, zero_poly_via_multiplication,
    };

    fn random_missing(length: usize, count: usize) -> Vec<u64> {
        let mut rng = rand::thread_rng();
        let mut indices: Vec<u64> = (0..length as u64).collect();
        indices.shuffle(&mut rng);
        indices.truncate(count);
        indices.sort_unstable();
        indices
    }

    fn check_zero_poly(domain: &FFTDomain, missing: &[u64], length: usize) {
        let (zero_eval, zero_poly) =
            zero_poly_via_multiplication(domain, missing, length).unwrap();
        assert_eq!(zero_eval.len(), length);
        assert_eq!(zero_poly.len(), length);

        // the evaluations vanish exactly on the missing positions
        for (i, eval) in zero_eval.iter().enumerate() {
            let should_be_zero = missing.contains(&(i as u64));
            assert_eq!(
                eval.is_zero(),
                should_be_zero,
                "evaluation at index {} disagrees with missing set",
                i
            );
        }

        // evaluations and coefficients describe the same polynomial; spot
        // check a handful of domain points by direct Horner evaluation
        let stride = (domain.max_width() as usize) / length;
        let step = (length / 16).max(1);
        for i in (0..length).step_by(step) {
            let x = domain.expanded_roots_of_unity()[i * stride];
            assert_eq!(
                helpers::evaluate_polynomial(&zero_poly, &x),
                zero_eval[i],
                "coefficients and evaluations disagree at index {}",
                i
            );
        }
    }

    #[test]
    fn test_single_leaf_product() {
        let domain = FFTDomain::new(4).unwrap();
        let indices = [1u64, 5, 6, 9];
        let mut dst = vec![Fr::zero(); 16];
        make_zero_poly_mul_leaf(&domain, &mut dst, &indices, 1).unwrap();

        // degree equals the index count, leading coefficient is monic
        assert_eq!(dst[indices.len()], Fr::from(1u64));
        for coeff in dst.iter().skip(indices.len() + 1) {
            assert!(coeff.is_zero());
        }
        for v in indices {
            let x = domain.expanded_roots_of_unity()[v as usize];
            assert!(helpers::evaluate_polynomial(&dst, &x).is_zero());
        }
    }

    #[test]
    fn test_zero_poly_fast_path() {
        // fewer missing indices than one leaf holds
        let domain = FFTDomain::new(8).unwrap();
        let missing = random_missing(256, 7);
        check_zero_poly(&domain, &missing, 256);
    }

    #[test]
    fn test_zero_poly_tree_reduction() {
        // enough missing indices to force the leaf tree
        let domain = FFTDomain::new(9).unwrap();
        for count in [70usize, 128, 256] {
            let missing = random_missing(512, count);
            check_zero_poly(&domain, &missing, 512);
        }
    }

    #[test]
    fn test_zero_poly_across_scales_and_ratios() {
        let mut rng = rand::thread_rng();
        for scale in 3usize..=12 {
            let length = 1usize << scale;
            // stay at or below 3/4 missing so the clipped leaf groups fit
            let count = rng.gen_range(1..=(length * 3 / 4).max(1));
            let domain = FFTDomain::new(scale as u8).unwrap();
            let missing = random_missing(length, count);
            check_zero_poly(&domain, &missing, length);
        }
    }

    #[test]
    fn test_zero_poly_on_strided_subdomain() {
        // length below the domain width exercises the stride arithmetic
        let domain = FFTDomain::new(8).unwrap();
        let missing = random_missing(64, 20);
        check_zero_poly(&domain, &missing, 64);
    }

    #[test]
    fn test_empty_missing_set() {
        let domain = FFTDomain::new(4).unwrap();
        let (zero_eval, zero_poly) = zero_poly_via_multiplication(&domain, &[], 16).unwrap();
        assert!(zero_eval.iter().all(Fr::is_zero));
        assert!(zero_poly.iter().all(Fr::is_zero));
    }

    #[test]
    fn test_length_validation() {
        let domain = FFTDomain::new(4).unwrap();
        assert_eq!(
            zero_poly_via_multiplication(&domain, &[0], 32).unwrap_err(),
            FFTError::LengthMismatch {
                max_width: 16,
                actual: 32
            }
        );
        assert_eq!(
            zero_poly_via_multiplication(&domain, &[0], 12).unwrap_err(),
            FFTError::NotPowerOfTwo(12)
        );
    }
}
