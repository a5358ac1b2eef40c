#[cfg(test)]
mod tests {
    use ark_bn254::{Fr, G1Projective};
    use ark_ec::Group;
    use ark_ff::UniformRand;
    use ark_std::{One, Zero};
    use rust_fk20_bn254_primitives::errors::FFTError;
    use rust_fk20_bn254_primitives::fft::{expand_root_of_unity, FFTDomain};
    use rust_fk20_bn254_primitives::helpers;

    #[test]
    fn test_expand_root_of_unity_cycles_back_to_one() {
        let root = helpers::get_primitive_root_of_unity(4).unwrap();
        let expanded = expand_root_of_unity(&root);
        assert_eq!(expanded.len(), 17, "2^4 domain carries 17 roots");
        assert_eq!(expanded[0], Fr::one());
        assert_eq!(expanded[16], Fr::one());
        for window in expanded.windows(2) {
            assert_eq!(window[1], window[0] * root);
        }
    }

    #[test]
    fn test_domain_roots_tables() {
        let domain = FFTDomain::new(6).unwrap();
        assert_eq!(domain.max_width(), 64);
        assert_eq!(domain.expanded_roots_of_unity().len(), 65);
        assert_eq!(domain.reverse_roots_of_unity().len(), 65);
        // the reverse table is the forward table walked backwards
        for (f, r) in domain
            .expanded_roots_of_unity()
            .iter()
            .zip(domain.reverse_roots_of_unity().iter().rev())
        {
            assert_eq!(f, r);
        }
    }

    #[test]
    fn test_scale_too_large() {
        assert_eq!(FFTDomain::new(29).unwrap_err(), FFTError::ScaleTooLarge(29));
    }

    #[test]
    fn test_fft_fr_round_trip() {
        let mut rng = rand::thread_rng();
        let domain = FFTDomain::new(6).unwrap();
        let data: Vec<Fr> = (0..64).map(|_| Fr::rand(&mut rng)).collect();

        let evals = domain.fft_fr(&data, false).unwrap();
        let coeffs = domain.fft_fr(&evals, true).unwrap();
        assert_eq!(data, coeffs, "inverse(forward(x)) must be x");
    }

    #[test]
    fn test_fft_fr_strided_subdomain() {
        // a sub-width transform must agree with a domain sized exactly
        let mut rng = rand::thread_rng();
        let big = FFTDomain::new(8).unwrap();
        let small = FFTDomain::new(4).unwrap();
        let data: Vec<Fr> = (0..16).map(|_| Fr::rand(&mut rng)).collect();

        assert_eq!(
            big.fft_fr(&data, false).unwrap(),
            small.fft_fr(&data, false).unwrap()
        );
        assert_eq!(
            big.fft_fr(&data, true).unwrap(),
            small.fft_fr(&data, true).unwrap()
        );
    }

    #[test]
    fn test_fft_fr_is_polynomial_evaluation() {
        let mut rng = rand::thread_rng();
        let domain = FFTDomain::new(4).unwrap();
        let coeffs: Vec<Fr> = (0..16).map(|_| Fr::rand(&mut rng)).collect();
        let evals = domain.fft_fr(&coeffs, false).unwrap();

        for (i, eval) in evals.iter().enumerate() {
            let x = domain.expanded_roots_of_unity()[i];
            assert_eq!(*eval, helpers::evaluate_polynomial(&coeffs, &x));
        }
    }

    #[test]
    fn test_fft_fr_impulse_and_constant() {
        let domain = FFTDomain::new(3).unwrap();
        let c = Fr::from(42u64);

        // an impulse transforms to a constant vector
        let mut impulse = vec![Fr::zero(); 8];
        impulse[0] = c;
        let evals = domain.fft_fr(&impulse, false).unwrap();
        assert!(evals.iter().all(|e| *e == c));

        // and the inverse transform scales by 1/n on the way back
        let coeffs = domain.fft_fr(&evals, true).unwrap();
        assert_eq!(coeffs, impulse);
    }

    #[test]
    fn test_fft_fr_shape_errors() {
        let domain = FFTDomain::new(3).unwrap();

        let too_long = vec![Fr::zero(); 16];
        assert_eq!(
            domain.fft_fr(&too_long, false).unwrap_err(),
            FFTError::LengthMismatch {
                max_width: 8,
                actual: 16
            }
        );

        let not_pow2 = vec![Fr::zero(); 6];
        assert_eq!(
            domain.fft_fr(&not_pow2, false).unwrap_err(),
            FFTError::NotPowerOfTwo(6)
        );
    }

    #[test]
    fn test_fft_fr_into_destination_length() {
        let domain = FFTDomain::new(3).unwrap();
        let data = vec![Fr::one(); 8];
        let mut short = vec![Fr::zero(); 4];
        assert_eq!(
            domain.fft_fr_into(&data, false, &mut short).unwrap_err(),
            FFTError::InvalidDestinationLength {
                needed: 8,
                actual: 4
            }
        );
    }

    #[test]
    fn test_fft_g1_round_trip() {
        let mut rng = rand::thread_rng();
        let domain = FFTDomain::new(3).unwrap();
        let points: Vec<G1Projective> = (0..8)
            .map(|_| G1Projective::generator() * Fr::rand(&mut rng))
            .collect();

        let transformed = domain.fft_g1(&points, false).unwrap();
        let back = domain.fft_g1(&transformed, true).unwrap();
        assert_eq!(points, back);
    }

    #[test]
    fn test_fft_g1_matches_fft_fr_in_the_exponent() {
        // FFT of [a_i * G] must equal [FFT(a)_i * G]
        let mut rng = rand::thread_rng();
        let domain = FFTDomain::new(4).unwrap();
        let scalars: Vec<Fr> = (0..16).map(|_| Fr::rand(&mut rng)).collect();
        let points: Vec<G1Projective> = scalars
            .iter()
            .map(|s| G1Projective::generator() * s)
            .collect();

        let scalar_fft = domain.fft_fr(&scalars, false).unwrap();
        let point_fft = domain.fft_g1(&points, false).unwrap();
        for (s, p) in scalar_fft.iter().zip(point_fft.iter()) {
            assert_eq!(G1Projective::generator() * s, *p);
        }
    }
}
