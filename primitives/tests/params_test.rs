#[cfg(test)]
mod tests {
    use rust_fk20_bn254_primitives::errors::KzgError;
    use rust_fk20_bn254_primitives::params::EncodingParams;

    #[test]
    fn test_new_rejects_non_power_of_two() {
        assert!(EncodingParams::new(3, 16).is_err());
        assert!(EncodingParams::new(8, 0).is_err());
        assert!(EncodingParams::new(8, 16).is_ok());
    }

    #[test]
    fn test_validate_rejects_multiplication_overflow() {
        // both dimensions are powers of two, but their product does not fit
        // in a u64
        let err = EncodingParams::new(1 << 33, 1 << 33).unwrap_err();
        assert!(matches!(err, KzgError::GenericError(_)));
    }

    #[test]
    fn test_validate_in_srs_bounds_num_evaluations() {
        let params = EncodingParams::new(4, 16).unwrap();
        params.validate_in_srs(64).unwrap();
        params.validate_in_srs(3000).unwrap();

        let err = params.validate_in_srs(32).unwrap_err();
        assert_eq!(
            err,
            KzgError::SrsCapacityExceeded {
                polynomial_len: 64,
                srs_len: 32,
            }
        );
    }

    #[test]
    fn test_from_sys_par_rounds_up() {
        // 3 systematic + 1 parity node over 1146 bytes: 37 symbols over 3
        // nodes is 13 per chunk, rounded up to 16
        let params = EncodingParams::from_sys_par(3, 1, 1146).unwrap();
        assert_eq!(params.num_chunks, 4);
        assert_eq!(params.chunk_length, 16);
        assert_eq!(params.num_evaluations(), 64);
    }
}
