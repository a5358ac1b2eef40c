#[cfg(test)]
mod tests {
    use ark_bn254::{Fr, G1Affine};
    use ark_ec::{AffineRepr, CurveGroup};
    use lazy_static::lazy_static;
    use rust_fk20_bn254_primitives::{blob::Blob, errors::KzgError, params::EncodingParams};
    use rust_fk20_bn254_prover::encoder::Prover;
    use rust_fk20_bn254_prover::kzg::BlobCommitments;
    use rust_fk20_bn254_prover::srs::SRS;
    use rust_fk20_bn254_verifier::batch::{
        universal_verify, verify_commitment_equivalence_batch, Sample,
    };
    use rust_fk20_bn254_verifier::verify::ParametrizedVerifier;

    const GETTYSBURG_ADDRESS_BYTES: &[u8] = "Fourscore and seven years ago our fathers brought forth, on this continent, a new nation, conceived in liberty, and dedicated to the proposition that all men are created equal. Now we are engaged in a great civil war, testing whether that nation, or any nation so conceived, and so dedicated, can long endure. We are met on a great battle-field of that war. We have come to dedicate a portion of that field, as a final resting-place for those who here gave their lives, that that nation might live. It is altogether fitting and proper that we should do this. But, in a larger sense, we cannot dedicate, we cannot consecrate—we cannot hallow—this ground. The brave men, living and dead, who struggled here, have consecrated it far above our poor power to add or detract. The world will little note, nor long remember what we say here, but it can never forget what they did here. It is for us the living, rather, to be dedicated here to the unfinished work which they who fought here have thus far so nobly advanced. It is rather for us to be here dedicated to the great task remaining before us—that from these honored dead we take increased devotion to that cause for which they here gave the last full measure of devotion—that we here highly resolve that these dead shall not have died in vain—that this nation, under God, shall have a new birth of freedom, and that government of the people, by the people, for the people, shall not perish from the earth.".as_bytes();

    lazy_static! {
        static ref SRS_INSTANCE: SRS = SRS::insecure_setup(3000).unwrap();
        static ref PROVER_INSTANCE: Prover = Prover::new(SRS_INSTANCE.clone(), None);
    }

    struct BatchFixture {
        params: EncodingParams,
        commitments: Vec<G1Affine>,
        bundles: Vec<BlobCommitments>,
        samples: Vec<Sample>,
        verifier: ParametrizedVerifier,
    }

    /// Two blobs encoded with the same shape, every frame of both presented
    /// as a sample.
    fn batch_fixture() -> BatchFixture {
        let params = EncodingParams::new(4, 16).unwrap();
        let blobs = [
            Blob::from_raw_data(&GETTYSBURG_ADDRESS_BYTES[..1146]),
            Blob::from_raw_data(&GETTYSBURG_ADDRESS_BYTES[200..1100]),
        ];

        let mut commitments = Vec::new();
        let mut bundles = Vec::new();
        let mut samples = Vec::new();
        for (blob_index, blob) in blobs.iter().enumerate() {
            let (bundle, frames) = PROVER_INSTANCE.encode_and_prove(blob, params).unwrap();
            commitments.push(bundle.commitment);
            bundles.push(bundle);
            for (chunk_index, frame) in frames.into_iter().enumerate() {
                samples.push(Sample {
                    blob_index,
                    chunk_index: chunk_index as u64,
                    frame,
                });
            }
        }

        let verifier = ParametrizedVerifier::new(
            params,
            &SRS_INSTANCE.g1,
            SRS_INSTANCE.g2[params.chunk_length as usize],
        )
        .unwrap();

        BatchFixture {
            params,
            commitments,
            bundles,
            samples,
            verifier,
        }
    }

    #[test]
    fn test_universal_verify_accepts_honest_samples() {
        let fixture = batch_fixture();
        assert!(universal_verify(&fixture.verifier, &fixture.commitments, &fixture.samples)
            .unwrap());
    }

    #[test]
    fn test_universal_verify_accepts_sparse_subset() {
        let fixture = batch_fixture();
        let subset: Vec<Sample> = fixture
            .samples
            .iter()
            .step_by(3)
            .cloned()
            .collect();
        assert!(universal_verify(&fixture.verifier, &fixture.commitments, &subset).unwrap());
    }

    #[test]
    fn test_universal_verify_rejects_tampered_coeffs() {
        let mut fixture = batch_fixture();
        fixture.samples[2].frame.coeffs[5] += Fr::from(1u64);
        assert!(!universal_verify(&fixture.verifier, &fixture.commitments, &fixture.samples)
            .unwrap());
    }

    #[test]
    fn test_universal_verify_rejects_tampered_proof() {
        let mut fixture = batch_fixture();
        fixture.samples[1].frame.proof = fixture.samples[6].frame.proof;
        assert!(!universal_verify(&fixture.verifier, &fixture.commitments, &fixture.samples)
            .unwrap());
    }

    #[test]
    fn test_universal_verify_rejects_swapped_blob_index() {
        let mut fixture = batch_fixture();
        // a frame of blob 0 presented as opening blob 1
        fixture.samples[0].blob_index = 1;
        assert!(!universal_verify(&fixture.verifier, &fixture.commitments, &fixture.samples)
            .unwrap());
    }

    #[test]
    fn test_universal_verify_input_validation() {
        let fixture = batch_fixture();

        assert_eq!(
            universal_verify(&fixture.verifier, &fixture.commitments, &[]).unwrap_err(),
            KzgError::InvalidInputLength
        );

        let mut bad_index = fixture.samples.clone();
        bad_index[0].blob_index = 2;
        assert!(matches!(
            universal_verify(&fixture.verifier, &fixture.commitments, &bad_index).unwrap_err(),
            KzgError::GenericError(_)
        ));

        let mut bad_chunk = fixture.samples.clone();
        bad_chunk[0].chunk_index = fixture.params.num_chunks;
        assert!(matches!(
            universal_verify(&fixture.verifier, &fixture.commitments, &bad_chunk).unwrap_err(),
            KzgError::GenericError(_)
        ));
    }

    #[test]
    fn test_commitment_equivalence_batch() {
        let fixture = batch_fixture();
        let pairs: Vec<_> = fixture
            .bundles
            .iter()
            .map(|b| (b.commitment, b.length_commitment))
            .collect();
        assert!(verify_commitment_equivalence_batch(&pairs).unwrap());
    }

    #[test]
    fn test_commitment_equivalence_batch_rejects_mismatch() {
        let fixture = batch_fixture();
        let pairs = vec![
            (fixture.bundles[0].commitment, fixture.bundles[0].length_commitment),
            // commitment of one blob against the length commitment of the other
            (fixture.bundles[1].commitment, fixture.bundles[0].length_commitment),
        ];
        assert!(!verify_commitment_equivalence_batch(&pairs).unwrap());
    }

    #[test]
    fn test_commitment_equivalence_batch_empty_is_vacuous() {
        assert!(verify_commitment_equivalence_batch(&[]).unwrap());
    }

    #[test]
    fn test_commitment_equivalence_single_pair() {
        let fixture = batch_fixture();
        let honest = [(fixture.bundles[0].commitment, fixture.bundles[0].length_commitment)];
        assert!(verify_commitment_equivalence_batch(&honest).unwrap());

        let forged = [(
            (fixture.bundles[0].commitment.into_group() + G1Affine::generator()).into_affine(),
            fixture.bundles[0].length_commitment,
        )];
        assert!(!verify_commitment_equivalence_batch(&forged).unwrap());
    }
}
