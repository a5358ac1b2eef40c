//! Verification side of the data availability pipeline.
//!
//! [verify::ParametrizedVerifier] checks single frames against a blob
//! commitment; [batch::universal_verify] folds many such checks into one
//! pairing. [verify::verify_length_proof] and
//! [batch::verify_commitment_equivalence_batch] cover the blob length
//! artifacts produced by the prover's committer.

pub mod batch;
pub mod verify;
