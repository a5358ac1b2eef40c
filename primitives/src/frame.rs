use ark_bn254::{Fr, G1Affine};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::vec::Vec;

use crate::errors::KzgError;

extern crate alloc;
use alloc::string::ToString;

/// One erasure-coded chunk of a blob: the interpolating polynomial of the
/// blob's evaluations over this chunk's coset, plus the opening proof for
/// those evaluations against the blob commitment.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Frame {
    pub proof: G1Affine,
    pub coeffs: Vec<Fr>,
}

impl Frame {
    /// Number of field elements carried by the frame.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Compressed canonical encoding for transport.
    pub fn to_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = Vec::with_capacity(self.serialized_size(Compress::Yes));
        self.serialize_compressed(&mut bytes)
            .map_err(|e| KzgError::SerializationError(e.to_string()))?;
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KzgError> {
        Self::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map_err(|e| KzgError::SerializationError(e.to_string()))
    }
}
