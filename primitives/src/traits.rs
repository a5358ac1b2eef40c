use ark_bn254::g1::G1Affine;
use ark_bn254::g2::G2Affine;
use ark_ec::AffineRepr;
use ark_serialize::CanonicalDeserialize;

extern crate alloc;
use alloc::format;
use alloc::string::String;

use crate::consts::{SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED};

// We define our own error instead of using io::ErrorKind::InvalidData
// because we want this to compile in no-std environments.
#[derive(Debug, thiserror::Error)]
pub enum PointReadError {
    #[error("Invalid point data: {0}")]
    InvalidData(String),

    #[error("Deserialization failed")]
    DeserializationError,
}

pub type Result<T> = core::result::Result<T, PointReadError>;

/// Parsing of serialized curve points from SRS files. The `_be` variant
/// reads the gnark compressed big-endian layout the ceremony files use; the
/// `native` variant reads arkworks' own compressed encoding with the byte
/// order flipped to big-endian.
pub trait ReadPointFromBytes: AffineRepr {
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<Self>;
    fn read_point_from_bytes_native_compressed_be(bytes: &[u8]) -> Result<Self>;
}

impl ReadPointFromBytes for G1Affine {
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<G1Affine> {
        crate::helpers::read_g1_point_from_bytes_be(bytes)
            .map_err(|e| PointReadError::InvalidData(format!("{:?}", e)))
    }

    fn read_point_from_bytes_native_compressed_be(bytes_be: &[u8]) -> Result<G1Affine> {
        if bytes_be.len() != SIZE_OF_G1_AFFINE_COMPRESSED {
            return Err(PointReadError::InvalidData(format!(
                "expected {} bytes, got {}",
                SIZE_OF_G1_AFFINE_COMPRESSED,
                bytes_be.len()
            )));
        }
        let mut bytes_le = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
        bytes_le.copy_from_slice(bytes_be);
        bytes_le.reverse();
        G1Affine::deserialize_compressed(&bytes_le[..])
            .map_err(|_| PointReadError::DeserializationError)
    }
}

impl ReadPointFromBytes for G2Affine {
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<G2Affine> {
        crate::helpers::read_g2_point_from_bytes_be(bytes)
            .map_err(|e| PointReadError::InvalidData(format!("{:?}", e)))
    }

    fn read_point_from_bytes_native_compressed_be(bytes_be: &[u8]) -> Result<G2Affine> {
        if bytes_be.len() != SIZE_OF_G2_AFFINE_COMPRESSED {
            return Err(PointReadError::InvalidData(format!(
                "expected {} bytes, got {}",
                SIZE_OF_G2_AFFINE_COMPRESSED,
                bytes_be.len()
            )));
        }
        let mut bytes_le = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
        bytes_le.copy_from_slice(bytes_be);
        bytes_le.reverse();
        G2Affine::deserialize_compressed(&bytes_le[..])
            .map_err(|_| PointReadError::DeserializationError)
    }
}
