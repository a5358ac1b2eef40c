use crate::{consts::BYTES_PER_FIELD_ELEMENT, errors::KzgError, helpers};

extern crate alloc;
use alloc::string::ToString;

/// Shape of an erasure coding: how many chunks a blob is spread across and
/// how many field elements each chunk carries. Both are powers of two so the
/// evaluation domain of num_chunks * chunk_length points exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodingParams {
    pub num_chunks: u64,
    pub chunk_length: u64,
}

impl EncodingParams {
    pub fn new(num_chunks: u64, chunk_length: u64) -> Result<Self, KzgError> {
        let params = Self {
            num_chunks,
            chunk_length,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), KzgError> {
        if !helpers::is_power_of_two(self.num_chunks) {
            return Err(KzgError::GenericError(
                "number of chunks must be a power of 2".to_string(),
            ));
        }
        if !helpers::is_power_of_two(self.chunk_length) {
            return Err(KzgError::GenericError(
                "chunk length must be a power of 2".to_string(),
            ));
        }
        if self.num_chunks.checked_mul(self.chunk_length).is_none() {
            return Err(KzgError::GenericError(
                "num_chunks * chunk_length overflows u64".to_string(),
            ));
        }
        Ok(())
    }

    /// [Self::validate] plus the bound the proving side needs: the blob
    /// length the params imply must fit inside an SRS of `srs_order` points.
    pub fn validate_in_srs(&self, srs_order: u64) -> Result<(), KzgError> {
        self.validate()?;
        let num_evaluations = self.num_evaluations();
        if num_evaluations > srs_order {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: num_evaluations as usize,
                srs_len: srs_order as usize,
            });
        }
        Ok(())
    }

    /// Derives params from a systematic/parity node split: chunks are sized
    /// so the `num_sys` systematic chunks alone cover a payload of
    /// `data_size` raw bytes, then both dimensions round up to powers of two.
    pub fn from_sys_par(num_sys: u64, num_par: u64, data_size: u64) -> Result<Self, KzgError> {
        let num_nodes = num_sys + num_par;
        let symbol_size = (BYTES_PER_FIELD_ELEMENT - 1) as u64;
        let data_len = data_size.div_ceil(symbol_size);
        let chunk_len = data_len.div_ceil(num_sys);
        Self::new(num_nodes.next_power_of_two(), chunk_len.next_power_of_two())
    }

    /// Total number of evaluation points, i.e. the big FFT size.
    pub fn num_evaluations(&self) -> u64 {
        self.num_chunks * self.chunk_length
    }
}
