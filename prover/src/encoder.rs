//! Blob encoding: Reed-Solomon extension over the evaluation domain, frame
//! construction, and recovery of the original bytes from any sufficient
//! subset of frames.
//!
//! A blob's symbols are the coefficients of a polynomial. The polynomial is
//! evaluated on a domain of `num_chunks * chunk_length` points, the domain
//! splits into `num_chunks` cosets of size `chunk_length`, and every frame
//! carries one coset as interpolation coefficients plus the opening proof
//! for that coset. Chunk `i` is assigned the coset whose leading root index
//! is `reverse_bits_limited(num_chunks, i)`, so chunk numbering is stable
//! while cosets stay maximally spread for partial decoding.

use ark_bn254::Fr;
use ark_std::{vec, vec::Vec, One, Zero};
use rust_fk20_bn254_primitives::blob::Blob;
use rust_fk20_bn254_primitives::consts::BYTES_PER_FIELD_ELEMENT;
use rust_fk20_bn254_primitives::errors::KzgError;
use rust_fk20_bn254_primitives::fft::FFTDomain;
use rust_fk20_bn254_primitives::frame::Frame;
use rust_fk20_bn254_primitives::helpers;
use rust_fk20_bn254_primitives::params::EncodingParams;
use rust_fk20_bn254_primitives::recovery::recover_poly_from_samples;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::kzg::{BlobCommitments, KZG};
use crate::multiproof::{CpuBackend, ProofBackend};
use crate::srs::SRS;
use crate::srs_table::SrsTable;

extern crate alloc;
use alloc::string::ToString;

/// Encoder and prover specialized to one set of [EncodingParams]: the FFT
/// domain, the proof domain and the transposed SRS table are all fixed at
/// construction.
#[derive(Debug)]
pub struct ParametrizedProver {
    params: EncodingParams,
    fs: FFTDomain,
    backend: CpuBackend,
}

impl ParametrizedProver {
    pub fn new(
        params: EncodingParams,
        srs: &SRS,
        table_dir: Option<&Path>,
    ) -> Result<Self, KzgError> {
        params.validate_in_srs(srs.order as u64)?;

        // chunks of a single element leave no room for the doubled proof
        // domain inside the evaluation domain, so the wider one is used
        let mut scale = params.num_evaluations().trailing_zeros() as u8;
        if params.chunk_length == 1 {
            scale = (2 * params.num_chunks).trailing_zeros() as u8;
        }
        let fs = FFTDomain::new(scale)?;
        let proof_domain = FFTDomain::new((2 * params.num_chunks).trailing_zeros() as u8)?;

        let table = SrsTable::new(table_dir, &srs.g1);
        let fft_points_t = table.get_sub_tables(params.num_chunks, params.chunk_length)?;
        let backend = CpuBackend::new(
            params.num_chunks,
            params.chunk_length,
            proof_domain,
            fft_points_t,
        )?;

        Ok(Self {
            params,
            fs,
            backend,
        })
    }

    pub fn params(&self) -> EncodingParams {
        self.params
    }

    /// Stride from the constructed domain down to the evaluation domain of
    /// `num_evaluations` points. 1 except for the `chunk_length == 1` shape.
    fn eval_stride(&self) -> usize {
        (self.fs.max_width() / self.params.num_evaluations()) as usize
    }

    /// Leading root of the coset with index `x` on the evaluation domain.
    fn leading_root(&self, x: usize) -> Fr {
        self.fs.expanded_roots_of_unity()[x * self.eval_stride()]
    }

    /// Encodes field elements into one frame per chunk, proofs attached.
    pub fn get_frames(&self, input_fr: &[Fr]) -> Result<Vec<Frame>, KzgError> {
        let num_evaluations = self.params.num_evaluations() as usize;
        let num_chunks = self.params.num_chunks as usize;
        let chunk_length = self.params.chunk_length as usize;

        if input_fr.is_empty() {
            return Err(KzgError::InvalidInputLength);
        }
        if input_fr.len() > num_evaluations {
            return Err(KzgError::GenericError(
                "blob does not fit the encoding parameters".to_string(),
            ));
        }

        let mut padded_coeffs = vec![Fr::zero(); num_evaluations];
        padded_coeffs[..input_fr.len()].copy_from_slice(input_fr);

        let proofs = self.backend.compute_multiframe_proofs(&padded_coeffs)?;
        let evals = self.fs.fft_fr(&padded_coeffs, false)?;

        let mut frames = Vec::with_capacity(num_chunks);
        for i in 0..num_chunks {
            let x = helpers::reverse_bits_limited(num_chunks as u64, i as u64) as usize;
            let coset_evals: Vec<Fr> = (0..chunk_length)
                .map(|t| evals[x + t * num_chunks])
                .collect();

            // interpolate on the unit subgroup, then unshift by the leading
            // root so the coefficients interpolate the coset itself
            let mut coeffs = self.fs.fft_fr(&coset_evals, true)?;
            let w_inv = self.fs.reverse_roots_of_unity()[x * self.eval_stride()];
            let mut shift = Fr::one();
            for coeff in coeffs.iter_mut() {
                *coeff *= shift;
                shift *= w_inv;
            }

            frames.push(Frame {
                proof: proofs[x],
                coeffs,
            });
        }
        Ok(frames)
    }

    /// Evaluations of one frame on its own coset, in coset order.
    fn frame_evals(&self, frame: &Frame, x: usize) -> Result<Vec<Fr>, KzgError> {
        let w = self.leading_root(x);
        let mut shifted = Vec::with_capacity(frame.coeffs.len());
        let mut shift = Fr::one();
        for coeff in &frame.coeffs {
            shifted.push(*coeff * shift);
            shift *= w;
        }
        Ok(self.fs.fft_fr(&shifted, false)?)
    }

    /// Reconstructs the blob bytes from any subset of frames that covers the
    /// original data. `indices` are the chunk assignment indices matching
    /// `frames` one to one; the output is truncated to `max_output_len`.
    pub fn decode(
        &self,
        frames: &[Frame],
        indices: &[u64],
        max_output_len: usize,
    ) -> Result<Vec<u8>, KzgError> {
        let num_evaluations = self.params.num_evaluations() as usize;
        let num_chunks = self.params.num_chunks;

        if frames.is_empty() || frames.len() != indices.len() {
            return Err(KzgError::InvalidInputLength);
        }

        let mut samples: Vec<Option<Fr>> = vec![None; num_evaluations];
        for (frame, &index) in frames.iter().zip(indices.iter()) {
            if index >= num_chunks {
                return Err(KzgError::GenericError(
                    "chunk index out of range".to_string(),
                ));
            }
            if frame.coeffs.len() != self.params.chunk_length as usize {
                return Err(KzgError::GenericError(
                    "frame length does not match the chunk length".to_string(),
                ));
            }
            let x = helpers::reverse_bits_limited(num_chunks, index) as usize;
            let coset_evals = self.frame_evals(frame, x)?;
            for (t, eval) in coset_evals.into_iter().enumerate() {
                samples[x + t * num_chunks as usize] = Some(eval);
            }
        }

        let evals = if samples.iter().all(|s| s.is_some()) {
            samples.into_iter().map(|s| s.unwrap_or_default()).collect()
        } else {
            let data_len = helpers::get_num_element(max_output_len, BYTES_PER_FIELD_ELEMENT)
                .min(num_evaluations);
            recover_poly_from_samples(&self.fs, &samples, data_len)?
        };

        let coeffs = self.fs.fft_fr(&evals, true)?;
        Ok(helpers::to_byte_array(&coeffs, max_output_len))
    }
}

/// Front door of the proving side: owns the SRS, lazily builds one
/// [ParametrizedProver] per encoding shape and keeps them cached.
pub struct Prover {
    srs: SRS,
    committer: KZG,
    table_dir: Option<PathBuf>,
    parametrized_provers: Mutex<HashMap<EncodingParams, Arc<ParametrizedProver>>>,
}

impl Prover {
    pub fn new(srs: SRS, table_dir: Option<PathBuf>) -> Self {
        Self {
            srs,
            committer: KZG::new(),
            table_dir,
            parametrized_provers: Mutex::new(HashMap::new()),
        }
    }

    pub fn srs(&self) -> &SRS {
        &self.srs
    }

    pub fn get_prover(
        &self,
        params: EncodingParams,
    ) -> Result<Arc<ParametrizedProver>, KzgError> {
        {
            let provers = self
                .parametrized_provers
                .lock()
                .map_err(|_| KzgError::GenericError("prover cache lock poisoned".to_string()))?;
            if let Some(prover) = provers.get(&params) {
                return Ok(Arc::clone(prover));
            }
        }

        let prover = Arc::new(ParametrizedProver::new(
            params,
            &self.srs,
            self.table_dir.as_deref(),
        )?);
        self.parametrized_provers
            .lock()
            .map_err(|_| KzgError::GenericError("prover cache lock poisoned".to_string()))?
            .insert(params, Arc::clone(&prover));
        Ok(prover)
    }

    /// Commits to the blob and encodes it into proven frames in one call.
    pub fn encode_and_prove(
        &self,
        blob: &Blob,
        params: EncodingParams,
    ) -> Result<(BlobCommitments, Vec<Frame>), KzgError> {
        let commitments = self.committer.blob_commitments(blob, &self.srs)?;
        let frames = self.get_frames(blob, params)?;
        Ok((commitments, frames))
    }

    pub fn get_frames(&self, blob: &Blob, params: EncodingParams) -> Result<Vec<Frame>, KzgError> {
        let prover = self.get_prover(params)?;
        let input_fr = helpers::to_fr_array(blob.data());
        prover.get_frames(&input_fr)
    }

    /// See [ParametrizedProver::decode].
    pub fn decode(
        &self,
        frames: &[Frame],
        indices: &[u64],
        params: EncodingParams,
        max_output_len: usize,
    ) -> Result<Vec<u8>, KzgError> {
        let prover = self.get_prover(params)?;
        prover.decode(frames, indices, max_output_len)
    }
}
