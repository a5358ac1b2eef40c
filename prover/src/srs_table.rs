//! Precomputed G1 tables for the amortized multi-proof pipeline.
//!
//! For every coset position `j` in a chunk, the multi-proof MSM pairs the
//! Toeplitz coefficients against a fixed sub-vector of the G1 SRS, already
//! run through the forward G1 FFT. Those transforms only depend on the
//! encoding parameters, so they are computed once per `(num_chunks,
//! chunk_length)` pair and optionally cached on disk.

use ark_bn254::{G1Affine, G1Projective};
use ark_ec::CurveGroup;
use ark_std::Zero;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rust_fk20_bn254_primitives::consts::SIZE_OF_G1_AFFINE_COMPRESSED;
use rust_fk20_bn254_primitives::errors::KzgError;
use rust_fk20_bn254_primitives::fft::FFTDomain;
use rust_fk20_bn254_primitives::helpers;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::srs::write_points_to_file;

const ROW_SEPARATOR: u8 = b'\n';

/// Builder for the per-parameter G1 sub-tables, backed by a loaded G1 SRS
/// window and an optional on-disk cache directory.
pub struct SrsTable<'a> {
    table_dir: Option<&'a Path>,
    g1: &'a [G1Affine],
}

impl<'a> SrsTable<'a> {
    pub fn new(table_dir: Option<&'a Path>, g1: &'a [G1Affine]) -> Self {
        Self { table_dir, g1 }
    }

    /// Returns the transposed table, `[2 * num_chunks][chunk_length]`, for
    /// the given parameters. Row `i` holds the G1 points every per-row MSM of
    /// the multi-proof pipeline pairs against the `i`-th circulant
    /// coefficient of each chunk position.
    ///
    /// Served from the cache directory when a matching table file exists,
    /// otherwise precomputed and, when a cache directory is configured,
    /// written back.
    pub fn get_sub_tables(
        &self,
        num_chunks: u64,
        chunk_length: u64,
    ) -> Result<Vec<Vec<G1Affine>>, KzgError> {
        let n = (num_chunks * chunk_length) as usize;
        if self.g1.len() < n {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: n,
                srs_len: self.g1.len(),
            });
        }

        let fft_points = match self.load(num_chunks, chunk_length)? {
            Some(points) => points,
            None => {
                let points = self.precompute(num_chunks, chunk_length)?;
                if let Some(dir) = self.table_dir {
                    store_table(dir, num_chunks, chunk_length, &points)?;
                }
                points
            }
        };

        // [chunk_length][2 * num_chunks] -> [2 * num_chunks][chunk_length]
        let rows = 2 * num_chunks as usize;
        let mut transposed = vec![vec![G1Affine::identity(); chunk_length as usize]; rows];
        for (j, column) in fft_points.iter().enumerate() {
            for (i, point) in column.iter().enumerate() {
                transposed[i][j] = *point;
            }
        }
        Ok(transposed)
    }

    /// Computes `fft_points[j]` for every coset position `j`: the SRS
    /// sub-vector walked backwards at stride `chunk_length` from degree
    /// `n - chunk_length - 1 - j`, identity padded to `2 * num_chunks`, then
    /// pushed through the forward G1 FFT.
    fn precompute(
        &self,
        num_chunks: u64,
        chunk_length: u64,
    ) -> Result<Vec<Vec<G1Affine>>, KzgError> {
        let dim_e = num_chunks as usize;
        let l = chunk_length as usize;
        let n = dim_e * l;
        let domain = FFTDomain::new((2 * dim_e).trailing_zeros() as u8)?;

        (0..l)
            .into_par_iter()
            .map(|j| -> Result<Vec<G1Affine>, KzgError> {
                let mut x = vec![G1Projective::zero(); 2 * dim_e];
                for (i, x_i) in x.iter_mut().enumerate().take(dim_e - 1) {
                    *x_i = G1Projective::from(self.g1[n - l - 1 - j - i * l]);
                }
                // the final matrix slot and the doubling pad stay at identity
                let transformed = domain.fft_g1(&x, false)?;
                Ok(G1Projective::normalize_batch(&transformed))
            })
            .collect()
    }

    /// Reads a previously stored table. Returns `Ok(None)` when no cache
    /// directory is configured or the file does not exist.
    fn load(
        &self,
        num_chunks: u64,
        chunk_length: u64,
    ) -> Result<Option<Vec<Vec<G1Affine>>>, KzgError> {
        let Some(dir) = self.table_dir else {
            return Ok(None);
        };
        let path = table_file_path(dir, num_chunks, chunk_length);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(KzgError::GenericError(e.to_string())),
        };
        let mut reader = BufReader::new(file);

        let rows = 2 * num_chunks as usize;
        let mut fft_points = Vec::with_capacity(chunk_length as usize);
        for _ in 0..chunk_length {
            let mut column = Vec::with_capacity(rows);
            for _ in 0..rows {
                let mut bytes = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
                reader
                    .read_exact(&mut bytes)
                    .map_err(|e| KzgError::GenericError(e.to_string()))?;
                let point = helpers::read_g1_point_from_bytes_be(&bytes)
                    .map_err(|e| KzgError::SerializationError(e.to_string()))?;
                column.push(point);
            }
            let mut separator = [0u8; 1];
            reader
                .read_exact(&mut separator)
                .map_err(|e| KzgError::GenericError(e.to_string()))?;
            if separator[0] != ROW_SEPARATOR {
                return Err(KzgError::SerializationError(
                    "malformed table file: missing row separator".to_string(),
                ));
            }
            fft_points.push(column);
        }
        Ok(Some(fft_points))
    }
}

/// Table files follow the `dimE{num_chunks}.coset{chunk_length}` naming of
/// the cache directory layout.
pub fn table_file_path(dir: &Path, num_chunks: u64, chunk_length: u64) -> PathBuf {
    dir.join(format!("dimE{}.coset{}", num_chunks, chunk_length))
}

fn store_table(
    dir: &Path,
    num_chunks: u64,
    chunk_length: u64,
    fft_points: &[Vec<G1Affine>],
) -> Result<(), KzgError> {
    std::fs::create_dir_all(dir).map_err(|e| KzgError::GenericError(e.to_string()))?;
    let path = table_file_path(dir, num_chunks, chunk_length);
    let file = File::create(&path).map_err(|e| KzgError::GenericError(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    for column in fft_points {
        write_points_to_file(&mut writer, column)?;
        writer
            .write_all(&[ROW_SEPARATOR])
            .map_err(|e| KzgError::GenericError(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| KzgError::GenericError(e.to_string()))?;
    Ok(())
}
