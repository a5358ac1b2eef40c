use ark_bn254::{G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, PrimeField};
use crossbeam_channel::{bounded, Receiver};
use rust_fk20_bn254_primitives::consts::{
    SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED,
};
use rust_fk20_bn254_primitives::errors::KzgError;
use rust_fk20_bn254_primitives::helpers;
use rust_fk20_bn254_primitives::traits::ReadPointFromBytes;
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};

/// Represents the Structured Reference String (SRS) used in KZG commitments.
#[derive(Debug, PartialEq, Clone)]
pub struct SRS {
    /// G1 powers of tau in monomial form, ready to be used for commitments
    /// with polynomials in coefficient form. To commit against a polynomial
    /// in evaluation form, the points are transformed to lagrange form with
    /// an IFFT first.
    pub g1: Vec<G1Affine>,
    /// G2 powers of tau, used for length commitments and for the G2 side of
    /// the pairing checks.
    pub g2: Vec<G2Affine>,
    /// The last `g2.len()` G2 powers of tau, i.e. powers order-n..order.
    /// Length proofs pair blob coefficients against this window.
    pub g2_trailing: Vec<G2Affine>,
    /// The order of the SRS.
    pub order: u32,
}

impl SRS {
    /// Initializes the SRS by loading G1 and G2 points from the ceremony
    /// files. The trailing G2 window is read from the tail of the same G2
    /// file, so the file must hold all `order` points.
    ///
    /// # Arguments
    ///
    /// * `path_to_g1_points` - The file path to load G1 points from.
    /// * `path_to_g2_points` - The file path to load G2 points from.
    /// * `order` - The total order of the SRS.
    /// * `points_to_load` - The number of SRS points to load.
    ///
    /// # Returns
    ///
    /// * `Result<SRS, KzgError>` - The initialized SRS or an error.
    pub fn new(
        path_to_g1_points: &str,
        path_to_g2_points: &str,
        order: u32,
        points_to_load: u32,
    ) -> Result<Self, KzgError> {
        if points_to_load > order {
            return Err(KzgError::GenericError(
                "Number of points to load exceeds SRS order.".to_string(),
            ));
        }

        let g1_points = Self::parallel_read_points::<G1Affine>(
            path_to_g1_points.to_owned(),
            SIZE_OF_G1_AFFINE_COMPRESSED,
            points_to_load,
            false,
        )?;
        let g2_points = Self::parallel_read_points::<G2Affine>(
            path_to_g2_points.to_owned(),
            SIZE_OF_G2_AFFINE_COMPRESSED,
            points_to_load,
            false,
        )?;
        let g2_trailing = Self::read_g2_point_section(
            path_to_g2_points,
            order as u64 - points_to_load as u64,
            points_to_load as usize,
        )?;

        Ok(Self {
            g1: g1_points,
            g2: g2_points,
            g2_trailing,
            order,
        })
    }

    /// Deterministic setup generated from a fixed in-code secret. Only
    /// meant for tests and benchmarks: the toxic waste is public.
    pub fn insecure_setup(order: u32) -> Result<Self, KzgError> {
        let tau = helpers::hash_to_field_element(b"insecure test setup, do not use");
        let tau_powers = helpers::compute_powers(&tau, order as usize);

        let g1_gen = G1Projective::from(G1Affine::generator());
        let g2_gen = G2Projective::from(G2Affine::generator());

        let g1: Vec<G1Affine> = tau_powers
            .iter()
            .map(|t| (g1_gen * t).into_affine())
            .collect();
        let g2: Vec<G2Affine> = tau_powers
            .iter()
            .map(|t| (g2_gen * t).into_affine())
            .collect();
        // With every power materialized the trailing window is the whole
        // table.
        let g2_trailing = g2.clone();

        Ok(Self {
            g1,
            g2,
            g2_trailing,
            order,
        })
    }

    pub fn process_chunks<T>(receiver: Receiver<(Vec<u8>, usize, bool)>) -> Vec<(T, usize)>
    where
        T: ReadPointFromBytes,
    {
        receiver
            .iter()
            .map(|(chunk, position, is_native)| {
                let point: T = if is_native {
                    T::read_point_from_bytes_native_compressed_be(&chunk)
                        .expect("Failed to read point from bytes")
                } else {
                    T::read_point_from_bytes_be(&chunk).expect("Failed to read point from bytes")
                };
                (point, position)
            })
            .collect()
    }

    /// Reads points in parallel from a file: one reader thread fans
    /// fixed-size byte chunks out to a worker per cpu, workers parse them
    /// into curve points, and the results are sorted back into file order.
    ///
    /// # Arguments
    ///
    /// * `file_path` - The path to the file containing the points.
    /// * `point_size` - Size of one serialized point in bytes.
    /// * `points_to_load` - The number of points to load.
    /// * `is_native` - Whether the points are in native Arkworks format.
    fn parallel_read_points<T: ReadPointFromBytes>(
        file_path: String,
        point_size: usize,
        points_to_load: u32,
        is_native: bool,
    ) -> Result<Vec<T>, KzgError> {
        let (sender, receiver) = bounded::<(Vec<u8>, usize, bool)>(1000);

        // Spawn the reader thread
        let reader_handle = std::thread::spawn(
            move || -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
                Self::read_file_chunks(&file_path, sender, point_size, points_to_load, is_native)
                    .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
            },
        );

        let num_workers = num_cpus::get();

        let workers: Vec<_> = (0..num_workers)
            .map(|_| {
                let receiver = receiver.clone();
                std::thread::spawn(move || Self::process_chunks::<T>(receiver))
            })
            .collect();

        // Wait for the reader thread to finish
        match reader_handle.join() {
            Ok(result) => match result {
                Ok(_) => {},
                Err(e) => return Err(KzgError::GenericError(e.to_string())),
            },
            Err(_) => {
                return Err(KzgError::GenericError(
                    "Reader thread panicked.".to_string(),
                ))
            },
        }

        // Collect and sort the results
        let mut all_points = Vec::new();
        for worker in workers {
            let points = worker
                .join()
                .map_err(|_| KzgError::GenericError("Worker thread panicked.".to_string()))?;
            all_points.extend(points);
        }

        // Sort by original position to maintain order
        all_points.sort_by_key(|&(_, position)| position);

        if all_points.len() != points_to_load as usize {
            return Err(KzgError::GenericError(format!(
                "Expected {} points, but got {}.",
                points_to_load,
                all_points.len()
            )));
        }

        Ok(all_points.into_iter().map(|(point, _)| point).collect())
    }

    /// Reads file chunks and sends them through a channel. The position is
    /// used to reorder the points after processing them.
    fn read_file_chunks(
        file_path: &str,
        sender: crossbeam_channel::Sender<(Vec<u8>, usize, bool)>,
        point_size: usize,
        num_points: u32,
        is_native: bool,
    ) -> io::Result<()> {
        let file = File::open(file_path)?;
        let mut reader = BufReader::new(file);
        let mut position = 0;
        let mut buffer = vec![0u8; point_size];

        let mut i = 0;
        while let Ok(bytes_read) = reader.read(&mut buffer) {
            if bytes_read == 0 {
                break;
            }
            sender
                .send((buffer[..bytes_read].to_vec(), position, is_native))
                .map_err(|e| io::Error::new(io::ErrorKind::BrokenPipe, e.to_string()))?;
            position += bytes_read;
            buffer.resize(point_size, 0); // Ensure the buffer is always the correct size
            i += 1;
            if num_points == i {
                break;
            }
        }
        Ok(())
    }

    /// Reads a contiguous section of G2 points from the ceremony file,
    /// starting at point index `start_point`. Used for the trailing window
    /// backing length proofs.
    pub fn read_g2_point_section(
        file_path: &str,
        start_point: u64,
        num_points: usize,
    ) -> Result<Vec<G2Affine>, KzgError> {
        let file = File::open(file_path).map_err(|e| KzgError::GenericError(e.to_string()))?;
        let mut reader = BufReader::new(file);
        reader
            .seek(SeekFrom::Start(
                start_point * SIZE_OF_G2_AFFINE_COMPRESSED as u64,
            ))
            .map_err(|e| KzgError::GenericError(e.to_string()))?;

        let mut points = Vec::with_capacity(num_points);
        let mut buffer = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
        for _ in 0..num_points {
            reader
                .read_exact(&mut buffer)
                .map_err(|e| KzgError::GenericError(e.to_string()))?;
            let point = G2Affine::read_point_from_bytes_be(&buffer)
                .map_err(|e| KzgError::SerializationError(e.to_string()))?;
            points.push(point);
        }
        Ok(points)
    }

    /// G1 point at index `order - length`, paired against length
    /// commitments when verifying that a blob has at most `length`
    /// coefficients. Exposed here so test setups can hand it to verifiers
    /// without shipping the whole G1 table.
    pub fn length_proof_challenge(&self, length: usize) -> Result<G1Affine, KzgError> {
        let index = self.order as usize - length;
        self.g1
            .get(index)
            .copied()
            .ok_or_else(|| KzgError::GenericError("SRS does not cover length challenge".to_string()))
    }
}

/// Serializes points to a file in gnark compressed format so tests can
/// exercise the file loaders without multi-gigabyte ceremony data.
pub fn write_points_to_file<W: std::io::Write>(
    writer: &mut W,
    points: &[G1Affine],
) -> Result<(), KzgError> {
    for point in points {
        let mut bytes = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
        if point.infinity {
            bytes[0] = 0b01 << 6;
        } else {
            bytes.copy_from_slice(&point.x.into_bigint().to_bytes_be());
            let mask = if helpers::lexicographically_largest(&point.y) {
                0b11 << 6
            } else {
                0b10 << 6
            };
            bytes[0] |= mask;
        }
        writer
            .write_all(&bytes)
            .map_err(|e| KzgError::GenericError(e.to_string()))?;
    }
    Ok(())
}

/// G2 counterpart of [write_points_to_file].
pub fn write_g2_points_to_file<W: std::io::Write>(
    writer: &mut W,
    points: &[G2Affine],
) -> Result<(), KzgError> {
    use ark_std::Zero;

    for point in points {
        let mut bytes = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
        if point.infinity {
            bytes[0] = 0b01 << 6;
        } else {
            bytes[..32].copy_from_slice(&point.x.c1.into_bigint().to_bytes_be());
            bytes[32..].copy_from_slice(&point.x.c0.into_bigint().to_bytes_be());
            let largest = if point.y.c1.is_zero() {
                helpers::lexicographically_largest(&point.y.c0)
            } else {
                helpers::lexicographically_largest(&point.y.c1)
            };
            let mask = if largest { 0b11 << 6 } else { 0b10 << 6 };
            bytes[0] |= mask;
        }
        writer
            .write_all(&bytes)
            .map_err(|e| KzgError::GenericError(e.to_string()))?;
    }
    Ok(())
}
