//! Field-level building blocks shared by the prover and verifier crates.
//!
//! The main data pipeline goes:
//! > user data -> [blob::Blob] ->
//! > [polynomial::PolynomialEvalForm]/[polynomial::PolynomialCoeffForm] ->
//! > erasure-coded [frame::Frame]s + KZG commitment / proofs
//!
//! - User Data: bytes array, meaningful to users
//! - Blob: bn254 field elements array, obtained from user data by inserting
//!   zeroes every 31 bytes so that every 32 bytes is an element of bn254
//! - Polynomial: the blob interpreted in coefficient or evaluation form,
//!   zero padded to a power of two
//! - Frame: coefficients of the blob polynomial restricted to one coset of
//!   the evaluation domain, with its opening proof
//!
//! Everything here is arithmetic and layout: the FFT over Fr and G1
//! ([fft::FFTDomain]), Toeplitz products ([toeplitz::ToeplitzMatrix]), zero
//! polynomial construction ([zero_poly]) and erasure recovery ([recovery]).
//! The SRS-dependent operations live in the prover and verifier crates.

pub mod blob;
pub mod consts;
pub mod errors;
pub mod fft;
pub mod frame;
pub mod helpers;
pub mod params;
pub mod polynomial;
pub mod recovery;
pub mod toeplitz;
pub mod traits;
pub mod zero_poly;
