//! Proving side of the data availability pipeline.
//!
//! The main entry point is [encoder::Prover]: it owns the SRS, commits to
//! blobs through [kzg::KZG], and erasure codes them into frames with one
//! amortized opening proof per chunk via [multiproof::CpuBackend].
//!
//! - [srs::SRS] loads the ceremony points, including the trailing G2 window
//!   used by blob length proofs.
//! - [srs_table::SrsTable] precomputes (and caches on disk) the transformed
//!   G1 tables the multi-proof MSMs run against.
//! - [encoder::ParametrizedProver] binds everything to one encoding shape
//!   and does the actual frame encoding and decoding.

pub mod encoder;
pub mod kzg;
pub mod multiproof;
pub mod srs;
pub mod srs_table;
