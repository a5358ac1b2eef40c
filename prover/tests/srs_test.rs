#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use rust_fk20_bn254_prover::srs::{write_g2_points_to_file, write_points_to_file, SRS};
    use rust_fk20_bn254_prover::srs_table::{table_file_path, SrsTable};
    use std::fs::File;
    use std::io::BufWriter;
    use std::path::Path;

    lazy_static! {
        static ref SRS_INSTANCE: SRS = SRS::insecure_setup(128).unwrap();
    }

    fn write_srs_files(dir: &Path, srs: &SRS) -> (String, String) {
        let g1_path = dir.join("g1.point");
        let g2_path = dir.join("g2.point");
        let mut g1_writer = BufWriter::new(File::create(&g1_path).unwrap());
        write_points_to_file(&mut g1_writer, &srs.g1).unwrap();
        drop(g1_writer);
        let mut g2_writer = BufWriter::new(File::create(&g2_path).unwrap());
        write_g2_points_to_file(&mut g2_writer, &srs.g2).unwrap();
        drop(g2_writer);
        (
            g1_path.to_str().unwrap().to_owned(),
            g2_path.to_str().unwrap().to_owned(),
        )
    }

    #[test]
    fn test_srs_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let (g1_path, g2_path) = write_srs_files(dir.path(), &SRS_INSTANCE);

        let loaded = SRS::new(&g1_path, &g2_path, 128, 128).unwrap();
        assert_eq!(loaded.g1, SRS_INSTANCE.g1);
        assert_eq!(loaded.g2, SRS_INSTANCE.g2);
        // loading every point makes the trailing window the whole table
        assert_eq!(loaded.g2_trailing, SRS_INSTANCE.g2);
    }

    #[test]
    fn test_srs_partial_load_reads_trailing_window() {
        let dir = tempfile::tempdir().unwrap();
        let (g1_path, g2_path) = write_srs_files(dir.path(), &SRS_INSTANCE);

        let loaded = SRS::new(&g1_path, &g2_path, 128, 32).unwrap();
        assert_eq!(loaded.g1, SRS_INSTANCE.g1[..32]);
        assert_eq!(loaded.g2, SRS_INSTANCE.g2[..32]);
        assert_eq!(loaded.g2_trailing, SRS_INSTANCE.g2[96..]);
    }

    #[test]
    fn test_srs_load_more_than_order_fails() {
        let result = SRS::new("does/not/matter", "does/not/matter", 128, 129);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_g2_point_section() {
        let dir = tempfile::tempdir().unwrap();
        let (_, g2_path) = write_srs_files(dir.path(), &SRS_INSTANCE);

        let section = SRS::read_g2_point_section(&g2_path, 100, 28).unwrap();
        assert_eq!(section, SRS_INSTANCE.g2[100..]);
    }

    #[test]
    fn test_length_proof_challenge_indexing() {
        let challenge = SRS_INSTANCE.length_proof_challenge(64).unwrap();
        assert_eq!(challenge, SRS_INSTANCE.g1[64]);
        assert!(SRS_INSTANCE.length_proof_challenge(129).is_err());
    }

    #[test]
    fn test_sub_tables_shape() {
        let table = SrsTable::new(None, &SRS_INSTANCE.g1);
        let sub_tables = table.get_sub_tables(4, 16).unwrap();
        assert_eq!(sub_tables.len(), 8, "2 * num_chunks rows");
        for row in &sub_tables {
            assert_eq!(row.len(), 16, "chunk_length points per row");
        }
    }

    #[test]
    fn test_sub_tables_capacity_check() {
        let table = SrsTable::new(None, &SRS_INSTANCE.g1[..32]);
        assert!(table.get_sub_tables(4, 16).is_err());
    }

    #[test]
    fn test_sub_tables_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let uncached = SrsTable::new(None, &SRS_INSTANCE.g1)
            .get_sub_tables(4, 16)
            .unwrap();

        // first call computes and stores, second serves from disk
        let caching = SrsTable::new(Some(dir.path()), &SRS_INSTANCE.g1);
        let computed = caching.get_sub_tables(4, 16).unwrap();
        assert!(table_file_path(dir.path(), 4, 16).exists());
        assert!(dir.path().join("dimE4.coset16").exists());
        let cached = caching.get_sub_tables(4, 16).unwrap();

        assert_eq!(computed, uncached);
        assert_eq!(cached, computed, "cache must reproduce the computed table");
    }
}
