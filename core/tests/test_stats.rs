#[cfg(test)]
mod stats_tests {
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use basalt_compress::block::compress_block;
    use basalt_compress::stats::CompressionStats;
    use basalt_compress::types::{Compressed, Compression};

    /// Push one block through the gateway and record the outcome, the way a
    /// writer context would.
    fn record_block(stats: &mut CompressionStats, id: Compression, src: &[u8]) -> Compressed {
        let mut dst = vec![0u8; src.len()];
        let outcome = compress_block(id, src, &mut dst);
        stats.record(src.len(), outcome);
        outcome
    }

    #[test]
    fn a_mixed_workload_fills_every_bucket() {
        let mut stats = CompressionStats::default();

        let zeros = vec![0u8; 4096];
        let text: Vec<u8> = b"all work and no play makes jack a dull boy. "
            .iter()
            .copied()
            .cycle()
            .take(4096)
            .collect();
        let mut noise = vec![0u8; 4096];
        StdRng::seed_from_u64(0x57a75).fill_bytes(&mut noise);

        assert_eq!(record_block(&mut stats, Compression::Lz4, &zeros), Compressed::AllZero);
        let stored = match record_block(&mut stats, Compression::Lz4, &text) {
            Compressed::Stored(n) => n,
            other => panic!("text block did not store: {:?}", other),
        };
        assert_eq!(record_block(&mut stats, Compression::Lz4, &noise), Compressed::Uncompressed);

        assert_eq!(stats.blocks(), 3);
        assert_eq!(stats.blocks_zero, 1);
        assert_eq!(stats.blocks_stored, 1);
        assert_eq!(stats.blocks_verbatim, 1);
        assert_eq!(stats.bytes_logical, 3 * 4096);
        assert_eq!(stats.bytes_stored, stored as u64 + 4096);
        assert!(stats.ratio() < 1.0);
    }

    #[test]
    fn snapshots_export_as_json() {
        let mut stats = CompressionStats::default();
        stats.record(4096, Compressed::AllZero);
        stats.record(4096, Compressed::Stored(1024));

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"blocks_zero\":1"), "{}", json);
        assert!(json.contains("\"blocks_stored\":1"), "{}", json);
        assert!(json.contains("\"bytes_logical\":8192"), "{}", json);

        let back: CompressionStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
