#[cfg(test)]
mod tests {
    use basalt_compress::block::{compress_block, decompress_block, stored_budget};
    use basalt_compress::constants::{ids, COMPRESSION_VALUES};
    use basalt_compress::types::{Compressed, Compression, DecompressError};
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Concrete identifiers exercised one by one.
    const CODECS: [Compression; 8] = [
        Compression::Snappy,
        Compression::Deflate1,
        Compression::Deflate6,
        Compression::Deflate9,
        Compression::Rle,
        Compression::Lz4,
        Compression::Lz4hc1,
        Compression::Lz4hc9,
    ];

    fn text_block(len: usize) -> Vec<u8> {
        b"the quick brown fox jumps over the lazy dog. "
            .iter()
            .copied()
            .cycle()
            .take(len)
            .collect()
    }

    /// Half repeated text, half zeros: every codec in the table beats the
    /// budget on this, the zero-run kernel included.
    fn sparse_block(len: usize) -> Vec<u8> {
        let mut block = vec![0u8; len];
        let text = text_block(len / 2);
        block[..text.len()].copy_from_slice(&text);
        block
    }

    // --- The zero scan ---

    #[test]
    fn zero_blocks_short_circuit_every_identifier() {
        for raw in 0..COMPRESSION_VALUES as u8 {
            let c = Compression::try_from(raw).unwrap();
            for len in [0usize, 1, 7, 8, 9, 128, 4096] {
                let src = vec![0u8; len];
                let mut dst = vec![0u8; len];
                assert_eq!(
                    compress_block(c, &src, &mut dst),
                    Compressed::AllZero,
                    "{} at len {}",
                    c,
                    len
                );
            }
        }
    }

    #[test]
    fn one_stray_bit_defeats_the_scan() {
        let mut src = vec![0u8; 4096];
        src[4095] = 0x01;
        let mut dst = vec![0u8; 4096];
        assert_ne!(compress_block(Compression::Lz4, &src, &mut dst), Compressed::AllZero);
    }

    // --- Routing ---

    #[test]
    fn empty_setting_stores_data_verbatim() {
        let src = text_block(512);
        let mut dst = vec![0u8; 512];
        assert_eq!(compress_block(Compression::Empty, &src, &mut dst), Compressed::Uncompressed);
    }

    #[test]
    #[should_panic(expected = "not a concrete identifier")]
    fn compressing_with_off_panics() {
        let mut dst = vec![0u8; 64];
        compress_block(Compression::Off, &[1u8; 64], &mut dst);
    }

    #[test]
    #[should_panic(expected = "not a concrete identifier")]
    fn compressing_with_inherit_panics() {
        let mut dst = vec![0u8; 64];
        compress_block(Compression::Inherit, &[1u8; 64], &mut dst);
    }

    #[test]
    #[should_panic(expected = "budget")]
    fn undersized_destination_panics() {
        let mut dst = vec![0u8; 10];
        compress_block(Compression::Lz4, &[1u8; 4096], &mut dst);
    }

    // --- Round trips ---

    #[test]
    fn every_codec_roundtrips_a_sparse_block() {
        let src = sparse_block(4096);
        for c in CODECS {
            let mut dst = vec![0u8; src.len()];
            let n = match compress_block(c, &src, &mut dst) {
                Compressed::Stored(n) => n,
                other => panic!("{} did not store a sparse block: {:?}", c, other),
            };
            assert!(n > 0 && n <= stored_budget(src.len()), "{} stored {}", c, n);

            let mut out = vec![0xaau8; src.len()];
            let got = decompress_block(c as u8, &dst[..n], &mut out).unwrap();
            assert_eq!(got, src.len(), "{}", c);
            assert_eq!(out, src, "{}", c);
        }
    }

    #[test]
    fn text_roundtrips_everywhere_but_the_zero_kernel() {
        let src = text_block(4096);
        for c in CODECS {
            let mut dst = vec![0u8; src.len()];
            match compress_block(c, &src, &mut dst) {
                Compressed::Stored(n) => {
                    assert_ne!(c, Compression::Rle, "the zero kernel cannot shrink text");
                    let mut out = vec![0u8; src.len()];
                    assert_eq!(decompress_block(c as u8, &dst[..n], &mut out).unwrap(), src.len());
                    assert_eq!(out, src, "{}", c);
                }
                Compressed::Uncompressed => {
                    assert_eq!(c, Compression::Rle, "{} should compress text", c);
                }
                Compressed::AllZero => panic!("text scanned as zero"),
            }
        }
    }

    #[test]
    fn random_data_is_stored_verbatim() {
        let mut rng = StdRng::seed_from_u64(0xb45a17);
        let mut src = vec![0u8; 4096];
        rng.fill_bytes(&mut src);
        for c in CODECS {
            let mut dst = vec![0u8; src.len()];
            assert_eq!(compress_block(c, &src, &mut dst), Compressed::Uncompressed, "{}", c);
        }
    }

    // --- The gain budget ---

    #[test]
    fn codecs_never_see_past_the_budget() {
        // 128 logical bytes leave a 112-byte budget
        let src = text_block(128);
        assert_eq!(stored_budget(src.len()), 112);
        for c in [Compression::Lz4, Compression::Deflate6, Compression::Snappy] {
            let mut dst = vec![0xeeu8; 128];
            match compress_block(c, &src, &mut dst) {
                Compressed::Stored(n) => assert!(n <= 112, "{} stored {}", c, n),
                other => panic!("{} did not store repeated text: {:?}", c, other),
            }
            assert!(dst[112..].iter().all(|&b| b == 0xee), "{} wrote past the budget", c);
        }
    }

    // --- Decompression validation ---

    #[test]
    fn decompress_rejects_every_invalid_identifier() {
        let stored = [0u8; 16];
        let mut out = vec![0u8; 64];
        let logical = [ids::INHERIT, ids::ON, ids::OFF, ids::EMPTY];
        for raw in logical.into_iter().chain(COMPRESSION_VALUES as u8..=u8::MAX) {
            match decompress_block(raw, &stored, &mut out) {
                Err(DecompressError::InvalidIdentifier { raw: got }) => assert_eq!(got, raw),
                other => panic!("raw {} got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn corrupt_streams_surface_codec_errors() {
        let garbage = [0xffu8; 64];
        let mut out = vec![0u8; 4096];
        for c in CODECS {
            match decompress_block(c as u8, &garbage, &mut out) {
                Err(DecompressError::Codec { .. }) => {}
                other => panic!("{} accepted garbage: {:?}", c, other),
            }
        }
    }

    #[test]
    fn truncated_streams_fail() {
        let src = sparse_block(4096);
        for c in [Compression::Deflate6, Compression::Lz4, Compression::Rle] {
            let mut dst = vec![0u8; src.len()];
            let n = match compress_block(c, &src, &mut dst) {
                Compressed::Stored(n) => n,
                other => panic!("{}: {:?}", c, other),
            };
            let mut out = vec![0u8; src.len()];
            assert!(
                decompress_block(c as u8, &dst[..n / 2], &mut out).is_err(),
                "{} decoded a truncated stream",
                c
            );
        }
    }

    #[test]
    fn wrong_codec_never_reproduces_the_block() {
        let src = sparse_block(4096);
        let mut dst = vec![0u8; src.len()];
        let n = match compress_block(Compression::Deflate6, &src, &mut dst) {
            Compressed::Stored(n) => n,
            other => panic!("{:?}", other),
        };
        let mut out = vec![0u8; src.len()];
        if let Ok(len) = decompress_block(ids::LZ4, &dst[..n], &mut out) {
            assert!(
                len != src.len() || out != src,
                "lz4 decoded a zlib stream into the original block"
            );
        }
    }

    #[test]
    fn reported_length_comes_from_the_codec() {
        let src = sparse_block(4096);
        for c in [Compression::Snappy, Compression::Deflate6, Compression::Lz4] {
            let mut dst = vec![0u8; src.len()];
            let n = match compress_block(c, &src, &mut dst) {
                Compressed::Stored(n) => n,
                other => panic!("{}: {:?}", c, other),
            };
            // an oversized destination changes nothing: the codec's own
            // count comes back, no reconciliation happens here
            let mut out = vec![0u8; 8192];
            let got = decompress_block(c as u8, &dst[..n], &mut out).unwrap();
            assert_eq!(got, src.len(), "{}", c);
            assert_eq!(&out[..got], &src[..], "{}", c);
        }
    }
}
