//! Integration tests for the Huffman decode tree.

use oxijpeg_core::{BuildError, DecodeError, MsbBitReader, MsbBitWriter};
use oxijpeg_huffman::{CodeEntry, HuffmanDecoder, HuffmanTable, MAX_CODE_LENGTH};

/// Canonical codes as generated by T.81 Annex C.2.
fn annex_c_codes(bits: &[u8]) -> Vec<(u16, u8)> {
    let mut codes = Vec::new();
    let mut code = 0u32;
    for (i, &count) in bits.iter().enumerate() {
        for _ in 0..count {
            codes.push((code as u16, (i + 1) as u8));
            code += 1;
        }
        code <<= 1;
    }
    codes
}

/// Deterministic realizable histograms with at most 256 distinct symbols.
fn random_tables(count: usize) -> Vec<HuffmanTable> {
    let mut seed: u64 = 0x0123_4567_89AB_CDEF;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        (seed >> 33) as usize
    };

    let mut tables = Vec::with_capacity(count);
    for _ in 0..count {
        let depth = 1 + next() % MAX_CODE_LENGTH;
        let mut bits = vec![0u8; depth];
        let mut free = 1usize;
        let mut total = 0usize;
        for slot in bits.iter_mut() {
            free *= 2;
            let limit = free.min(256 - total).min(u8::MAX as usize);
            let n = if limit == 0 { 0 } else { next() % (limit + 1) };
            *slot = n as u8;
            free -= n;
            total += n;
            if free == 0 {
                break;
            }
        }
        let start = next() % 256;
        let values = (0..total).map(|i| ((start + i) % 256) as u8).collect::<Vec<_>>();
        tables.push(HuffmanTable::new(bits, values));
    }
    tables
}

fn feed(decoder: &mut HuffmanDecoder, entry: &CodeEntry) -> Vec<Option<u8>> {
    entry
        .bits()
        .map(|bit| decoder.move_bit(bit).unwrap())
        .collect()
}

#[test]
fn test_two_bit_scenario() {
    let mut decoder = HuffmanDecoder::new();
    decoder.build(&[0, 2, 0, 0], &[10, 20]).unwrap();

    assert_eq!(decoder.move_bit(false), Ok(None));
    assert_eq!(decoder.move_bit(false), Ok(Some(10)));
    assert_eq!(decoder.move_bit(false), Ok(None));
    assert_eq!(decoder.move_bit(true), Ok(Some(20)));

    // "1" leads nowhere.
    assert_eq!(
        decoder.move_bit(true),
        Err(DecodeError::InvalidCode { bits: 1 })
    );
}

#[test]
fn test_over_subscribed_length_one() {
    let mut decoder = HuffmanDecoder::new();
    assert_eq!(
        decoder.build(&[2, 1, 0, 0], &[1, 2, 3]),
        Err(BuildError::Infeasible { length: 2 })
    );
    assert_eq!(
        decoder.build(&[3], &[1, 2, 3]),
        Err(BuildError::Infeasible { length: 1 })
    );
    assert_eq!(decoder.node_count(), 1);
}

#[test]
fn test_too_many_buckets() {
    let mut decoder = HuffmanDecoder::new();
    let mut lengths = vec![0u8; 17];
    lengths[0] = 1;
    for values in [vec![], vec![1], vec![0; 300]] {
        assert_eq!(
            decoder.build(&lengths, &values),
            Err(BuildError::TableTooLarge {
                buckets: 17,
                max: 16,
            })
        );
        assert_eq!(decoder.node_count(), 1);
    }
}

#[test]
fn test_too_few_values_assigns_nothing_past_shortfall() {
    let mut decoder = HuffmanDecoder::new();
    assert_eq!(
        decoder.build(&[0, 1, 5], &[1, 2, 3]),
        Err(BuildError::TooFewValues {
            needed: 4,
            available: 3,
        })
    );
    assert_eq!(decoder.leaf_count(), 0);
    assert!(decoder.code_table().is_empty());
    assert_eq!(
        decoder.move_bit(false),
        Err(DecodeError::InvalidCode { bits: 1 })
    );
}

#[test]
fn test_failed_build_discards_previous_tree() {
    let mut decoder = HuffmanDecoder::from_table(&HuffmanTable::dc_luminance()).unwrap();
    assert!(decoder.build(&[3], &[1, 2, 3]).is_err());
    assert_eq!(decoder.leaf_count(), 0);
    assert!(decoder.is_at_root());
}

#[test]
fn test_standard_tables_match_annex_c() {
    for table in [
        HuffmanTable::dc_luminance(),
        HuffmanTable::dc_chrominance(),
        HuffmanTable::ac_luminance(),
        HuffmanTable::ac_chrominance(),
    ] {
        let decoder = HuffmanDecoder::from_table(&table).unwrap();
        let expected = annex_c_codes(&table.bits);
        let actual = decoder
            .code_table()
            .iter()
            .map(|e| (e.code, e.length))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected);

        let symbols = decoder
            .code_table()
            .iter()
            .map(|e| e.symbol)
            .collect::<Vec<_>>();
        assert_eq!(symbols, table.values);
    }
}

#[test]
fn test_dc_luminance_codes() {
    let decoder = HuffmanDecoder::from_table(&HuffmanTable::dc_luminance()).unwrap();
    let codes = decoder
        .code_table()
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        codes,
        vec![
            "00", "010", "011", "100", "101", "110", "1110", "11110", "111110", "1111110",
            "11111110", "111111110",
        ]
    );
}

#[test]
fn test_every_value_reachable_once() {
    for table in random_tables(200) {
        let mut decoder = HuffmanDecoder::from_table(&table).unwrap();
        let entries = decoder.code_table();
        assert_eq!(entries.len(), table.values.len());
        assert_eq!(
            entries.iter().map(|e| e.symbol).collect::<Vec<_>>(),
            table.values
        );

        for entry in &entries {
            let steps = feed(&mut decoder, entry);
            let (last, prefix) = steps.split_last().unwrap();
            assert_eq!(*last, Some(entry.symbol));
            assert!(prefix.iter().all(Option::is_none));
            assert!(decoder.is_at_root());
        }
    }
}

#[test]
fn test_random_tables_are_canonical() {
    for table in random_tables(200) {
        let decoder = HuffmanDecoder::from_table(&table).unwrap();
        let actual = decoder
            .code_table()
            .iter()
            .map(|e| (e.code, e.length))
            .collect::<Vec<_>>();
        assert_eq!(actual, annex_c_codes(&table.bits));
    }
}

#[test]
fn test_rebuild_is_idempotent() {
    let table = HuffmanTable::ac_chrominance();

    let once = HuffmanDecoder::from_table(&table).unwrap();

    let mut twice = HuffmanDecoder::from_table(&HuffmanTable::dc_chrominance()).unwrap();
    twice.move_bit(true).unwrap();
    twice.build(&table.bits, &table.values).unwrap();
    twice.build(&table.bits, &table.values).unwrap();

    assert_eq!(once.code_table(), twice.code_table());
    assert_eq!(once.node_count(), twice.node_count());
}

#[test]
fn test_no_silent_recovery() {
    let mut decoder = HuffmanDecoder::new();
    decoder.build(&[1, 1], &[5, 6]).unwrap();

    assert_eq!(
        decoder.decode_bits([false, true, true]),
        Err(DecodeError::InvalidCode { bits: 2 })
    );
    // A valid code is still rejected until the caller resets.
    assert_eq!(decoder.move_bit(false), Err(DecodeError::Faulted));
    assert_eq!(decoder.decode_bits([false]), Err(DecodeError::Faulted));

    decoder.reset();
    assert_eq!(decoder.decode_bits([false, true, false]), Ok(vec![5, 6]));
}

#[test]
fn test_decode_packed_stream() {
    let table = HuffmanTable::ac_luminance();
    let mut decoder = HuffmanDecoder::from_table(&table).unwrap();
    let entries = decoder.code_table();

    let message = [0x00u8, 0xf0, 0x01, 0xfa, 0x11, 0x00, 0xa1];
    let mut writer = MsbBitWriter::new();
    let mut total_bits = 0;
    for symbol in message {
        let entry = entries.iter().find(|e| e.symbol == symbol).unwrap();
        for bit in entry.bits() {
            writer.write_bit(bit);
        }
        total_bits += entry.length as usize;
    }
    let data = writer.into_vec();

    let symbols = decoder
        .decode_bits(MsbBitReader::new(&data).take(total_bits))
        .unwrap();
    assert_eq!(symbols, message);
    assert!(decoder.is_at_root());
}

#[test]
fn test_empty_table() {
    let mut decoder = HuffmanDecoder::new();
    decoder.build(&[], &[]).unwrap();
    assert_eq!(decoder.leaf_count(), 0);
    assert_eq!(
        decoder.move_bit(true),
        Err(DecodeError::InvalidCode { bits: 1 })
    );
}

#[test]
fn test_drop_after_build() {
    // Arena nodes carry index parent links only; dropping is enough.
    for table in random_tables(20) {
        let decoder = HuffmanDecoder::from_table(&table).unwrap();
        assert!(decoder.node_count() >= decoder.leaf_count());
        drop(decoder);
    }
}
