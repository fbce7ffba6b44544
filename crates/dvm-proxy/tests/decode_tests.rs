//! Integration tests for argument decoding over both cursor conventions

mod common;

use common::{Packed, World};
use dvm_proxy::{
    ArgValue, ArgumentDecoder, BridgeError, ByteCursor, SlotCursor, TypeCode, ValueType,
};

/// Every signature over `alphabet` with length `1..=max_len`
fn signatures(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all: Vec<String> = Vec::new();
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for &c in alphabet {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

#[test]
fn test_slot_cursor_narrow_kinds_advance_one_slot_each() {
    let world = World::new();
    let slots = vec![u64::from(world.a_string.reference); 4];
    let cursor = SlotCursor::new(&slots, &world.objects);
    let decoder = ArgumentDecoder::default();

    for signature in signatures(&['B', 'C', 'I', 'S', 'Z', 'L'], 4) {
        let decoded = decoder.decode(&signature, &cursor).unwrap();
        let count = signature.len();
        assert_eq!(decoded.len(), count, "signature {}", signature);
        assert_eq!(decoded.types.len(), count, "signature {}", signature);
        assert_eq!(decoded.end, count, "signature {}", signature);
    }
}

#[test]
fn test_slot_cursor_rejects_wide_and_float_kinds() {
    let world = World::new();
    let slots = [0u64; 8];
    let cursor = SlotCursor::new(&slots, &world.objects);
    let decoder = ArgumentDecoder::default();

    for signature in signatures(&['I', 'F', 'D', 'J'], 3) {
        let Some(first_bad) = signature.chars().find(|c| matches!(c, 'F' | 'D' | 'J')) else {
            continue;
        };
        let err = decoder.decode(&signature, &cursor).unwrap_err();
        assert_eq!(
            err,
            BridgeError::UnsupportedArgumentKind {
                kind: first_bad,
                cursor: "slot",
            },
            "signature {}",
            signature
        );
    }
}

#[test]
fn test_byte_cursor_advances_by_natural_width() {
    let world = World::new();
    // Zeroed buffer: every reference decodes as null, every number as 0.
    let bytes = [0u8; 32];
    let cursor = ByteCursor::new(&bytes, &world.objects);
    let decoder = ArgumentDecoder::default();

    let alphabet: Vec<char> = TypeCode::ALL.iter().map(|c| c.as_char()).collect();
    for signature in signatures(&alphabet, 3) {
        let expected: usize = signature
            .chars()
            .map(|c| if matches!(c, 'D' | 'J') { 8 } else { 4 })
            .sum();
        let decoded = decoder.decode(&signature, &cursor).unwrap();
        assert_eq!(decoded.end, expected, "signature {}", signature);
        assert_eq!(decoded.len(), signature.len(), "signature {}", signature);
    }
}

#[test]
fn test_int_null_bool_round_trip() {
    let world = World::new();
    let bytes = Packed::default().int(7).reference(None).int(1).0;
    let cursor = ByteCursor::new(&bytes, &world.objects);

    let decoded = ArgumentDecoder::default().decode("ILZ", &cursor).unwrap();
    assert_eq!(
        decoded.types,
        vec![Some(ValueType::Int), None, Some(ValueType::Boolean)]
    );
    assert_eq!(
        decoded.values,
        vec![ArgValue::Int(7), ArgValue::Null, ArgValue::Boolean(true)]
    );
    assert_eq!(decoded.end, 12);
}

#[test]
fn test_byte_cursor_all_kinds() {
    let world = World::new();
    let bytes = Packed::default()
        .int(0x1_80)
        .int(0x263A)
        .int(-5)
        .int(0x1_0001)
        .int(0)
        .float(2.5)
        .reference(Some(world.a_uuid))
        .double(-1.25)
        .long(i64::MIN)
        .0;
    let cursor = ByteCursor::new(&bytes, &world.objects);

    let decoded = ArgumentDecoder::default()
        .decode("BCISZFLDJ", &cursor)
        .unwrap();
    assert_eq!(
        decoded.values,
        vec![
            ArgValue::Byte(-128),
            ArgValue::Char(0x263A),
            ArgValue::Int(-5),
            ArgValue::Short(1),
            ArgValue::Boolean(false),
            ArgValue::Float(2.5),
            ArgValue::Object(world.a_uuid),
            ArgValue::Double(-1.25),
            ArgValue::Long(i64::MIN),
        ]
    );
    assert_eq!(decoded.types[6], Some(ValueType::Object(world.uuid)));
    assert_eq!(decoded.end, bytes.len());
}

#[test]
fn test_dangling_reference_decodes_as_null() {
    let mut world = World::new();
    let gone = world.objects.insert(world.string).unwrap();
    world.objects.remove(gone.reference);

    let slots = [u64::from(gone.reference)];
    let cursor = SlotCursor::new(&slots, &world.objects);
    let decoded = ArgumentDecoder::default().decode("L", &cursor).unwrap();
    assert_eq!(decoded.types, vec![None]);
    assert_eq!(decoded.values, vec![ArgValue::Null]);
}

#[test]
fn test_truncated_buffer_is_not_silently_shortened() {
    let world = World::new();
    let bytes = Packed::default().int(1).int(2).0;
    let cursor = ByteCursor::new(&bytes, &world.objects);

    let err = ArgumentDecoder::default()
        .decode("IJ", &cursor)
        .unwrap_err();
    assert_eq!(
        err,
        BridgeError::CursorExhausted {
            position: 4,
            needed: 8,
            available: 4,
        }
    );
}
