use keyed_cipher::stream::pipe;
use keyed_cipher::{CipherError, CipherTable};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn run(table: impl keyed_cipher::Substitution, input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    pipe(input, &mut out, table).expect("in-memory pipe");
    out
}

#[test]
fn alphabet_through_key_table() {
    let table = CipherTable::build("KEY").unwrap();
    let encoded = run(&table, ALPHABET);
    assert_eq!(encoded, table.as_bytes());
    assert_eq!(encoded, b"WXKEYZABCDFGHIJLMNOPQRSTUV");

    let decoded = run(table.inverse(), &encoded);
    assert_eq!(decoded, ALPHABET);
}

#[test]
fn veni_vidi_reference_output() {
    let table = CipherTable::build("i came, i saw").unwrap();
    assert_eq!(
        table.diagnostic(),
        "key: HJKLNOPQRTUVICAMESWXYZBDFG - 26"
    );

    let encoded = run(&table, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\n");
    assert_eq!(encoded, b"HJKLNOPQRTUVICAMESWXYZBDFG\n");

    let mut sorted = table.as_bytes().to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, ALPHABET);
}

#[test]
fn mixed_text_keeps_layout() {
    let table = CipherTable::build("i came, i saw").unwrap();
    let input = b"Line one.\n\tLine 2: done!\r\n";
    let encoded = run(&table, input);

    assert_eq!(encoded.len(), input.len());
    for (plain, cipher) in input.iter().zip(&encoded) {
        if !plain.is_ascii_alphabetic() {
            assert_eq!(plain, cipher);
        } else {
            assert!(cipher.is_ascii_uppercase());
        }
    }
}

#[test]
fn binary_bytes_pass_through() {
    let table = CipherTable::build("KEY").unwrap();
    let input: Vec<u8> = (0..=255u8).filter(|b| !b.is_ascii_alphabetic()).collect();
    assert_eq!(run(&table, &input), input);
}

#[test]
fn unusable_keys() {
    for key in ["", "   ", "1234", "!?,.", "ñé"] {
        assert!(
            matches!(CipherTable::build(key), Err(CipherError::EmptyKey)),
            "key {key:?} should be rejected"
        );
    }
}
