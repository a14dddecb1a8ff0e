use lite_nbt::{BigEndian, ByteOrder, LittleEndian, Nbt, binary, snbt::SnbtWriter};

/// Anything that decodes must re-encode, decode to the same document, and
/// survive a trip through the text form.
fn check_binary<O: ByteOrder>(data: &[u8]) {
    let Ok(nbt) = binary::read::<O>(data) else {
        return;
    };
    let bytes = binary::to_vec::<O>(&nbt).expect("decoded document must encode");
    let again = binary::from_slice::<O>(&bytes).expect("encoded document must decode");
    assert_eq!(same_bits(&nbt), same_bits(&again));

    for writer in [SnbtWriter::PRETTY, SnbtWriter::COMPACT] {
        // End tags print as a placeholder that does not parse back.
        match writer.to_string(&nbt.tag) {
            Ok(text) if !text.contains(writer.end_tag_placeholder) => {
                lite_nbt::snbt::parse(&text).expect("printed document must parse");
            }
            _ => {}
        }
    }
}

/// NaN payloads compare unequal, so compare the encoded bytes instead.
fn same_bits(nbt: &Nbt) -> Vec<u8> {
    binary::to_vec_be(nbt).unwrap_or_default()
}

pub fn test_binary(data: &[u8]) {
    check_binary::<BigEndian>(data);
    check_binary::<LittleEndian>(data);
}

pub fn test_snbt(data: &[u8]) {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = lite_nbt::snbt::parse(input) else {
        return;
    };
    let text = SnbtWriter::COMPACT
        .to_string(&value)
        .expect("parsed value must print");
    let again = lite_nbt::snbt::parse(&text).expect("printed value must parse");
    assert_eq!(
        binary::to_vec_be(&Nbt::from(value)).ok(),
        binary::to_vec_be(&Nbt::from(again)).ok()
    );
}
