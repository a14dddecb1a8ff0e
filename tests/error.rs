use std::io;

use lite_nbt::{Error, TagID, region::CompressionScheme, snbt};

#[test]
fn test_display_messages() {
    let cases = [
        (Error::EndOfFile, "unexpected end of input"),
        (Error::TrailingData(3), "trailing data after end of input: 3 bytes remaining"),
        (Error::InvalidTagType(0x0d), "invalid NBT tag type: 0x0d"),
        (Error::NegativeLength(-1), "negative length: -1"),
        (Error::DepthLimit(512), "nesting depth exceeds 512"),
        (Error::StringTooLong(70_000), "string too long: 70000 bytes"),
        (Error::InvalidString, "invalid MUTF-8 string"),
        (Error::EndListNotEmpty(4), "list of End tags with length 4"),
        (Error::EndTag, "reached end tag"),
        (
            Error::NumericOverflow { len: 4, limit: 3 },
            "numeric literal of 4 characters exceeds buffer size 3",
        ),
        (
            Error::ListMismatch {
                expected: TagID::Int,
                actual: TagID::String,
            },
            "tag in list mismatch: expected Int, got String",
        ),
        (
            Error::TagMismatch {
                expected: TagID::Compound,
                actual: TagID::List,
            },
            "tag mismatch: expected Compound, got List",
        ),
        (Error::KeyNotFound("Pos".into()), "key not found: \"Pos\""),
        (
            Error::IndexOutOfBounds { index: 3, len: 2 },
            "index 3 out of bounds for length 2",
        ),
        (Error::NotANumber(TagID::String), "not a number: String"),
        (
            Error::SectorOverlapsHeader { offset: 1 },
            "sector offset 1 overlaps with header",
        ),
        (Error::EmptySector, "sector count must be > 0"),
        (Error::UnknownCompression(9), "unknown compression scheme: 9"),
        (
            Error::UnsupportedCompression(CompressionScheme::Lz4),
            "unsupported compression scheme: Lz4",
        ),
        (
            Error::ChunkOutOfBounds { x: 32, z: 0 },
            "chunk coordinates out of bounds: (32, 0)",
        ),
    ];
    for (error, expected) in cases {
        assert_eq!(error.to_string(), expected);
    }
}

#[test]
fn test_syntax_error_message() {
    let error = snbt::parse("{a 1}").unwrap_err();
    assert_eq!(error.to_string(), "syntax error at 3: expected ':' but found '1'");
    let error = snbt::parse("[1").unwrap_err();
    assert_eq!(
        error.to_string(),
        "syntax error at 2: expected ',' but reached end of input"
    );
}

#[test]
fn test_io_error_mapping() {
    let eof = Error::from(io::Error::from(io::ErrorKind::UnexpectedEof));
    assert!(matches!(eof, Error::EndOfFile));
    let other = Error::from(io::Error::other("disk on fire"));
    assert!(matches!(other, Error::IO(_)));
    assert_eq!(other.to_string(), "disk on fire");
}
