use std::io;

use crate::{Error, Result};

/// Compression scheme id stored in front of every chunk payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CompressionScheme {
    /// RFC 1952.
    Gzip = 1,
    /// RFC 1950.
    Zlib = 2,
    Uncompressed = 3,
    Lz4 = 4,
    /// An algorithm chosen by whoever wrote the file.
    Custom = 127,
}

impl TryFrom<u8> for CompressionScheme {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Ok(match value {
            1 => CompressionScheme::Gzip,
            2 => CompressionScheme::Zlib,
            3 => CompressionScheme::Uncompressed,
            4 => CompressionScheme::Lz4,
            127 => CompressionScheme::Custom,
            _ => return Err(Error::UnknownCompression(value)),
        })
    }
}

/// Turns a compressed chunk payload back into binary NBT.
///
/// Uncompressed payloads never reach the strategy. Any closure of the shape
/// `Fn(CompressionScheme, &[u8]) -> io::Result<Vec<u8>>` is a strategy:
///
/// ```
/// use std::io;
/// use lite_nbt::region::{CompressionScheme, Decompress};
///
/// let reject = |scheme: CompressionScheme, _: &[u8]| -> io::Result<Vec<u8>> {
///     Err(io::Error::new(io::ErrorKind::Unsupported, format!("{scheme:?}")))
/// };
/// assert!(reject.supports(CompressionScheme::Gzip));
/// assert!(reject.decompress(CompressionScheme::Gzip, &[]).is_err());
/// ```
pub trait Decompress {
    /// Whether [`decompress`](Self::decompress) should be tried for `scheme`.
    /// Unsupported schemes fail with [`Error::UnsupportedCompression`].
    fn supports(&self, scheme: CompressionScheme) -> bool {
        let _ = scheme;
        true
    }

    fn decompress(&self, scheme: CompressionScheme, data: &[u8]) -> io::Result<Vec<u8>>;
}

impl<F> Decompress for F
where
    F: Fn(CompressionScheme, &[u8]) -> io::Result<Vec<u8>>,
{
    #[inline]
    fn decompress(&self, scheme: CompressionScheme, data: &[u8]) -> io::Result<Vec<u8>> {
        self(scheme, data)
    }
}

/// The built-in strategy: handles no compressed scheme at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uncompressed;

impl Decompress for Uncompressed {
    fn supports(&self, _: CompressionScheme) -> bool {
        false
    }

    fn decompress(&self, scheme: CompressionScheme, _: &[u8]) -> io::Result<Vec<u8>> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("no decompressor for {scheme:?}"),
        ))
    }
}
