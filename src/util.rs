#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Byte order of multi-byte numeric fields in the binary format.
///
/// Implemented for [`BigEndian`](crate::BigEndian) (the conventional order
/// for persisted documents), [`LittleEndian`](crate::LittleEndian) and
/// [`NativeEndian`](crate::NativeEndian).
pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}

/// Maximum nesting of lists and compounds accepted by the codecs.
pub const MAX_DEPTH: usize = 512;

/// Characters allowed in an unquoted SNBT name or token.
#[inline]
pub(crate) const fn is_allowed_in_unquoted(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}
