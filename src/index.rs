mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// A resolved lookup key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key<'a> {
    /// Position of an element in a list.
    Position(usize),
    /// Name of an entry in a compound.
    Name(&'a str),
}

/// A key into a container tag: a `usize` position into a list, or a name
/// (`str`/`String`) into a compound.
///
/// Sealed; accepted by the `get_at`/`get_if_at`/`get_as`/`get_if_as`
/// accessors of [`TagValue`](crate::TagValue),
/// [`CompoundValue`](crate::CompoundValue) and
/// [`ListValue`](crate::ListValue).
pub trait Index: private::Sealed {
    fn key(&self) -> Key<'_>;
}

impl Index for usize {
    #[inline]
    fn key(&self) -> Key<'_> {
        Key::Position(*self)
    }
}

impl Index for str {
    #[inline]
    fn key(&self) -> Key<'_> {
        Key::Name(self)
    }
}

impl Index for String {
    #[inline]
    fn key(&self) -> Key<'_> {
        Key::Name(self.as_str())
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn key(&self) -> Key<'_> {
        (**self).key()
    }
}
