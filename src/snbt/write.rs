use std::fmt::{self, Write};

use crate::{CompoundValue, Error, ListValue, Result, TagID, TagValue, util::is_allowed_in_unquoted};

/// What the printer does when it meets an End tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndTagBehavior {
    /// Abort with [`Error::EndTag`].
    Fail,
    /// Emit [`SnbtWriter::end_tag_placeholder`].
    Placeholder,
}

/// How `Float` and `Double` values are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatFormat {
    /// Shortest text that reads back to the same value, switching to
    /// exponent notation for very large or very small magnitudes.
    General,
    /// Shortest round-trip digits, never in exponent notation.
    Fixed,
    /// Shortest round-trip digits, always in exponent notation.
    Scientific,
}

/// SNBT printer configuration.
///
/// The three presets differ only in layout:
///
/// ```
/// use lite_nbt::{CompoundValue, ListValue, TagValue, snbt::SnbtWriter};
///
/// let mut compound = CompoundValue::new();
/// compound.insert("a", 1i8);
/// compound.insert("b", ListValue::from_iter([1i32, 2]));
/// let value = TagValue::from(compound);
///
/// assert_eq!(
///     SnbtWriter::PRETTY.to_string(&value).unwrap(),
///     "{\n    a: 1b,\n    b: [1, 2]\n}"
/// );
/// assert_eq!(SnbtWriter::INLINE.to_string(&value).unwrap(), "{a: 1b, b: [1, 2]}");
/// assert_eq!(SnbtWriter::COMPACT.to_string(&value).unwrap(), "{a:1b,b:[1,2]}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnbtWriter<'a> {
    /// Written once per nesting level after each line feed.
    pub indent: &'a str,
    pub end_tag: EndTagBehavior,
    pub end_tag_placeholder: &'a str,
    /// Use C-style escapes for control characters in strings. When off,
    /// only quotes and backslashes are escaped.
    pub escape: bool,
    /// Break lines between the entries of compounds and of lists whose
    /// elements are compounds, lists, strings or arrays.
    pub line_feed: bool,
    /// Put a space after `:`, `,` and array markers.
    pub space: bool,
    pub float_format: FloatFormat,
    /// Longest numeric literal, suffix excluded, the printer may produce;
    /// a longer one fails with [`Error::NumericOverflow`].
    pub numeric_buffer_size: usize,
    pub byte_suffix: &'a str,
    pub short_suffix: &'a str,
    pub int_suffix: &'a str,
    pub long_suffix: &'a str,
    pub float_suffix: &'a str,
    pub double_suffix: &'a str,
}

impl SnbtWriter<'static> {
    /// Line feeds and spaces.
    pub const PRETTY: Self = Self {
        indent: "    ",
        end_tag: EndTagBehavior::Placeholder,
        end_tag_placeholder: "(End)",
        escape: true,
        line_feed: true,
        space: true,
        float_format: FloatFormat::General,
        numeric_buffer_size: 100,
        byte_suffix: "b",
        short_suffix: "s",
        int_suffix: "",
        long_suffix: "L",
        float_suffix: "f",
        double_suffix: "d",
    };

    /// Spaces, everything on one line.
    pub const INLINE: Self = Self {
        line_feed: false,
        ..Self::PRETTY
    };

    /// Neither line feeds nor spaces.
    pub const COMPACT: Self = Self {
        line_feed: false,
        space: false,
        ..Self::PRETTY
    };
}

impl Default for SnbtWriter<'static> {
    fn default() -> Self {
        Self::PRETTY
    }
}

impl SnbtWriter<'_> {
    /// Prints `value` into a character sink.
    pub fn write<W: Write + ?Sized>(&self, out: &mut W, value: &TagValue) -> Result<()> {
        self.write_value(out, value, 0)
    }

    pub fn to_string(&self, value: &TagValue) -> Result<String> {
        let mut out = String::new();
        self.write(&mut out, value)?;
        Ok(out)
    }

    /// Prints `value` into a byte sink as UTF-8.
    pub fn write_io(&self, mut out: impl std::io::Write, value: &TagValue) -> Result<()> {
        let text = self.to_string(value)?;
        out.write_all(text.as_bytes()).map_err(Error::IO)
    }

    fn write_space<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        if self.space {
            out.write_char(' ')?;
        }
        Ok(())
    }

    fn write_line_feed<W: Write + ?Sized>(&self, out: &mut W, depth: usize) -> fmt::Result {
        if self.line_feed {
            out.write_char('\n')?;
            for _ in 0..depth {
                out.write_str(self.indent)?;
            }
        }
        Ok(())
    }

    fn write_comma_with_space<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_char(',')?;
        self.write_space(out)
    }

    fn write_comma_with_line_feed<W: Write + ?Sized>(&self, out: &mut W, depth: usize) -> fmt::Result {
        out.write_char(',')?;
        if self.line_feed {
            self.write_line_feed(out, depth)
        } else {
            self.write_space(out)
        }
    }

    fn write_number<W: Write + ?Sized>(
        &self,
        out: &mut W,
        number: fmt::Arguments<'_>,
        suffix: &str,
    ) -> Result<()> {
        let mut text = String::with_capacity(self.numeric_buffer_size);
        text.write_fmt(number)?;
        if text.len() > self.numeric_buffer_size {
            return Err(Error::NumericOverflow {
                len: text.len(),
                limit: self.numeric_buffer_size,
            });
        }
        out.write_str(&text)?;
        out.write_str(suffix)?;
        Ok(())
    }

    fn write_float<W: Write + ?Sized>(
        &self,
        out: &mut W,
        value: f64,
        single: bool,
        suffix: &str,
    ) -> Result<()> {
        // f32 values go through their own formatting to keep the shortest digits.
        match (self.float_format, single) {
            (FloatFormat::General, true) => self.write_number(out, format_args!("{:?}", value as f32), suffix),
            (FloatFormat::General, false) => self.write_number(out, format_args!("{value:?}"), suffix),
            (FloatFormat::Fixed, true) => self.write_number(out, format_args!("{}", value as f32), suffix),
            (FloatFormat::Fixed, false) => self.write_number(out, format_args!("{value}"), suffix),
            (FloatFormat::Scientific, true) => self.write_number(out, format_args!("{:e}", value as f32), suffix),
            (FloatFormat::Scientific, false) => self.write_number(out, format_args!("{value:e}"), suffix),
        }
    }

    /// Quotes with `"` unless the string has a `"` and no `'`.
    fn write_string<W: Write + ?Sized>(&self, out: &mut W, value: &str) -> fmt::Result {
        let mark = if value.contains('"') && !value.contains('\'') {
            '\''
        } else {
            '"'
        };
        out.write_char(mark)?;
        for c in value.chars() {
            if self.escape {
                match c {
                    '\'' | '"' if c == mark => {
                        out.write_char('\\')?;
                        out.write_char(c)?;
                    }
                    '\\' => out.write_str("\\\\")?,
                    '\x07' => out.write_str("\\a")?,
                    '\x08' => out.write_str("\\b")?,
                    '\x0c' => out.write_str("\\f")?,
                    '\n' => out.write_str("\\n")?,
                    '\r' => out.write_str("\\r")?,
                    '\t' => out.write_str("\\t")?,
                    '\x0b' => out.write_str("\\v")?,
                    c => out.write_char(c)?,
                }
            } else {
                if c == '"' || c == '\\' || c == mark {
                    out.write_char('\\')?;
                }
                out.write_char(c)?;
            }
        }
        out.write_char(mark)
    }

    fn write_name<W: Write + ?Sized>(&self, out: &mut W, name: &str) -> fmt::Result {
        if !name.is_empty() && name.chars().all(is_allowed_in_unquoted) {
            out.write_str(name)
        } else {
            self.write_string(out, name)
        }
    }

    fn write_array<W: Write + ?Sized, T: Copy + fmt::Display>(
        &self,
        out: &mut W,
        marker: char,
        values: &[T],
        suffix: &str,
    ) -> Result<()> {
        out.write_char('[')?;
        out.write_char(marker)?;
        out.write_char(';')?;
        self.write_space(out)?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.write_comma_with_space(out)?;
            }
            self.write_number(out, format_args!("{value}"), suffix)?;
        }
        out.write_char(']')?;
        Ok(())
    }

    fn write_compound<W: Write + ?Sized>(
        &self,
        out: &mut W,
        compound: &CompoundValue,
        depth: usize,
    ) -> Result<()> {
        out.write_char('{')?;
        if !compound.is_empty() {
            self.write_line_feed(out, depth + 1)?;
            for (i, (name, value)) in compound.iter().enumerate() {
                if i > 0 {
                    self.write_comma_with_line_feed(out, depth + 1)?;
                }
                self.write_name(out, name)?;
                out.write_char(':')?;
                self.write_space(out)?;
                self.write_value(out, value, depth + 1)?;
            }
            self.write_line_feed(out, depth)?;
        }
        out.write_char('}')?;
        Ok(())
    }

    fn write_list<W: Write + ?Sized>(&self, out: &mut W, list: &ListValue, depth: usize) -> Result<()> {
        let wrap = matches!(
            list.element_id(),
            TagID::Compound
                | TagID::List
                | TagID::String
                | TagID::ByteArray
                | TagID::IntArray
                | TagID::LongArray
        );
        out.write_char('[')?;
        if !list.is_empty() {
            if wrap {
                self.write_line_feed(out, depth + 1)?;
            }
            for (i, item) in list.iter().enumerate() {
                if i > 0 {
                    if wrap {
                        self.write_comma_with_line_feed(out, depth + 1)?;
                    } else {
                        self.write_comma_with_space(out)?;
                    }
                }
                self.write_value(out, item, depth + 1)?;
            }
            if wrap {
                self.write_line_feed(out, depth)?;
            }
        }
        out.write_char(']')?;
        Ok(())
    }

    fn write_value<W: Write + ?Sized>(&self, out: &mut W, value: &TagValue, depth: usize) -> Result<()> {
        match value {
            TagValue::End => match self.end_tag {
                EndTagBehavior::Fail => Err(Error::EndTag),
                EndTagBehavior::Placeholder => Ok(out.write_str(self.end_tag_placeholder)?),
            },
            TagValue::Byte(value) => self.write_number(out, format_args!("{value}"), self.byte_suffix),
            TagValue::Short(value) => self.write_number(out, format_args!("{value}"), self.short_suffix),
            TagValue::Int(value) => self.write_number(out, format_args!("{value}"), self.int_suffix),
            TagValue::Long(value) => self.write_number(out, format_args!("{value}"), self.long_suffix),
            TagValue::Float(value) => self.write_float(out, *value as f64, true, self.float_suffix),
            TagValue::Double(value) => self.write_float(out, *value, false, self.double_suffix),
            TagValue::ByteArray(values) => self.write_array(out, 'B', values, self.byte_suffix),
            TagValue::String(value) => Ok(self.write_string(out, value)?),
            TagValue::List(list) => self.write_list(out, list, depth),
            TagValue::Compound(compound) => self.write_compound(out, compound, depth),
            TagValue::IntArray(values) => self.write_array(out, 'I', values, self.int_suffix),
            TagValue::LongArray(values) => self.write_array(out, 'L', values, self.long_suffix),
        }
    }
}

/// `{}` prints [`SnbtWriter::INLINE`], `{:#}` prints [`SnbtWriter::PRETTY`].
impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let writer = if f.alternate() {
            SnbtWriter::PRETTY
        } else {
            SnbtWriter::INLINE
        };
        writer.write(f, self).map_err(|_| fmt::Error)
    }
}
