use super::{NumberFormat, Sink};
use std::io::Write;
use std::ops::{Deref, DerefMut};

/// Scoped formatting change on a [`Sink`].
///
/// Captures fill, width, precision and notation on creation and writes them
/// back on drop, including when the scope is left through `?` or a panic.
pub struct FormatGuard<'a, W: Write> {
    sink: &'a mut Sink<W>,
    saved: NumberFormat,
}

impl<'a, W: Write> FormatGuard<'a, W> {
    pub fn new(sink: &'a mut Sink<W>) -> Self {
        let saved = sink.format();
        Self { sink, saved }
    }
}

impl<W: Write> Deref for FormatGuard<'_, W> {
    type Target = Sink<W>;

    fn deref(&self) -> &Self::Target {
        self.sink
    }
}

impl<W: Write> DerefMut for FormatGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.sink
    }
}

impl<W: Write> Drop for FormatGuard<'_, W> {
    fn drop(&mut self) {
        self.sink.set_format(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Notation;
    use std::io;

    #[test]
    fn test_restores_on_scope_exit() {
        let mut sink = Sink::new(Vec::new());
        let before = sink.format();
        {
            let mut out = sink.guard();
            out.set_fixed(1);
            out.set_fill('*');
            out.set_width(8);
            assert_eq!(out.format().notation, Notation::Fixed);
        }
        assert_eq!(sink.format(), before);
    }

    #[test]
    fn test_restores_on_early_return() {
        fn fails_midway(sink: &mut Sink<Vec<u8>>) -> io::Result<()> {
            let mut out = sink.guard();
            out.set_fixed(3);
            out.write_real(1.0)?;
            Err(io::Error::other("stop"))
        }

        let mut sink = Sink::new(Vec::new());
        sink.set_fill('0');
        let before = sink.format();
        assert!(fails_midway(&mut sink).is_err());
        assert_eq!(sink.format(), before);
        assert_eq!(sink.get_ref().as_slice(), b"1.000");
    }

    #[test]
    fn test_nested_guards() {
        let mut sink = Sink::new(Vec::new());
        {
            let mut outer = sink.guard();
            outer.set_fixed(2);
            {
                let mut inner = outer.guard();
                inner.set_fixed(5);
            }
            assert_eq!(outer.format().precision, 2);
        }
        assert_eq!(sink.format(), NumberFormat::default());
    }
}
