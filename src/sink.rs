// std imports
use std::io::{self, Write};

// ---

/// A destination for the copy of the bytes passing through a tee.
///
/// None of the operations report errors. A concrete sink absorbs its own
/// failures so that the side channel can never break the primary read path.
/// See [`Silent`] for an adapter that does this for any [`Write`].
pub trait Sink {
    /// Appends `buf` to the sink.
    fn write(&mut self, buf: &[u8]);

    /// Pushes any buffered data to the underlying destination.
    fn flush(&mut self);

    /// Signals that no more data will follow.
    ///
    /// May be called more than once and must tolerate that.
    fn close(&mut self);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn write(&mut self, buf: &[u8]) {
        (**self).write(buf)
    }

    #[inline]
    fn flush(&mut self) {
        (**self).flush()
    }

    #[inline]
    fn close(&mut self) {
        (**self).close()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    #[inline]
    fn write(&mut self, buf: &[u8]) {
        (**self).write(buf)
    }

    #[inline]
    fn flush(&mut self) {
        (**self).flush()
    }

    #[inline]
    fn close(&mut self) {
        (**self).close()
    }
}

// ---

/// A sink that drops everything written to it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl Sink for Discard {
    #[inline]
    fn write(&mut self, _: &[u8]) {}

    #[inline]
    fn flush(&mut self) {}

    #[inline]
    fn close(&mut self) {}
}

// ---

/// Adapts any [`Write`] into a [`Sink`] that never reports errors.
///
/// The first failure sets a sticky flag that can be checked with
/// [`Silent::failed`]. Closing flushes and then drops the inner writer,
/// so anything written after that is ignored and also counts as a failure.
///
/// Since closing drops the writer, a copy that has to outlive end-of-data
/// should be recorded through a borrowed writer:
///
/// ```
/// use std::io::Read;
/// use teeio::{Silent, Tee};
///
/// let mut copy = Vec::new();
/// let mut tee = b"abc".as_slice().tee(Silent::new(&mut copy));
/// tee.read_to_end(&mut Vec::new()).unwrap();
/// drop(tee);
///
/// assert_eq!(copy, b"abc");
/// ```
#[derive(Debug)]
pub struct Silent<W: Write> {
    inner: Option<W>,
    failed: bool,
}

impl<W: Write> Silent<W> {
    #[inline]
    pub fn new(inner: W) -> Self {
        Self {
            inner: Some(inner),
            failed: false,
        }
    }

    /// Returns true if any write, flush or close has failed so far.
    #[inline]
    pub fn failed(&self) -> bool {
        self.failed
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns the inner writer unless the sink has been closed.
    #[inline]
    pub fn get_ref(&self) -> Option<&W> {
        self.inner.as_ref()
    }

    /// Unwraps the inner writer unless the sink has been closed.
    #[inline]
    pub fn into_inner(mut self) -> Option<W> {
        self.inner.take()
    }

    fn attempt<F>(&mut self, op: &'static str, f: F)
    where
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        let Some(inner) = self.inner.as_mut() else {
            log::debug!("silent sink: {op} after close ignored");
            self.failed = true;
            return;
        };

        if let Err(e) = f(inner) {
            log::debug!("silent sink: {op} failed: {e}");
            self.failed = true;
        }
    }
}

impl<W: Write> Sink for Silent<W> {
    fn write(&mut self, buf: &[u8]) {
        self.attempt("write", |w| w.write_all(buf))
    }

    fn flush(&mut self) {
        self.attempt("flush", |w| w.flush())
    }

    fn close(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            if let Err(e) = inner.flush() {
                log::debug!("silent sink: flush on close failed: {e}");
                self.failed = true;
            }
            log::trace!("silent sink: closed");
        }
    }
}

impl<W: Write> From<W> for Silent<W> {
    #[inline]
    fn from(inner: W) -> Self {
        Self::new(inner)
    }
}
