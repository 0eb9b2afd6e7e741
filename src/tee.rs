// std imports
use std::io::{self, Read};

// local imports
use crate::{
    error::{Error, Result},
    settings::{ClosePolicy, EmptyReadPolicy, Options},
    sink::Sink,
};

// ---

/// Lifecycle state of a [`TeeReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The source has not reported end-of-data yet.
    Active,
    /// The source has reported end-of-data at least once.
    Exhausted,
}

// ---

/// A reader that copies every byte read from `source` into `sink`.
///
/// Each successful read is written to the sink and flushed right away.
/// When the source reports end-of-data, the sink is closed.
/// The source itself is never closed, it is handed back by [`TeeReader::into_parts`].
///
/// Mark and reset are not supported since replaying consumed bytes
/// would emit them to the sink a second time.
#[derive(Debug)]
pub struct TeeReader<R, S> {
    source: R,
    sink: S,
    options: Options,
    state: State,
}

impl<R: Read, S: Sink> TeeReader<R, S> {
    #[inline]
    pub fn new(source: R, sink: S) -> Self {
        Self::with_options(source, sink, Options::default())
    }

    #[inline]
    pub fn with_options(source: R, sink: S, options: Options) -> Self {
        Self {
            source,
            sink,
            options,
            state: State::Active,
        }
    }

    /// Reads a single byte, returning `None` at end-of-data.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0; 1];
        match self.source.read(&mut byte)? {
            0 => {
                self.exhaust();
                Ok(None)
            }
            _ => {
                self.sink.write(&byte);
                self.sink.flush();
                Ok(Some(byte[0]))
            }
        }
    }

    /// Reads up to `max_len` bytes into `buf` starting at `offset`.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] if the region does not fit into `buf`,
    /// in which case neither the source nor the sink is touched.
    pub fn read_region(&mut self, buf: &mut [u8], offset: usize, max_len: usize) -> io::Result<usize> {
        let len = buf.len();
        let region = offset
            .checked_add(max_len)
            .and_then(|end| buf.get_mut(offset..end))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("region {offset}+{max_len} is out of bounds of buffer of length {len}"),
                )
            })?;
        self.read(region)
    }

    /// Always returns false.
    #[inline]
    pub fn mark_supported(&self) -> bool {
        false
    }

    /// Always fails with [`Error::Unsupported`].
    #[inline]
    pub fn mark(&mut self, _read_limit: usize) -> Result<()> {
        Err(Error::Unsupported("mark"))
    }

    /// Always fails with [`Error::Unsupported`].
    #[inline]
    pub fn reset(&mut self) -> Result<()> {
        Err(Error::Unsupported("reset"))
    }

    fn exhaust(&mut self) {
        match (self.state, self.options.close) {
            (State::Active, _) => {
                log::debug!("tee: source exhausted");
                self.state = State::Exhausted;
            }
            (State::Exhausted, ClosePolicy::Repeat) => {}
            (State::Exhausted, ClosePolicy::Once) => return,
        }
        log::trace!("tee: closing sink");
        self.sink.close();
    }
}

impl<R, S> TeeReader<R, S> {
    #[inline]
    pub fn builder() -> Builder<R, S> {
        Builder::default()
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Gives direct access to the source.
    ///
    /// Bytes read through the returned reference bypass the sink.
    #[inline]
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[inline]
    pub fn into_source(self) -> R {
        self.source
    }

    #[inline]
    pub fn into_sink(self) -> S {
        self.sink
    }

    #[inline]
    pub fn into_parts(self) -> (R, S) {
        (self.source, self.sink)
    }
}

impl<R: Read, S: Sink> Read for TeeReader<R, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.source.read(buf)?;
        if n != 0 {
            self.sink.write(&buf[..n]);
            self.sink.flush();
        } else if !buf.is_empty() || self.options.empty_read == EmptyReadPolicy::Close {
            self.exhaust();
        }
        Ok(n)
    }
}

// ---

/// Collects the parts of a [`TeeReader`], checking that the required ones are present.
#[derive(Debug)]
pub struct Builder<R, S> {
    source: Option<R>,
    sink: Option<S>,
    options: Options,
}

impl<R, S> Default for Builder<R, S> {
    fn default() -> Self {
        Self {
            source: None,
            sink: None,
            options: Options::default(),
        }
    }
}

impl<R: Read, S: Sink> Builder<R, S> {
    #[inline]
    pub fn source(self, source: R) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }

    #[inline]
    pub fn sink(self, sink: S) -> Self {
        Self { sink: Some(sink), ..self }
    }

    #[inline]
    pub fn options(self, options: Options) -> Self {
        Self { options, ..self }
    }

    /// Fails with [`Error::InvalidArgument`] if the source or the sink was not set.
    pub fn build(self) -> Result<TeeReader<R, S>> {
        let source = self.source.ok_or(Error::InvalidArgument("source"))?;
        let sink = self.sink.ok_or(Error::InvalidArgument("sink"))?;
        Ok(TeeReader::with_options(source, sink, self.options))
    }
}

// ---

/// Extends any reader with a way to mirror what is read from it.
pub trait Tee: Read + Sized {
    #[inline]
    fn tee<S: Sink>(self, sink: S) -> TeeReader<Self, S> {
        TeeReader::new(self, sink)
    }

    #[inline]
    fn tee_with<S: Sink>(self, sink: S, options: Options) -> TeeReader<Self, S> {
        TeeReader::with_options(self, sink, options)
    }
}

impl<R: Read> Tee for R {}
