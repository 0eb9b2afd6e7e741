//! Reader decorator that mirrors every byte read into a secondary sink.
//!
//! ```
//! use std::io::Read;
//! use teeio::{Silent, Tee};
//!
//! let mut copy = Vec::new();
//! let mut tee = b"GET / HTTP/1.1\r\n".as_slice().tee(Silent::new(&mut copy));
//! let mut line = String::new();
//! tee.read_to_string(&mut line).unwrap();
//!
//! assert!(tee.is_exhausted());
//! assert!(tee.sink().is_closed());
//! drop(tee);
//!
//! assert_eq!(copy, line.as_bytes());
//! ```

// public modules
pub mod error;
pub mod settings;
pub mod sink;
pub mod tee;

// public uses
pub use error::{Error, Result};
pub use settings::{ClosePolicy, EmptyReadPolicy, Options, Settings};
pub use sink::{Discard, Silent, Sink};
pub use tee::{Builder, State, Tee, TeeReader};
