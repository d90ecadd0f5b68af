//! # huffpress
//!
//! Huffman compression for text, built around a portable frequency-table
//! "key". Compression yields a bitstream plus the serialized key; any
//! decoder holding both rebuilds the identical tree and recovers the
//! original text exactly.
//!
//! ```rust
//! use huffpress::codec;
//!
//! let out = codec::compress("abracadabra")?;
//! let text = codec::decompress(&out.bits, &out.key)?;
//! assert_eq!(text, "abracadabra");
//! # Ok::<(), huffpress::Error>(())
//! ```

pub mod archive;
pub mod code;
pub mod codec;
pub mod error;
pub mod freq;
pub mod key;
pub mod pack;
pub mod tree;

pub use codec::{Compressed, compress, decompress};
pub use error::{Error, Result};
