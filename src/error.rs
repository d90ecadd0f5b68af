use thiserror::Error;

/// Failure modes of the codec and its archive container.
#[derive(Error, Debug)]
pub enum Error {
    /// The serialized key could not be parsed back into a frequency table.
    #[error("malformed key: {0}")]
    MalformedKey(String),
    /// A character in the text has no entry in the code table. Unreachable
    /// when the table was derived from the same text's frequencies.
    #[error("no code for character {0:?} in the code table")]
    TableTextMismatch(char),
    /// The bitstream ended in the middle of a root-to-leaf traversal.
    #[error("bitstream truncated mid-traversal")]
    TruncatedBitstream,
    /// The bitstream carries data but the key describes no symbols.
    #[error("bitstream is non-empty but the key describes an empty alphabet")]
    EmptyTree,
    #[error("invalid bit character {0:?} in bitstring")]
    InvalidBit(char),
    #[error("bad archive: {0}")]
    Archive(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
