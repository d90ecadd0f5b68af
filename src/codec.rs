use crate::code::{self, CodeTable};
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use crate::key;
use crate::tree::{self, Node};

/// Result of `compress`: the encoded bitstring, the serialized key a
/// decoder needs to rebuild the identical tree, and the achieved ratio
/// (original bits at 8 per character over encoded bits; 0.0 when nothing
/// was encoded).
#[derive(Debug, Clone, PartialEq)]
pub struct Compressed {
    pub bits: String,
    pub key: String,
    pub ratio: f64,
}

/// Compresses `text` in one pass: count frequencies, build the tree,
/// derive codes, concatenate each character's code in input order.
pub fn compress(text: &str) -> Result<Compressed> {
    if text.is_empty() {
        return Ok(Compressed {
            bits: String::new(),
            key: String::new(),
            ratio: 0.0,
        });
    }

    let table = FrequencyTable::from_text(text);
    let root = tree::build(&table).ok_or(Error::EmptyTree)?;
    let codes = code::derive(&root);
    let bits = encode(text, &codes)?;

    // A single-symbol alphabet encodes to zero bits; treat the ratio like
    // the empty case instead of dividing by zero.
    let ratio = if bits.is_empty() {
        0.0
    } else {
        (text.chars().count() * 8) as f64 / bits.len() as f64
    };

    Ok(Compressed {
        bits,
        key: key::serialize(&table),
        ratio,
    })
}

/// Rebuilds the tree from `key` and walks it bit by bit to recover the
/// original text. The true bit length must have been preserved end-to-end;
/// feeding padded bits can append spurious characters (see `pack`).
pub fn decompress(bits: &str, key: &str) -> Result<String> {
    if bits.is_empty() && key.is_empty() {
        return Ok(String::new());
    }

    let table = key::deserialize(key)?;
    let Some(root) = tree::build(&table) else {
        return if bits.is_empty() {
            Ok(String::new())
        } else {
            Err(Error::EmptyTree)
        };
    };
    decode(bits, &root)
}

/// Concatenates each character's code in input order. Errs on a character
/// the table does not cover, which signals a table/text mismatch.
pub fn encode(text: &str, codes: &CodeTable) -> Result<String> {
    let mut bits = String::new();
    for ch in text.chars() {
        let code = codes.get(&ch).ok_or(Error::TableTextMismatch(ch))?;
        bits.push_str(code);
    }
    Ok(bits)
}

/// Walks the tree from the root one bit per step, emitting a character at
/// each leaf and restarting. A lone-leaf tree has an empty code, so its
/// text is reconstructed from the recorded count rather than from bits.
pub fn decode(bits: &str, root: &Node) -> Result<String> {
    if let Node::Leaf { ch, freq } = root {
        return Ok(std::iter::repeat(*ch).take(*freq as usize).collect());
    }

    let mut text = String::new();
    let mut node = root;
    for bit in bits.chars() {
        let (left, right) = match node {
            Node::Internal { left, right, .. } => (left.as_ref(), right.as_ref()),
            // Traversal restarts at the root after every leaf, and the
            // lone-leaf root returned above.
            Node::Leaf { .. } => unreachable!(),
        };
        node = match bit {
            '0' => left,
            '1' => right,
            other => return Err(Error::InvalidBit(other)),
        };
        if let Node::Leaf { ch, .. } = node {
            text.push(*ch);
            node = root;
        }
    }

    if !std::ptr::eq(node, root) {
        return Err(Error::TruncatedBitstream);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;

    #[test]
    fn round_trips_ordinary_text() {
        let out = compress("abracadabra").unwrap();
        assert_eq!(decompress(&out.bits, &out.key).unwrap(), "abracadabra");
    }

    #[test]
    fn round_trips_longer_mixed_text() {
        let text = "No, the king is not mad, good man; and it will avail thee \
                    to say so. ¡Olé! — 縮む";
        let out = compress(text).unwrap();
        assert_eq!(decompress(&out.bits, &out.key).unwrap(), text);
        assert!(out.ratio > 1.0);
    }

    #[test]
    fn empty_text_yields_empty_everything() {
        let out = compress("").unwrap();
        assert_eq!(out.bits, "");
        assert_eq!(out.key, "");
        assert_eq!(out.ratio, 0.0);
        assert_eq!(decompress("", "").unwrap(), "");
    }

    #[test]
    fn single_distinct_character_uses_counts() {
        let out = compress("aaaa").unwrap();
        assert_eq!(out.bits, "");
        assert_eq!(out.key, r#"{"frequencyMap":{"a":4}}"#);
        assert_eq!(out.ratio, 0.0);
        assert_eq!(decompress(&out.bits, &out.key).unwrap(), "aaaa");
    }

    #[test]
    fn abracadabra_scenario() {
        let out = compress("abracadabra").unwrap();
        assert_eq!(out.key, r#"{"frequencyMap":{"a":5,"b":2,"r":2,"c":1,"d":1}}"#);
        // 5 symbols: optimal code lengths are 1/2/3 bits with 'a' shortest,
        // total 23 bits for 11 characters.
        assert_eq!(out.bits.len(), 23);
        assert!((out.ratio - 88.0 / 23.0).abs() < 1e-9);
    }

    #[test]
    fn encode_rejects_uncovered_character() {
        let out = compress("abab").unwrap();
        let table = crate::key::deserialize(&out.key).unwrap();
        let codes = crate::code::derive(&crate::tree::build(&table).unwrap());
        assert!(matches!(
            encode("abaz", &codes),
            Err(Error::TableTextMismatch('z'))
        ));
    }

    #[test]
    fn truncated_bitstream_is_an_error() {
        let out = compress("abracadabra").unwrap();
        // The final 'a' is a one-bit code, so cutting one bit still lands on
        // a code boundary; cut two to stop mid-traversal.
        let truncated = &out.bits[..out.bits.len() - 2];
        assert!(matches!(
            decompress(truncated, &out.key),
            Err(Error::TruncatedBitstream)
        ));
    }

    #[test]
    fn bits_against_empty_alphabet_is_an_error() {
        assert!(matches!(
            decompress("01", r#"{"frequencyMap":{}}"#),
            Err(Error::EmptyTree)
        ));
        // No bits to decode is fine even with an empty alphabet.
        assert_eq!(decompress("", r#"{"frequencyMap":{}}"#).unwrap(), "");
    }

    #[test]
    fn decompress_surfaces_malformed_keys() {
        assert!(matches!(
            decompress("01", "not a key"),
            Err(Error::MalformedKey(_))
        ));
    }

    #[test]
    fn padded_bits_decode_exactly_once_length_is_trimmed() {
        let out = compress("abracadabra").unwrap();
        let mut bits = pack::unpack(&pack::pack(&out.bits).unwrap());
        bits.truncate(out.bits.len());
        assert_eq!(decompress(&bits, &out.key).unwrap(), "abracadabra");
    }

    #[test]
    fn untrimmed_padding_may_append_spurious_characters() {
        // Without the true bit length the decoder reads zero-padding as
        // codes: it either appends extra characters or fails mid-walk.
        let out = compress("abracadabra").unwrap();
        let padded = pack::unpack(&pack::pack(&out.bits).unwrap());
        match decompress(&padded, &out.key) {
            Ok(text) => assert!(text.starts_with("abracadabra")),
            Err(Error::TruncatedBitstream) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
