use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::{Error, Result};

/// Packs a '0'/'1' bitstring into bytes, most significant bit first,
/// zero-padding the final byte on the right. The bit count itself is not
/// recorded: callers that need an exact round-trip must carry it alongside
/// the bytes (see `archive::Archive`), otherwise a decoder may read the
/// padding as real codes and emit spurious trailing characters.
pub fn pack(bits: &str) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::new(), BigEndian);
    for ch in bits.chars() {
        match ch {
            '0' => writer.write_bit(false)?,
            '1' => writer.write_bit(true)?,
            other => return Err(Error::InvalidBit(other)),
        }
    }
    writer.byte_align()?;
    Ok(writer.into_writer())
}

/// Expands packed bytes back into a bitstring. Padding comes back as
/// trailing '0's: `unpack(pack(b))` equals `b` plus up to seven of them.
pub fn unpack(bytes: &[u8]) -> String {
    let mut reader = BitReader::endian(bytes, BigEndian);
    let mut bits = String::with_capacity(bytes.len() * 8);
    while let Ok(bit) = reader.read_bit() {
        bits.push(if bit { '1' } else { '0' });
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_msb_first_with_zero_padding() {
        assert_eq!(pack("101").unwrap(), vec![0b1010_0000]);
        assert_eq!(pack("11111111").unwrap(), vec![0xff]);
        assert_eq!(pack("111111110").unwrap(), vec![0xff, 0x00]);
    }

    #[test]
    fn empty_bitstring_packs_to_no_bytes() {
        assert_eq!(pack("").unwrap(), Vec::<u8>::new());
        assert_eq!(unpack(&[]), "");
    }

    #[test]
    fn exact_multiple_of_eight_round_trips_exactly() {
        let bits = "0110100101101001";
        assert_eq!(unpack(&pack(bits).unwrap()), bits);
    }

    #[test]
    fn partial_byte_round_trips_with_trailing_zeros() {
        let bits = "1011011";
        let unpacked = unpack(&pack(bits).unwrap());
        assert_eq!(unpacked.len(), 8);
        assert!(unpacked.starts_with(bits));
        assert!(unpacked[bits.len()..].chars().all(|c| c == '0'));
    }

    #[test]
    fn rejects_non_bit_characters() {
        assert!(matches!(pack("10x1"), Err(Error::InvalidBit('x'))));
    }
}
