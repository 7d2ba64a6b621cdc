//! BER identifier and length octets

use oidreg_core::{OidError, OidResult};

/// BER Tag Class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BerTagClass {
    /// Universal class (00)
    Universal = 0,
    /// Application class (01)
    Application = 1,
    /// Context-specific class (10)
    ContextSpecific = 2,
    /// Private class (11)
    Private = 3,
}

impl BerTagClass {
    /// Get tag class from bits 8-7 of an identifier octet
    pub fn from_bits(bits: u8) -> Self {
        match (bits >> 6) & 0x03 {
            0 => BerTagClass::Universal,
            1 => BerTagClass::Application,
            2 => BerTagClass::ContextSpecific,
            _ => BerTagClass::Private,
        }
    }

    /// Convert tag class to identifier octet bits
    pub fn to_bits(self) -> u8 {
        (self as u8) << 6
    }
}

/// BER Tag
///
/// Tag numbers up to 30 fit in the identifier octet. Larger numbers set the
/// low five bits to `11111` and follow with base-128 continuation bytes, the
/// same layout OID arcs use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BerTag {
    class: BerTagClass,
    constructed: bool,
    number: u32,
}

impl BerTag {
    /// Create a new BER tag
    pub fn new(class: BerTagClass, constructed: bool, number: u32) -> Self {
        Self {
            class,
            constructed,
            number,
        }
    }

    /// Create a Universal class tag
    pub fn universal(constructed: bool, number: u32) -> Self {
        Self::new(BerTagClass::Universal, constructed, number)
    }

    /// The primitive universal OBJECT IDENTIFIER tag
    pub fn object_identifier() -> Self {
        Self::universal(false, super::OBJECT_IDENTIFIER_TAG)
    }

    /// Get tag class
    pub fn class(&self) -> BerTagClass {
        self.class
    }

    /// Check if tag is constructed
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Get tag number
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Encode tag to identifier octets
    pub fn encode(&self) -> Vec<u8> {
        let leading = self.class.to_bits() | if self.constructed { 0x20 } else { 0x00 };

        if self.number <= 30 {
            return vec![leading | self.number as u8];
        }

        let mut result = vec![leading | 0x1F];
        let mut groups = Vec::new();
        let mut remaining = self.number;
        while remaining > 0 {
            groups.push((remaining & 0x7F) as u8);
            remaining >>= 7;
        }
        let last = groups.len() - 1;
        for (i, &group) in groups.iter().rev().enumerate() {
            result.push(if i < last { group | 0x80 } else { group });
        }
        result
    }

    /// Decode tag from identifier octets
    ///
    /// Returns the tag and the number of bytes consumed.
    pub fn decode(data: &[u8]) -> OidResult<(Self, usize)> {
        let first_byte = *data
            .first()
            .ok_or_else(|| OidError::InvalidData("Empty buffer for tag decoding".to_string()))?;
        let class = BerTagClass::from_bits(first_byte);
        let constructed = (first_byte & 0x20) != 0;
        let tag_bits = first_byte & 0x1F;

        if tag_bits < 31 {
            return Ok((Self::new(class, constructed, u32::from(tag_bits)), 1));
        }

        let mut number = 0u32;
        let mut pos = 1;
        loop {
            let byte = *data.get(pos).ok_or_else(|| {
                OidError::InvalidData("Incomplete extended tag encoding".to_string())
            })?;
            pos += 1;
            // Five continuation bytes carry 35 bits, more than a u32 holds
            if pos > 5 {
                return Err(OidError::InvalidData(
                    "Tag number too large or invalid encoding".to_string(),
                ));
            }
            number = (number << 7) | u32::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                break;
            }
        }

        Ok((Self::new(class, constructed, number), pos))
    }
}

/// BER definite length
///
/// Short form covers 0-127 in a single byte; long form prefixes the
/// big-endian length with `0x80 | count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BerLength {
    /// Short form: length 0-127
    Short(u8),
    /// Long form: length > 127
    Long(usize),
}

impl BerLength {
    /// Choose the short or long form for a length
    pub fn new(length: usize) -> Self {
        if length < 128 {
            BerLength::Short(length as u8)
        } else {
            BerLength::Long(length)
        }
    }

    /// Get the length value
    pub fn value(&self) -> usize {
        match self {
            BerLength::Short(l) => *l as usize,
            BerLength::Long(l) => *l,
        }
    }

    /// Encode length octets
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            BerLength::Short(length) => vec![length],
            BerLength::Long(length) => {
                let bytes = length.to_be_bytes();
                let skip = bytes.iter().take_while(|&&b| b == 0).count();
                let significant = &bytes[skip.min(bytes.len() - 1)..];
                let mut result = Vec::with_capacity(1 + significant.len());
                result.push(0x80 | significant.len() as u8);
                result.extend_from_slice(significant);
                result
            }
        }
    }

    /// Decode length octets
    ///
    /// Returns the length and the number of bytes consumed. Indefinite
    /// length is rejected; nothing in an OID needs it.
    pub fn decode(data: &[u8]) -> OidResult<(Self, usize)> {
        let first_byte = *data.first().ok_or_else(|| {
            OidError::InvalidData("Empty buffer for length decoding".to_string())
        })?;

        if first_byte & 0x80 == 0 {
            return Ok((BerLength::Short(first_byte), 1));
        }

        let num_bytes = (first_byte & 0x7F) as usize;
        if num_bytes == 0 {
            return Err(OidError::InvalidData(
                "Indefinite length encoding not supported".to_string(),
            ));
        }
        if num_bytes > 4 {
            return Err(OidError::InvalidData(format!(
                "Length encoding too large: {} bytes (max 4)",
                num_bytes
            )));
        }
        if data.len() < 1 + num_bytes {
            return Err(OidError::InvalidData(format!(
                "Buffer too short for long form length: need {} bytes, got {}",
                1 + num_bytes,
                data.len()
            )));
        }

        let length = data[1..=num_bytes]
            .iter()
            .fold(0usize, |acc, &b| (acc << 8) | b as usize);
        Ok((BerLength::Long(length), 1 + num_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_identifier_tag() {
        assert_eq!(BerTag::object_identifier().encode(), vec![0x06]);
    }

    #[test]
    fn test_ber_tag_extended_form() {
        let tag = BerTag::new(BerTagClass::ContextSpecific, true, 200);
        let encoded = tag.encode();
        assert_eq!(encoded, vec![0xBF, 0x81, 0x48]);

        let (decoded, consumed) = BerTag::decode(&encoded).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(decoded, tag);
    }

    #[test]
    fn test_ber_tag_truncated_extended_form() {
        assert!(BerTag::decode(&[0x1F, 0x81]).is_err());
    }

    #[test]
    fn test_ber_length_short() {
        assert_eq!(BerLength::new(9).encode(), vec![9]);
        let (length, consumed) = BerLength::decode(&[9, 0xAA]).unwrap();
        assert_eq!((length.value(), consumed), (9, 1));
    }

    #[test]
    fn test_ber_length_long() {
        let encoded = BerLength::new(300).encode();
        assert_eq!(encoded, vec![0x82, 0x01, 0x2C]);
        let (length, consumed) = BerLength::decode(&encoded).unwrap();
        assert_eq!((length.value(), consumed), (300, 3));
    }

    #[test]
    fn test_ber_length_indefinite_rejected() {
        assert!(BerLength::decode(&[0x80]).is_err());
    }
}
