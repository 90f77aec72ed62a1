use log::{debug, trace};

use crate::{
    error::{Error, Result},
    hash
};

const BASE58_ALPHABET: &'static [u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const ENCODED_ZERO: u8 = b'1';

const CHECKSUM_LEN: usize = 4;

//Reverse lookup for the low 128 ASCII values, -1 marks characters outside the alphabet
const MAP_BASE58: [i8; 128] = [
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1, 0, 1, 2, 3, 4, 5, 6,  7, 8,-1,-1,-1,-1,-1,-1,
        -1, 9,10,11,12,13,14,15, 16,-1,17,18,19,20,21,-1,
        22,23,24,25,26,27,28,29, 30,31,32,-1,-1,-1,-1,-1,
        -1,33,34,35,36,37,38,39, 40,41,42,43,-1,44,45,46,
        47,48,49,50,51,52,53,54, 55,56,57,-1,-1,-1,-1,-1,
];


#[derive(Debug)]
pub struct Base58 {
    prefix: Option<u8>,
    payload: Vec<u8>
}

impl Base58 {
    pub fn new(prefix: Option<u8>, payload: &[u8]) -> Base58 {
        Base58 {
            prefix,
            payload: payload.to_vec()
        }
    }

    /// Check encode data by appending the checksum and then encoding it.
    pub fn check_encode(self) -> String {
        //Concatenate: prefix | payload | checksum
        let mut bytes = self.bytes();
        let checksum = hash::sha256d(&bytes);
        bytes.extend_from_slice(&checksum[0..CHECKSUM_LEN]);
        trace!("base58check framing {} bytes", bytes.len());

        //Prefix is none because it is already accounted for in the bytes
        Self::encode(Self { prefix: None, payload: bytes })
    }

    /// Encode data in base58 format.
    pub fn encode(self) -> String {
        let data = self.bytes();
        if data.is_empty() {
            return String::new();
        }

        //Every leading zero byte becomes exactly one '1'
        let zeros = data.iter().take_while(|x| **x == 0).count();

        //Treat the bytes as a big-endian number and divide it by 58 in place,
        //collecting the remainders least significant digit first.
        let mut number = data;
        let mut encoded: Vec<u8> = Vec::with_capacity(number.len() * 2);
        let mut start = zeros;
        while start < number.len() {
            let remainder = divmod(&mut number[start..], 256, 58);
            encoded.push(BASE58_ALPHABET[remainder as usize]);
            if number[start] == 0 {
                start += 1;
            }
        }

        //Drop zero digits produced by the division itself, then restore the leading zeros
        while encoded.last() == Some(&ENCODED_ZERO) {
            encoded.pop();
        }
        encoded.extend(std::iter::repeat(ENCODED_ZERO).take(zeros));

        encoded.iter().rev().map(|x| *x as char).collect()
    }

    /// Decodes a base58 string into a byte vector.
    /// DOES NOT remove the checksum or version prefix if present.
    pub fn decode(encoded: &str) -> Result<Vec<u8>> {
        //Map every character to its digit value
        let mut digits: Vec<u8> = Vec::with_capacity(encoded.len());
        for c in encoded.chars() {
            let digit = if (c as u32) < 128 { MAP_BASE58[c as usize] } else { -1 };
            if digit < 0 {
                debug!("rejecting base58 input with character {:?}", c);
                return Err(Error::InvalidBase58Character(c));
            }
            digits.push(digit as u8);
        }
        if digits.is_empty() {
            return Ok(Vec::new());
        }

        let zeros = digits.iter().take_while(|x| **x == 0).count();

        //Repeated division by 256 yields the bytes, least significant first
        let mut decoded: Vec<u8> = Vec::with_capacity(digits.len());
        let mut start = zeros;
        while start < digits.len() {
            decoded.push(divmod(&mut digits[start..], 58, 256));
            if digits[start] == 0 {
                start += 1;
            }
        }

        //Drop zero bytes produced by the division itself, then restore the leading zeros
        while decoded.last() == Some(&0) {
            decoded.pop();
        }
        decoded.extend(std::iter::repeat(0).take(zeros));
        decoded.reverse();

        Ok(decoded)
    }

    /// Checks if a base58 check encoded string is valid
    pub fn validate_checksum(encoded: &str) -> Result<bool> {
        let bytes = Base58::decode(encoded)?;
        let (data, checksum) = split_checksum(&bytes)?;

        //Check derived_checksum == extracted_checksum
        Ok(hash::sha256d(data)[0..CHECKSUM_LEN] == *checksum)
    }

    /// Returns the decoded payload with the checksum removed.
    /// Version prefix is NOT removed, callers strip it.
    pub fn check_decode(encoded: &str) -> Result<Vec<u8>> {
        let bytes = Base58::decode(encoded)?;
        let (data, checksum) = split_checksum(&bytes)?;

        if hash::sha256d(data)[0..CHECKSUM_LEN] != *checksum {
            debug!("base58check checksum mismatch");
            return Err(Error::ChecksumMismatch);
        }

        Ok(data.to_vec())
    }

    /// Check decodes and splits the single version byte off the payload.
    pub fn check_decode_versioned(encoded: &str) -> Result<(u8, Vec<u8>)> {
        let data = Self::check_decode(encoded)?;
        match data.split_first() {
            Some((version, payload)) => Ok((*version, payload.to_vec())),
            None => Err(Error::PayloadTooShort(0))
        }
    }

    //prefix | payload
    fn bytes(self) -> Vec<u8> {
        match self.prefix {
            Some(prefix) => {
                let mut bytes = Vec::with_capacity(self.payload.len() + 1);
                bytes.push(prefix);
                bytes.extend_from_slice(&self.payload);
                bytes
            },
            None => self.payload
        }
    }
}

/**
    Divides a big-endian number, given as digits in `base`, by `divisor` in place.
    Returns the remainder.
*/
fn divmod(number: &mut [u8], base: u32, divisor: u32) -> u8 {
    let mut remainder: u32 = 0;
    for digit in number.iter_mut() {
        let value = remainder * base + *digit as u32;
        *digit = (value / divisor) as u8;
        remainder = value % divisor;
    }

    remainder as u8
}

fn split_checksum(bytes: &[u8]) -> Result<(&[u8], &[u8])> {
    if bytes.len() < CHECKSUM_LEN {
        return Err(Error::PayloadTooShort(bytes.len()));
    }

    Ok(bytes.split_at(bytes.len() - CHECKSUM_LEN))
}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encode_hex(hex_str: &str) -> String {
        Base58::new(None, &hex::decode(hex_str).unwrap()).encode()
    }

    #[test]
    /// Tests encoding of data without checksum
    /// Sourced from https://tools.ietf.org/id/draft-msporny-base58-01.html
    fn base58_ietf_test_vectors() {
        let hello_world = b"Hello World!";
        let fox = b"The quick brown fox jumps over the lazy dog.";
        let int = [0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd];

        assert_eq!(Base58::new(None, hello_world).encode(), "2NEpo7TZRRrLZSi2U");
        assert_eq!(Base58::new(None, fox).encode(), "USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z");
        assert_eq!(Base58::new(None, &int).encode(), "11233QC4");
    }

    #[test]
    /// Sourced from the Bitcoin Core repository (https://github.com/bitcoin/bitcoin/blob/master/src/test/data/base58_encode_decode.json)
    fn base58_bitcoin_core_test_vectors() {
        let test_data: [(&str, &str); 13] = [
            ("", ""),
            ("61", "2g"),
            ("626262", "a3gV"),
            ("636363", "aPEr"),
            ("73696d706c792061206c6f6e6720737472696e67", "2cFupjhnEsSn59qHXstmK2ffpLv2"),
            ("00eb15231dfceb60925886b67d065299925915aeb172c06647", "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
            ("516b6fcd0f", "ABnLTmg"),
            ("bf4f89001e670274dd", "3SEo3LWLoPntC"),
            ("572e4794", "3EFU7m"),
            ("ecac89cad93923c02321", "EJDM8drfXA6uyA"),
            ("10c8511e", "Rt5zm"),
            ("00000000000000000000", "1111111111"),
            ("000111d38e5fc9071ffcd20b4a763cc9ae4f252bb4e48fd66a835e252ada93ff480d6dd43dc62a641155a5", "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz")
        ];

        for case in test_data {
            assert_eq!(encode_hex(case.0), case.1);
            assert_eq!(hex::encode(Base58::decode(case.1).unwrap()), case.0);
        }
    }

    #[test]
    fn leading_zero_bytes_become_ones() {
        for n in 0..=4 {
            let mut payload = vec![0u8; n];
            payload.extend_from_slice(&[0x3a, 0xff, 0x10]);
            let encoded = Base58::new(None, &payload).encode();

            let ones = encoded.chars().take_while(|c| *c == '1').count();
            assert_eq!(ones, n, "{} leading zeros encoded as {}", n, encoded);
            assert_eq!(Base58::decode(&encoded).unwrap(), payload);
        }
    }

    #[test]
    ///Address of the compressed public key 0250863ad6...
    fn base58_check_encode() {
        let hash160 = hex::decode("f54a5851e9372b87810a8e60cdd2e7cfd80b6e31").unwrap();
        let expected_address = "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs";
        let derived_address = Base58::new(Some(0x00), &hash160).check_encode();

        assert_eq!(expected_address, derived_address);
    }

    #[test]
    fn base58_check_decode() {
        let address = "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs";
        let decoded = Base58::check_decode(address).expect("Decode failed");

        assert_eq!(decoded[0], 0x00);
        assert_eq!(hex::encode(&decoded[1..]), "f54a5851e9372b87810a8e60cdd2e7cfd80b6e31");
        assert!(Base58::validate_checksum(address).unwrap());

        let (version, payload) = Base58::check_decode_versioned(address).unwrap();
        assert_eq!(version, 0x00);
        assert_eq!(payload, decoded[1..].to_vec());
    }

    #[test]
    fn altered_characters_fail_the_checksum() {
        let address = "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs";
        for i in 0..address.len() {
            let mut altered: Vec<char> = address.chars().collect();
            altered[i] = if altered[i] == '2' { '3' } else { '2' };
            let altered: String = altered.into_iter().collect();

            assert_eq!(Base58::check_decode(&altered), Err(Error::ChecksumMismatch), "position {}", i);
            assert_eq!(Base58::validate_checksum(&altered), Ok(false));
        }
    }

    #[test]
    fn invalid_characters_are_rejected() {
        for bad in ['0', 'O', 'I', 'l', ' ', '+', 'é'] {
            let input = format!("1PMyc{}acnJ", bad);
            assert_eq!(Base58::decode(&input), Err(Error::InvalidBase58Character(bad)));
            assert_eq!(Base58::check_decode(&input), Err(Error::InvalidBase58Character(bad)));
        }
    }

    #[test]
    fn short_input_is_rejected() {
        assert_eq!(Base58::check_decode(""), Err(Error::PayloadTooShort(0)));
        assert_eq!(Base58::check_decode("2g"), Err(Error::PayloadTooShort(1)));

        //Checksum of nothing: valid frame but no version byte
        let empty = Base58::new(None, &[]).check_encode();
        assert_eq!(Base58::check_decode(&empty), Ok(vec![]));
        assert_eq!(Base58::check_decode_versioned(&empty), Err(Error::PayloadTooShort(0)));
    }

    proptest! {
        #[test]
        fn check_round_trip(version in any::<u8>(), payload in proptest::collection::vec(any::<u8>(), 0..=64)) {
            let encoded = Base58::new(Some(version), &payload).check_encode();
            prop_assert_eq!(Base58::check_decode_versioned(&encoded), Ok((version, payload)));
        }

        #[test]
        fn plain_round_trip(data in proptest::collection::vec(any::<u8>(), 0..=80)) {
            let encoded = Base58::new(None, &data).encode();
            prop_assert_eq!(Base58::decode(&encoded), Ok(data));
        }
    }
}
