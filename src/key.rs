/*
    Private and public keys.

    A private key is a scalar in [1, n). Its public key is the generator
    point multiplied by that scalar. Private keys are read from and written
    to decimal, hexadecimal and wallet import format text.
*/

use log::debug;

use crate::{
    address::Address,
    curve::{field, CurveParams, Point, SECP256K1},
    encoding::Base58,
    error::{Error, Result},
    hash,
    util::{to_be_bytes_padded, Network},
    BigUint, Num, OsRng, RandBigInt, Zero
};

pub const PRIVATE_KEY_LEN: usize = 32;

const COORDINATE_LEN: usize = 32;

//Trailing byte of a WIF payload whose public key is used in compressed form
const WIF_COMPRESSION_FLAG: u8 = 0x01;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrivKey(BigUint);

impl PrivKey {
    /**
        Wraps a scalar, which must lie in [1, n) for the secp256k1 order n.
    */
    pub fn new(value: BigUint) -> Result<Self> {
        if value.is_zero() {
            return Err(Error::InvalidArgument("private key must be positive".to_string()));
        }
        if value >= SECP256K1.order {
            return Err(Error::InvalidArgument("private key must be below the curve order".to_string()));
        }

        Ok(Self(value))
    }

    /**
        Generates a uniformly random key using OsRng as the entropy source.
    */
    pub fn new_rand() -> Self {
        let value = OsRng.gen_biguint_range(&BigUint::from(1u32), &SECP256K1.order);
        Self(value)
    }

    /**
        Use a predefined big-endian byte array as a private key.
    */
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(Error::InvalidArgument(
                format!("expected {} private key bytes, found {}", PRIVATE_KEY_LEN, bytes.len())
            ));
        }

        Self::new(BigUint::from_bytes_be(bytes))
    }

    pub fn from_dec_str(dec: &str) -> Result<Self> {
        Self::new(parse_number(dec, 10)?)
    }

    /**
        Parses unprefixed hexadecimal digits in either case.
    */
    pub fn from_hex_str(hex: &str) -> Result<Self> {
        Self::new(parse_number(hex, 16)?)
    }

    /**
        Import a private key from wallet import format.

        The first character identifies the network and whether the key is flagged as compressed:
        'K' and 'L' mainnet compressed, '5' mainnet, 'c' testnet compressed, '9' testnet.
    */
    pub fn from_wif(wif: &str) -> Result<Self> {
        let (network, compressed) = wif_marker(wif)?;
        let data = Base58::check_decode(wif)?;

        let (version, key) = match data.split_first() {
            Some(x) => x,
            None => return Err(Error::InvalidWifFormat("empty payload".to_string()))
        };
        if *version != network.wif_prefix().to_byte() {
            return Err(Error::InvalidWifFormat(
                format!("version byte {:#04x} does not match {:?}", version, network)
            ));
        }

        let key = if compressed {
            match key.split_last() {
                Some((&WIF_COMPRESSION_FLAG, key)) => key,
                _ => return Err(Error::InvalidWifFormat("missing compression flag".to_string()))
            }
        } else {
            key
        };
        if key.len() != PRIVATE_KEY_LEN {
            return Err(Error::InvalidWifFormat(
                format!("expected {} key bytes, found {}", PRIVATE_KEY_LEN, key.len())
            ));
        }

        debug!("imported {:?} private key from wif (compressed: {})", network, compressed);
        Self::from_slice(key)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /**
        Serializes the private key into 32 big-endian bytes.
    */
    pub fn as_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        let mut bytes = [0u8; PRIVATE_KEY_LEN];
        bytes.copy_from_slice(&to_be_bytes_padded(&self.0, PRIVATE_KEY_LEN));
        bytes
    }

    pub fn to_dec_string(&self) -> String {
        self.0.to_str_radix(10)
    }

    /**
        Lower case hexadecimal without leading zeros.
    */
    pub fn to_hex_string(&self) -> String {
        self.0.to_str_radix(16)
    }

    /**
        Export the private key in wallet-import-format (Base58Check encoded with prefix).
        * Use `compressed` to append the compression flag byte.
    */
    pub fn to_wif(&self, compressed: bool, network: Network) -> String {
        let mut key: Vec<u8> = self.as_bytes().to_vec();
        if compressed {
            key.push(WIF_COMPRESSION_FLAG);
        }

        Base58::new(Some(network.wif_prefix().to_byte()), &key).check_encode()
    }

    /**
        The public key on secp256k1, G multiplied k times where k is the private key.
    */
    pub fn pub_key(&self) -> Result<PubKey> {
        self.pub_key_with(&SECP256K1)
    }

    /**
        The public key for an explicit set of curve parameters.
    */
    pub fn pub_key_with(&self, params: &CurveParams) -> Result<PubKey> {
        debug!("deriving public key");
        let point = params.generator.mul(&self.0)?;
        PubKey::try_from(point)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PubKey {
    x: BigUint,
    y: BigUint
}

impl PubKey {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /**
        Finds the public key of a private key on secp256k1.
    */
    pub fn from_priv_key(k: &PrivKey) -> Result<Self> {
        k.pub_key()
    }

    /**
        Parses a SEC encoded secp256k1 public key.
        Accepts 65 byte 04 || X || Y and 33 byte 02/03 || X, recovering Y from the curve equation.
    */
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let curve = &SECP256K1.curve;
        let point = match (bytes.first(), bytes.len()) {
            (Some(0x04), 65) => {
                let x = BigUint::from_bytes_be(&bytes[1..33]);
                let y = BigUint::from_bytes_be(&bytes[33..65]);
                Point::new(curve.clone(), x, y)?
            },
            (Some(prefix @ (0x02 | 0x03)), 33) => {
                let x = BigUint::from_bytes_be(&bytes[1..33]);
                if &x >= curve.p() {
                    return Err(Error::InvalidArgument("x coordinate is not reduced modulo p".to_string()));
                }

                let p = curve.p();
                let rhs = field::add(&field::mul(&field::mul(&x, &x, p), &x, p), curve.b(), p);
                let rhs = field::add(&rhs, &field::mul(curve.a(), &x, p), p);
                let y = match field::sqrt(&rhs, p) {
                    Some(y) => y,
                    None => return Err(Error::InvalidArgument("x coordinate is not on the curve".to_string()))
                };

                let want_odd = *prefix == 0x03;
                let y = if y.bit(0) == want_odd { y } else { field::neg(&y, p) };
                Point::new(curve.clone(), x, y)?
            },
            _ => return Err(Error::InvalidArgument(format!("unrecognised public key encoding of {} bytes", bytes.len())))
        };

        PubKey::try_from(point)
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /**
        The key as a point on the given curve, validating that it lies on it.
    */
    pub fn to_point(&self, params: &CurveParams) -> Result<Point> {
        Point::new(params.curve.clone(), self.x.clone(), self.y.clone())
    }

    /**
        Serializes the public key.

        NOTE: the flag is inverted relative to SEC terminology. `compressed == true` emits the
        65 byte uncompressed form 04 || X || Y, `false` emits 02 || X (even Y) or 03 || X (odd Y).
        This looks like a historical naming bug but is kept so the flag selects the same
        form as before. Coordinates are left padded to 32 bytes as standard SEC encoding requires.
    */
    pub fn to_bytes(&self, compressed: bool) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + 2 * COORDINATE_LEN);
        if compressed {
            bytes.push(0x04);
            bytes.extend_from_slice(&to_be_bytes_padded(&self.x, COORDINATE_LEN));
            bytes.extend_from_slice(&to_be_bytes_padded(&self.y, COORDINATE_LEN));
        } else {
            bytes.push(if self.y.bit(0) { 0x03 } else { 0x02 });
            bytes.extend_from_slice(&to_be_bytes_padded(&self.x, COORDINATE_LEN));
        }
        bytes
    }

    /**
        The serialized key read as one unsigned integer.
    */
    pub fn to_integer(&self, compressed: bool) -> BigUint {
        BigUint::from_bytes_be(&self.to_bytes(compressed))
    }

    /**
        "(X,Y)" with lower case hexadecimal coordinates.
    */
    pub fn to_hex_string(&self) -> String {
        format!("({},{})", self.x.to_str_radix(16), self.y.to_str_radix(16))
    }

    pub fn to_dec_string(&self) -> String {
        format!("({},{})", self.x.to_str_radix(10), self.y.to_str_radix(10))
    }

    /**
        Ripemd160( Sha256( serialized key ) ), see `to_bytes` for the meaning of the flag.
    */
    pub fn hash160(&self, compressed: bool) -> [u8; 20] {
        hash::hash160(self.to_bytes(compressed))
    }

    pub fn to_address(&self, compressed: bool) -> Address {
        Address::from_pub_key(self, compressed)
    }
}

impl TryFrom<Point> for PubKey {
    type Error = Error;

    fn try_from(point: Point) -> Result<Self> {
        match point {
            Point::Affine { x, y, curve } => {
                if &x >= curve.p() || &y >= curve.p() || !curve.contains(&x, &y) {
                    return Err(Error::InvalidArgument("point is not on its curve".to_string()));
                }
                Ok(PubKey::new(x, y))
            },
            Point::Infinity => Err(Error::InvalidArgument("the point at infinity is not a public key".to_string()))
        }
    }
}

/**
    Reads network and compression from the first character of a WIF string.
*/
fn wif_marker(wif: &str) -> Result<(Network, bool)> {
    match wif.chars().next() {
        Some('K') | Some('L') => Ok((Network::Bitcoin, true)),
        Some('5') => Ok((Network::Bitcoin, false)),
        Some('c') => Ok((Network::Testnet, true)),
        Some('9') => Ok((Network::Testnet, false)),
        Some(c) => Err(Error::InvalidWifFormat(format!("unrecognised leading character {:?}", c))),
        None => Err(Error::InvalidWifFormat("empty string".to_string()))
    }
}

/**
    Strict number parsing: digits of the radix only, no sign, prefix or separators.
*/
fn parse_number(text: &str, radix: u32) -> Result<BigUint> {
    if text.is_empty() || !text.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::MalformedNumber(format!("{:?} is not a base {} number", text, radix)));
    }

    BigUint::from_str_radix(text, radix)
        .map_err(|e| Error::MalformedNumber(e.to_string()))
}
