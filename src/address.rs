use log::debug;

use crate::{
    encoding::{Base58, VersionPrefix},
    error::{Error, Result},
    key::PubKey,
    util::Network
};

pub const ADDRESS_LEN: usize = 20;

/**
    Pay-to-public-key-hash address payload: Ripemd160( Sha256( public key ) ).
    The bytes are copied on the way in and on the way out.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ADDRESS_LEN {
            return Err(Error::InvalidArgument(
                format!("expected {} address bytes, found {}", ADDRESS_LEN, bytes.len())
            ));
        }

        let mut copy = [0u8; ADDRESS_LEN];
        copy.copy_from_slice(bytes);
        Ok(Self(copy))
    }

    /**
        Creates the address of a public key.
        `compressed` is passed straight to `PubKey::to_bytes` and carries the same (inverted) meaning.
    */
    pub fn from_pub_key(pk: &PubKey, compressed: bool) -> Self {
        Self(pk.hash160(compressed))
    }

    pub fn as_bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /**
        Mainnet Base58Check encoding (version 0x00).
    */
    pub fn to_base58(&self) -> String {
        self.to_base58_for(Network::Bitcoin)
    }

    pub fn to_base58_for(&self, network: Network) -> String {
        Base58::new(Some(network.address_prefix().to_byte()), &self.0).check_encode()
    }

    /**
        Parses a Base58Check P2PKH address for either network.
    */
    pub fn from_base58(address: &str) -> Result<(Self, Network)> {
        let (version, payload) = Base58::check_decode_versioned(address)?;

        let network = match VersionPrefix::from_byte(version) {
            Some(prefix @ VersionPrefix::BTCAddress) | Some(prefix @ VersionPrefix::BTCTestNetAddress) => prefix.network(),
            _ => {
                debug!("rejecting address with version byte {:#04x}", version);
                return Err(Error::InvalidArgument(format!("version byte {:#04x} is not a P2PKH prefix", version)));
            }
        };

        Ok((Self::from_slice(&payload)?, network))
    }

    /**
        Verifies that an address is valid by checking the prefix, payload length and checksum
    */
    pub fn is_valid(address: &str) -> bool {
        Self::from_base58(address).is_ok()
    }
}
