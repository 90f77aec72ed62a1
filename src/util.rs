use crate::{
    encoding::version_prefix::VersionPrefix,
    BigUint
};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Network {
    #[default]
    Bitcoin,
    Testnet
}

impl Network {
    /**
        Version byte used when exporting a private key in wallet import format.
    */
    pub fn wif_prefix(&self) -> VersionPrefix {
        match self {
            Network::Bitcoin => VersionPrefix::PrivateKeyWIF,
            Network::Testnet => VersionPrefix::TestNetPrivateKeyWIF
        }
    }

    /**
        Version byte used when encoding a P2PKH address.
    */
    pub fn address_prefix(&self) -> VersionPrefix {
        match self {
            Network::Bitcoin => VersionPrefix::BTCAddress,
            Network::Testnet => VersionPrefix::BTCTestNetAddress
        }
    }
}

/**
    Big-endian bytes of a number, left padded with zeros to at least `width` bytes.
*/
pub fn to_be_bytes_padded(value: &BigUint, width: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut padded = vec![0u8; width.saturating_sub(bytes.len())];
    padded.extend_from_slice(&bytes);
    padded
}
