use crate::util::Network;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrefix {
    BTCAddress = 0x00,
    BTCTestNetAddress = 0x6F,
    PrivateKeyWIF = 0x80,
    TestNetPrivateKeyWIF = 0xEF
}

impl VersionPrefix {
    pub fn to_byte(&self) -> u8 {
        *self as u8
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0x00 => Self::BTCAddress,
            0x6F => Self::BTCTestNetAddress,
            0x80 => Self::PrivateKeyWIF,
            0xEF => Self::TestNetPrivateKeyWIF,
            _ => return None
        })
    }

    /**
        The network a prefix belongs to.
    */
    pub fn network(&self) -> Network {
        match self {
            Self::BTCAddress | Self::PrivateKeyWIF => Network::Bitcoin,
            Self::BTCTestNetAddress | Self::TestNetPrivateKeyWIF => Network::Testnet
        }
    }
}

impl From<VersionPrefix> for u8 {
    fn from(prefix: VersionPrefix) -> u8 {
        prefix.to_byte()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_map_back_to_themselves() {
        for prefix in [
            VersionPrefix::BTCAddress,
            VersionPrefix::BTCTestNetAddress,
            VersionPrefix::PrivateKeyWIF,
            VersionPrefix::TestNetPrivateKeyWIF
        ] {
            assert_eq!(VersionPrefix::from_byte(prefix.to_byte()), Some(prefix));
        }
        assert_eq!(VersionPrefix::from_byte(0x05), None);
    }

    #[test]
    fn prefixes_know_their_network() {
        assert_eq!(VersionPrefix::PrivateKeyWIF.network(), Network::Bitcoin);
        assert_eq!(VersionPrefix::TestNetPrivateKeyWIF.network(), Network::Testnet);
        assert_eq!(Network::Testnet.address_prefix(), VersionPrefix::BTCTestNetAddress);
        assert_eq!(Network::Bitcoin.wif_prefix().to_byte(), 0x80);
    }
}
