//! Published MODP groups. Supplied as-is; nothing here validates them.

use crate::crypto::DhParameters;

/// RFC 3526 group 14: 2048-bit safe prime, generator 2.
const RFC3526_GROUP14_P_HEX: &str = "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDEE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3BE39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF6955817183995497CEA956AE515D2261898FA051015728E5A8AACAA68FFFFFFFFFFFFFFFF";
const RFC3526_GROUP14_G: u8 = 2;

pub fn rfc3526_group14() -> DhParameters {
    let modulus = hex::decode(RFC3526_GROUP14_P_HEX).expect("group 14 modulus is valid hex");
    DhParameters::new(modulus, vec![RFC3526_GROUP14_G])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group14_is_2048_bits() {
        let params = rfc3526_group14();
        assert_eq!(params.modulus().len(), 256);
        assert_eq!(params.modulus()[0], 0xFF);
        assert_eq!(params.modulus()[255], 0xFF);
        assert_eq!(params.base(), &[0x02]);
    }

    #[test]
    fn group14_modulus_is_odd_and_canonical() {
        let params = rfc3526_group14();
        assert!(crate::encoding::is_canonical(params.modulus()));
        assert_eq!(params.modulus()[255] & 1, 1);
    }
}
