/// Number of random bytes drawn for a private key by default (4096-bit space).
pub const DEFAULT_PRIVATE_KEY_LEN: usize = 512;

/// How many random bytes a freshly generated private key gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivateKeyWidth {
    /// Always draw this many bytes, whatever the modulus size.
    Fixed(usize),
    /// Draw as many bytes as the modulus occupies in canonical form.
    MatchModulus,
}

impl Default for PrivateKeyWidth {
    fn default() -> Self {
        PrivateKeyWidth::Fixed(DEFAULT_PRIVATE_KEY_LEN)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DhConfig {
    pub private_key_width: PrivateKeyWidth,
}

impl DhConfig {
    pub fn with_private_key_width(private_key_width: PrivateKeyWidth) -> Self {
        Self { private_key_width }
    }

    /// Resolves the private key length for a modulus of `modulus_len`
    /// canonical bytes. Never returns zero.
    pub fn private_key_len(&self, modulus_len: usize) -> usize {
        let len = match self.private_key_width {
            PrivateKeyWidth::Fixed(len) => len,
            PrivateKeyWidth::MatchModulus => modulus_len,
        };
        len.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fixed_512() {
        let config = DhConfig::default();
        assert_eq!(config.private_key_width, PrivateKeyWidth::Fixed(512));
        assert_eq!(config.private_key_len(1), 512);
        assert_eq!(config.private_key_len(256), 512);
    }

    #[test]
    fn match_modulus_follows_modulus_size() {
        let config = DhConfig::with_private_key_width(PrivateKeyWidth::MatchModulus);
        assert_eq!(config.private_key_len(256), 256);
        assert_eq!(config.private_key_len(0), 1);
    }

    #[test]
    fn zero_fixed_width_is_clamped() {
        let config = DhConfig::with_private_key_width(PrivateKeyWidth::Fixed(0));
        assert_eq!(config.private_key_len(256), 1);
    }
}
