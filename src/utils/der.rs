//! Minimal DER reading for public key material
//!
//! `ring`'s PKCS#1 verification algorithms take a DER `RSAPublicKey`, while
//! PEM public keys carry a `SubjectPublicKeyInfo` wrapper. This module
//! unwraps the SPKI structure: SEQUENCE { AlgorithmIdentifier, BIT STRING
//! holding the RSAPublicKey }.

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn read_length(&mut self) -> Option<usize> {
        let first = self.read_byte()?;
        if first < 0x80 {
            return Some(first as usize);
        }
        let count = (first & 0x7f) as usize;
        if count == 0 || count > 4 {
            return None;
        }
        let mut len = 0usize;
        for _ in 0..count {
            len = (len << 8) | self.read_byte()? as usize;
        }
        Some(len)
    }

    /// Read one tag-length-value element, returning its contents
    fn read_element(&mut self, tag: u8) -> Option<&'a [u8]> {
        if self.read_byte()? != tag {
            return None;
        }
        let len = self.read_length()?;
        let contents = self.data.get(self.pos..self.pos + len)?;
        self.pos += len;
        Some(contents)
    }
}

/// Extract the DER `RSAPublicKey` from a `SubjectPublicKeyInfo`
pub fn rsa_public_key_from_spki(spki: &[u8]) -> Option<Vec<u8>> {
    let mut outer = Reader::new(spki);
    let spki_contents = outer.read_element(0x30)?;

    let mut inner = Reader::new(spki_contents);
    inner.read_element(0x30)?; // AlgorithmIdentifier, not interpreted
    let bit_string = inner.read_element(0x03)?;

    let (&unused_bits, key) = bit_string.split_first()?;
    if unused_bits != 0 {
        return None;
    }
    Some(key.to_vec())
}
