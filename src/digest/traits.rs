use bytes::BufMut;

pub trait Algorithm {
    type Digester: Digester;

    fn digester(&self) -> Self::Digester;

    fn digest_length(&self) -> usize;

    /// Digests `bytes` in one call, same as streaming them through a fresh digester.
    fn oneshot(&self, bytes: &[u8], buf: &mut impl BufMut) {
        let mut digester = self.digester();
        digester.update(bytes);
        digester.digest(buf);
    }
}

pub trait Digester {
    fn update(&mut self, bytes: &[u8]);

    /// Writes exactly [Digester::digest_length] bytes.
    fn digest(self, buf: &mut impl BufMut);

    fn digest_length(&self) -> usize;
}

/// Digester whose output can be read past its configured digest length.
pub trait ExtendableDigester: Digester {
    type Reader;

    fn finalize_xof(self) -> Self::Reader;
}
