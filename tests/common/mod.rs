//! A reference `Symbol` implementation shared by the integration tests and
//! benchmarks. Not part of the public API: applications bring their own hash
//! (spec §1), this is just a stand-in keyed the same way across every test
//! file so results are reproducible.

use std::hash::Hasher;

use riblt::Symbol;
use siphasher::sip::SipHasher24;

/// Fixed 128-bit key so every test run hashes identically; the specific
/// value carries no meaning beyond "not zero, not the default".
const KEY0: u64 = 0x5bd1_e995_1b87_3593;
const KEY1: u64 = 0xc2b2_ae3d_27d4_eb4f;

/// An 8-byte source symbol, the way the RLNC examples wrap a sequence
/// number: a newtype over the value, hashed with a keyed SipHash-2-4 rather
/// than anything the library itself dictates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
pub struct TestSymbol(pub u64);

impl Symbol for TestSymbol {
    fn xor(self, other: &Self) -> Self {
        TestSymbol(self.0 ^ other.0)
    }

    fn hash(&self) -> u64 {
        let mut h = SipHasher24::new_with_keys(KEY0, KEY1);
        h.write_u64(self.0);
        h.finish()
    }
}
