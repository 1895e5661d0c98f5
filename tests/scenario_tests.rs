//! Literal input/output scenarios, mirroring the worked examples used to
//! validate the codec's overhead and correctness claims.

mod common;

use common::TestSymbol;
use riblt::{Decoder, Encoder, Sketch};

fn reconcile(alice_only: &[u64], bob_only: &[u64], common_vals: &[u64]) -> (Decoder<TestSymbol>, usize) {
    let mut enc = Encoder::<TestSymbol>::new();
    let mut dec = Decoder::<TestSymbol>::new();

    for &v in alice_only {
        enc.add_symbol(TestSymbol(v)).unwrap();
    }
    for &v in bob_only {
        dec.add_symbol(TestSymbol(v)).unwrap();
    }
    for &v in common_vals {
        enc.add_symbol(TestSymbol(v)).unwrap();
        dec.add_symbol(TestSymbol(v)).unwrap();
    }

    let budget = 10 * (alice_only.len() + bob_only.len() + common_vals.len() + 20);
    let mut ncw = 0;
    while ncw < budget {
        dec.add_coded_symbol(enc.produce_next_coded_symbol());
        ncw += 1;
        dec.try_decode();
        if dec.decoded() {
            break;
        }
    }
    (dec, ncw)
}

#[test]
fn trivial_difference() {
    let alice_only = [2u64];
    let bob_only = [11u64];
    let common: Vec<u64> = (1..=10).filter(|&v| v != 2).collect();
    let (dec, ncw) = reconcile(&alice_only, &bob_only, &common);

    assert!(dec.decoded());
    assert!(ncw <= 4, "used {ncw} coded symbols");
    let remote: Vec<u64> = dec.remote().iter().map(|h| h.symbol.0).collect();
    let local: Vec<u64> = dec.local().iter().map(|h| h.symbol.0).collect();
    assert_eq!(remote, vec![2]);
    assert_eq!(local, vec![11]);
}

#[test]
fn identical_sets() {
    let common: Vec<u64> = (1..=1000).collect();
    let (dec, ncw) = reconcile(&[], &[], &common);

    assert_eq!(ncw, 1);
    assert!(dec.decoded());
    assert!(dec.remote().is_empty());
    assert!(dec.local().is_empty());
}

#[test]
fn fully_disjoint() {
    let alice: Vec<u64> = (0..100).collect();
    let bob: Vec<u64> = (100..200).collect();
    let (dec, _ncw) = reconcile(&alice, &bob, &[]);

    assert!(dec.decoded());
    assert_eq!(dec.remote().len(), 100);
    assert_eq!(dec.local().len(), 100);
    let mut remote: Vec<u64> = dec.remote().iter().map(|h| h.symbol.0).collect();
    let mut local: Vec<u64> = dec.local().iter().map(|h| h.symbol.0).collect();
    remote.sort_unstable();
    local.sort_unstable();
    assert_eq!(remote, alice);
    assert_eq!(local, bob);
}

#[test]
fn balanced_large_diff() {
    let alice_only: Vec<u64> = (0..100_000).collect();
    let bob_only: Vec<u64> = (100_000..200_000).collect();
    let common: Vec<u64> = (200_000..400_000).collect();
    let (dec, ncw) = reconcile(&alice_only, &bob_only, &common);

    assert!(dec.decoded());
    let bound = (1.45 * 200_000.0).ceil() as usize;
    assert!(ncw <= bound, "used {ncw} coded symbols, bound {bound}");
    assert_eq!(dec.remote().len(), 100_000);
    assert_eq!(dec.local().len(), 100_000);
}

#[test]
fn skewed_diff() {
    let alice_only = [42u64];
    let common: Vec<u64> = (0..100_000).collect();
    let (dec, ncw) = reconcile(&alice_only, &[], &common);

    assert!(dec.decoded());
    assert!(ncw <= 20, "used {ncw} coded symbols");
    let remote: Vec<u64> = dec.remote().iter().map(|h| h.symbol.0).collect();
    assert_eq!(remote, vec![42]);
    assert!(dec.local().is_empty());
}

#[test]
fn sketch_round_trip() {
    let alice_only: Vec<u64> = (0..15).collect();
    let bob_only: Vec<u64> = (1000..1015).collect();
    let common: Vec<u64> = (2000..2070).collect();

    let mut alice = alice_only.clone();
    alice.extend(&common);
    let mut bob = bob_only.clone();
    bob.extend(&common);

    let m = 100;
    let mut sketch_a = Sketch::<TestSymbol>::new(m);
    for &v in &alice {
        sketch_a.add_symbol(TestSymbol(v));
    }
    let mut sketch_b = Sketch::<TestSymbol>::new(m);
    for &v in &bob {
        sketch_b.add_symbol(TestSymbol(v));
    }

    sketch_b.subtract(&sketch_a).unwrap();
    // sketch_b.subtract(&sketch_a): remote == sketch_b \ sketch_a == bob_only,
    // local == sketch_a \ sketch_b == alice_only.
    let (remote, local, success) = sketch_b.decode();
    assert!(success);

    let mut remote_vals: Vec<u64> = remote.iter().map(|h| h.symbol.0).collect();
    let mut local_vals: Vec<u64> = local.iter().map(|h| h.symbol.0).collect();
    remote_vals.sort_unstable();
    local_vals.sort_unstable();
    assert_eq!(remote_vals, bob_only);
    assert_eq!(local_vals, alice_only);
}
