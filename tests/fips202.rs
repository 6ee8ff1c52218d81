//! Published FIPS 202 example digests and basic API properties.

use fips202::{sha3_224, sha3_256, sha3_384, sha3_512, Algorithm, Sha3};

fn digest_of(algorithm: Algorithm, message: &[u8]) -> Vec<u8> {
    let mut ctx = Sha3::new(algorithm);
    ctx.update(message);
    let mut digest = vec![0u8; algorithm.digest_size()];
    ctx.finalize_into(&mut digest).unwrap();
    digest
}

#[test]
fn empty_message() {
    assert_eq!(
        sha3_224(b"").to_vec(),
        hex::decode("6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7").unwrap()
    );
    assert_eq!(
        sha3_256(b"").to_vec(),
        hex::decode("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a").unwrap()
    );
    assert_eq!(
        sha3_384(b"").to_vec(),
        hex::decode(
            "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004"
        )
        .unwrap()
    );
    assert_eq!(
        sha3_512(b"").to_vec(),
        hex::decode(
            "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
        )
        .unwrap()
    );
}

#[test]
fn abc() {
    assert_eq!(
        sha3_224(b"abc").to_vec(),
        hex::decode("e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf").unwrap()
    );
    assert_eq!(
        sha3_256(b"abc").to_vec(),
        hex::decode("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532").unwrap()
    );
    assert_eq!(
        sha3_384(b"abc").to_vec(),
        hex::decode(
            "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25"
        )
        .unwrap()
    );
    assert_eq!(
        sha3_512(b"abc").to_vec(),
        hex::decode(
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eee9f31"
        )
        .unwrap()
    );
}

#[test]
fn streaming_matches_one_shot() {
    let message = b"The quick brown fox jumps over the lazy dog";
    assert_eq!(
        digest_of(Algorithm::Sha3_224, message),
        sha3_224(message).to_vec()
    );
    assert_eq!(
        digest_of(Algorithm::Sha3_256, message),
        sha3_256(message).to_vec()
    );
    assert_eq!(
        digest_of(Algorithm::Sha3_384, message),
        sha3_384(message).to_vec()
    );
    assert_eq!(
        digest_of(Algorithm::Sha3_512, message),
        sha3_512(message).to_vec()
    );
}

#[test]
fn digest_sizes() {
    for (algorithm, size) in [
        (Algorithm::Sha3_224, 28),
        (Algorithm::Sha3_256, 32),
        (Algorithm::Sha3_384, 48),
        (Algorithm::Sha3_512, 64),
    ] {
        assert_eq!(algorithm.digest_size(), size);
        for len in [0, 1, 17, 200, 500] {
            let message = vec![0x5au8; len];
            assert_eq!(digest_of(algorithm, &message).len(), size);
        }
    }
}

#[test]
fn fresh_contexts_are_deterministic() {
    let message = b"determinism check";
    for algorithm in [
        Algorithm::Sha3_224,
        Algorithm::Sha3_256,
        Algorithm::Sha3_384,
        Algorithm::Sha3_512,
    ] {
        assert_eq!(digest_of(algorithm, message), digest_of(algorithm, message));
    }
}
