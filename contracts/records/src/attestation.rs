use soroban_sdk::{crypto::Hash, Bytes, BytesN, Env};

/// The message attesters sign: `keccak256(data_hash ++ metadata_hash)`.
///
/// Covering the metadata hash stops a valid signature over a data hash from
/// being replayed against a record carrying different metadata.
pub fn root_hash(env: &Env, data_hash: &BytesN<32>, metadata_hash: &BytesN<32>) -> Hash<32> {
    let mut buf = Bytes::new(env);
    buf.extend_from_array(&data_hash.to_array());
    buf.extend_from_array(&metadata_hash.to_array());
    env.crypto().keccak256(&buf)
}

/// Recovers the uncompressed secp256k1 key that signed `root`.
///
/// `signature` is `r ++ s ++ v` with `v` in `{0, 1}` or `{27, 28}`; any other
/// `v` yields `None`. A well-formed signature over a different message
/// recovers an unrelated key. The host aborts on a malformed or high-S
/// signature.
pub fn recover_signer(env: &Env, root: &Hash<32>, signature: &BytesN<65>) -> Option<BytesN<65>> {
    let raw = signature.to_array();
    let recovery_id = match raw[64] {
        v @ 0..=1 => v,
        v @ 27..=28 => v - 27,
        _ => return None,
    };

    let mut rs = [0u8; 64];
    rs.copy_from_slice(&raw[..64]);
    let rs = BytesN::from_array(env, &rs);

    Some(
        env.crypto()
            .secp256k1_recover(root, &rs, u32::from(recovery_id)),
    )
}
