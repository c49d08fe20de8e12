use crate::consts::*;

/// Helper: convert a slice to a fixed-size array padded with zeros
pub fn padded_array<const N: usize>(input: &[u8]) -> [u8; N] {
    assert!(input.len() <= N, "input too long");
    let mut out = [0u8; N];
    out[..input.len()].copy_from_slice(input);
    out
}

/// Helper: convert a pool name to its fixed-size form
pub fn to_name(val: &str) -> [u8; MAX_NAME_LEN] {
    assert!(val.len() <= MAX_NAME_LEN, "name too long");
    padded_array::<MAX_NAME_LEN>(val.as_bytes())
}

/// Helper: convert a fixed-size name back to a string
pub fn from_name(val: &[u8; MAX_NAME_LEN]) -> String {
    let mut name_bytes = val.to_vec();
    name_bytes.retain(|&x| x != 0);
    String::from_utf8(name_bytes).unwrap()
}

/// Helper: convert an asset symbol to its fixed-size form
pub fn to_asset(val: &str) -> [u8; MAX_ASSET_LEN] {
    assert!(val.len() <= MAX_ASSET_LEN, "asset symbol too long");
    padded_array::<MAX_ASSET_LEN>(val.as_bytes())
}

/// Helper: convert a fixed-size asset symbol back to a string
pub fn from_asset(val: &[u8; MAX_ASSET_LEN]) -> String {
    let mut asset_bytes = val.to_vec();
    asset_bytes.retain(|&x| x != 0);
    String::from_utf8(asset_bytes).unwrap()
}
