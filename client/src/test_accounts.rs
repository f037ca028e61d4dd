//! Deterministic keypairs for the demos and local validator runs.
//!
//! The pubkeys have recognizable prefixes so they stand out in explorer and log output.

use std::sync::LazyLock;

use solana_sdk::signature::Keypair;

/// Holds the item before a transfer or listing. Pubkey: 1118YLQaVU9DUhQjwphJukpKDSNMAiJSdvZfv8KY5Yi
pub static SELLER: LazyLock<Keypair> = LazyLock::new(|| {
    Keypair::from_base58_string(
        "65ZPkM5c2CuLcvozaVw5CRgKs9C8yHSociK85kUezr7oFCfhsK4CsFXGznEbvtn51NWdx6M33Q4o4fMBT8px6mDQ",
    )
});

/// Pubkey: 222bXXFW4c2UFBRncmEvkGLmQqLGwWBFBNJPx373Kc87
pub static RECEIVER: LazyLock<Keypair> = LazyLock::new(|| {
    Keypair::from_base58_string(
        "wuDnL8tvfZdoxUS3fSyuQ9CLrYjuGAAef1FYVYJumeBXnspD3193PWUVubSgB3nNo9LUbv3MzcdeGTykkq6RKBV",
    )
});

/// Pubkey: 333zv4y5CzyYfe84xjGWiWmqsoe966bsBsqM9PVXGtU8
pub static BUYER: LazyLock<Keypair> = LazyLock::new(|| {
    Keypair::from_base58_string(
        "31oK1X2TzwmXzLq98mQwBzknCtX8LY57jYmidSFLi5Ftivhb57WRUF9idjuDAyHacycXeVx9HwSvNceh6Z6sSeHE",
    )
});

#[test]
fn check_test_keys() {
    use solana_sdk::signer::Signer;

    assert_eq!(
        SELLER.pubkey().to_string(),
        "1118YLQaVU9DUhQjwphJukpKDSNMAiJSdvZfv8KY5Yi"
    );
    assert_eq!(
        RECEIVER.pubkey().to_string(),
        "222bXXFW4c2UFBRncmEvkGLmQqLGwWBFBNJPx373Kc87"
    );
    assert_eq!(
        BUYER.pubkey().to_string(),
        "333zv4y5CzyYfe84xjGWiWmqsoe966bsBsqM9PVXGtU8"
    );
}
