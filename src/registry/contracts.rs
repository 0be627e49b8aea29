//! Common Base mainnet contract addresses.
//!
//! Mainnet only - no sepolia support. Entries are keyed by the registry
//! symbol and kept in insertion order so miss messages stay stable.

use super::ContractEntry;

const fn token(
    key: &'static str,
    address: &'static str,
    decimals: u8,
    symbol: &'static str,
    name: &'static str,
) -> ContractEntry {
    ContractEntry {
        key,
        address,
        decimals: Some(decimals),
        symbol: Some(symbol),
        name,
        note: None,
        description: None,
        kind: None,
        category: None,
    }
}

const fn collection(
    key: &'static str,
    address: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
) -> ContractEntry {
    ContractEntry {
        key,
        address,
        decimals: None,
        symbol: None,
        name,
        note: None,
        description: Some(description),
        kind: Some("ERC-721"),
        category: Some(category),
    }
}

const fn infrastructure(
    key: &'static str,
    address: &'static str,
    name: &'static str,
    description: &'static str,
) -> ContractEntry {
    ContractEntry {
        key,
        address,
        decimals: None,
        symbol: None,
        name,
        note: None,
        description: Some(description),
        kind: None,
        category: None,
    }
}

pub static BASE_CONTRACTS: &[ContractEntry] = &[
    // native token (no contract address - use base.transactions for ETH transfers)
    ContractEntry {
        key: "ETH",
        address: "0x0000000000000000000000000000000000000000",
        decimals: Some(18),
        symbol: Some("ETH"),
        name: "Ether",
        note: Some("For native ETH transfers, query base.transactions.value field"),
        description: None,
        kind: None,
        category: None,
    },
    // tokens
    token("USDC", "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913", 6, "USDC", "USD Coin"),
    token("WETH", "0x4200000000000000000000000000000000000006", 18, "WETH", "Wrapped Ether"),
    token("DAI", "0x50c5725949a6f0c72e6c4a641f24049a917db0cb", 18, "DAI", "Dai Stablecoin"),
    token("CBBTC", "0xcbb7c0000ab88b473b1f5afd9ef808440eed33bf", 8, "cbBTC", "Coinbase Wrapped BTC"),
    token("WBTC", "0x0555e30da8f98308edb960aa94c0db47230d2b9c", 8, "WBTC", "Wrapped Bitcoin"),
    token("LINK", "0x88fb150bdc53a65fe94dea0c9ba0a6daf8c6e196", 18, "LINK", "Chainlink"),
    token("USDS", "0x820c137fa70c8691f0e44dc420a5e53c168921dc", 18, "USDS", "USDS Stablecoin"),
    token("weETH", "0x04c0599ae5a44757c0af6f9ec3b93da8976c150a", 18, "weETH", "Wrapped eETH"),
    token("USDe", "0x5d3a1ff2b6bab83b63cd9ad0787074081a52ef34", 18, "USDe", "Ethena USDe"),
    token("sUSDe", "0x211cc4dd073734da055fbf44a2b4667d5e5fe5d2", 18, "sUSDe", "Ethena Staked USDe"),
    token("AERO", "0x940181a94a35a4569e4529a3cdfb74e38fd98631", 18, "AERO", "Aerodrome Finance"),
    token("VIRTUAL", "0x0b3e328455c4059eeb9e3f84b5543f74e24e7e1b", 18, "VIRTUAL", "Virtuals Protocol"),
    token("AAVE", "0x63706e401c06ac8513145b7687a14804d17f814b", 18, "AAVE", "Aave"),
    token("CBETH", "0x2ae3f1ec7f1f5012cfeab0185bfc7aa3cf0dec22", 18, "cbETH", "Coinbase Wrapped Staked ETH"),
    token("EURC", "0x60a3e35cc302bfa44cb288bc5a4f316fdb1adb42", 6, "EURC", "Euro Coin"),
    token("ZRO", "0x6985884c4392d348587b19cb9eaaf157f13271cd", 18, "ZRO", "LayerZero"),
    token("ZORA", "0x1111111111166b7fe7bd91427724b487980afc69", 18, "ZORA", "Zora"),
    token("crvUSD", "0x417ac0e078398c154edfadd9ef675d30be60af93", 18, "crvUSD", "Curve USD"),
    token("W", "0xb0ffa8000886e57f86dd5264b9582b2ad87b2b91", 18, "W", "Wormhole"),
    token("BRETT", "0x532f27101965dd16442e59d40670faf5ebb142e4", 18, "BRETT", "Brett"),
    token("TOSHI", "0xac1bd2486aaf3b5c0fc3fd868558b082a531b2b4", 18, "TOSHI", "Toshi"),
    token("SUSHI", "0x7d49a065d17d6d4a55dc13649901fdbb98b2afba", 18, "SUSHI", "Sushi"),
    token("SNX", "0x22e6966b799c4d5b13be962e1d117b56327fda66", 18, "SNX", "Synthetix"),
    token("AXL", "0x23ee2343b892b1bb63503a4fabc840e0e2c6810f", 6, "AXL", "Axelar"),
    token("YFI", "0x9eaf8c1e34f05a589eda6bafdf391cf6ad3cb239", 18, "YFI", "yearn.finance"),
    token("COMP", "0x9e1028f5f1d5ede59748ffcee5532509976840e0", 18, "COMP", "Compound"),
    token("CRV", "0x8ee73c484a26e0a5df2ee2a4960b789967dd0415", 18, "CRV", "Curve DAO"),
    token("PENDLE", "0xa99f6e6785da0f5d6fb42495fe424bce029eeb3e", 18, "PENDLE", "Pendle"),
    token("ETHFI", "0x6c240dda6b5c336df09a4d011139beaaa1ea2aa2", 18, "ETHFI", "Ether.fi"),
    token("COW", "0xc694a91e6b071bf030a18bd3053a7fe09b6dae69", 18, "COW", "CoW Protocol"),
    token("DEGEN", "0x4ed4e862860bed51a9570b96d89af5e1b0efefed", 18, "DEGEN", "Degen"),
    token("CLANKER", "0x1bc0c42215582d5a085795f4badbac3ff36d1bcb", 18, "CLANKER", "tokenbot"),
    token("AIXBT", "0x4f9fd6be4a90f2620860d680c0d4d5fb53d1a825", 18, "AIXBT", "aixbt"),
    token("MOONWELL", "0xa88594d404727625a9437c3f886c7643872296ae", 18, "WELL", "Moonwell"),
    token("STG", "0xe3b53af74a4bf62ae5511055290838050bf764df", 18, "STG", "Stargate Finance"),
    token("BAL", "0x4158734d47fc9692176b5085e0f52ee0da5d47f1", 18, "BAL", "Balancer"),
    token("USDM", "0x59d9356e565ab3a36dd77763fc0d87feaf85508c", 18, "USDM", "Mountain Protocol USD"),
    token("TYBG", "0x0d97f261b1e88845184f678e2d1e7a98d9fd38de", 18, "TYBG", "TYBG"),
    token("JESSE", "0x50f88fe97f72cd3e75b9eb4f747f59bceba80d59", 18, "JESSE", "Jesse Pollak Creator Coin"),
    token("AYB", "0xb96cfc6f81f85c58a1eccdd9ec2ad940e2cb8453", 18, "AYB", "All Your Base"),
    token("MCADE", "0xc48823ec67720a04a9dfd8c7d109b2c3d6622094", 18, "MCADE", "Metacade"),
    token("CBXEN", "0xffcbf84650ce02dafe96926b37a0ac5e34932fa5", 18, "cbXEN", "cbXEN"),
    token("CBXRP", "0xcb585250f852c6c6bf90434ab21a00f02833a4af", 6, "cbXRP", "Coinbase Wrapped XRP"),
    token("USDT", "0xfde4c96c8593536e31f229ea8f37b2ada2699bb2", 6, "USDT", "Tether USD (Bridged)"),
    token("OLAS", "0x54330d28ca3357f294334bdc454a032e7f353416", 18, "OLAS", "Autonolas"),
    token("ALI", "0x97c806e7665d3afd84a8fe1837921403d59f3dcc", 18, "ALI", "Artificial Liquid Intelligence"),
    // NFT collections
    collection("BASENAMES", "0x03c4738ee98ae44591e1a4a4f3cab6641d95dd9a", "Basenames", "Base namespace registry", "Identity"),
    collection("BASED_FELLAS", "0x0d7e906bd9cafa154b048cfa766cc1e54e39af9b", "Based Fellas", "Popular Base PFP collection", "PFP"),
    collection("BASE_PUNKS", "0x9d0b65a76274645b29e4cc41b8f23081fa09f4a3", "Base Punks", "Base derivative of CryptoPunks", "PFP"),
    collection("ONCHAIN_SUMMER", "0x888888847d0f18e9bc85e9d4f58826b3e31db90f", "Onchain Summer", "Coinbase Onchain Summer collection", "Event"),
    collection("PARALLEL", "0x76be3b62873462d2142405439777e971754e8e77", "Parallel Alpha", "Parallel TCG cards on Base", "Gaming"),
    collection("ZORA_CREATES", "0x7777777777777777777777777777777777777777", "Zora Creates", "Zora NFT protocol on Base", "Protocol"),
    collection("BASE_GODS", "0x248d883d6e5659f971b4d17452605260c7d3bcfc", "Base Gods", "Base Gods NFT collection", "PFP"),
    // infrastructure
    infrastructure("L2_STANDARD_BRIDGE", "0x4200000000000000000000000000000000000010", "L2 Standard Bridge", "Bridge between Ethereum and Base"),
    infrastructure("BASE_SOLANA_BRIDGE", "0x3154cf16ccdb4c6d922629664174b904d80f2c35", "Base-Solana Bridge", "Bridge between Base and Solana (devnet-prod)"),
    infrastructure("EAS", "0x4200000000000000000000000000000000000021", "Ethereum Attestation Service", "On-chain attestations"),
    infrastructure("EAS_SCHEMA_REGISTRY", "0x4200000000000000000000000000000000000020", "EAS Schema Registry", "Attestation schema definitions"),
    // Coinbase verifications
    infrastructure("COINBASE_INDEXER", "0x2c7ee1e5f416dff40054c27a62f7b357c4e8619c", "Coinbase Attestation Indexer", "Indexes Coinbase-issued verifications"),
    infrastructure("COINBASE_ATTESTER", "0x357458739f90461b99789350868cd7cf330dd7ee", "Coinbase Attester", "Issues Coinbase verifications"),
];

/// Coinbase Verification schema ids (Base mainnet), surfaced through the
/// schema documentation payload.
pub struct VerificationSchema {
    pub key: &'static str,
    pub id: &'static str,
    pub description: &'static str,
    pub field: &'static str,
}

pub static COINBASE_VERIFICATION_SCHEMAS: &[VerificationSchema] = &[
    VerificationSchema {
        key: "VERIFIED_ACCOUNT",
        id: "0xf8b05c79f090979bf4a80270aba232dff11a10d9ca55c4f88de95317970f0de9",
        description: "User has a verified Coinbase trading account",
        field: "verifiedAccount (boolean)",
    },
    VerificationSchema {
        key: "VERIFIED_COUNTRY",
        id: "0x1801901fabd0e6189356b4fb52bb0ab855276d84f7ec140839fbd1f6801ca065",
        description: "User's verified country of residence",
        field: "verifiedCountry (string, ISO 3166-1 alpha-2)",
    },
    VerificationSchema {
        key: "COINBASE_ONE",
        id: "0x254bd1b63e0591fefa66818ca054c78627306f253f86be6023725a67ee6bf9f4",
        description: "User has active Coinbase One membership",
        field: "isCoinbaseOne (boolean)",
    },
];
