use alloy_primitives::Address;

/// An ERC20 token as seen by liquidity and payment callers. The math core
/// never inspects it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub chain_id: u64,
    pub address: Address,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

impl Token {
    pub fn new(
        chain_id: u64,
        address: Address,
        decimals: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// Whether `self` is token0 of a pool paired with `other`, i.e. its
    /// address is numerically smaller.
    #[inline]
    pub fn sorts_before(&self, other: &Token) -> bool {
        self.address < other.address
    }
}

/// Returns the pair ordered as `(token0, token1)`.
pub fn sort_tokens<'a>(a: &'a Token, b: &'a Token) -> (&'a Token, &'a Token) {
    if a.sorts_before(b) { (a, b) } else { (b, a) }
}
