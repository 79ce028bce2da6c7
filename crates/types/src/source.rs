use cosmwasm_schema::cw_serde;

/// Flag bit identifying the native order book in source bitmasks.
pub const NATIVE_FLAG: u64 = 1 << 0;

/// On-chain venues whose price-impact curves the engine samples.
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum DexVenue {
    Osmosis,
    Astroport,
    /// Cross-chain routing aggregator. Its quotes are built on top of the
    /// other venues' pools, so its liquidity overlaps theirs.
    SkipGo,
}

impl DexVenue {
    pub const ALL: [DexVenue; 3] = [DexVenue::Osmosis, DexVenue::Astroport, DexVenue::SkipGo];

    /// Bit identifying this venue in source bitmasks.
    pub fn flag(&self) -> u64 {
        match self {
            DexVenue::Osmosis => 1 << 1,
            DexVenue::Astroport => 1 << 2,
            DexVenue::SkipGo => 1 << 3,
        }
    }

    /// Flag bits of venues economically redundant with this one. Filling a
    /// SkipGo route and a direct pool in the same path double-counts the
    /// pool's liquidity.
    pub fn conflicts(&self) -> u64 {
        match self {
            DexVenue::SkipGo => DexVenue::Osmosis.flag() | DexVenue::Astroport.flag(),
            DexVenue::Osmosis | DexVenue::Astroport => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DexVenue::Osmosis => "osmosis",
            DexVenue::Astroport => "astroport",
            DexVenue::SkipGo => "skip-go",
        }
    }
}
