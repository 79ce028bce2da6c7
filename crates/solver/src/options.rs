use fillroute_types::DexVenue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::RouteError;

/// Tuning knobs for a single routing call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterOptions {
    /// Hard cap on optimizer search steps
    #[serde(default = "default_run_limit")]
    pub run_limit: u32,

    /// Venues excluded from sampling and search
    #[serde(default)]
    pub excluded_venues: Vec<DexVenue>,

    /// Safety margin applied to the weaker side of synthesized orders
    #[serde(default = "default_slippage_buffer")]
    pub slippage_buffer: Decimal,

    /// Fraction of the target below which native fills are dropped
    #[serde(default = "default_dust_fraction")]
    pub dust_fraction: Decimal,

    /// Number of cumulative price samples requested per venue
    #[serde(default = "default_num_samples")]
    pub num_samples: usize,

    /// Keep mutually redundant venues out of the same path
    #[serde(default)]
    pub no_conflicts: bool,
}

fn default_run_limit() -> u32 {
    1024
}

/// 0.05%
fn default_slippage_buffer() -> Decimal {
    Decimal::new(5, 4)
}

/// 1%
fn default_dust_fraction() -> Decimal {
    Decimal::new(1, 2)
}

fn default_num_samples() -> usize {
    8
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            run_limit: default_run_limit(),
            excluded_venues: Vec::new(),
            slippage_buffer: default_slippage_buffer(),
            dust_fraction: default_dust_fraction(),
            num_samples: default_num_samples(),
            no_conflicts: false,
        }
    }
}

impl RouterOptions {
    /// Venues to sample after exclusions.
    pub fn active_venues(&self) -> Vec<DexVenue> {
        DexVenue::ALL
            .iter()
            .copied()
            .filter(|venue| !self.excluded_venues.contains(venue))
            .collect()
    }

    pub fn validate(&self) -> Result<(), RouteError> {
        if self.num_samples == 0 {
            return Err(RouteError::InvalidOptions {
                reason: "num_samples must be positive".to_string(),
            });
        }
        if self.slippage_buffer < Decimal::ZERO || self.slippage_buffer >= Decimal::ONE {
            return Err(RouteError::InvalidOptions {
                reason: format!("slippage_buffer {} outside [0, 1)", self.slippage_buffer),
            });
        }
        if self.dust_fraction < Decimal::ZERO || self.dust_fraction >= Decimal::ONE {
            return Err(RouteError::InvalidOptions {
                reason: format!("dust_fraction {} outside [0, 1)", self.dust_fraction),
            });
        }
        Ok(())
    }
}
