pub mod accumulator;
pub mod aggregator;
pub mod args;
pub mod decoder;
pub mod errors;
pub mod merge;

use crate::blockchain::coin_conditions::CoinConditions;
use crate::blockchain::npc_result::NPCResult;
use crate::blockchain::spend_bundle_conditions::SpendBundleConditions;
use crate::consensus::constants::ValidationConfig;
use crate::consensus::cost::CostMeter;
use crate::validation::accumulator::SpendAccumulator;
use crate::validation::aggregator::aggregate;
use crate::validation::decoder::decode_spend;
use crate::validation::errors::ValidationError;
use log::{info, warn};

/// Bundles smaller than this are validated on the calling thread even when
/// the parallel path is requested.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 8;

/// Validates a bundle's spends in order and summarizes them.
pub fn validate_spend_bundle(
    inputs: &[CoinConditions],
    config: &ValidationConfig,
) -> Result<SpendBundleConditions, ValidationError> {
    let meter = CostMeter::new(config.max_cost);
    let result = decode_all(inputs, config, &meter);
    log_outcome(inputs.len(), result)
}

fn decode_all(
    inputs: &[CoinConditions],
    config: &ValidationConfig,
    meter: &CostMeter,
) -> Result<SpendBundleConditions, ValidationError> {
    let mut accumulator = SpendAccumulator::with_capacity(inputs.len());
    for input in inputs {
        accumulator.push(decode_spend(input, config, meter)?)?;
    }
    aggregate(accumulator.into_spends(), meter.total())
}

/// Same result as [`validate_spend_bundle`] for every valid bundle, with one
/// rayon task per spend and a shared [`CostMeter`].
///
/// Results are gathered back into submission order before accumulation, so
/// errors are reported for the lowest failing index. A bundle that is invalid
/// in more than one way may report `CostExceeded` where the sequential path
/// would have stopped at an earlier spend's error.
#[cfg(feature = "parallel")]
pub fn validate_spend_bundle_parallel(
    inputs: &[CoinConditions],
    config: &ValidationConfig,
) -> Result<SpendBundleConditions, ValidationError> {
    use rayon::prelude::*;
    if inputs.len() < PARALLEL_THRESHOLD {
        return validate_spend_bundle(inputs, config);
    }
    let meter = CostMeter::new(config.max_cost);
    let decoded: Vec<_> = inputs
        .par_iter()
        .map(|input| decode_spend(input, config, &meter))
        .collect();
    let result = accumulate(decoded, &meter);
    log_outcome(inputs.len(), result)
}

#[cfg(feature = "parallel")]
fn accumulate(
    decoded: Vec<Result<decoder::DecodedSpend, ValidationError>>,
    meter: &CostMeter,
) -> Result<SpendBundleConditions, ValidationError> {
    let mut accumulator = SpendAccumulator::with_capacity(decoded.len());
    for spend in decoded {
        accumulator.push(spend?)?;
    }
    aggregate(accumulator.into_spends(), meter.total())
}

/// Runs validation and flattens the outcome into an [`NPCResult`].
#[must_use]
pub fn run_conditions(inputs: &[CoinConditions], config: &ValidationConfig) -> NPCResult {
    #[cfg(feature = "parallel")]
    let result = validate_spend_bundle_parallel(inputs, config);
    #[cfg(not(feature = "parallel"))]
    let result = validate_spend_bundle(inputs, config);
    result.into()
}

fn log_outcome(
    spend_count: usize,
    result: Result<SpendBundleConditions, ValidationError>,
) -> Result<SpendBundleConditions, ValidationError> {
    match &result {
        Ok(conds) => info!(
            "Validated bundle of {spend_count} spends: cost {}, fee {}, {} signatures",
            conds.cost,
            conds.reserve_fee,
            conds.signature_count()
        ),
        Err(e) => warn!("Rejected bundle of {spend_count} spends: {e}"),
    }
    result
}
