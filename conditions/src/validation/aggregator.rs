use crate::blockchain::condition_opcode::ConditionOpcode;
use crate::blockchain::spend_bundle_conditions::SpendBundleConditions;
use crate::validation::decoder::DecodedSpend;
use crate::validation::errors::ValidationError;
use crate::validation::merge::{is_impossible, merge_after_or_zero, merge_before_opt};

/// Folds decoded spends, in submission order, into the bundle summary.
///
/// Absolute "after" locks keep the maximum, "before" locks the minimum. Fees
/// and coin amounts are summed with overflow checks. Whether additions exceed
/// removals is left to the caller.
pub fn aggregate(
    decoded: Vec<DecodedSpend>,
    cost: u64,
) -> Result<SpendBundleConditions, ValidationError> {
    let mut conds = SpendBundleConditions {
        spends: Vec::with_capacity(decoded.len()),
        cost,
        ..Default::default()
    };
    for d in decoded {
        conds.height_absolute = merge_after_or_zero(conds.height_absolute, d.height_absolute);
        conds.seconds_absolute = merge_after_or_zero(conds.seconds_absolute, d.seconds_absolute);
        conds.before_height_absolute =
            merge_before_opt(conds.before_height_absolute, d.before_height_absolute);
        conds.before_seconds_absolute =
            merge_before_opt(conds.before_seconds_absolute, d.before_seconds_absolute);
        conds.reserve_fee =
            conds
                .reserve_fee
                .checked_add(d.reserve_fee)
                .ok_or(ValidationError::FeeOverflow {
                    coin_id: d.spend.coin_id,
                })?;
        conds.removal_amount = conds
            .removal_amount
            .checked_add(u128::from(d.spend.coin_amount))
            .ok_or_else(|| ValidationError::AmountOverflow {
                coin_id: None,
                amount: "removals".to_string(),
            })?;
        conds.addition_amount = conds
            .addition_amount
            .checked_add(d.spend.addition_amount())
            .ok_or_else(|| ValidationError::AmountOverflow {
                coin_id: Some(d.spend.coin_id),
                amount: "additions".to_string(),
            })?;
        conds.agg_sig_unsafe.extend(d.agg_sig_unsafe);
        conds.spends.push(d.spend);
    }
    if is_impossible(
        Some(conds.height_absolute),
        conds.before_height_absolute,
    ) {
        return Err(ValidationError::ImpossibleConstraint {
            coin_id: None,
            opcode: ConditionOpcode::AssertBeforeHeightAbsolute,
        });
    }
    if is_impossible(
        Some(conds.seconds_absolute),
        conds.before_seconds_absolute,
    ) {
        return Err(ValidationError::ImpossibleConstraint {
            coin_id: None,
            opcode: ConditionOpcode::AssertBeforeSecondsAbsolute,
        });
    }
    Ok(conds)
}
