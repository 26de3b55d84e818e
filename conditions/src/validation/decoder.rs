use crate::blockchain::coin_conditions::CoinConditions;
use crate::blockchain::condition_opcode::ConditionOpcode;
use crate::blockchain::condition_with_args::ConditionWithArgs;
use crate::blockchain::sized_bytes::Bytes32;
use crate::blockchain::spend::{AggSigPair, NewCoin, Spend, ASSERT_EPHEMERAL_FLAG};
use crate::consensus::constants::{
    ValidationConfig, COND_CANON_INTS, ENABLE_SOFTFORK_CONDITION, STRICT_ARGS_COUNT,
};
use crate::consensus::cost::CostMeter;
use crate::validation::args::{display_int, ConditionArgs, SanitizedUint};
use crate::validation::errors::ValidationError;
use crate::validation::merge::{
    is_impossible, merge_after, merge_after_or_zero, merge_before,
};
use log::debug;
use std::collections::HashSet;

const MAX_U32: u64 = u32::MAX as u64;

/// One decoded spend plus the values it contributes to the bundle as a whole.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DecodedSpend {
    pub spend: Spend,
    pub reserve_fee: u64,
    pub height_absolute: u32,
    pub seconds_absolute: u64,
    pub before_height_absolute: Option<u32>,
    pub before_seconds_absolute: Option<u64>,
    pub agg_sig_unsafe: Vec<AggSigPair>,
}
impl DecodedSpend {
    fn new(spend: Spend) -> Self {
        Self {
            spend,
            reserve_fee: 0,
            height_absolute: 0,
            seconds_absolute: 0,
            before_height_absolute: None,
            before_seconds_absolute: None,
            agg_sig_unsafe: vec![],
        }
    }
}

/// Decodes and validates the conditions of a single coin.
///
/// The interpreter's execution cost and the per-byte program cost are charged
/// first. Each condition's bytes, then its weight, are charged before it is
/// decoded, so the ceiling bounds the work done even for conditions whose
/// weight is zero. A charge crossing the ceiling, or another worker having
/// crossed it, stops decoding immediately.
pub fn decode_spend(
    input: &CoinConditions,
    config: &ValidationConfig,
    meter: &CostMeter,
) -> Result<DecodedSpend, ValidationError> {
    let weights = &config.cost_weights;
    meter.charge(input.execution_cost)?;
    meter.charge_scaled(input.program_size, weights.cost_per_byte)?;
    let mut decoder = SpendDecoder {
        config,
        decoded: DecodedSpend::new(Spend::new(&input.coin)),
        seen_outputs: HashSet::new(),
    };
    for condition in &input.conditions {
        meter.check()?;
        meter.charge_scaled(condition.byte_len(), weights.cost_per_condition_byte)?;
        let opcode = decoder.opcode(condition)?;
        meter.charge(weights.weight_for(opcode))?;
        decoder.apply(opcode, condition, meter)?;
    }
    decoder.finish()
}

struct SpendDecoder<'a> {
    config: &'a ValidationConfig,
    decoded: DecodedSpend,
    seen_outputs: HashSet<(Bytes32, u64)>,
}
impl SpendDecoder<'_> {
    fn coin_id(&self) -> Bytes32 {
        self.decoded.spend.coin_id
    }

    fn opcode(&self, condition: &ConditionWithArgs) -> Result<ConditionOpcode, ValidationError> {
        match condition.condition_opcode() {
            Some(ConditionOpcode::SoftFork)
                if !self.config.has_flag(ENABLE_SOFTFORK_CONDITION) =>
            {
                Err(self.unknown(condition))
            }
            Some(opcode) => Ok(opcode),
            None => Err(self.unknown(condition)),
        }
    }

    fn unknown(&self, condition: &ConditionWithArgs) -> ValidationError {
        ValidationError::UnknownOpcode {
            coin_id: self.coin_id(),
            opcode: condition.opcode.clone(),
        }
    }

    fn apply(
        &mut self,
        opcode: ConditionOpcode,
        condition: &ConditionWithArgs,
        meter: &CostMeter,
    ) -> Result<(), ValidationError> {
        let args = ConditionArgs::new(
            self.coin_id(),
            opcode,
            &condition.vars,
            self.config.has_flag(STRICT_ARGS_COUNT),
            self.config.has_flag(COND_CANON_INTS),
        );
        match opcode {
            ConditionOpcode::Remark => Ok(()),
            ConditionOpcode::AggSigParent
            | ConditionOpcode::AggSigPuzzle
            | ConditionOpcode::AggSigAmount
            | ConditionOpcode::AggSigPuzzleAmount
            | ConditionOpcode::AggSigParentAmount
            | ConditionOpcode::AggSigParentPuzzle
            | ConditionOpcode::AggSigUnsafe
            | ConditionOpcode::AggSigMe => self.agg_sig(&args),
            ConditionOpcode::CreateCoin => self.create_coin(&args),
            ConditionOpcode::ReserveFee => self.reserve_fee(&args),
            ConditionOpcode::CreateCoinAnnouncement | ConditionOpcode::CreatePuzzleAnnouncement => {
                args.expect_count(1, Some(1))?;
                args.message(0).map(drop)
            }
            ConditionOpcode::AssertCoinAnnouncement
            | ConditionOpcode::AssertPuzzleAnnouncement
            | ConditionOpcode::AssertConcurrentSpend
            | ConditionOpcode::AssertConcurrentPuzzle => {
                args.expect_count(1, Some(1))?;
                args.bytes32(0).map(drop)
            }
            ConditionOpcode::SendMessage | ConditionOpcode::ReceiveMessage => {
                args.expect_count(2, None)
            }
            ConditionOpcode::AssertMyCoinId => {
                args.expect_count(1, Some(1))?;
                self.assert_equal(&args, args.bytes32(0)? == self.decoded.spend.coin_id)
            }
            ConditionOpcode::AssertMyParentId => {
                args.expect_count(1, Some(1))?;
                self.assert_equal(&args, args.bytes32(0)? == self.decoded.spend.parent_id)
            }
            ConditionOpcode::AssertMyPuzzlehash => {
                args.expect_count(1, Some(1))?;
                self.assert_equal(&args, args.bytes32(0)? == self.decoded.spend.puzzle_hash)
            }
            ConditionOpcode::AssertMyAmount => {
                args.expect_count(1, Some(1))?;
                let matches = args.uint(0, u64::MAX)?
                    == SanitizedUint::Ok(self.decoded.spend.coin_amount);
                self.assert_equal(&args, matches)
            }
            ConditionOpcode::AssertMyBirthSeconds => self.birth_seconds(&args),
            ConditionOpcode::AssertMyBirthHeight => self.birth_height(&args),
            ConditionOpcode::AssertEphemeral => {
                args.expect_count(0, Some(0))?;
                self.decoded.spend.flags |= ASSERT_EPHEMERAL_FLAG;
                Ok(())
            }
            ConditionOpcode::AssertSecondsRelative => {
                if let Some(v) = self.after_lock(&args, u64::MAX)? {
                    let spend = &mut self.decoded.spend;
                    spend.seconds_relative = merge_after_or_zero(spend.seconds_relative, v);
                }
                Ok(())
            }
            ConditionOpcode::AssertSecondsAbsolute => {
                if let Some(v) = self.after_lock(&args, u64::MAX)? {
                    self.decoded.seconds_absolute =
                        merge_after_or_zero(self.decoded.seconds_absolute, v);
                }
                Ok(())
            }
            ConditionOpcode::AssertHeightRelative => {
                if let Some(v) = self.after_lock(&args, MAX_U32)? {
                    let spend = &mut self.decoded.spend;
                    spend.height_relative = merge_after(spend.height_relative, v as u32);
                }
                Ok(())
            }
            ConditionOpcode::AssertHeightAbsolute => {
                if let Some(v) = self.after_lock(&args, MAX_U32)? {
                    self.decoded.height_absolute =
                        merge_after_or_zero(self.decoded.height_absolute, v as u32);
                }
                Ok(())
            }
            ConditionOpcode::AssertBeforeSecondsRelative => {
                if let Some(v) = self.before_lock(&args, u64::MAX)? {
                    let spend = &mut self.decoded.spend;
                    spend.before_seconds_relative = merge_before(spend.before_seconds_relative, v);
                }
                Ok(())
            }
            ConditionOpcode::AssertBeforeSecondsAbsolute => {
                if let Some(v) = self.before_lock(&args, u64::MAX)? {
                    self.decoded.before_seconds_absolute =
                        merge_before(self.decoded.before_seconds_absolute, v);
                }
                Ok(())
            }
            ConditionOpcode::AssertBeforeHeightRelative => {
                if let Some(v) = self.before_lock(&args, MAX_U32)? {
                    let spend = &mut self.decoded.spend;
                    spend.before_height_relative =
                        merge_before(spend.before_height_relative, v as u32);
                }
                Ok(())
            }
            ConditionOpcode::AssertBeforeHeightAbsolute => {
                if let Some(v) = self.before_lock(&args, MAX_U32)? {
                    self.decoded.before_height_absolute =
                        merge_before(self.decoded.before_height_absolute, v as u32);
                }
                Ok(())
            }
            ConditionOpcode::SoftFork => {
                args.expect_count(1, None)?;
                match args.uint(0, u64::MAX)? {
                    SanitizedUint::Ok(units) => {
                        meter.charge_scaled(units, self.config.cost_weights.softfork_cost_unit)?;
                        Ok(())
                    }
                    SanitizedUint::NegativeOverflow => Err(args.malformed("negative cost")),
                    SanitizedUint::PositiveOverflow => meter.charge(u64::MAX).map(|_| ()),
                }
            }
        }
    }

    fn assert_equal(&self, args: &ConditionArgs, matches: bool) -> Result<(), ValidationError> {
        if matches {
            Ok(())
        } else {
            Err(args.assertion_failed())
        }
    }

    fn agg_sig(&mut self, args: &ConditionArgs) -> Result<(), ValidationError> {
        args.expect_count(2, Some(2))?;
        let pair = (args.public_key(0)?, args.message(1)?);
        let spend = &mut self.decoded.spend;
        match args.opcode {
            ConditionOpcode::AggSigParent => spend.agg_sig_parent.push(pair),
            ConditionOpcode::AggSigPuzzle => spend.agg_sig_puzzle.push(pair),
            ConditionOpcode::AggSigAmount => spend.agg_sig_amount.push(pair),
            ConditionOpcode::AggSigPuzzleAmount => spend.agg_sig_puzzle_amount.push(pair),
            ConditionOpcode::AggSigParentAmount => spend.agg_sig_parent_amount.push(pair),
            ConditionOpcode::AggSigParentPuzzle => spend.agg_sig_parent_puzzle.push(pair),
            ConditionOpcode::AggSigMe => spend.agg_sig_me.push(pair),
            _ => self.decoded.agg_sig_unsafe.push(pair),
        }
        Ok(())
    }

    fn create_coin(&mut self, args: &ConditionArgs) -> Result<(), ValidationError> {
        args.expect_count(2, Some(3))?;
        let puzzle_hash = args.bytes32(0)?;
        let amount = match args.uint(1, self.config.max_coin_amount)? {
            SanitizedUint::Ok(amount) => amount,
            SanitizedUint::NegativeOverflow => {
                return Err(args.malformed("negative amount"));
            }
            SanitizedUint::PositiveOverflow => {
                return Err(ValidationError::AmountOverflow {
                    coin_id: Some(self.coin_id()),
                    amount: display_int(args.atom(1)?),
                });
            }
        };
        if !self.seen_outputs.insert((puzzle_hash, amount)) {
            return Err(ValidationError::DuplicateOutput {
                coin_id: self.coin_id(),
                puzzle_hash,
                amount,
            });
        }
        let memo = args.optional_atom(2).map(<[u8]>::to_vec);
        self.decoded.spend.create_coin.push(NewCoin {
            puzzle_hash,
            amount,
            memo,
        });
        Ok(())
    }

    fn reserve_fee(&mut self, args: &ConditionArgs) -> Result<(), ValidationError> {
        args.expect_count(1, Some(1))?;
        let fee = match args.uint(0, u64::MAX)? {
            SanitizedUint::Ok(fee) => fee,
            SanitizedUint::NegativeOverflow => return Err(args.malformed("negative fee")),
            SanitizedUint::PositiveOverflow => {
                return Err(ValidationError::FeeOverflow {
                    coin_id: self.coin_id(),
                })
            }
        };
        self.decoded.reserve_fee =
            self.decoded
                .reserve_fee
                .checked_add(fee)
                .ok_or(ValidationError::FeeOverflow {
                    coin_id: self.coin_id(),
                })?;
        Ok(())
    }

    fn birth_seconds(&mut self, args: &ConditionArgs) -> Result<(), ValidationError> {
        args.expect_count(1, Some(1))?;
        let SanitizedUint::Ok(seconds) = args.uint(0, u64::MAX)? else {
            return Err(args.assertion_failed());
        };
        let spend = &mut self.decoded.spend;
        match spend.birth_seconds {
            Some(existing) if existing != seconds => Err(args.assertion_failed()),
            _ => {
                spend.birth_seconds = Some(seconds);
                Ok(())
            }
        }
    }

    fn birth_height(&mut self, args: &ConditionArgs) -> Result<(), ValidationError> {
        args.expect_count(1, Some(1))?;
        let SanitizedUint::Ok(height) = args.uint(0, MAX_U32)? else {
            return Err(args.assertion_failed());
        };
        let height = height as u32;
        let spend = &mut self.decoded.spend;
        match spend.birth_height {
            Some(existing) if existing != height => Err(args.assertion_failed()),
            _ => {
                spend.birth_height = Some(height);
                Ok(())
            }
        }
    }

    /// A negative "after" lock is already satisfied and is dropped.
    fn after_lock(&self, args: &ConditionArgs, max: u64) -> Result<Option<u64>, ValidationError> {
        args.expect_count(1, Some(1))?;
        match args.uint(0, max)? {
            SanitizedUint::Ok(v) => Ok(Some(v)),
            SanitizedUint::NegativeOverflow => Ok(None),
            SanitizedUint::PositiveOverflow => Err(args.malformed(format!(
                "{} is out of range",
                display_int(args.atom(0)?)
            ))),
        }
    }

    /// A "before" lock at or below zero can never pass, one beyond the
    /// field's range always passes and is dropped.
    fn before_lock(&self, args: &ConditionArgs, max: u64) -> Result<Option<u64>, ValidationError> {
        args.expect_count(1, Some(1))?;
        match args.uint(0, max)? {
            SanitizedUint::Ok(0) | SanitizedUint::NegativeOverflow => Err(args.impossible()),
            SanitizedUint::Ok(v) => Ok(Some(v)),
            SanitizedUint::PositiveOverflow => Ok(None),
        }
    }

    fn finish(self) -> Result<DecodedSpend, ValidationError> {
        let spend = &self.decoded.spend;
        if is_impossible(spend.height_relative, spend.before_height_relative) {
            return Err(ValidationError::ImpossibleConstraint {
                coin_id: Some(spend.coin_id),
                opcode: ConditionOpcode::AssertBeforeHeightRelative,
            });
        }
        if is_impossible(Some(spend.seconds_relative), spend.before_seconds_relative) {
            return Err(ValidationError::ImpossibleConstraint {
                coin_id: Some(spend.coin_id),
                opcode: ConditionOpcode::AssertBeforeSecondsRelative,
            });
        }
        debug!(
            "Decoded spend {}: {} outputs, {} agg_sig_me, fee {}",
            spend.coin_id,
            spend.create_coin.len(),
            spend.agg_sig_me.len(),
            self.decoded.reserve_fee
        );
        Ok(self.decoded)
    }
}
