use dg_xch_conditions::blockchain::condition_opcode::ConditionOpcode;
use dg_xch_conditions::blockchain::condition_with_args::ConditionWithArgs;
use dg_xch_conditions::consensus::constants::MAINNET;
use dg_xch_conditions::validation::errors::ValidationError;
use dg_xch_conditions::validate_spend_bundle;
use dg_xch_conditions_tests::{
    height_absolute, height_relative, init_logger, int_condition, seconds_absolute, spend,
};

#[test]
fn test_relative_height_takes_max_not_sum() {
    init_logger();
    let inputs = vec![spend(
        1,
        vec![height_relative(5), height_relative(10), height_relative(3)],
    )];
    let conds = validate_spend_bundle(&inputs, &MAINNET).unwrap();
    assert_eq!(conds.spends[0].height_relative, Some(10));
}

#[test]
fn test_relative_seconds_takes_max() {
    let inputs = vec![spend(
        1,
        vec![
            int_condition(ConditionOpcode::AssertSecondsRelative, 600),
            int_condition(ConditionOpcode::AssertSecondsRelative, 60),
        ],
    )];
    let conds = validate_spend_bundle(&inputs, &MAINNET).unwrap();
    assert_eq!(conds.spends[0].seconds_relative, 600);
}

#[test]
fn test_relative_locks_stay_per_spend() {
    let inputs = vec![
        spend(1, vec![height_relative(5)]),
        spend(2, vec![height_relative(10)]),
    ];
    let conds = validate_spend_bundle(&inputs, &MAINNET).unwrap();
    assert_eq!(conds.spends[0].height_relative, Some(5));
    assert_eq!(conds.spends[1].height_relative, Some(10));
    let second = conds.spend(&inputs[1].coin_id()).unwrap();
    assert_eq!(second.height_relative, Some(10));
    assert_eq!(conds.height_absolute, 0);
}

#[test]
fn test_absolute_locks_are_bundle_maxima() {
    let inputs = vec![
        spend(1, vec![height_absolute(100), seconds_absolute(5000)]),
        spend(2, vec![height_absolute(250), height_absolute(20)]),
        spend(3, vec![seconds_absolute(4000)]),
    ];
    let conds = validate_spend_bundle(&inputs, &MAINNET).unwrap();
    assert_eq!(conds.height_absolute, 250);
    assert_eq!(conds.seconds_absolute, 5000);
}

#[test]
fn test_absolute_locks_default_to_zero() {
    let conds = validate_spend_bundle(&[spend(1, vec![])], &MAINNET).unwrap();
    assert_eq!(conds.height_absolute, 0);
    assert_eq!(conds.seconds_absolute, 0);
    assert_eq!(conds.before_height_absolute, None);
    assert_eq!(conds.before_seconds_absolute, None);
    assert_eq!(conds.spends[0].height_relative, None);
    assert_eq!(conds.spends[0].seconds_relative, 0);
}

#[test]
fn test_height_relative_zero_is_present() {
    let conds = validate_spend_bundle(&[spend(1, vec![height_relative(0)])], &MAINNET).unwrap();
    assert_eq!(conds.spends[0].height_relative, Some(0));
}

#[test]
fn test_before_locks_take_min() {
    let inputs = vec![
        spend(
            1,
            vec![
                int_condition(ConditionOpcode::AssertBeforeHeightAbsolute, 900),
                int_condition(ConditionOpcode::AssertBeforeHeightRelative, 40),
                int_condition(ConditionOpcode::AssertBeforeHeightRelative, 30),
            ],
        ),
        spend(
            2,
            vec![int_condition(ConditionOpcode::AssertBeforeHeightAbsolute, 700)],
        ),
    ];
    let conds = validate_spend_bundle(&inputs, &MAINNET).unwrap();
    assert_eq!(conds.before_height_absolute, Some(700));
    assert_eq!(conds.spends[0].before_height_relative, Some(30));
    assert_eq!(conds.spends[1].before_height_relative, None);
}

#[test]
fn test_impossible_absolute_window() {
    let inputs = vec![
        spend(1, vec![height_absolute(500)]),
        spend(
            2,
            vec![int_condition(ConditionOpcode::AssertBeforeHeightAbsolute, 500)],
        ),
    ];
    assert_eq!(
        validate_spend_bundle(&inputs, &MAINNET),
        Err(ValidationError::ImpossibleConstraint {
            coin_id: None,
            opcode: ConditionOpcode::AssertBeforeHeightAbsolute,
        })
    );
}

#[test]
fn test_impossible_relative_window() {
    let inputs = vec![spend(
        1,
        vec![
            height_relative(10),
            int_condition(ConditionOpcode::AssertBeforeHeightRelative, 10),
        ],
    )];
    assert_eq!(
        validate_spend_bundle(&inputs, &MAINNET),
        Err(ValidationError::ImpossibleConstraint {
            coin_id: Some(inputs[0].coin_id()),
            opcode: ConditionOpcode::AssertBeforeHeightRelative,
        })
    );
}

#[test]
fn test_before_zero_can_never_pass() {
    let inputs = vec![spend(
        1,
        vec![int_condition(ConditionOpcode::AssertBeforeSecondsAbsolute, 0)],
    )];
    assert_eq!(
        validate_spend_bundle(&inputs, &MAINNET),
        Err(ValidationError::ImpossibleConstraint {
            coin_id: Some(inputs[0].coin_id()),
            opcode: ConditionOpcode::AssertBeforeSecondsAbsolute,
        })
    );
}

#[test]
fn test_negative_after_lock_is_dropped() {
    let negative = ConditionWithArgs::new(ConditionOpcode::AssertHeightAbsolute, vec![vec![0xff]]);
    let conds = validate_spend_bundle(&[spend(1, vec![negative])], &MAINNET).unwrap();
    assert_eq!(conds.height_absolute, 0);
    let negative = ConditionWithArgs::new(ConditionOpcode::AssertHeightRelative, vec![vec![0x80]]);
    let conds = validate_spend_bundle(&[spend(1, vec![negative])], &MAINNET).unwrap();
    assert_eq!(conds.spends[0].height_relative, None);
}

#[test]
fn test_height_beyond_u32_is_malformed() {
    let inputs = vec![spend(1, vec![height_absolute(u64::from(u32::MAX) + 1)])];
    let err = validate_spend_bundle(&inputs, &MAINNET).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MalformedCondition {
            opcode: ConditionOpcode::AssertHeightAbsolute,
            ..
        }
    ));
}

#[test]
fn test_before_height_beyond_u32_is_dropped() {
    let inputs = vec![spend(
        1,
        vec![int_condition(
            ConditionOpcode::AssertBeforeHeightAbsolute,
            u64::from(u32::MAX) + 1,
        )],
    )];
    let conds = validate_spend_bundle(&inputs, &MAINNET).unwrap();
    assert_eq!(conds.before_height_absolute, None);
}
