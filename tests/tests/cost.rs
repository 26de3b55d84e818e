use dg_xch_conditions::blockchain::condition_opcode::ConditionOpcode;
use dg_xch_conditions::blockchain::condition_with_args::ConditionWithArgs;
use dg_xch_conditions::consensus::constants::{CostWeights, ValidationConfig, MAINNET};
use dg_xch_conditions::validation::errors::ValidationError;
use dg_xch_conditions::{validate_spend_bundle, validate_spend_bundle_parallel};
use dg_xch_conditions_tests::{
    agg_sig, create_coin, init_logger, int_condition, puzzle_hash, reserve_fee, spend,
    unmetered_bytes,
};
use log::info;

fn create_coin_weight() -> u64 {
    MAINNET.cost_weights.create_coin
}

#[test]
fn test_single_create_coin_scenario() {
    init_logger();
    let inputs = vec![spend(1, vec![create_coin(puzzle_hash(0xaa), 1000)])];
    let conds = validate_spend_bundle(&inputs, &unmetered_bytes()).unwrap();
    info!("single create_coin bundle cost {}", conds.cost);
    assert_eq!(conds.cost, create_coin_weight());
    assert_eq!(conds.cost, 1_800_000);
    assert_eq!(conds.height_absolute, 0);
    assert_eq!(conds.seconds_absolute, 0);
    assert_eq!(conds.reserve_fee, 0);
    let created = &conds.spends[0].create_coin;
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].puzzle_hash, puzzle_hash(0xaa));
    assert_eq!(created[0].amount, 1000);
    assert_eq!(created[0].memo, None);

    let metered = validate_spend_bundle(&inputs, &MAINNET).unwrap();
    let bytes = inputs[0].conditions[0].byte_len();
    assert_eq!(bytes, 35);
    assert_eq!(
        metered.cost,
        create_coin_weight() + bytes * MAINNET.cost_weights.cost_per_condition_byte
    );
}

#[test]
fn test_cost_is_deterministic() {
    let inputs: Vec<_> = (0..20u8)
        .map(|seed| {
            spend(
                seed,
                vec![
                    create_coin(puzzle_hash(seed), u64::from(seed) + 1),
                    agg_sig(ConditionOpcode::AggSigMe, seed, b"msg"),
                    reserve_fee(u64::from(seed)),
                ],
            )
        })
        .collect();
    let config = unmetered_bytes();
    let first = validate_spend_bundle(&inputs, &config).unwrap();
    let second = validate_spend_bundle(&inputs, &config).unwrap();
    let parallel = validate_spend_bundle_parallel(&inputs, &config).unwrap();
    let expected = 20 * (create_coin_weight() + MAINNET.cost_weights.agg_sig);
    assert_eq!(first.cost, expected);
    assert_eq!(second.cost, expected);
    assert_eq!(parallel.cost, expected);
    assert_eq!(first, parallel);
    let metered = validate_spend_bundle(&inputs, &MAINNET).unwrap();
    let parallel = validate_spend_bundle_parallel(&inputs, &MAINNET).unwrap();
    assert!(metered.cost > expected);
    assert_eq!(metered, parallel);
}

#[test]
fn test_one_condition_past_the_ceiling() {
    let config = unmetered_bytes().with_max_cost(2 * create_coin_weight());
    let at_limit = vec![spend(
        1,
        vec![
            create_coin(puzzle_hash(1), 1),
            create_coin(puzzle_hash(2), 1),
        ],
    )];
    let conds = validate_spend_bundle(&at_limit, &config).unwrap();
    assert_eq!(conds.cost, config.max_cost);

    let over = vec![
        at_limit[0].clone(),
        spend(2, vec![create_coin(puzzle_hash(3), 1)]),
    ];
    assert_eq!(
        validate_spend_bundle(&over, &config),
        Err(ValidationError::CostExceeded {
            cost: 3 * create_coin_weight(),
            max_cost: config.max_cost,
        })
    );
}

#[test]
fn test_parallel_path_reports_cost_exceeded() {
    let config = unmetered_bytes().with_max_cost(10 * create_coin_weight());
    let inputs: Vec<_> = (0..11u8)
        .map(|seed| spend(seed, vec![create_coin(puzzle_hash(seed), 1)]))
        .collect();
    assert!(matches!(
        validate_spend_bundle_parallel(&inputs, &config),
        Err(ValidationError::CostExceeded { .. })
    ));
    assert!(validate_spend_bundle_parallel(&inputs[..10], &config).is_ok());
}

#[test]
fn test_execution_and_byte_cost() {
    let inputs = vec![spend(1, vec![create_coin(puzzle_hash(1), 1)]).with_execution_cost(7_000, 100)];
    let conds = validate_spend_bundle(&inputs, &MAINNET).unwrap();
    let weights = &MAINNET.cost_weights;
    assert_eq!(
        conds.cost,
        7_000
            + 100 * weights.cost_per_byte
            + 34 * weights.cost_per_condition_byte
            + create_coin_weight()
    );
}

#[test]
fn test_weights_come_from_config() {
    let config = ValidationConfig {
        cost_weights: CostWeights {
            create_coin: 5,
            reserve_fee: 3,
            cost_per_condition_byte: 0,
            ..CostWeights::default()
        },
        ..MAINNET.clone()
    };
    let inputs = vec![spend(1, vec![create_coin(puzzle_hash(1), 1), reserve_fee(1)])];
    let conds = validate_spend_bundle(&inputs, &config).unwrap();
    assert_eq!(conds.cost, 8);
}

#[test]
fn test_softfork_charges_its_argument() {
    let inputs = vec![spend(1, vec![int_condition(ConditionOpcode::SoftFork, 5)])];
    let conds = validate_spend_bundle(&inputs, &unmetered_bytes()).unwrap();
    assert_eq!(conds.cost, 5 * MAINNET.cost_weights.softfork_cost_unit);

    let config = MAINNET.clone().with_max_cost(1_000_000);
    let inputs = vec![spend(1, vec![int_condition(ConditionOpcode::SoftFork, u64::MAX)])];
    assert!(matches!(
        validate_spend_bundle(&inputs, &config),
        Err(ValidationError::CostExceeded { .. })
    ));
}

#[test]
fn test_zero_weight_conditions_are_bounded_by_their_bytes() {
    let remark = ConditionWithArgs::new(ConditionOpcode::Remark, vec![vec![0x42; 1024]]);
    assert_eq!(MAINNET.cost_weights.remark, 0);
    let flood = vec![spend(1, vec![remark.clone(); 1000])];
    assert_eq!(
        validate_spend_bundle(&flood, &unmetered_bytes()).unwrap().cost,
        0
    );
    assert!(matches!(
        validate_spend_bundle(&flood, &MAINNET),
        Err(ValidationError::CostExceeded { .. })
    ));
    assert!(matches!(
        validate_spend_bundle(&flood, &MAINNET.clone().with_max_cost(1)),
        Err(ValidationError::CostExceeded { .. })
    ));

    let spread: Vec<_> = (0..10u8)
        .map(|seed| spend(seed, vec![remark.clone(); 100]))
        .collect();
    assert!(matches!(
        validate_spend_bundle_parallel(&spread, &MAINNET),
        Err(ValidationError::CostExceeded { .. })
    ));
    let fits = validate_spend_bundle_parallel(&spread[..8], &MAINNET).unwrap();
    assert_eq!(
        fits.cost,
        8 * 100 * 1025 * MAINNET.cost_weights.cost_per_condition_byte
    );
}
