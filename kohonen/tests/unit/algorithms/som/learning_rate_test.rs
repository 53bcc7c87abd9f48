use super::*;

fn scaled<T: LearningRateFunction>(mut function: T, expected_iterations: usize) -> T {
    function.set_expected_iterations(expected_iterations);
    function
}

#[test]
fn can_keep_constant_rate() {
    let function = scaled(ConstantLearningRate::new(0.3), 100);

    assert_eq!(function.rate(0), 0.3);
    assert_eq!(function.rate(1000), 0.3);
    assert_eq!(function.expected_iterations(), None);
}

#[test]
fn can_move_hyperbolic_rate_from_initial_to_final() {
    let function = scaled(HyperbolicLearningRate::new(0.8, 0.1), 1000);

    assert_float_eq!(function.rate(0), 0.8, 1e-12);
    assert_float_eq!(function.rate(1000), 0.1, 1e-12);
    assert_float_eq!(function.rate(500), 0.2828, 1e-4);
}

#[test]
fn can_decay_exponential_rate() {
    let function = scaled(ExponentialDecayLearningRate::new(0.5), 100);

    assert_eq!(function.rate(0), 0.5);
    assert_float_eq!(function.rate(100), 0.5 / std::f64::consts::E, 1e-12);
}

parameterized_test! {can_decrease_rate_monotonically, mut function, {
    function.set_expected_iterations(500);

    (1..=1000).for_each(|iteration| {
        assert!(function.rate(iteration) <= function.rate(iteration - 1));
    });
}}

can_decrease_rate_monotonically! {
    case01_hyperbolic: Box::new(HyperbolicLearningRate::new(0.9, 0.01)) as Box<dyn LearningRateFunction>,
    case02_exponential: Box::new(ExponentialDecayLearningRate::new(0.9)) as Box<dyn LearningRateFunction>,
}

#[test]
fn can_set_expected_iterations_only_once() {
    let mut function = HyperbolicLearningRate::new(0.8, 0.1);

    function.set_expected_iterations(1000);
    function.set_expected_iterations(10);

    assert_eq!(function.expected_iterations(), Some(1000));
    assert_float_eq!(function.rate(1000), 0.1, 1e-12);
}

#[test]
fn can_stay_at_initial_rate_when_not_scaled() {
    let unscaled = HyperbolicLearningRate::new(0.8, 0.1);
    let zero_scaled = scaled(ExponentialDecayLearningRate::new(0.4), 0);

    assert_eq!(unscaled.rate(100), 0.8);
    assert_eq!(zero_scaled.rate(100), 0.4);
}

#[test]
fn can_expose_name_and_parameters() {
    let function = HyperbolicLearningRate::new(0.8, 0.1);

    assert_eq!(function.name(), "HyperbolicLearningRateFunction");
    assert_eq!(function.parameters(), "0.8 0.1");
}
