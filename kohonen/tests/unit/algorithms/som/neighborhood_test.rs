use super::*;

fn assert_relative_eq(actual: Float, expected: Float) {
    let tolerance = if expected == 0. { 1e-12 } else { expected.abs() * 1e-5 };
    assert!((actual - expected).abs() <= tolerance, "{actual} is not close to {expected}");
}

fn scaled(mut function: Box<dyn NeighborhoodWidthFunction>, expected_iterations: usize) -> Box<dyn NeighborhoodWidthFunction> {
    function.set_expected_iterations(expected_iterations);
    function
}

parameterized_test! {can_sample_gaussian_width, (iteration, expected), {
    assert_relative_eq(GaussianNeighborhoodWidth::new(100.).width(iteration), expected);
}}

can_sample_gaussian_width! {
    case01: (0, 0.00398942),
    case02: (1, 0.00398922),
    case03: (10, 0.00396953),
    case04: (100, 0.00241971),
    case05: (200, 0.00053991),
    case06: (500, 1.48672e-8),
    case07: (1000, 7.6946e-25),
}

parameterized_test! {can_sample_mexican_hat_width, (iteration, expected), {
    assert_relative_eq(MexicanHatNeighborhoodWidth::new(100.).width(iteration), expected);
}}

can_sample_mexican_hat_width! {
    case01: (0, 0.0867325),
    case02: (1, 0.0867195),
    case03: (10, 0.0854369),
    case04: (100, 0.),
    case05: (200, -0.0352139),
    case06: (500, -7.75733e-6),
    case07: (1000, -1.65612e-21),
}

#[test]
fn can_decrease_gaussian_width_for_non_negative_iterations() {
    let function = GaussianNeighborhoodWidth::new(100.);

    (1..1000).for_each(|iteration| assert!(function.width(iteration) < function.width(iteration - 1)));
}

#[test]
fn can_change_mexican_hat_direction_at_minimum() {
    let function = MexicanHatNeighborhoodWidth::new(100.);

    (1..=173).for_each(|iteration| assert!(function.width(iteration) < function.width(iteration - 1)));
    (174..1000).for_each(|iteration| assert!(function.width(iteration) > function.width(iteration - 1)));
}

#[test]
fn can_decay_linear_width_exactly() {
    let function = scaled(Box::new(LinearDecayNeighborhoodWidth::new(5.)), 100);

    assert_eq!(function.width(0), 5.);
    assert_eq!(function.width(50), 2.5);
    assert_eq!(function.width(100), 0.);
}

#[test]
fn can_move_hyperbolic_width_from_initial_to_final() {
    let function = scaled(Box::new(HyperbolicNeighborhoodWidth::new(8., 1.)), 300);

    assert_float_eq!(function.width(0), 8., 1e-12);
    assert_float_eq!(function.width(100), 4., 1e-12);
    assert_float_eq!(function.width(300), 1., 1e-12);
}

parameterized_test! {can_decrease_width_monotonically, function, {
    let function = scaled(function, 200);

    (1..=200).for_each(|iteration| assert!(function.width(iteration) < function.width(iteration - 1)));
}}

can_decrease_width_monotonically! {
    case01_linear: Box::new(LinearDecayNeighborhoodWidth::new(3.)) as Box<dyn NeighborhoodWidthFunction>,
    case02_hyperbolic: Box::new(HyperbolicNeighborhoodWidth::new(3., 0.5)) as Box<dyn NeighborhoodWidthFunction>,
    case03_exponential: Box::new(ExponentialDecayNeighborhoodWidth::new(3.)) as Box<dyn NeighborhoodWidthFunction>,
}

#[test]
fn can_keep_constant_width() {
    let function = scaled(Box::new(ConstantNeighborhoodWidth::new(2.)), 10);

    assert_eq!(function.width(0), 2.);
    assert_eq!(function.width(100), 2.);
    assert!(!function.can_scale_adjustments());
}

#[test]
fn can_switch_compound_stage_at_threshold() {
    let mut compound = CompoundNeighborhoodWidth::new(scaled(Box::new(ConstantNeighborhoodWidth::new(3.)), 500));
    compound.add_neighborhood(500, scaled(Box::new(ConstantNeighborhoodWidth::new(1.)), 500)).unwrap();

    assert_eq!(compound.width(0), 3.);
    assert_eq!(compound.width(499), 3.);
    assert_eq!(compound.active_stage(), 0);
    assert_eq!(compound.width(500), 1.);
    assert_eq!(compound.active_stage(), 1);
    assert_eq!(compound.width(501), 1.);
}

#[test]
fn can_catch_up_compound_stages_when_iterations_are_skipped() {
    let mut compound = CompoundNeighborhoodWidth::new(Box::new(ConstantNeighborhoodWidth::new(3.)));
    compound.add_neighborhood(10, Box::new(ConstantNeighborhoodWidth::new(2.))).unwrap();
    compound.add_neighborhood(20, Box::new(ConstantNeighborhoodWidth::new(1.))).unwrap();

    assert_eq!(compound.width(25), 1.);
    assert_eq!(compound.active_stage(), 2);
}

#[test]
fn can_reject_non_increasing_compound_thresholds() {
    let mut compound = CompoundNeighborhoodWidth::new(Box::new(ConstantNeighborhoodWidth::new(3.)));
    compound.add_neighborhood(10, Box::new(ConstantNeighborhoodWidth::new(2.))).unwrap();

    let result = compound.add_neighborhood(10, Box::new(ConstantNeighborhoodWidth::new(1.)));

    assert!(matches!(result, Err(SomError::Configuration(_))));
    assert_eq!(compound.stages().len(), 2);
}

#[test]
fn can_scale_adjustments_only_with_bell_shaped_widths() {
    let mut compound = CompoundNeighborhoodWidth::new(Box::new(GaussianNeighborhoodWidth::new(10.)));
    compound.add_neighborhood(5, Box::new(MexicanHatNeighborhoodWidth::new(10.))).unwrap();
    assert!(compound.can_scale_adjustments());

    compound.add_neighborhood(10, Box::new(ConstantNeighborhoodWidth::new(1.))).unwrap();
    assert!(!compound.can_scale_adjustments());

    assert!(!LinearDecayNeighborhoodWidth::new(1.).can_scale_adjustments());
}

#[test]
fn can_expose_compound_stages() {
    let mut compound = CompoundNeighborhoodWidth::new(Box::new(LinearDecayNeighborhoodWidth::new(4.)));
    compound.add_neighborhood(7, Box::new(GaussianNeighborhoodWidth::new(2.5))).unwrap();

    let stages =
        compound.stages().into_iter().map(|(at, width)| (at, width.name(), width.parameters())).collect::<Vec<_>>();

    assert_eq!(
        stages,
        vec![
            (0, "LinearDecayNeighborhoodWidthFunction", "4".to_string()),
            (7, "GaussianNeighborhoodWidthFunction", "2.5".to_string()),
        ]
    );
    assert_eq!(compound.name(), "CompoundNeighborhood");
}

#[test]
fn can_scale_only_unscaled_compound_stages() {
    let mut compound = CompoundNeighborhoodWidth::new(scaled(Box::new(LinearDecayNeighborhoodWidth::new(4.)), 50));
    compound.add_neighborhood(50, Box::new(LinearDecayNeighborhoodWidth::new(2.))).unwrap();

    compound.set_expected_iterations(200);
    compound.set_expected_iterations(10);

    let expected = compound.stages().into_iter().map(|(_, width)| width.expected_iterations()).collect::<Vec<_>>();
    assert_eq!(expected, vec![Some(50), Some(200)]);
    assert_eq!(compound.expected_iterations(), Some(200));
    assert_eq!(compound.width(100), 1.);
}

#[test]
fn can_scale_compound_stages_added_after_scaling() {
    let mut compound = CompoundNeighborhoodWidth::new(Box::new(ConstantNeighborhoodWidth::new(3.)));
    compound.set_expected_iterations(100);

    compound.add_neighborhood(20, Box::new(LinearDecayNeighborhoodWidth::new(2.))).unwrap();

    assert_eq!(compound.stages()[1].1.expected_iterations(), Some(100));
    assert_eq!(compound.width(50), 1.);
}

parameterized_test! {can_cut_off_linear_decay_width, (iteration, expected), {
    let function = scaled(Box::new(CutoffLinearDecayNeighborhoodWidth::new(1., 0.2)), 100);

    assert_float_eq!(function.width(iteration), expected, 1e-12);
}}

can_cut_off_linear_decay_width! {
    case01_start: (0, 1.),
    case02_decaying: (10, 0.9),
    case03_last_active: (19, 0.81),
    case04_cut_off: (20, 0.),
    case05_late: (99, 0.),
}

#[test]
fn can_cut_off_with_truncated_threshold() {
    let function = scaled(Box::new(CutoffLinearDecayNeighborhoodWidth::new(2., 0.2)), 7);

    assert_eq!(function.width(0), 2.);
    assert_eq!(function.width(1), 0.);
    assert_eq!(CutoffLinearDecayNeighborhoodWidth::new(2., 0.2).width(0), 0.);
    assert_eq!(function.parameters(), "2 0.2");
}
