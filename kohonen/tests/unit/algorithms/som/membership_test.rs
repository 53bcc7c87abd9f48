use super::*;

parameterized_test! {can_calculate_membership, (function, distance, width, expected), {
    assert_float_eq!(function.membership(distance, width), expected, 1e-12);
}}

can_calculate_membership! {
    case01_constant_inside: (Box::new(ConstantMembership::new(0.7)) as Box<dyn NeighborhoodMembershipFunction>, 1., 2., 0.7),
    case02_constant_outside: (Box::new(ConstantMembership::default()) as Box<dyn NeighborhoodMembershipFunction>, 2., 2., 0.),
    case03_linear_inside: (Box::new(LinearMembership) as Box<dyn NeighborhoodMembershipFunction>, 1., 4., 0.75),
    case04_linear_outside: (Box::new(LinearMembership) as Box<dyn NeighborhoodMembershipFunction>, 5., 4., 0.),
    case05_geometric_inside: (Box::new(GeometricMembership::new(2.)) as Box<dyn NeighborhoodMembershipFunction>, 2., 4., 0.25),
    case06_geometric_outside: (Box::new(GeometricMembership::new(2.)) as Box<dyn NeighborhoodMembershipFunction>, 4., 4., 0.),
    case07_exponential_inside: (Box::new(ExponentialMembership) as Box<dyn NeighborhoodMembershipFunction>, 0., 2., (-1_f64).exp()),
    case08_exponential_outside: (Box::new(ExponentialMembership) as Box<dyn NeighborhoodMembershipFunction>, 3., 2., 0.),
    case09_negative_width: (Box::new(ConstantMembership::default()) as Box<dyn NeighborhoodMembershipFunction>, 0., -0.5, 0.),
}

#[test]
fn can_produce_random_membership_inside_neighborhood_only() {
    let function = RandomMembership::new(Arc::new(DefaultRandom::new_repeatable(3)));

    (0..100).for_each(|_| {
        let inside = function.membership(0.5, 1.);
        assert!((0. ..1.).contains(&inside));
        assert_eq!(function.membership(1., 1.), 0.);
    });
}

#[test]
fn can_expose_parameters() {
    assert_eq!(ConstantMembership::default().parameters(), "1");
    assert_eq!(GeometricMembership::new(3.).parameters(), "3");
    assert_eq!(LinearMembership.parameters(), "");
}
