use super::*;

parameterized_test! {can_calculate_distance, (metric, a, b, expected), {
    can_calculate_distance_impl(metric, a, b, expected);
}}

can_calculate_distance! {
    case01_euclidean: (Box::new(EuclideanDistance), vec![0., 0.], vec![3., 4.], 5.),
    case02_manhattan: (Box::new(ManhattanDistance), vec![1., 2., 3.], vec![2., 0., 3.], 3.),
    case03_chebyshev: (Box::new(ChebyshevDistance), vec![0.1, 0.2, 0.3], vec![0.05, -0.1, 0.3], 0.3),
    case04_euclidean_same: (Box::new(EuclideanDistance), vec![1., 1.], vec![1., 1.], 0.),
    case05_empty: (Box::new(ManhattanDistance), vec![], vec![], 0.),
}

fn can_calculate_distance_impl(metric: Box<dyn DistanceMetric>, a: Vec<Float>, b: Vec<Float>, expected: Float) {
    assert_float_eq!(metric.distance(a.as_slice(), b.as_slice()).unwrap(), expected, 1e-12);
    assert_float_eq!(metric.distance(b.as_slice(), a.as_slice()).unwrap(), expected, 1e-12);
}

#[test]
fn can_calculate_chebyshev_distance_with_tiny_component() {
    let distance = ChebyshevDistance.distance(&[0.86], &[-2.1e-16]).unwrap();

    assert_float_eq!(distance, 0.8600000000000002, 1e-15);
}

#[test]
fn can_reject_vectors_of_different_length() {
    let metrics: Vec<Box<dyn DistanceMetric>> =
        vec![Box::new(EuclideanDistance), Box::new(ManhattanDistance), Box::new(ChebyshevDistance)];

    metrics.iter().for_each(|metric| {
        assert_eq!(metric.distance(&[1., 2.], &[1.]), Err(SomError::LengthMismatch { left: 2, right: 1 }));
    });
}
