use super::*;

fn simple(name: &str, parameters: &str) -> WidthDefinition {
    WidthDefinition::Simple(StrategyDefinition::new(name, parameters))
}

#[test]
fn can_parse_strategy_definition() {
    assert_eq!(
        StrategyDefinition::parse("  HyperbolicLearningRateFunction   0.8 0.1 "),
        Ok(StrategyDefinition::new("HyperbolicLearningRateFunction", "0.8 0.1"))
    );
    assert_eq!(StrategyDefinition::parse("SquareGrid"), Ok(StrategyDefinition::new("SquareGrid", "")));
    assert!(matches!(StrategyDefinition::parse("   "), Err(SomError::Configuration(_))));
}

#[test]
fn can_parse_strategy_definition_with_expected_iterations() {
    assert_eq!(
        StrategyDefinition::parse("HyperbolicLearningRateFunction 0.8 0.1 of 10"),
        Ok(StrategyDefinition::new("HyperbolicLearningRateFunction", "0.8 0.1").with_expected_iterations(Some(10)))
    );
    assert!(matches!(StrategyDefinition::parse("LinearDecayNeighborhoodWidthFunction 2 of -1"), Err(SomError::Parse(_))));
}

#[test]
fn can_create_simple_width_with_own_expected_iterations() {
    let definition = WidthDefinition::Simple(
        StrategyDefinition::new("LinearDecayNeighborhoodWidthFunction", "4").with_expected_iterations(Some(10)),
    );

    let width = definition.create(1000).unwrap();

    assert_eq!(width.expected_iterations(), Some(10));
    assert_eq!(width.width(5), 2.);
}

#[test]
fn can_create_learning_rate_with_own_expected_iterations() {
    let scaled = StrategyDefinition::new("ExponentialDecayLearningRateFunction", "1").with_expected_iterations(Some(5));
    let unscaled = StrategyDefinition::new("ExponentialDecayLearningRateFunction", "1");

    assert_eq!(scaled.to_learning_rate().unwrap().expected_iterations(), Some(5));
    assert_eq!(unscaled.to_learning_rate().unwrap().expected_iterations(), None);
}

#[test]
fn can_create_compound_width_with_scaled_stages() {
    let definition = WidthDefinition::Compound {
        stages: vec![
            StageDefinition {
                start_at: 0,
                expected_iterations: Some(50),
                width: simple("LinearDecayNeighborhoodWidthFunction", "4"),
            },
            StageDefinition {
                start_at: 50,
                expected_iterations: None,
                width: simple("ExponentialDecayNeighborhoodWidth", "2"),
            },
        ],
    };

    let width = definition.create(200).unwrap();

    assert_eq!(width.name(), "CompoundNeighborhood");
    assert_eq!(width.width(25), 2.);
    let stages = width.stages();
    assert_eq!(stages.len(), 2);
    assert_eq!(stages[0].1.expected_iterations(), Some(50));
    assert_eq!(stages[1].1.expected_iterations(), Some(200));
}

parameterized_test! {can_reject_invalid_compound_width, stages, {
    let result = WidthDefinition::Compound { stages }.create(100);

    assert!(matches!(result, Err(SomError::Configuration(_))));
}}

can_reject_invalid_compound_width! {
    case01_empty: vec![],
    case02_not_starting_at_zero: vec![StageDefinition {
        start_at: 5,
        expected_iterations: None,
        width: simple("ConstantNeighborhoodWidthFunction", "1"),
    }],
    case03_not_increasing: vec![
        StageDefinition { start_at: 0, expected_iterations: None, width: simple("ConstantNeighborhoodWidthFunction", "2") },
        StageDefinition { start_at: 0, expected_iterations: None, width: simple("ConstantNeighborhoodWidthFunction", "1") },
    ],
}

#[test]
fn can_describe_nested_compound_width() {
    let mut inner = CompoundNeighborhoodWidth::new(Box::new(ConstantNeighborhoodWidth::new(2.)));
    inner.add_neighborhood(10, Box::new(ConstantNeighborhoodWidth::new(1.))).unwrap();
    let mut outer = CompoundNeighborhoodWidth::new(Box::new(GaussianNeighborhoodWidth::new(3.)));
    outer.add_neighborhood(5, Box::new(inner)).unwrap();

    let definition = WidthDefinition::describe(&outer);

    assert_eq!(
        definition,
        WidthDefinition::Compound {
            stages: vec![
                StageDefinition {
                    start_at: 0,
                    expected_iterations: None,
                    width: simple("GaussianNeighborhoodWidthFunction", "3")
                },
                StageDefinition {
                    start_at: 5,
                    expected_iterations: None,
                    width: WidthDefinition::Compound {
                        stages: vec![
                            StageDefinition {
                                start_at: 0,
                                expected_iterations: None,
                                width: simple("ConstantNeighborhoodWidthFunction", "2")
                            },
                            StageDefinition {
                                start_at: 10,
                                expected_iterations: None,
                                width: simple("ConstantNeighborhoodWidthFunction", "1")
                            },
                        ]
                    }
                },
            ]
        }
    );
}

#[test]
fn can_fill_missing_strategies_with_defaults() {
    let dimension = Dimension::new(4, 4).unwrap();
    let definitions = StrategyDefinitions {
        grid_topology: Some(StrategyDefinition::new("Moore", "")),
        ..StrategyDefinitions::default()
    };

    let strategies = definitions.create_strategies(Strategies::for_type(MapType::Customizable, dimension), 10).unwrap();

    assert_eq!(strategies.grid_topology.name(), "Moore");
    assert_eq!(strategies.distance_metric.name(), "EuclideanDistanceMetric");
    assert!(!definitions.is_empty());
    assert!(StrategyDefinitions::default().is_empty());
}
