use super::*;

#[test]
fn can_produce_real_values_within_range() {
    let random = DefaultRandom::default();

    (0..1000).for_each(|_| {
        let real_value = random.uniform_real(0., 1.);

        assert!((0. ..1.).contains(&real_value));
    });
}

#[test]
fn can_return_min_when_range_is_empty() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}

#[test]
fn can_repeat_sequence_with_same_seed() {
    let sample = |random: DefaultRandom| (0..10).map(|_| random.uniform_real(0., 1.)).collect::<Vec<_>>();

    assert_eq!(sample(DefaultRandom::new_repeatable(7)), sample(DefaultRandom::new_repeatable(7)));
    assert_ne!(sample(DefaultRandom::new_repeatable(7)), sample(DefaultRandom::new_repeatable(8)));
}
