use vehicle::VehicleId;

/**
 * Asserts that two lists of vehicle pairs match, ignoring both the order of the list and the order
 * within each pair.
 */
pub fn assert_same_pairs<'a, I>(actual: I, expected: &[(&str, &str)])
where
    I: IntoIterator<Item = (&'a VehicleId, &'a VehicleId)>,
{
    let normalize = |first: &str, second: &str| {
        if first <= second {
            (first.to_string(), second.to_string())
        } else {
            (second.to_string(), first.to_string())
        }
    };

    let mut actual: Vec<_> = actual
        .into_iter()
        .map(|(first, second)| normalize(first.as_str(), second.as_str()))
        .collect();
    let mut expected: Vec<_> = expected
        .iter()
        .map(|(first, second)| normalize(first, second))
        .collect();
    actual.sort();
    expected.sort();

    assert_eq!(
        actual, expected,
        "Conflicting pairs differ:\n  actual:   {:?}\n  expected: {:?}",
        actual, expected
    );
}

/**
 * Asserts that a map keyed by vehicle id has exactly the given entries. `actual` must iterate in
 * id order, as a BTreeMap does.
 */
pub fn assert_entries<'a, V, I>(actual: I, expected: &[(&str, V)])
where
    V: PartialEq + std::fmt::Debug + Clone + 'a,
    I: IntoIterator<Item = (&'a VehicleId, &'a V)>,
{
    let actual: Vec<(String, V)> = actual
        .into_iter()
        .map(|(id, value)| (id.to_string(), value.clone()))
        .collect();
    let mut expected: Vec<(String, V)> = expected
        .iter()
        .map(|(id, value)| (id.to_string(), value.clone()))
        .collect();
    expected.sort_by(|(a, _), (b, _)| a.cmp(b));

    assert_eq!(actual, expected);
}
