use linmap::LinearMap;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

fn small_map() -> LinearMap {
    let mut map = LinearMap::new();
    map.add(0.0, 1.0);
    map.add(0.5, 2.0);
    map.add(1.0, 3.0);
    map
}

#[test]
fn set_output_at_input_overwrites_matched_output() {
    let mut map = small_map();
    map.set_output_at_input(0.5, 2.5);

    assert!(approx_eq(map.get(0.5), 2.5));
    assert!(approx_eq(map.input_at(1), 0.5));

    // neighbors untouched
    assert!(approx_eq(map.get(0.0), 1.0));
    assert!(approx_eq(map.get(1.0), 3.0));
    assert_eq!(map.count(), 3);
}

#[test]
fn set_output_at_input_is_noop_when_absent() {
    let mut map = small_map();
    map.set_output_at_input(0.25, 99.0);

    assert_eq!(map.count(), 3);
    assert!(approx_eq(map.get(0.0), 1.0));
    assert!(approx_eq(map.get(0.5), 2.0));
    assert!(approx_eq(map.get(1.0), 3.0));
}

#[test]
fn set_output_at_index_leaves_input_unchanged() {
    let mut map = small_map();
    map.set_output_at(0, 7.0);

    assert!(approx_eq(map.output_at(0), 7.0));
    assert!(approx_eq(map.input_at(0), 0.0));
    assert!(approx_eq(map.min_output(), 7.0));
}

#[test]
fn index_of_input_finds_breakpoints() {
    let map = small_map();
    assert_eq!(map.index_of_input(0.0), Some(0));
    assert_eq!(map.index_of_input(0.5), Some(1));
    assert_eq!(map.index_of_input(1.0), Some(2));
    assert_eq!(map.index_of_input(0.25), None);
    assert_eq!(map.index_of_input(2.0), None);
}

#[test]
fn index_of_input_respects_match_tolerance() {
    let mut map = LinearMap::new().set_match_tol(1e-6).unwrap();
    map.add(0.0, 1.0);
    map.add(1.0, 2.0);

    assert_eq!(map.index_of_input(1.0 + 1e-9), Some(1));
    assert_eq!(map.index_of_input(1.0 + 1e-3), None);
}

#[test]
fn edits_compose_with_forward_lookup() {
    let mut map = small_map();
    map.set_output_at_input(0.5, 4.0);

    // segment (0.0, 1.0) - (0.5, 4.0) after the edit
    assert!(approx_eq(map.get(0.25), 2.5));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "breakpoint index out of range")]
fn out_of_range_index_asserts() {
    let map = small_map();
    let _ = map.output_at(3);
}
