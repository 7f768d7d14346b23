use {
    quickcheck::{Gen, QuickCheck, TestResult},
    tuplebind::prelude::*,
};

fn quickcheck(tests: u64) -> QuickCheck {
    QuickCheck::new().gen(Gen::new(13)).tests(tests)
}

fn each_slot_gets_its_element(source: (u32, String, Vec<u8>, char)) -> TestResult {
    let (mut a, mut b, mut c, mut d) = (0, String::new(), Vec::new(), ' ');

    bind!(a, b, c, d).set(source.clone());

    TestResult::from_bool((a, b, c, d) == source)
}

fn later_assignment_replaces_earlier(first: (i64, String), second: (i64, String)) -> TestResult {
    let (mut number, mut text) = (0, String::new());

    bind!(number, text).set(first).set(second.clone());

    TestResult::from_bool((number, text) == second)
}

fn borrowed_source_is_left_intact((x0, y0, z0): (String, String, String)) -> TestResult {
    let source = [x0, y0, z0];
    let before = source.clone();
    let (mut x, mut y, mut z) = (String::new(), String::new(), String::new());

    bind!(x, y, z).set(&source);

    TestResult::from_bool(source == before && [x, y, z] == before)
}

fn converted_assignment_matches_converting_first(source: (u8, i16, char)) -> TestResult {
    let (mut wide, mut signed, mut code) = (0_u64, 0_i64, 0_u32);
    bind!(wide, signed, code).set_into(source);

    let (a, b, c) = source;
    TestResult::from_bool((wide, signed, code) == (a.into(), b.into(), c.into()))
}

fn untouched_places_keep_their_values(record: (u16, u16, u16), update: (u16, u16)) -> TestResult {
    let mut result = record;

    bind!(result.0, result.2).set(update);

    TestResult::from_bool(result == (update.0, record.1, update.1))
}

#[test]
fn each_slot_gets_its_element_prop() {
    quickcheck(500).quickcheck(each_slot_gets_its_element as fn(_) -> TestResult);
}

#[test]
fn later_assignment_replaces_earlier_prop() {
    quickcheck(500).quickcheck(later_assignment_replaces_earlier as fn(_, _) -> TestResult);
}

#[test]
fn borrowed_source_is_left_intact_prop() {
    quickcheck(500).quickcheck(borrowed_source_is_left_intact as fn(_) -> TestResult);
}

#[test]
fn converted_assignment_matches_converting_first_prop() {
    quickcheck(500).quickcheck(converted_assignment_matches_converting_first as fn(_) -> TestResult);
}

#[test]
fn untouched_places_keep_their_values_prop() {
    quickcheck(500).quickcheck(untouched_places_keep_their_values as fn(_, _) -> TestResult);
}
