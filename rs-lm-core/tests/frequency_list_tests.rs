use rs_lm_core::{FrequencyList, ModelError, FALLBACK_CHAR};
use rstest::rstest;

const EPSILON: f64 = 1e-12;

fn list_of(text: &str) -> FrequencyList {
	let mut list = FrequencyList::new();
	for c in text.chars() {
		list.update(c);
	}
	list
}

fn characters(list: &FrequencyList) -> Vec<char> {
	list.iter().map(|record| record.character).collect()
}

#[test]
fn test_update_prepends_new_characters() {
	let list = list_of("abac");

	// Newest first-occurrence at the front, existing records never move
	assert_eq!(characters(&list), vec!['c', 'b', 'a']);
	assert_eq!(list.get_by_char('a').unwrap().count, 2);
	assert_eq!(list.get_by_char('b').unwrap().count, 1);
	assert_eq!(list.get_by_char('c').unwrap().count, 1);
	assert_eq!(list.total_count(), 4);
	assert_eq!(list.first().unwrap().character, 'c');
}

#[test]
fn test_index_of() {
	let list = list_of("abac");
	assert_eq!(list.index_of('c'), Some(0));
	assert_eq!(list.index_of('a'), Some(2));
	assert_eq!(list.index_of('z'), None);
}

#[test]
fn test_remove() {
	let mut list = list_of("abac");

	assert!(list.remove('b'));
	assert_eq!(characters(&list), vec!['c', 'a']);
	assert!(!list.remove('b'));
	assert!(!list.remove('z'));
	assert_eq!(list.len(), 2);
}

#[test]
fn test_get_out_of_bounds() {
	let list = list_of("abc");

	assert_eq!(list.get(0).unwrap().character, 'c');
	assert_eq!(list.get(2).unwrap().character, 'a');
	match list.get(3) {
		Err(ModelError::IndexOutOfBounds { index, len }) => {
			assert_eq!(index, 3);
			assert_eq!(len, 3);
		}
		other => panic!("Expected IndexOutOfBounds, got {other:?}"),
	}
	assert!(FrequencyList::new().get(0).is_err());
}

#[test]
fn test_iter_from() {
	let list = list_of("abcd");
	let tail: Vec<char> = list.iter_from(2).map(|record| record.character).collect();
	assert_eq!(tail, vec!['b', 'a']);
	assert_eq!(list.iter_from(10).count(), 0);
}

#[test]
fn test_calculate_probabilities() {
	// Order: b(1), a(2)
	let mut list = list_of("aab");
	list.calculate_probabilities();

	let b = list.get(0).unwrap();
	assert_eq!(b.character, 'b');
	assert!((b.probability - 1.0 / 3.0).abs() < EPSILON);
	assert!((b.cumulative_probability - 1.0 / 3.0).abs() < EPSILON);

	let a = list.get(1).unwrap();
	assert_eq!(a.character, 'a');
	assert!((a.probability - 2.0 / 3.0).abs() < EPSILON);
	assert!((a.cumulative_probability - 1.0).abs() < EPSILON);
}

#[test]
fn test_calculate_probabilities_is_idempotent() {
	let mut list = list_of("committee_");
	list.calculate_probabilities();
	let first = list.clone();
	list.calculate_probabilities();
	assert_eq!(list, first);
}

#[test]
fn test_probabilities_refresh_after_update() {
	let mut list = list_of("ab");
	list.calculate_probabilities();
	assert!((list.get_by_char('a').unwrap().probability - 0.5).abs() < EPSILON);

	list.update('a');
	list.update('a');
	list.calculate_probabilities();
	assert!((list.get_by_char('a').unwrap().probability - 0.75).abs() < EPSILON);
	assert!((list.get_by_char('b').unwrap().probability - 0.25).abs() < EPSILON);
}

#[rstest]
#[case(0.0, 'b')]
#[case(0.2, 'b')]
#[case(0.34, 'a')]
#[case(0.999, 'a')]
fn test_sample_inverse_cdf(#[case] r: f64, #[case] expected: char) {
	// b covers [0, 1/3], a covers (1/3, 1]
	let mut list = list_of("aab");
	assert_eq!(list.sample(r), expected);
}

#[test]
fn test_sample_first_in_traversal_order_wins_ties() {
	// Order: b, a; cumulative boundary at exactly 0.5
	let mut list = list_of("ab");
	assert_eq!(list.sample(0.5), 'b');
}

#[test]
fn test_sample_fallback() {
	let mut empty = FrequencyList::new();
	assert_eq!(empty.sample(0.5), FALLBACK_CHAR);

	let mut list = list_of("a");
	assert_eq!(list.sample(1.5), FALLBACK_CHAR);
}

#[test]
fn test_display() {
	assert_eq!(FrequencyList::new().to_string(), "()");

	let mut list = list_of("ab");
	assert_eq!(list.to_string(), "((b 1 0.0 0.0) (a 1 0.0 0.0))");

	list.calculate_probabilities();
	assert_eq!(list.to_string(), "((b 1 0.5 0.5) (a 1 0.5 1.0))");
}
