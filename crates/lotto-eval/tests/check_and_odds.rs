use lotto_core::{Number, NumberSet};
use lotto_eval::{Grade, check_ticket, estimate_odds, grade_ticket};

#[test]
fn typed_and_raw_checks_agree() {
    let winning = NumberSet::from_values(&[3, 9, 18, 27, 36, 45]).expect("valid set");
    let mine = NumberSet::from_values(&[3, 9, 18, 27, 36, 44]).expect("valid set");
    let bonus = Number::new(44).expect("valid bonus");

    let typed = grade_ticket(&winning, bonus, &mine);
    let raw = check_ticket(&winning.values(), 44, &mine.values()).expect("valid input");

    assert_eq!(typed, raw);
    assert_eq!(raw.grade, Grade::Second);
    assert_eq!(raw.grade.to_string(), "2nd place");
}

#[test]
fn check_result_serializes_with_grade_name() {
    let result = check_ticket(&[1, 2, 3, 4, 5, 6], 7, &[1, 2, 3, 4, 5, 6]).expect("valid input");
    let json = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(json["grade"], "first");
    assert_eq!(json["match_count"], 6);
    assert_eq!(json["matched"], serde_json::json!([1, 2, 3, 4, 5, 6]));
}

#[test]
fn odds_for_ten_tickets() {
    let odds = estimate_odds(10).expect("valid count");
    assert_eq!(odds.tickets, 10);
    assert!(odds.first_place_chance > 1.0 / 8_145_060.0 * 9.99);
    assert!(odds.first_place_chance < 1.0 / 8_145_060.0 * 10.0);
}
