use lotto_core::{FavoriteEntry, Favorites, NumberSet, Theme};

#[test]
fn serializes_favorites_deterministically() {
    let mut favorites = Favorites::new();
    favorites.save(FavoriteEntry {
        numbers: NumberSet::from_values(&[45, 1, 12, 23, 34, 5]).expect("valid set"),
        note: "birthday".to_string(),
        saved_at: "2026-10-19".to_string(),
    });

    let json = serde_json::to_string_pretty(&favorites).expect("serialize favorites");
    let expected = r#"[
  {
    "numbers": [
      1,
      5,
      12,
      23,
      34,
      45
    ],
    "note": "birthday",
    "saved_at": "2026-10-19"
  }
]"#;
    assert_eq!(json, expected);
}

#[test]
fn deserialization_revalidates_numbers() {
    let out_of_range = r#"[{"numbers":[1,2,3,4,5,46],"note":"","saved_at":"x"}]"#;
    assert!(serde_json::from_str::<Favorites>(out_of_range).is_err());

    let duplicated = r#"[{"numbers":[1,2,3,4,5,5],"saved_at":"x"}]"#;
    assert!(serde_json::from_str::<Favorites>(duplicated).is_err());

    let unsorted = r#"[{"numbers":[9,8,7,6,5,4],"saved_at":"x"}]"#;
    let favorites: Favorites = serde_json::from_str(unsorted).expect("valid favorites");
    assert_eq!(favorites.entries()[0].numbers.values(), [4, 5, 6, 7, 8, 9]);
    assert_eq!(favorites.entries()[0].note, "");
}

#[test]
fn theme_serializes_as_lowercase_name() {
    assert_eq!(
        serde_json::to_string(&Theme::Dark).expect("serialize theme"),
        "\"dark\""
    );
}
