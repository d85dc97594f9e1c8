#![allow(missing_docs)]

use country_catalog::Catalog;
use country_field::{FieldInput, normalize, serialize_value};
use country_model::{SelectedOption, Selection, SelectionMode};
use proptest::prelude::*;
use serde_json::json;

fn selected_codes(options: &[SelectedOption]) -> Vec<&str> {
    options
        .iter()
        .filter(|option| option.selected)
        .map(|option| option.code.as_str())
        .collect()
}

#[test]
fn test_every_catalog_code_normalizes_to_its_label() {
    let catalog = Catalog::builtin();
    for option in catalog {
        let value = normalize(option.code.as_str(), catalog, SelectionMode::Single);
        assert_eq!(value.code(), Some(option.code.as_str()));
        assert_eq!(value.label(), Some(option.label.as_str()));
    }
}

#[test]
fn test_multi_keeps_input_order_and_marks_view() {
    let catalog = Catalog::builtin();
    let value = normalize(vec!["US", "GB", "FR"], catalog, SelectionMode::Multi);

    assert_eq!(value.mode(), SelectionMode::Multi);
    assert_eq!(value.codes(), vec!["US", "GB", "FR"]);
    assert_eq!(
        value.labels(),
        vec!["United States", "United Kingdom", "France"]
    );
    assert!(value.selected().iter().all(|entry| entry.selected));

    assert_eq!(value.options().len(), catalog.len());
    // View follows catalog (label) order, not input order.
    assert_eq!(selected_codes(value.options()), vec!["FR", "GB", "US"]);
}

#[test]
fn test_unknown_code_uses_itself_as_label() {
    let value = normalize("ZZ", Catalog::builtin(), SelectionMode::Single);
    assert_eq!(
        value.selection,
        Selection::Single(Some(SelectedOption::chosen("ZZ", "ZZ")))
    );
    assert!(selected_codes(value.options()).is_empty());
}

#[test]
fn test_unknown_code_in_multi_mode() {
    let value = normalize(vec!["XK", "DE"], Catalog::builtin(), SelectionMode::Multi);
    assert_eq!(value.labels(), vec!["XK", "Germany"]);
    assert_eq!(selected_codes(value.options()), vec!["DE"]);
}

#[test]
fn test_empty_input_single_mode() {
    let catalog = Catalog::builtin();
    for input in [FieldInput::null(), FieldInput::from(""), FieldInput::from(None)] {
        let value = normalize(input, catalog, SelectionMode::Single);
        assert_eq!(value.selection, Selection::Single(None));
        assert_eq!(value.code(), None);
        assert_eq!(value.options().len(), catalog.len());
        assert!(selected_codes(value.options()).is_empty());
    }
}

#[test]
fn test_empty_input_multi_mode() {
    let catalog = Catalog::builtin();
    for input in [FieldInput::null(), FieldInput::from(""), FieldInput::from("[]")] {
        let value = normalize(input, catalog, SelectionMode::Multi);
        assert_eq!(value.selection, Selection::Multi(Vec::new()));
        assert!(value.is_empty());
    }
}

#[test]
fn test_json_text_matches_array_input() {
    let catalog = Catalog::builtin();
    let from_text = normalize(r#"["CA","MX"]"#, catalog, SelectionMode::Multi);
    let from_array = normalize(vec!["CA", "MX"], catalog, SelectionMode::Multi);
    assert_eq!(from_text, from_array);
    assert_eq!(from_text.labels(), vec!["Canada", "Mexico"]);
}

#[test]
fn test_malformed_json_is_a_literal_code() {
    let value = normalize(r#"["CA","MX""#, Catalog::builtin(), SelectionMode::Multi);
    assert_eq!(value.codes(), vec![r#"["CA","MX""#]);
    assert_eq!(value.labels(), vec![r#"["CA","MX""#]);
}

#[test]
fn test_single_mode_keeps_first_entry_only() {
    let value = normalize(vec!["JP", "KR"], Catalog::builtin(), SelectionMode::Single);
    assert_eq!(value.code(), Some("JP"));
    assert_eq!(value.len(), 1);
    // Every submitted entry is still flagged in the option view.
    let mut flagged = selected_codes(value.options());
    flagged.sort_unstable();
    assert_eq!(flagged, vec!["JP", "KR"]);
}

#[test]
fn test_label_value_pairs_keep_given_labels() {
    let input = json!([
        {"label": "Great Britain", "value": "GB"},
        {"label": "Atlantis", "value": "AT-X"},
        "NL"
    ]);
    let value = normalize(input, Catalog::builtin(), SelectionMode::Multi);
    assert_eq!(value.codes(), vec!["GB", "AT-X", "NL"]);
    assert_eq!(value.labels(), vec!["Great Britain", "Atlantis", "Netherlands"]);
    assert_eq!(selected_codes(value.options()), vec!["NL", "GB"]);
}

#[test]
fn test_single_pair_object() {
    let input = json!({"label": "Deutschland", "value": "DE"});
    let value = normalize(input, Catalog::builtin(), SelectionMode::Single);
    assert_eq!(
        value.selection,
        Selection::Single(Some(SelectedOption::chosen("DE", "Deutschland")))
    );
}

#[test]
fn test_numeric_codes_are_coerced_to_text() {
    let value = normalize(json!([840]), Catalog::builtin(), SelectionMode::Multi);
    assert_eq!(value.codes(), vec!["840"]);
}

#[test]
fn test_normalized_value_passes_through() {
    let catalog = Catalog::builtin();
    let once = normalize(vec!["BR"], catalog, SelectionMode::Multi);
    let twice = normalize(once.clone(), catalog, SelectionMode::Multi);
    assert_eq!(once, twice);

    // The mode of an already-normalized value is kept as-is.
    let other_mode = normalize(once.clone(), catalog, SelectionMode::Single);
    assert_eq!(other_mode, once);
}

#[test]
fn test_serialized_normalized_value_passes_through() {
    let catalog = Catalog::builtin();
    let once = normalize(vec!["BR", "AR"], catalog, SelectionMode::Multi);
    let text = serde_json::to_string(&once).expect("serialize value");
    assert_eq!(normalize(text, catalog, SelectionMode::Multi), once);
}

#[test]
fn test_object_values_keep_insertion_order() {
    let codes = [
        "US", "GB", "FR", "DE", "IT", "ES", "PT", "NL", "BE", "AT", "CH", "SE",
    ];
    let text = format!(
        "{{{}}}",
        codes
            .iter()
            .enumerate()
            .map(|(index, code)| format!("\"{index}\":\"{code}\""))
            .collect::<Vec<_>>()
            .join(",")
    );
    let value = normalize(text, Catalog::builtin(), SelectionMode::Multi);
    assert_eq!(value.codes(), codes.to_vec());
}

#[test]
fn test_single_mode_takes_first_inserted_object_value() {
    let catalog = Catalog::builtin();
    let value = normalize(r#"{"b":"US","a":"GB"}"#, catalog, SelectionMode::Single);
    assert_eq!(value.code(), Some("US"));

    let value = normalize(json!({"z": "NO", "m": "FI"}), catalog, SelectionMode::Single);
    assert_eq!(value.code(), Some("NO"));
}

fn raw_input() -> impl Strategy<Value = serde_json::Value> {
    let code = prop_oneof![
        prop::sample::select(vec!["US", "GB", "FR", "CA", "MX", "ZZ", ""]).prop_map(String::from),
        "[A-Z]{2}",
    ];
    prop_oneof![
        Just(serde_json::Value::Null),
        code.clone().prop_map(serde_json::Value::String),
        prop::collection::vec(code.clone(), 0..6).prop_map(|codes| json!(codes)),
        prop::collection::vec(code.clone(), 0..6)
            .prop_map(|codes| serde_json::Value::String(json!(codes).to_string())),
        prop::collection::vec(code.clone(), 0..14).prop_map(|codes| {
            serde_json::Value::Object(
                codes
                    .into_iter()
                    .enumerate()
                    .map(|(index, code)| (index.to_string(), serde_json::Value::String(code)))
                    .collect(),
            )
        }),
        prop::collection::vec((code, "[a-z ]{0,8}"), 0..4).prop_map(|pairs| {
            json!(
                pairs
                    .into_iter()
                    .map(|(value, label)| json!({"label": label, "value": value}))
                    .collect::<Vec<_>>()
            )
        }),
    ]
}

proptest! {
    #[test]
    fn prop_stored_form_is_stable(raw in raw_input(), multi in any::<bool>()) {
        let catalog = Catalog::builtin();
        let mode = SelectionMode::from_multi(multi);
        let stored = serialize_value(&normalize(raw, catalog, mode));
        let reloaded = normalize(stored.clone(), catalog, mode);
        prop_assert_eq!(serialize_value(&reloaded), stored);
    }

    #[test]
    fn prop_object_values_match_array_input(codes in prop::collection::vec("[A-Z]{2}", 0..14)) {
        let catalog = Catalog::builtin();
        let object: serde_json::Map<String, serde_json::Value> = codes
            .iter()
            .enumerate()
            .map(|(index, code)| (index.to_string(), json!(code)))
            .collect();
        let from_object = normalize(serde_json::Value::Object(object), catalog, SelectionMode::Multi);
        let from_array = normalize(json!(codes), catalog, SelectionMode::Multi);
        prop_assert_eq!(from_object, from_array);
    }

    #[test]
    fn prop_view_is_catalog_aligned(raw in raw_input(), multi in any::<bool>()) {
        let catalog = Catalog::builtin();
        let value = normalize(raw, catalog, SelectionMode::from_multi(multi));

        prop_assert_eq!(value.options().len(), catalog.len());
        for (entry, option) in value.options().iter().zip(catalog.iter()) {
            prop_assert_eq!(&entry.code, &option.code);
            prop_assert_eq!(&entry.label, &option.label);
        }
        for entry in value.selected() {
            if let Some(view) = value.options().iter().find(|o| o.code == entry.code) {
                prop_assert!(view.selected);
            }
        }
    }

    #[test]
    fn prop_single_mode_holds_at_most_one(raw in raw_input()) {
        let value = normalize(raw, Catalog::builtin(), SelectionMode::Single);
        prop_assert!(value.len() <= 1);
        prop_assert_eq!(value.mode(), SelectionMode::Single);
    }
}
