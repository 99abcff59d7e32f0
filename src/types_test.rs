use super::*;

// =============================================================
// List response parsing
// =============================================================

#[test]
fn list_response_reads_wire_names() {
    let json = r#"{"restaurant":[{"_id":"1","Name":"A","Address":"X","Telephone":"555"}]}"#;
    let rows = serde_json::from_str::<RestaurantListResponse>(json)
        .unwrap()
        .into_restaurants();
    assert_eq!(
        rows,
        vec![Restaurant {
            id: "1".into(),
            name: "A".into(),
            address: "X".into(),
            telephone: "555".into(),
        }]
    );
}

#[test]
fn list_response_missing_field_is_empty() {
    let rows = serde_json::from_str::<RestaurantListResponse>(r#"{"message":"ok"}"#)
        .unwrap()
        .into_restaurants();
    assert!(rows.is_empty());
}

#[test]
fn list_response_null_field_is_empty() {
    let rows = serde_json::from_str::<RestaurantListResponse>(r#"{"restaurant":null}"#)
        .unwrap()
        .into_restaurants();
    assert!(rows.is_empty());
}

#[test]
fn list_response_non_array_field_is_empty() {
    for body in [r#"{"restaurant":false}"#, r#"{"restaurant":""}"#, r#"{"restaurant":{}}"#, r#"{"restaurant":0}"#] {
        let rows = serde_json::from_str::<RestaurantListResponse>(body).unwrap().into_restaurants();
        assert!(rows.is_empty(), "{body}");
    }
}

#[test]
fn list_response_malformed_row_still_errors() {
    assert!(serde_json::from_str::<RestaurantListResponse>(r#"{"restaurant":[{"Name":"A"}]}"#).is_err());
}

#[test]
fn list_response_keeps_server_order() {
    let json = r#"{"restaurant":[{"_id":"b","Name":"B"},{"_id":"a","Name":"A"}]}"#;
    let rows = serde_json::from_str::<RestaurantListResponse>(json)
        .unwrap()
        .into_restaurants();
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn restaurant_missing_strings_default_to_empty() {
    let row = serde_json::from_str::<Restaurant>(r#"{"_id":"9"}"#).unwrap();
    assert_eq!(row.id, "9");
    assert!(row.name.is_empty());
    assert!(row.address.is_empty());
    assert!(row.telephone.is_empty());
}

// =============================================================
// Request body
// =============================================================

#[test]
fn fields_serialize_with_wire_names() {
    let fields = RestaurantFields {
        name: "Noodle Bar".into(),
        address: "1 Main St".into(),
        telephone: "555-0100".into(),
    };
    let value = serde_json::to_value(&fields).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "Name": "Noodle Bar", "Address": "1 Main St", "Telephone": "555-0100" })
    );
}

#[test]
fn fields_set_touches_only_one_field() {
    let mut fields = RestaurantFields::default();
    fields.set(Field::Address, "Harbour Rd");
    assert_eq!(fields.get(Field::Address), "Harbour Rd");
    assert_eq!(fields.get(Field::Name), "");
    assert_eq!(fields.get(Field::Telephone), "");
}

// =============================================================
// Identifiers
// =============================================================

#[test]
fn addressable_ids() {
    assert!(is_addressable_id("1"));
    assert!(is_addressable_id("64f0c2a1e4b0"));
    assert!(is_addressable_id("../admin"));
    assert!(is_addressable_id("..."));
}

#[test]
fn blank_and_dot_ids_are_not_addressable() {
    for id in ["", "   ", ".", ".."] {
        assert!(!is_addressable_id(id), "{id:?}");
    }
}

// =============================================================
// Field names
// =============================================================

#[test]
fn field_parses_wire_names() {
    for field in Field::ALL {
        assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
    }
}

#[test]
fn field_rejects_unknown_and_lowercase_names() {
    assert_eq!("Email".parse::<Field>().unwrap_err(), UnknownField("Email".into()));
    assert!("name".parse::<Field>().is_err());
}
