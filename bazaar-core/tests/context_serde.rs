//! Behaviour tests verifying the JSON wire shapes of context and catalog types.

use rstest::rstest;

use bazaar_core::{Category, ContextDescriptor, Device, Item, Season, TimeOfDay};

#[rstest]
#[case(r#"{}"#, ContextDescriptor::new())]
#[case(
    r#"{"device":"Mobile"}"#,
    ContextDescriptor::new().with_device(Device::Mobile)
)]
#[case(
    r#"{"device":"Mobile","location":"urban","time_of_day":"Evening","season":"Winter"}"#,
    ContextDescriptor::new()
        .with_device(Device::Mobile)
        .with_location("urban")
        .with_time_of_day(TimeOfDay::Evening)
        .with_season(Season::Winter)
)]
#[case(r#"{"location":null}"#, ContextDescriptor::new())]
fn descriptors_deserialize(#[case] json: &str, #[case] expected: ContextDescriptor) {
    let context: ContextDescriptor = serde_json::from_str(json).expect("valid context JSON");
    assert_eq!(context, expected);
}

#[rstest]
fn unknown_attributes_are_ignored() {
    let json = r#"{"loyalty_tier":"gold","season":"Summer"}"#;
    let context: ContextDescriptor = serde_json::from_str(json).expect("valid context JSON");
    assert_eq!(context, ContextDescriptor::new().with_season(Season::Summer));
}

#[rstest]
fn round_trip_preserves_every_attribute() {
    let context = ContextDescriptor::new()
        .with_device(Device::Tablet)
        .with_location("rural")
        .with_time_of_day(TimeOfDay::Morning)
        .with_season(Season::Autumn);
    let json = serde_json::to_string(&context).expect("context serializes");
    let back: ContextDescriptor = serde_json::from_str(&json).expect("round-trip parses");
    assert_eq!(back, context);
}

#[rstest]
fn categories_serialize_as_plain_strings() {
    let json = serde_json::to_string(&Category::new("Beach Wear")).expect("category serializes");
    assert_eq!(json, r#""Beach Wear""#);
}

#[rstest]
#[case(
    r#"{"id":"coat","category":"Warm Clothing","description":"Wool coat","features":null}"#,
    None
)]
#[case(
    r#"{"id":"coat","category":"Warm Clothing","description":"Wool coat","features":[1.0,0.0]}"#,
    Some(vec![1.0, 0.0])
)]
fn items_accept_optional_features(#[case] json: &str, #[case] expected: Option<Vec<f32>>) {
    let item: Item = serde_json::from_str(json).expect("valid item JSON");
    assert_eq!(item.features, expected);
    assert_eq!(item.category, Category::new("Warm Clothing"));
}
