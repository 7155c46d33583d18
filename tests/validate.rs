use kandji_client::DeviceListResponse;

const PAGE: &str = r#"{
    "count": 2,
    "next": null,
    "previous": null,
    "results": [
        {
            "id": "0b7f",
            "serial_number": "C02XK1ZZJG5J",
            "model": "MacBook Pro",
            "user": null,
            "device_assigned_date": "2023-03-01T17:02:11Z",
            "mdm_device": {
                "id": "9a2d",
                "enrolled_at": "2023-03-02T08:00:00Z",
                "name": "Loaner 4",
                "enrollment_status": 1
            },
            "dep_account": { "id": "77aa", "server_name": "Acme ABM" }
        },
        { "serial_number": "DMPXL2Q9KD6L", "model": "iPad", "user": "a1b2c3" }
    ]
}"#;

fn validate_value(value: &serde_json::Value) -> valico::json_schema::ValidationState {
    let mut scope = valico::json_schema::Scope::new();
    let schema_json: serde_json::Value =
        serde_json::from_str(include_str!("../DeviceListResponse.json")).unwrap();
    let schema = scope.compile_and_return(schema_json, false).unwrap();
    schema.validate(value)
}

#[test]
fn validate() {
    let page: DeviceListResponse = serde_json::from_str(PAGE).unwrap();
    let value = serde_json::to_value(&page).unwrap();
    let result = validate_value(&value);
    assert!(result.is_valid(), "{:#?}", result);
}

#[test]
fn filtered_validates() {
    let page: DeviceListResponse = serde_json::from_str(PAGE).unwrap();
    let filtered = ade_available::filter::unassigned_macs(&page);
    assert_eq!(filtered.results.len(), 1);
    let result = validate_value(&serde_json::to_value(&filtered).unwrap());
    assert!(result.is_valid(), "{:#?}", result);
}
