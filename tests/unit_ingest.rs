// tests/unit_ingest.rs
use serde_json::json;
use sigreport_core::error::ReportError;
use sigreport_core::ingest;

fn sample_doc() -> serde_json::Value {
    json!({
        "data": {
            "attributes": {
                "signatures_by_country": [
                    {"name": "United Kingdom", "code": "GB", "signature_count": 900},
                    {"name": "France", "code": "FR", "signature_count": 40}
                ],
                "signatures_by_constituency": [
                    {"name": "Glasgow East", "ons_code": "S14000030",
                     "mp": "Natalie McGarry MP", "signature_count": 500},
                    {"name": "Manchester Central", "ons_code": "E14000807",
                     "mp": "Lucy Powell MP", "signature_count": 300},
                    {"name": "Sheffield Hallam", "ons_code": "E14000919",
                     "mp": null, "signature_count": 12}
                ]
            }
        }
    })
}

#[test]
fn test_round_trip_sizes_and_fields() {
    let (countries, constituencies) = ingest::collections(&sample_doc()).unwrap();

    assert_eq!(countries.len(), 2);
    assert_eq!(constituencies.len(), 3);

    let uk = countries.iter().next().unwrap();
    assert_eq!(uk.name, "United Kingdom");
    assert_eq!(uk.code, "GB");
    assert_eq!(uk.signature_count, 900);

    let glasgow = constituencies.iter().next().unwrap();
    assert_eq!(glasgow.name, "Glasgow East");
    assert_eq!(glasgow.ons_code, "S14000030");
    assert_eq!(glasgow.mp, "Natalie McGarry MP");
    assert_eq!(glasgow.signature_count, 500);
}

#[test]
fn test_null_mp_becomes_empty_string() {
    let (_, constituencies) = ingest::collections(&sample_doc()).unwrap();
    let vacant = constituencies.iter().find(|c| c.name == "Sheffield Hallam").unwrap();
    assert_eq!(vacant.mp, "");
}

#[test]
fn test_absent_mp_key_becomes_empty_string() {
    let doc = json!({
        "data": {"attributes": {
            "signatures_by_country": [],
            "signatures_by_constituency": [
                {"name": "Ochil and South Perthshire", "ons_code": "S14000044",
                 "signature_count": 33}
            ]
        }}
    });
    let (_, constituencies) = ingest::collections(&doc).unwrap();
    let seat = constituencies.iter().next().unwrap();
    assert_eq!(seat.mp, "");
    assert_eq!(seat.signature_count, 33);
}

#[test]
fn test_missing_data_key() {
    let err = ingest::collections(&json!({"meta": {}})).unwrap_err();
    assert!(matches!(err, ReportError::Schema { .. }));
    assert!(err.to_string().contains("data"));
}

#[test]
fn test_missing_attributes_key() {
    let err = ingest::collections(&json!({"data": {}})).unwrap_err();
    assert!(err.to_string().contains("attributes"));
}

#[test]
fn test_missing_country_array() {
    let doc = json!({
        "data": {"attributes": {"signatures_by_constituency": []}}
    });
    let err = ingest::collections(&doc).unwrap_err();
    assert!(err.to_string().contains("signatures_by_country"));
}

#[test]
fn test_country_array_wrong_type() {
    let doc = json!({
        "data": {"attributes": {
            "signatures_by_country": "not an array",
            "signatures_by_constituency": []
        }}
    });
    let err = ingest::collections(&doc).unwrap_err();
    assert!(matches!(err, ReportError::Schema { .. }));
}

#[test]
fn test_record_missing_field() {
    let doc = json!({
        "data": {"attributes": {
            "signatures_by_country": [{"name": "France", "signature_count": 40}],
            "signatures_by_constituency": []
        }}
    });
    let err = ingest::collections(&doc).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("code"), "unexpected message: {msg}");
    assert!(msg.contains("signatures_by_country"));
}

#[test]
fn test_empty_arrays_are_valid() {
    let doc = json!({
        "data": {"attributes": {
            "signatures_by_country": [],
            "signatures_by_constituency": []
        }}
    });
    let (countries, constituencies) = ingest::collections(&doc).unwrap();
    assert!(countries.is_empty());
    assert!(constituencies.is_empty());
}
