use super::*;

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

#[test]
fn zone_query_requires_every_field() {
    let q = ZoneQuery {
        model: s("LME"),
        indicator: s("SST"),
        climate: s("26"),
        id: None,
        period: s("mid"),
    };
    let err = q.validate().unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(
        err.public_message(),
        "Missing required parameters: model, indicator, climate, id, period"
    );
}

#[test]
fn empty_strings_count_as_missing() {
    let q = LayerQuery {
        indicator: s(""),
        climate: s("26"),
        period: s("mid"),
    };
    assert_eq!(
        q.validate().unwrap_err().public_message(),
        "Missing required parameters: indicator, climate, period"
    );
}

#[test]
fn zone_query_accepts_plain_segments() {
    let q = ZoneQuery {
        model: s("EEZ"),
        indicator: s("SBOT"),
        climate: s("85"),
        id: s("12"),
        period: s("end"),
    };
    let p = q.validate().unwrap();
    assert_eq!(p.indicator, "SBOT");
    assert_eq!(p.id, "12");
}

#[test]
fn traversal_segments_are_rejected() {
    let q = ZoneQuery {
        model: s(".."),
        indicator: s("SST"),
        climate: s("26"),
        id: s("1"),
        period: s("mid"),
    };
    assert_eq!(q.validate().unwrap_err().status_code(), 400);

    assert!(path_segment("id", "a/b").is_err());
    assert!(path_segment("id", "a\\b").is_err());
    assert!(path_segment("id", "1.5").is_ok());
}

#[test]
fn pixel_query_parses_coordinates() {
    let q = PixelQuery {
        indicator: s("SST"),
        climate: s("26"),
        period: s("present"),
        latitude: s(" -12.5 "),
        longitude: s("40"),
    };
    let p = q.validate().unwrap();
    assert_eq!(p.latitude, -12.5);
    assert_eq!(p.longitude, 40.0);
    assert_eq!(p.layer.period, "present");
}

#[test]
fn pixel_query_rejects_unparseable_coordinates() {
    let q = PixelQuery {
        indicator: s("SST"),
        climate: s("26"),
        period: s("present"),
        latitude: s("north"),
        longitude: s("40"),
    };
    let err = q.validate().unwrap_err();
    assert_eq!(err.public_message(), "Invalid value for parameter 'latitude'");
}
