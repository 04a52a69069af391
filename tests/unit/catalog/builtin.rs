use super::*;
use crate::catalog::model::period_year_range;

#[test]
fn indicators_list_stressors_before_risks() {
    let cat = Catalog::builtin();
    let names: Vec<&str> = cat.indicators().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        ["SST", "SBOT", "OXY", "PH", "NPP", "SPP", "MSIS", "MCP", "NA"]
    );
    assert!(cat.stressors().iter().all(|i| i.kind == IndicatorKind::Stressor));
    assert!(cat.risks().iter().all(|i| i.kind == IndicatorKind::Risk));
}

#[test]
fn every_indicator_has_six_color_stops() {
    let cat = Catalog::builtin();
    for ind in cat.indicators() {
        assert_eq!(ind.colors.len(), 6, "{}", ind.name);
    }
}

#[test]
fn lookup_accepts_name_or_id() {
    let cat = Catalog::builtin();
    assert_eq!(cat.indicator("OXY").unwrap().id, "deoxygenation");
    assert_eq!(cat.indicator("deoxygenation").unwrap().name, "OXY");
    assert_eq!(cat.scenario("climate-scenario-high").unwrap().name, "85");
    assert_eq!(cat.period("mid").unwrap().label, "Mid century (2040 - 2060)");
    assert!(cat.indicator("XYZ").is_none());
}

#[test]
fn sea_bottom_temperature_is_stored_under_alias() {
    assert_eq!(storage_dir_for("SBOT"), "SBT");
    assert_eq!(storage_dir_for("SST"), "SST");
    assert_eq!(storage_dir_for("unknown"), "unknown");
}

#[test]
fn catch_potential_is_scaled_for_display() {
    let cat = Catalog::builtin();
    assert_eq!(cat.indicator("MCP").unwrap().display_factor(), 10.0);
    assert_eq!(cat.indicator("NPP").unwrap().display_factor(), 1.0);
    assert!(cat.indicator("revenue").unwrap().is_revenue());
    assert!(!cat.indicator("revenue").unwrap().display);
}

#[test]
fn period_windows_are_fixed() {
    assert_eq!(period_year_range("present"), Some((1986, 2005)));
    assert_eq!(period_year_range("mid"), Some((2040, 2060)));
    assert_eq!(period_year_range("end"), Some((2080, 2099)));
    assert_eq!(period_year_range("later"), None);
}

#[test]
fn units_decode_degree_entity() {
    let cat = Catalog::builtin();
    assert_eq!(cat.indicator("SST").unwrap().decoded_units(), "° C");
}

#[test]
fn catalog_serializes_with_ui_field_names() {
    let v = serde_json::to_value(Catalog::builtin()).unwrap();
    assert_eq!(v["title"], "Climate-Fisheries");
    assert_eq!(v["stressors"][0]["methodId"], "method1-climate-stressors");
    assert_eq!(v["stressors"][0]["yearsRange"], serde_json::json!([1950, 2100]));
    assert_eq!(v["stressors"][0]["type"], "stressor");
    assert!(v["risks"][3].get("yearsRange").is_none());
    assert_eq!(v["palettes"]["rd"][5], "#a50f15");
}
