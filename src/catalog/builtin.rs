use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::model::{
    ClimateIndicator, ClimateScenario, IndicatorKind, PeriodScenario,
};

/// Application title.
pub const TITLE: &str = "Climate-Fisheries";

const BL_RD: [&str; 6] = ["#4575b4", "#91bfdb", "#e0f3f8", "#fee090", "#fc8d59", "#d73027"];
const BR_OR: [&str; 6] = ["#993404", "#d95f0e", "#fe9929", "#fec44f", "#fee391", "#ffffd4"];
const PU_OR: [&str; 6] = ["#542788", "#998ec3", "#d8daeb", "#fee0b6", "#f1a340", "#b35806"];
const RD_GN: [&str; 6] = ["#d73027", "#fc8d59", "#fee08b", "#d9ef8b", "#91cf60", "#1a9850"];
const RD: [&str; 6] = ["#fee5d9", "#fcbba1", "#fc9272", "#fb6a4a", "#de2d26", "#a50f15"];

/// Indicator names whose data lives under a different directory name.
const STORAGE_ALIASES: &[(&str, &str)] = &[("SBOT", "SBT")];

/// Directory name used on disk for an indicator data name.
pub fn storage_dir_for(indicator: &str) -> &str {
    STORAGE_ALIASES
        .iter()
        .find(|(name, _)| *name == indicator)
        .map(|(_, dir)| *dir)
        .unwrap_or(indicator)
}

/// Indicator, scenario and period descriptors served to the UI.
#[derive(Clone, Debug, Serialize)]
pub struct Catalog {
    title: String,
    stressors: Vec<ClimateIndicator>,
    risks: Vec<ClimateIndicator>,
    scenarios: Vec<ClimateScenario>,
    periods: Vec<PeriodScenario>,
    palettes: BTreeMap<String, Vec<String>>,
}

struct IndicatorDef {
    id: &'static str,
    name: &'static str,
    label: &'static str,
    explanation: &'static str,
    placeholder: u32,
    colors: [&'static str; 6],
    method_id: &'static str,
    years: Option<[i32; 2]>,
    display: bool,
    units: &'static str,
    about_label: Option<&'static str>,
}

impl IndicatorDef {
    fn build(&self, kind: IndicatorKind) -> ClimateIndicator {
        ClimateIndicator {
            id: self.id.to_string(),
            name: self.name.to_string(),
            label: self.label.to_string(),
            explanation: self.explanation.to_string(),
            data_placeholder: self.placeholder,
            colors: self.colors.iter().map(|c| c.to_string()).collect(),
            method_id: self.method_id.to_string(),
            years_range: self.years,
            display: self.display,
            units: self.units.to_string(),
            about_label: self.about_label.map(str::to_string),
            kind,
        }
    }
}

const STRESSORS: &[IndicatorDef] = &[
    IndicatorDef {
        id: "sea-surface-temp",
        name: "SST",
        label: "Warming (sea surface)",
        explanation: "Changes in the average temperature of the surface layer of the ocean relative to the average of 1951-2000 level.",
        placeholder: 11,
        colors: BL_RD,
        method_id: "method1-climate-stressors",
        years: Some([1950, 2100]),
        display: true,
        units: "&#176; C",
        about_label: None,
    },
    IndicatorDef {
        id: "sea-bottom-temp",
        name: "SBOT",
        label: "Warming (sea bottom)",
        explanation: "Average temperature of the bottom layer of the ocean relative to the average of 1951-2000 level.",
        placeholder: 22,
        colors: BL_RD,
        method_id: "method1-climate-stressors",
        years: Some([1950, 2100]),
        display: true,
        units: "&#176; C",
        about_label: None,
    },
    IndicatorDef {
        id: "deoxygenation",
        name: "OXY",
        label: "Oxygen",
        explanation: "Percentage change in oxygen concentration in the upper 200m of the ocean relative to the average of 1951-2000 level.",
        placeholder: 33,
        colors: BR_OR,
        method_id: "method1-climate-stressors",
        years: Some([1950, 2100]),
        display: true,
        units: "%",
        about_label: None,
    },
    IndicatorDef {
        id: "acidification",
        name: "PH",
        label: "pH",
        explanation: "Percentage change in pH (a measure of ocean acidity) in the surface layer of the ocean relative to the average of 1951-2000 level.",
        placeholder: 44,
        colors: PU_OR,
        method_id: "method1-climate-stressors",
        years: Some([1950, 2100]),
        display: true,
        units: "%",
        about_label: None,
    },
    IndicatorDef {
        id: "primary-production",
        name: "NPP",
        label: "Net primary production",
        explanation: "Percentage change in net primary production in the upper 200m of the ocean relative to the average of 1951-2000 level.",
        placeholder: 55,
        colors: RD_GN,
        method_id: "method1-climate-stressors",
        years: Some([1950, 2099]),
        display: true,
        units: "%",
        about_label: None,
    },
];

const RISKS: &[IndicatorDef] = &[
    IndicatorDef {
        id: "species-turnover",
        name: "SPP",
        label: "Species turnover",
        explanation: "Percentage change in species turnover (an indicator of changes in species composition) relative to the average of 1986-2005 level",
        placeholder: 88,
        colors: RD,
        method_id: "method4-species-turnover",
        years: Some([1951, 2099]),
        display: true,
        units: "%",
        about_label: None,
    },
    IndicatorDef {
        id: "multi-stress-index-surface",
        name: "MSIS",
        label: "Multi-stressor exposure index",
        explanation: "Value of an index for the exposure to multiple climatic stressors (ocean warming, acidification, deoxygenation and decline in net primary production). The value ranges from 1 to 100, with 100 being the highest exposure to multiple climatic stressors.",
        placeholder: 66,
        colors: RD,
        method_id: "method2-multi-stressor-exposure-index",
        years: Some([1980, 2099]),
        display: true,
        units: "%",
        about_label: Some("Multi-stressor exposure index"),
    },
    IndicatorDef {
        id: "max-catch-potential",
        name: "MCP",
        label: "Maximum catch potential",
        explanation: "Percentage change in maximum catch potential (a proxy of maximum sustainable yield) of fish stocks relative to the average of 1986-2005 level.",
        placeholder: 99,
        colors: BL_RD,
        method_id: "method3-maximum-catch-potential",
        years: Some([1950, 2099]),
        display: true,
        units: "x 1000 tonnes",
        about_label: None,
    },
    IndicatorDef {
        id: "revenue",
        name: "NA",
        label: "Maximum potential revenue",
        explanation: "Maximum revenue potential explanation placeholder.",
        placeholder: 100,
        colors: RD,
        method_id: "method5-maximum-potential-revenue",
        years: None,
        display: false,
        units: "%",
        about_label: None,
    },
];

impl Catalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let scenarios = [
            ("climate-scenario-low", "26", "Low"),
            ("climate-scenario-high", "85", "High"),
        ]
        .into_iter()
        .map(|(id, name, label)| ClimateScenario {
            id: id.to_string(),
            name: name.to_string(),
            label: label.to_string(),
        })
        .collect();

        let periods = [
            ("period-present", "present", "Present day (1986 - 2005)"),
            ("period-mid", "mid", "Mid century (2040 - 2060)"),
            ("period-end", "end", "End of century (2080 - 2099)"),
        ]
        .into_iter()
        .map(|(id, name, label)| PeriodScenario {
            id: id.to_string(),
            name: name.to_string(),
            label: label.to_string(),
        })
        .collect();

        let palettes = [
            ("blRd", BL_RD),
            ("brOr", BR_OR),
            ("puOr", PU_OR),
            ("rdGn", RD_GN),
            ("rd", RD),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.iter().map(|c| c.to_string()).collect()))
        .collect();

        Self {
            title: TITLE.to_string(),
            stressors: STRESSORS
                .iter()
                .map(|d| d.build(IndicatorKind::Stressor))
                .collect(),
            risks: RISKS.iter().map(|d| d.build(IndicatorKind::Risk)).collect(),
            scenarios,
            periods,
            palettes,
        }
    }

    /// Application title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Physical stressor indicators.
    pub fn stressors(&self) -> &[ClimateIndicator] {
        &self.stressors
    }

    /// Fisheries risk indicators.
    pub fn risks(&self) -> &[ClimateIndicator] {
        &self.risks
    }

    /// All indicators, stressors first.
    pub fn indicators(&self) -> impl Iterator<Item = &ClimateIndicator> {
        self.stressors.iter().chain(self.risks.iter())
    }

    /// Emission scenarios.
    pub fn scenarios(&self) -> &[ClimateScenario] {
        &self.scenarios
    }

    /// Time periods.
    pub fn periods(&self) -> &[PeriodScenario] {
        &self.periods
    }

    /// Named color palettes.
    pub fn palettes(&self) -> &BTreeMap<String, Vec<String>> {
        &self.palettes
    }

    /// Lookup an indicator by data name (`SST`) or UI id (`sea-surface-temp`).
    pub fn indicator(&self, key: &str) -> Option<&ClimateIndicator> {
        self.indicators().find(|i| i.name == key || i.id == key)
    }

    /// Lookup a scenario by data name or id.
    pub fn scenario(&self, key: &str) -> Option<&ClimateScenario> {
        self.scenarios.iter().find(|s| s.name == key || s.id == key)
    }

    /// Lookup a period by data name or id.
    pub fn period(&self, key: &str) -> Option<&PeriodScenario> {
        self.periods.iter().find(|p| p.name == key || p.id == key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/builtin.rs"]
mod tests;
