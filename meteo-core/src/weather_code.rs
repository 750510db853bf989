//! WMO weather code table used by the forecast provider.

use crate::model::Condition;

pub const UNKNOWN_TEXT: &str = "Unknown";
pub const UNKNOWN_ICON: &str = "Help";

/// Label and icon for a weather code, if the code is in the table.
pub fn lookup(code: i64) -> Option<(&'static str, &'static str)> {
    let entry = match code {
        0 => ("Clear sky", "WbSunny"),
        1 => ("Mainly clear", "WbSunny"),
        2 => ("Partly cloudy", "PartlyCloudyDay"),
        3 => ("Overcast", "Cloud"),
        45 => ("Fog", "Foggy"),
        48 => ("Depositing rime fog", "Foggy"),
        51 => ("Light drizzle", "Grain"),
        53 => ("Moderate drizzle", "Grain"),
        55 => ("Dense drizzle", "Grain"),
        61 => ("Slight rain", "LightMode"),
        63 => ("Moderate rain", "WaterDrop"),
        65 => ("Heavy rain", "WaterDrop"),
        71 => ("Slight snow", "AcUnit"),
        73 => ("Moderate snow", "AcUnit"),
        75 => ("Heavy snow", "AcUnit"),
        80 => ("Slight rain showers", "Grain"),
        81 => ("Moderate rain showers", "Grain"),
        82 => ("Violent rain showers", "WaterDrop"),
        95 => ("Thunderstorm", "Thunderstorm"),
        96 => ("Thunderstorm with slight hail", "Thunderstorm"),
        99 => ("Thunderstorm with heavy hail", "Thunderstorm"),
        _ => return None,
    };
    Some(entry)
}

/// Map a weather code to its condition. Codes outside the table map to
/// `Unknown` / `Help`.
pub fn normalize(code: i64) -> Condition {
    let (text, icon) = lookup(code).unwrap_or((UNKNOWN_TEXT, UNKNOWN_ICON));
    Condition {
        text: text.to_string(),
        icon: icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(i64, &str, &str)] = &[
        (0, "Clear sky", "WbSunny"),
        (1, "Mainly clear", "WbSunny"),
        (2, "Partly cloudy", "PartlyCloudyDay"),
        (3, "Overcast", "Cloud"),
        (45, "Fog", "Foggy"),
        (48, "Depositing rime fog", "Foggy"),
        (51, "Light drizzle", "Grain"),
        (53, "Moderate drizzle", "Grain"),
        (55, "Dense drizzle", "Grain"),
        (61, "Slight rain", "LightMode"),
        (63, "Moderate rain", "WaterDrop"),
        (65, "Heavy rain", "WaterDrop"),
        (71, "Slight snow", "AcUnit"),
        (73, "Moderate snow", "AcUnit"),
        (75, "Heavy snow", "AcUnit"),
        (80, "Slight rain showers", "Grain"),
        (81, "Moderate rain showers", "Grain"),
        (82, "Violent rain showers", "WaterDrop"),
        (95, "Thunderstorm", "Thunderstorm"),
        (96, "Thunderstorm with slight hail", "Thunderstorm"),
        (99, "Thunderstorm with heavy hail", "Thunderstorm"),
    ];

    #[test]
    fn every_documented_code_maps_exactly() {
        for (code, text, icon) in TABLE {
            let cond = normalize(*code);
            assert_eq!(cond.text, *text, "code {code}");
            assert_eq!(cond.icon, *icon, "code {code}");
        }
    }

    #[test]
    fn codes_outside_table_are_unknown() {
        for code in -200..=200 {
            if TABLE.iter().any(|(c, _, _)| *c == code) {
                continue;
            }
            let cond = normalize(code);
            assert_eq!(cond.text, "Unknown", "code {code}");
            assert_eq!(cond.icon, "Help", "code {code}");
        }
        assert_eq!(normalize(i64::MAX).icon, "Help");
    }
}
