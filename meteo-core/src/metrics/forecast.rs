use chrono::{Datelike, Days, NaiveDate};
use serde_json::Value;

use crate::{
    error::WeatherError,
    model::ForecastDay,
    payload::{section, series_number},
    weather_code,
};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// "Today", "Tomorrow" or the weekday name, comparing calendar dates only.
pub fn day_name(date: NaiveDate, today: NaiveDate) -> &'static str {
    if date == today {
        return "Today";
    }
    if today.checked_add_days(Days::new(1)) == Some(date) {
        return "Tomorrow";
    }
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

/// One [`ForecastDay`] per entry of the `daily.time` array.
pub fn extended_forecast(
    payload: &Value,
    today: NaiveDate,
) -> Result<Vec<ForecastDay>, WeatherError> {
    let daily = section(payload, "daily")?;
    let times = daily
        .get("time")
        .and_then(Value::as_array)
        .ok_or_else(|| WeatherError::data_shape("`daily` section has no `time` array"))?;

    let rounded = |key: &str, i: usize| series_number(daily, key, i).unwrap_or(0.0).round() as i64;

    times
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let date = raw
                .as_str()
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
                .ok_or_else(|| WeatherError::data_shape(format!("invalid daily date: {raw}")))?;
            let code = series_number(daily, "weather_code", i).map_or(0, |c| c as i64);

            Ok(ForecastDay {
                date,
                day_name: day_name(date, today).to_string(),
                icon: weather_code::normalize(code).icon,
                temp_max: rounded("temperature_2m_max", i),
                temp_min: rounded("temperature_2m_min", i),
                rain_chance: rounded("precipitation_probability_mean", i),
                humidity: rounded("relative_humidity_2m_mean", i),
                weather_code: code,
            })
        })
        .collect()
}
