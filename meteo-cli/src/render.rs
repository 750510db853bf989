//! Plain-text rendering of dashboard panels.

use clap::ValueEnum;
use meteo_core::{
    CanonicalWeatherRecord, Dashboard, ForecastDay, PanelKind, PanelState, WeatherParameter,
    metrics::{
        Recommendation, TechnicalMetrics, TrendSource, WindPressureSummary, pressure_series,
        trend_series, wind_rose,
    },
};

/// A section of the dashboard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    Current,
    Trends,
    Wind,
    Details,
    Forecast,
    Technical,
    Recommendations,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Current,
        View::Trends,
        View::Wind,
        View::Details,
        View::Forecast,
        View::Technical,
        View::Recommendations,
    ];

    /// Panel whose data this view shows. Trends and wind are drawn from the
    /// current-conditions record.
    pub fn source(self) -> PanelKind {
        match self {
            View::Current | View::Trends | View::Wind => PanelKind::Current,
            View::Details => PanelKind::Details,
            View::Forecast => PanelKind::Forecast,
            View::Technical => PanelKind::Technical,
            View::Recommendations => PanelKind::Recommendations,
        }
    }

    fn title(self) -> &'static str {
        match self {
            View::Current => "Current conditions",
            View::Trends => "Weather trends - 24h",
            View::Wind => "Wind and pressure",
            View::Details => "Detailed conditions",
            View::Forecast => "7-day forecast",
            View::Technical => "Technical control center",
            View::Recommendations => "Recommendations",
        }
    }
}

pub fn location_header(name: &str, lat: f64, lon: f64) -> String {
    let stamp = chrono::Local::now().format("%d/%m/%Y, %H:%M:%S");
    format!("📍 {name} ({lat:.2}, {lon:.2}) - {stamp}\n")
}

pub fn view(dashboard: &Dashboard, view: View) -> String {
    let body = match view {
        View::Current => with_state(dashboard.current().state(), current_block),
        View::Trends => with_state(dashboard.current().state(), |r| {
            trends_block(r, dashboard.trends())
        }),
        View::Wind => with_state(dashboard.current().state(), |r| {
            wind_block(r, dashboard.trends())
        }),
        View::Details => with_state(dashboard.details().state(), |p| details_block(p)),
        View::Forecast => with_state(dashboard.forecast().state(), |d| forecast_block(d)),
        View::Technical => with_state(dashboard.technical().state(), technical_block),
        View::Recommendations => {
            with_state(dashboard.recommendations().state(), |r| recommendations_block(r))
        }
    };
    format!("\n== {} ==\n{body}", view.title())
}

fn with_state<T>(state: &PanelState<T>, render: impl FnOnce(&T) -> String) -> String {
    match state {
        PanelState::Idle => "Select a location to see this panel.\n".to_string(),
        PanelState::Loading => "Loading...\n".to_string(),
        PanelState::Error(message) => format!("⚠️  {message}\n"),
        PanelState::Success(value) => render(value),
    }
}

/// One line per entry, each newline-terminated.
fn block<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn current_block(record: &CanonicalWeatherRecord) -> String {
    let c = &record.current;
    block([
        format!("{} - {} [{}]", record.location.name, c.condition.text, c.condition.icon),
        format!(
            "Temperature  {:.1} °C / {:.1} °F (feels like {:.1} °C)",
            c.temp_c, c.temp_f, c.feelslike_c
        ),
        format!("Humidity     {:.0} %", c.humidity),
        format!("Wind         {:.1} km/h {}", c.wind_kph, c.wind_dir),
        format!("Pressure     {:.0} hPa", c.pressure_mb),
        format!("UV index     {:.0}", c.uv),
        format!("Visibility   {:.1} km", c.vis_km),
        format!("Updated      {}", c.last_updated),
    ])
}

fn trends_block(record: &CanonicalWeatherRecord, noise: &dyn TrendSource) -> String {
    let header = [
        format!("Simulated around current readings for {}", record.location.name),
        format!("{:<6} {:>6} {:>9} {:>11}", "Time", "Temp", "Humidity", "Feels like"),
    ];
    let rows = trend_series(record, noise).into_iter().map(|p| {
        format!(
            "{:<6} {:>4}°C {:>8}% {:>9}°C",
            p.time, p.temperature, p.humidity, p.feels_like
        )
    });
    block(header.into_iter().chain(rows))
}

fn wind_block(record: &CanonicalWeatherRecord, noise: &dyn TrendSource) -> String {
    let summary = WindPressureSummary::from_record(record);
    let rose: Vec<String> = wind_rose(record, noise)
        .iter()
        .map(|p| format!("{} {:.1}", p.direction, p.speed))
        .collect();

    let header = [
        format!(
            "Wind {:.1} km/h from {} (dial {:.1}°)",
            summary.speed_kph, summary.direction, summary.dial_angle
        ),
        format!(
            "Pressure {:.0} hPa - {}",
            summary.pressure_mb,
            summary.pressure_quality.text()
        ),
        format!("Wind rose (simulated): {}", rose.join(" | ")),
        format!("{:<6} {:>9} {:>9}", "Time", "Pressure", "Tendency"),
    ];
    let rows = pressure_series(record, noise)
        .into_iter()
        .map(|p| format!("{:<6} {:>9.1} {:>9.1}", p.time, p.pressure, p.tendency));
    block(header.into_iter().chain(rows))
}

pub fn details_block(params: &[WeatherParameter]) -> String {
    let rows = params.iter().map(|p| {
        let reading = if p.unit.is_empty() {
            p.value.clone()
        } else {
            format!("{} {}", p.value, p.unit)
        };
        format!(
            "{} {:<12} {:<14} {:<9} {:<7} {}",
            p.icon, p.name, reading, p.status, p.trend, p.recent_change
        )
    });
    block(rows.chain(std::iter::once(
        "(trend and recent change are simulated)".to_string(),
    )))
}

pub fn forecast_block(days: &[ForecastDay]) -> String {
    block(days.iter().map(|d| {
        format!(
            "{:<10} {} {:<15} {:>3}° / {:>3}°  rain {:>3}%  humidity {:>3}%",
            d.day_name,
            d.date.format("%d/%m"),
            d.icon,
            d.temp_max,
            d.temp_min,
            d.rain_chance,
            d.humidity
        )
    }))
}

fn technical_block(metrics: &TechnicalMetrics) -> String {
    let dist = metrics.humidity_distribution;
    let (low, medium, high) = dist.shares();
    block([
        format!("Atmospheric pressure  {:.0} hPa", metrics.atmospheric_pressure),
        format!(
            "Air quality index     {} ({}, {})",
            metrics.air_quality_index,
            metrics.aqi_category.text(),
            metrics.aqi_category.color()
        ),
        format!(
            "Humidity buckets      low {:.0} / medium {:.0} / high {:.0} ({:.0}%/{:.0}%/{:.0}%)",
            dist.low,
            dist.medium,
            dist.high,
            low * 100.0,
            medium * 100.0,
            high * 100.0
        ),
        format!("Last update           {}", metrics.last_update),
    ])
}

pub fn recommendations_block(recs: &[Recommendation]) -> String {
    block(recs.iter().map(|r| {
        format!(
            "{} {} [{}]: {}",
            r.icon,
            r.title,
            r.priority.as_str(),
            r.description
        )
    }))
}
