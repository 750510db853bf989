use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Confirm, Text};
use meteo_core::{
    Config, Dashboard, Location, PanelKind, WeatherService, assembler::UNKNOWN_LOCATION,
};

use crate::render::{self, View};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Weather dashboard for the terminal")]
pub struct Cli {
    /// Log requests and panel activity to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the geocoding and forecast endpoints.
    Configure,

    /// Show the dashboard for a place name.
    Show {
        /// City or country to search for.
        place: String,

        /// Panels to show; repeat for several. Defaults to all.
        #[arg(long = "panel", value_enum)]
        panels: Vec<View>,

        /// Don't offer to retry failed panels.
        #[arg(long)]
        no_retry: bool,
    },

    /// Show the dashboard for explicit coordinates.
    Coords {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Name to display instead of the placeholder.
        #[arg(long)]
        name: Option<String>,

        #[arg(long = "panel", value_enum)]
        panels: Vec<View>,

        #[arg(long)]
        no_retry: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show {
                place,
                panels,
                no_retry,
            } => {
                let config = Config::load()?;
                let service = WeatherService::from_config(&config);

                let location = match service.locate(&place).await {
                    Ok(Some(location)) => location,
                    Ok(None) => {
                        tracing::debug!("Blank place query, nothing to show");
                        println!("Enter a city or country to search for.");
                        return Ok(());
                    }
                    Err(e) => {
                        let message = e.user_message();
                        return Err(anyhow::Error::new(e).context(message));
                    }
                };

                show(Dashboard::new(service), location, &panels, !no_retry).await
            }
            Command::Coords {
                lat,
                lon,
                name,
                panels,
                no_retry,
            } => {
                let config = Config::load()?;
                let name = name.unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
                let location = Location::new(name, lat, lon)?;
                let service = WeatherService::from_config(&config);

                show(Dashboard::new(service), location, &panels, !no_retry).await
            }
        }
    }
}

fn configure() -> Result<()> {
    let path = Config::config_file_path()?;
    // Edit the file contents only; environment overrides are not persisted.
    let mut config = Config::load_from(&path)?;

    let geocoding = Text::new("Geocoding endpoint:")
        .with_default(&config.geocoding_base_url)
        .prompt()
        .context("Failed to read geocoding endpoint")?;
    config.set_geocoding_base_url(&geocoding)?;

    let forecast = Text::new("Forecast endpoint:")
        .with_default(&config.forecast_base_url)
        .prompt()
        .context("Failed to read forecast endpoint")?;
    config.set_forecast_base_url(&forecast)?;

    config.save_to(&path)?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

async fn show(
    mut dashboard: Dashboard,
    location: Location,
    panels: &[View],
    allow_retry: bool,
) -> Result<()> {
    let views: Vec<View> = if panels.is_empty() {
        View::ALL.to_vec()
    } else {
        panels.to_vec()
    };

    print!(
        "{}",
        render::location_header(&location.name, location.latitude, location.longitude)
    );
    dashboard.load(location).await;

    for v in &views {
        print!("{}", render::view(&dashboard, *v));
    }

    if !allow_retry || !std::io::stdin().is_terminal() {
        tracing::debug!("Retry prompts disabled");
        return Ok(());
    }

    let mut sources: Vec<PanelKind> = Vec::new();
    for v in &views {
        if !sources.contains(&v.source()) {
            sources.push(v.source());
        }
    }

    for kind in sources {
        while dashboard.panel_error(kind).is_some() {
            let again = Confirm::new(&format!("Retry {kind}?"))
                .with_default(true)
                .prompt()
                .context("Failed to read retry answer")?;
            if !again {
                break;
            }

            tracing::debug!(panel = %kind, "Retrying after user confirmation");
            if !dashboard.retry(kind).await {
                tracing::warn!(panel = %kind, "Retry result was superseded");
            }
            for v in views.iter().filter(|v| v.source() == kind) {
                print!("{}", render::view(&dashboard, *v));
            }
        }
    }

    Ok(())
}
