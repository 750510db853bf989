//! Per-panel load state.
//!
//! A panel moves `Idle -> Loading -> Success | Error` and re-enters
//! `Loading` every time its coordinates change. Each load is tagged with a
//! [`Ticket`]; results arriving for anything but the latest ticket are
//! dropped, so a slow response can never overwrite a newer one.

use crate::{error::WeatherError, model::Coordinates};

#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> PanelState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            PanelState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PanelState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Generation handed out by [`Panel::begin`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticket {
    generation: u64,
    coordinates: Coordinates,
}

impl Ticket {
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

#[derive(Debug)]
pub struct Panel<T> {
    name: &'static str,
    state: PanelState<T>,
    generation: u64,
    coordinates: Option<Coordinates>,
}

impl<T> Panel<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: PanelState::Idle,
            generation: 0,
            coordinates: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &PanelState<T> {
        &self.state
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Enter `Loading` for `coordinates`, invalidating any load in flight.
    pub fn begin(&mut self, coordinates: Coordinates) -> Ticket {
        self.generation += 1;
        self.coordinates = Some(coordinates);
        self.state = PanelState::Loading;
        Ticket {
            generation: self.generation,
            coordinates,
        }
    }

    /// Store the outcome of the load identified by `ticket`.
    ///
    /// Returns `false` (and leaves the state alone) when the ticket is stale.
    pub fn finish(&mut self, ticket: Ticket, result: Result<T, WeatherError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                panel = self.name,
                stale = ticket.generation,
                current = self.generation,
                "Dropping stale panel result"
            );
            return false;
        }

        self.state = match result {
            Ok(value) => PanelState::Success(value),
            Err(e) => {
                tracing::warn!(panel = self.name, "Panel load failed: {}", e);
                PanelState::Error(e.user_message())
            }
        };
        true
    }

    /// Back to `Idle`; any load in flight becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.coordinates = None;
        self.state = PanelState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Coordinates = Coordinates { lat: 40.4, lon: -3.7 };
    const B: Coordinates = Coordinates { lat: 48.85, lon: 2.35 };

    #[test]
    fn starts_idle() {
        let panel: Panel<u32> = Panel::new("test");
        assert_eq!(panel.state(), &PanelState::Idle);
        assert_eq!(panel.coordinates(), None);
        assert_eq!(panel.name(), "test");
    }

    #[test]
    fn loading_then_success() {
        let mut panel = Panel::new("test");
        let ticket = panel.begin(A);
        assert!(panel.state().is_loading());
        assert_eq!(ticket.coordinates(), A);

        assert!(panel.finish(ticket, Ok(7)));
        assert_eq!(panel.state().value(), Some(&7));
    }

    #[test]
    fn error_keeps_user_message() {
        let mut panel: Panel<u32> = Panel::new("test");
        let ticket = panel.begin(A);
        assert!(panel.finish(ticket, Err(WeatherError::data_shape("no current"))));
        assert!(panel.state().error().unwrap().contains("incomplete"));
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut panel = Panel::new("test");
        let first = panel.begin(A);
        let second = panel.begin(B);

        // Newer request resolves first, older one arrives late.
        assert!(panel.finish(second, Ok("paris")));
        assert!(!panel.finish(first, Ok("madrid")));

        assert_eq!(panel.state().value(), Some(&"paris"));
        assert_eq!(panel.coordinates(), Some(B));
    }

    #[test]
    fn stale_error_does_not_clobber_loading() {
        let mut panel: Panel<u32> = Panel::new("test");
        let first = panel.begin(A);
        let _second = panel.begin(B);

        assert!(!panel.finish(first, Err(WeatherError::fetch(None, "late"))));
        assert!(panel.state().is_loading());
    }

    #[test]
    fn reset_invalidates_in_flight_load() {
        let mut panel = Panel::new("test");
        let ticket = panel.begin(A);
        panel.reset();

        assert!(!panel.finish(ticket, Ok(1)));
        assert_eq!(panel.state(), &PanelState::Idle);
    }

    #[test]
    fn same_coordinates_reload_reenters_loading() {
        let mut panel = Panel::new("test");
        let ticket = panel.begin(A);
        panel.finish(ticket, Ok(1));

        let ticket = panel.begin(A);
        assert!(panel.state().is_loading());
        assert!(panel.finish(ticket, Ok(2)));
        assert_eq!(panel.state().value(), Some(&2));
    }
}
