//! Rule-based advice for the recommendations panel.

use serde::Serialize;

use crate::model::CanonicalWeatherRecord;

/// Wind limits in km/h (15 and 20 m/s).
const CALM_WIND_KPH: f64 = 54.0;
const ADVERSE_WIND_KPH: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Clothing,
    Activities,
    Health,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendationInput {
    pub temperature_c: f64,
    pub humidity: f64,
    pub wind_kph: f64,
    /// Percent.
    pub precipitation_chance: f64,
}

impl RecommendationInput {
    /// Current conditions carry no precipitation probability; it reads as 0
    /// until set with [`Self::with_precipitation_chance`].
    pub fn from_record(record: &CanonicalWeatherRecord) -> Self {
        Self {
            temperature_c: record.current.temp_c,
            humidity: record.current.humidity,
            wind_kph: record.current.wind_kph,
            precipitation_chance: 0.0,
        }
    }

    #[must_use]
    pub fn with_precipitation_chance(mut self, percent: f64) -> Self {
        self.precipitation_chance = percent;
        self
    }
}

pub fn recommendations(input: &RecommendationInput) -> Vec<Recommendation> {
    vec![clothing(input), activities(input), health(input), transport(input)]
}

fn clothing(input: &RecommendationInput) -> Recommendation {
    let (description, icon, priority) = if input.temperature_c < 15.0 {
        ("Seasonal clothing with an extra layer", "🧥", Priority::High)
    } else if input.temperature_c > 25.0 {
        ("Light, breathable clothing and sun protection", "👕", Priority::High)
    } else {
        ("Seasonal clothing with an optional extra layer", "👔", Priority::Medium)
    };
    Recommendation {
        category: Category::Clothing,
        title: "Optimal clothing",
        description,
        icon,
        priority,
    }
}

fn activities(input: &RecommendationInput) -> Recommendation {
    let (description, icon, priority) =
        if input.precipitation_chance < 20.0 && input.wind_kph < CALM_WIND_KPH {
            ("Good conditions for walking or light activity", "🚶", Priority::High)
        } else if input.precipitation_chance > 60.0 {
            ("Better to stay indoors or choose covered activities", "🏠", Priority::Medium)
        } else {
            ("Good conditions for walking or light activity", "🚶", Priority::Medium)
        };
    Recommendation {
        category: Category::Activities,
        title: "Recommended activities",
        description,
        icon,
        priority,
    }
}

fn health(input: &RecommendationInput) -> Recommendation {
    let (description, icon, priority) = if input.humidity > 70.0 {
        ("High humidity: stay hydrated and look for cool places", "💧", Priority::High)
    } else if input.humidity < 30.0 {
        ("Low humidity: use moisturiser and drink more water", "🧴", Priority::Medium)
    } else {
        ("Normal humidity conditions", "💚", Priority::Low)
    };
    Recommendation {
        category: Category::Health,
        title: "Health and wellbeing",
        description,
        icon,
        priority,
    }
}

fn transport(input: &RecommendationInput) -> Recommendation {
    let (description, icon, priority) =
        if input.precipitation_chance > 50.0 || input.wind_kph > ADVERSE_WIND_KPH {
            ("Adverse travel conditions", "⚠️", Priority::High)
        } else {
            ("Normal travel conditions", "🚗", Priority::Low)
        };
    Recommendation {
        category: Category::Transport,
        title: "Transport and mobility",
        description,
        icon,
        priority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(temperature_c: f64, humidity: f64, wind_kph: f64, rain: f64) -> RecommendationInput {
        RecommendationInput {
            temperature_c,
            humidity,
            wind_kph,
            precipitation_chance: rain,
        }
    }

    fn by_category(recs: &[Recommendation], category: Category) -> &Recommendation {
        recs.iter().find(|r| r.category == category).unwrap()
    }

    #[test]
    fn one_recommendation_per_category() {
        let recs = recommendations(&input(20.0, 50.0, 10.0, 0.0));
        assert_eq!(recs.len(), 4);
        assert_eq!(by_category(&recs, Category::Clothing).priority, Priority::Medium);
        assert_eq!(by_category(&recs, Category::Activities).priority, Priority::High);
        assert_eq!(by_category(&recs, Category::Health).priority, Priority::Low);
        assert_eq!(by_category(&recs, Category::Transport).priority, Priority::Low);
    }

    #[test]
    fn cold_and_hot_clothing() {
        let cold = recommendations(&input(5.0, 50.0, 0.0, 0.0));
        assert_eq!(by_category(&cold, Category::Clothing).icon, "🧥");

        let hot = recommendations(&input(30.0, 50.0, 0.0, 0.0));
        let clothing = by_category(&hot, Category::Clothing);
        assert_eq!(clothing.icon, "👕");
        assert_eq!(clothing.priority, Priority::High);
    }

    #[test]
    fn rain_and_wind_rules() {
        let wet = recommendations(&input(18.0, 90.0, 10.0, 75.0));
        assert_eq!(by_category(&wet, Category::Activities).icon, "🏠");
        assert_eq!(by_category(&wet, Category::Transport).priority, Priority::High);
        assert_eq!(by_category(&wet, Category::Health).priority, Priority::High);

        let windy = recommendations(&input(18.0, 20.0, 80.0, 0.0));
        let activities = by_category(&windy, Category::Activities);
        assert_eq!(activities.icon, "🚶");
        assert_eq!(activities.priority, Priority::Medium);
        assert_eq!(by_category(&windy, Category::Transport).icon, "⚠️");
        assert_eq!(by_category(&windy, Category::Health).icon, "🧴");
    }

    #[test]
    fn precipitation_override() {
        let base = input(18.0, 50.0, 0.0, 0.0).with_precipitation_chance(55.0);
        let recs = recommendations(&base);
        assert_eq!(by_category(&recs, Category::Transport).priority, Priority::High);
    }
}
