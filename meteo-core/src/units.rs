//! Unit conversions applied while assembling records.

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn mps_to_kph(mps: f64) -> f64 {
    mps * 3.6
}

pub fn metres_to_km(metres: f64) -> f64 {
    metres / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fahrenheit_known_points() {
        assert!(approx(celsius_to_fahrenheit(0.0), 32.0));
        assert!(approx(celsius_to_fahrenheit(100.0), 212.0));
        assert!(approx(celsius_to_fahrenheit(-40.0), -40.0));
        assert!(approx(celsius_to_fahrenheit(22.0), 71.6));
        assert!(approx(celsius_to_fahrenheit(-10.5), 13.1));
    }

    #[test]
    fn kph_known_points() {
        assert!(approx(mps_to_kph(0.0), 0.0));
        assert!(approx(mps_to_kph(3.0), 10.8));
        assert!(approx(mps_to_kph(10.0), 36.0));
        assert!(approx(mps_to_kph(-2.5), -9.0));
    }

    #[test]
    fn metres_to_km_scales() {
        assert!(approx(metres_to_km(24_140.0), 24.14));
        assert!(approx(metres_to_km(0.0), 0.0));
    }
}
