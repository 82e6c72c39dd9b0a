use crate::utils::error::GeoError;
use std::str::FromStr;

/// Built-in coordinate sets for trying the tool without preparing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSet {
    UsCities,
    EuropeanCapitals,
    WorldLandmarks,
}

impl SampleSet {
    pub fn all() -> [SampleSet; 3] {
        [
            SampleSet::UsCities,
            SampleSet::EuropeanCapitals,
            SampleSet::WorldLandmarks,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SampleSet::UsCities => "us-cities",
            SampleSet::EuropeanCapitals => "european-capitals",
            SampleSet::WorldLandmarks => "world-landmarks",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            SampleSet::UsCities => {
                "40.7128, -74.0060 // New York
34.0522, -118.2437 // Los Angeles
41.8781, -87.6298 // Chicago
29.7604, -95.3698 // Houston
39.9526, -75.1652 // Philadelphia"
            }
            SampleSet::EuropeanCapitals => {
                "51.5074, -0.1278 // London
48.8566, 2.3522 // Paris
52.5200, 13.4050 // Berlin
41.9028, 12.4964 // Rome
40.4168, -3.7038 // Madrid"
            }
            SampleSet::WorldLandmarks => {
                "27.1751, 78.0421 // Taj Mahal
-13.1631, -72.5450 // Machu Picchu
30.3285, 35.4444 // Petra
-33.8568, 151.2153 // Sydney Opera House
40.4319, 116.5704 // Great Wall of China"
            }
        }
    }
}

impl FromStr for SampleSet {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleSet::all()
            .into_iter()
            .find(|sample| sample.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeoError::InvalidConfigValueError {
                field: "sample".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unknown sample set. Available: {}",
                    SampleSet::all().map(|sample| sample.name()).join(", ")
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_points;

    #[test]
    fn test_every_sample_parses() {
        for sample in SampleSet::all() {
            let points = parse_points(sample.text()).unwrap();
            assert_eq!(points.len(), 5, "sample {}", sample.name());
        }
    }

    #[test]
    fn test_sample_from_str() {
        assert_eq!("us-cities".parse::<SampleSet>().unwrap(), SampleSet::UsCities);
        assert_eq!(
            "World-Landmarks".parse::<SampleSet>().unwrap(),
            SampleSet::WorldLandmarks
        );
        assert!("moon-craters".parse::<SampleSet>().is_err());
    }
}
