// ABOUTME: WMO weather code decoding and condition keyword classification
// ABOUTME: Keeps decoder wording and the keyword traits used by suitability rules together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailcast

//! Weather condition decoding
//!
//! Suitability rules match keywords ("snow", "rain", ...) inside the decoded
//! label, so any change to a label here changes scoring. The decoder table
//! and [`ConditionTraits`] must be edited together.

/// Label for codes missing from the WMO table
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Translate a WMO weather interpretation code into an English label
///
/// Total over all integers: codes outside the table return [`UNKNOWN_CONDITION`].
#[must_use]
pub const fn decode_weather_code(code: i64) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => UNKNOWN_CONDITION,
    }
}

bitflags::bitflags! {
    /// Keywords found in a condition label (case-insensitive substring match)
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ConditionTraits: u8 {
        /// Label mentions "snow"
        const SNOW = 0b0000_0001;
        /// Label mentions "clear"
        const CLEAR = 0b0000_0010;
        /// Label mentions "partly"
        const PARTLY = 0b0000_0100;
        /// Label mentions "rain"
        const RAIN = 0b0000_1000;
        /// Label mentions "storm"
        const STORM = 0b0001_0000;
    }
}

const KEYWORDS: [(&str, ConditionTraits); 5] = [
    ("snow", ConditionTraits::SNOW),
    ("clear", ConditionTraits::CLEAR),
    ("partly", ConditionTraits::PARTLY),
    ("rain", ConditionTraits::RAIN),
    ("storm", ConditionTraits::STORM),
];

impl ConditionTraits {
    /// Classify a condition label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        KEYWORDS
            .iter()
            .filter(|(keyword, _)| label.contains(keyword))
            .fold(Self::empty(), |traits, (_, flag)| traits | *flag)
    }

    /// Snowing or snow on the ground
    #[must_use]
    pub const fn is_snowy(self) -> bool {
        self.contains(Self::SNOW)
    }

    /// Clear sky ("Clear sky", "Mainly clear")
    #[must_use]
    pub const fn is_clear(self) -> bool {
        self.contains(Self::CLEAR)
    }

    /// Clear or partly clear, acceptable for skiing
    #[must_use]
    pub const fn is_fair(self) -> bool {
        self.intersects(Self::CLEAR.union(Self::PARTLY))
    }

    /// Any rain or storm
    #[must_use]
    pub const fn is_wet(self) -> bool {
        self.intersects(Self::RAIN.union(Self::STORM))
    }

    /// Storm of any kind
    #[must_use]
    pub const fn is_stormy(self) -> bool {
        self.contains(Self::STORM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_CODES: [(i64, &str); 28] = [
        (0, "Clear sky"),
        (1, "Mainly clear"),
        (2, "Partly cloudy"),
        (3, "Overcast"),
        (45, "Fog"),
        (48, "Depositing rime fog"),
        (51, "Light drizzle"),
        (53, "Moderate drizzle"),
        (55, "Dense drizzle"),
        (56, "Light freezing drizzle"),
        (57, "Dense freezing drizzle"),
        (61, "Slight rain"),
        (63, "Moderate rain"),
        (65, "Heavy rain"),
        (66, "Light freezing rain"),
        (67, "Heavy freezing rain"),
        (71, "Slight snow fall"),
        (73, "Moderate snow fall"),
        (75, "Heavy snow fall"),
        (77, "Snow grains"),
        (80, "Slight rain showers"),
        (81, "Moderate rain showers"),
        (82, "Violent rain showers"),
        (85, "Slight snow showers"),
        (86, "Heavy snow showers"),
        (95, "Thunderstorm"),
        (96, "Thunderstorm with slight hail"),
        (99, "Thunderstorm with heavy hail"),
    ];

    #[test]
    fn test_decode_known_codes() {
        for (code, label) in KNOWN_CODES {
            assert_eq!(decode_weather_code(code), label, "code {code}");
        }
    }

    #[test]
    fn test_decode_unknown_codes() {
        for code in [-1, 4, 50, 100, 999, i64::MIN, i64::MAX] {
            assert_eq!(decode_weather_code(code), UNKNOWN_CONDITION, "code {code}");
        }
    }

    #[test]
    fn test_traits_are_case_insensitive() {
        let traits = ConditionTraits::from_label("HEAVY SNOW showers");
        assert!(traits.is_snowy());
        assert!(!traits.is_wet());

        assert!(ConditionTraits::from_label("Thunderstorm").is_stormy());
        assert!(ConditionTraits::from_label("Thunderstorm").is_wet());
        assert!(ConditionTraits::from_label("Slight rain").is_wet());
        assert!(ConditionTraits::from_label("Partly cloudy").is_fair());
        assert!(!ConditionTraits::from_label("Partly cloudy").is_clear());
        assert!(ConditionTraits::from_label("Mainly clear").is_clear());
    }

    #[test]
    fn test_unknown_label_has_no_traits() {
        assert_eq!(
            ConditionTraits::from_label(UNKNOWN_CONDITION),
            ConditionTraits::empty()
        );
        assert_eq!(ConditionTraits::from_label(""), ConditionTraits::empty());
    }

    #[test]
    fn test_every_decoded_label_classifies_consistently() {
        // Freezing rain mentions rain but not snow
        let freezing = ConditionTraits::from_label(decode_weather_code(66));
        assert_eq!(freezing, ConditionTraits::RAIN);
        // Substring match: "grains" contains "rain", so snow grains count as wet
        let grains = ConditionTraits::from_label(decode_weather_code(77));
        assert_eq!(grains, ConditionTraits::SNOW | ConditionTraits::RAIN);
        assert!(grains.is_wet());
    }
}
