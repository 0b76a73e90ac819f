//! Preferred delivery weekday parsing.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use super::LabelError;

/// The day-of-week a delivery should land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeliveryDay(pub Weekday);

impl DeliveryDay {
    pub fn weekday(self) -> Weekday {
        self.0
    }

    /// Canonical (Spanish) label for this day.
    pub fn label(self) -> &'static str {
        match self.0 {
            Weekday::Mon => "lunes",
            Weekday::Tue => "martes",
            Weekday::Wed => "miercoles",
            Weekday::Thu => "jueves",
            Weekday::Fri => "viernes",
            Weekday::Sat => "sabado",
            Weekday::Sun => "domingo",
        }
    }
}

impl FromStr for DeliveryDay {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weekday = match s.to_lowercase().as_str() {
            "lunes" | "monday" => Weekday::Mon,
            "martes" | "tuesday" => Weekday::Tue,
            "miercoles" | "miércoles" | "wednesday" => Weekday::Wed,
            "jueves" | "thursday" => Weekday::Thu,
            "viernes" | "friday" => Weekday::Fri,
            "sabado" | "sábado" | "saturday" => Weekday::Sat,
            "domingo" | "sunday" => Weekday::Sun,
            _ => return Err(LabelError::Weekday(s.to_string())),
        };
        Ok(Self(weekday))
    }
}

impl fmt::Display for DeliveryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spanish_and_english() {
        assert_eq!("lunes".parse::<DeliveryDay>().unwrap().weekday(), Weekday::Mon);
        assert_eq!("Friday".parse::<DeliveryDay>().unwrap().weekday(), Weekday::Fri);
        assert_eq!("MIÉRCOLES".parse::<DeliveryDay>().unwrap().weekday(), Weekday::Wed);
        assert_eq!("sabado".parse::<DeliveryDay>().unwrap().weekday(), Weekday::Sat);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("LUNES".parse::<DeliveryDay>(), "lunes".parse::<DeliveryDay>());
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "lundi".parse::<DeliveryDay>(),
            Err(LabelError::Weekday("lundi".to_string()))
        );
        assert!("mon".parse::<DeliveryDay>().is_err());
    }
}
