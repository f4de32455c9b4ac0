use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("invalid time literal: {0:?} (expected HH:MM)")]
    Malformed(String),
    #[error("time out of range: {0:?}")]
    OutOfRange(String),
    #[error("invalid weekday name: {0:?}")]
    BadWeekday(String),
}

/// Heure de service "HH:MM" (24 h, heure locale du site).
///
/// L'ordre dérivé est l'ordre brut minutes-depuis-minuit, sans dépliage
/// au-delà de minuit ; c'est l'ordre utilisé partout dans la génération.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub const fn hm(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub fn minutes_from_midnight(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Ajoute `hours` heures entières, modulo 24 sur l'heure seule ;
    /// les minutes sont reportées telles quelles.
    pub fn add_hours(self, hours: u32) -> Self {
        let hour = (u32::from(self.hour) + hours) % 24;
        Self {
            hour: hour as u8,
            minute: self.minute,
        }
    }

    /// Durée en heures entières entre deux bornes, composantes heure
    /// uniquement ; si `end.hour < start.hour` on ajoute 24 (passage
    /// de minuit). Les minutes sont ignorées volontairement.
    pub fn span_hours(start: Self, end: Self) -> u32 {
        let mut end_h = u32::from(end.hour);
        if end.hour < start.hour {
            end_h += 24;
        }
        end_h - u32::from(start.hour)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((h, m)) = s.split_once(':') else {
            return Err(TimeError::Malformed(s.to_string()));
        };
        let hour: u8 = h
            .parse()
            .map_err(|_| TimeError::Malformed(s.to_string()))?;
        let minute: u8 = m
            .parse()
            .map_err(|_| TimeError::Malformed(s.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(TimeError::OutOfRange(s.to_string()));
        }
        Ok(Self { hour, minute })
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Jour de semaine, sérialisé en nom anglais minuscule ("monday"…),
/// comme dans les fichiers persistés.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn from_date(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| TimeError::BadWeekday(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let t: ClockTime = "09:05".parse().unwrap();
        assert_eq!(t, ClockTime::hm(9, 5));
        assert_eq!(t.to_string(), "09:05");
        assert!("9h30".parse::<ClockTime>().is_err());
        assert!("25:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
    }

    #[test]
    fn add_hours_wraps_past_midnight() {
        assert_eq!(ClockTime::hm(16, 0).add_hours(8), ClockTime::hm(0, 0));
        assert_eq!(ClockTime::hm(23, 30).add_hours(2), ClockTime::hm(1, 30));
        assert_eq!(ClockTime::hm(11, 15).add_hours(8), ClockTime::hm(19, 15));
    }

    #[test]
    fn span_hours_bumps_overnight() {
        assert_eq!(ClockTime::span_hours(ClockTime::hm(11, 0), ClockTime::hm(19, 0)), 8);
        assert_eq!(ClockTime::span_hours(ClockTime::hm(19, 0), ClockTime::hm(3, 0)), 8);
        // minutes volontairement ignorées
        assert_eq!(ClockTime::span_hours(ClockTime::hm(11, 45), ClockTime::hm(19, 0)), 8);
    }

    #[test]
    fn raw_ordering_does_not_unwrap() {
        // 00:30 "avant" 04:00 en comparaison brute, même si le créneau
        // passe minuit côté métier
        assert!(ClockTime::hm(0, 30) < ClockTime::hm(4, 0));
        assert!(ClockTime::hm(16, 0) > ClockTime::hm(4, 0));
    }

    #[test]
    fn weekday_from_date_and_str() {
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(Weekday::from_date(monday), Weekday::Monday);
        assert_eq!("sunday".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!("lundi".parse::<Weekday>().is_err());
    }
}
