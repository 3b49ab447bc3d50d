use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── RESPONDENT KIND ──────────────────────────────────────────────────────────
//

/// Who the footprint is being estimated for.
///
/// Chosen once at the start of a session and immutable afterwards; it
/// selects both the question sequence and the answer record variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespondentKind {
    /// A single person's household footprint.
    Individual,
    /// An organization's operational footprint.
    Company,
}

impl RespondentKind {
    /// Label used when echoing the choice into the transcript.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RespondentKind::Individual => "Individual",
            RespondentKind::Company => "Company",
        }
    }
}

impl fmt::Display for RespondentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── CATEGORICAL ANSWERS ──────────────────────────────────────────────────────
//

/// Fuel used for personal transportation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelKind {
    Petrol,
    Diesel,
}

impl FuelKind {
    /// Parses a free-text reply.
    ///
    /// Any reply containing "petrol" (case-insensitive) selects petrol;
    /// everything else falls back to diesel. The silent fallback is
    /// deliberate policy: unrecognized replies never fail.
    #[must_use]
    pub fn from_reply(reply: &str) -> Self {
        if reply.to_lowercase().contains("petrol") {
            FuelKind::Petrol
        } else {
            FuelKind::Diesel
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FuelKind::Petrol => "Petrol",
            FuelKind::Diesel => "Diesel",
        }
    }
}

/// Flight-distance bucket with a fixed average per-trip emission figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaulLength {
    /// Domestic flights.
    Short,
    /// International flights.
    Long,
}

impl HaulLength {
    /// Parses a free-text reply: "short" anywhere selects short haul,
    /// everything else falls back to long haul.
    #[must_use]
    pub fn from_reply(reply: &str) -> Self {
        if reply.to_lowercase().contains("short") {
            HaulLength::Short
        } else {
            HaulLength::Long
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HaulLength::Short => "Short Haul",
            HaulLength::Long => "Long Haul",
        }
    }
}

/// Primary employee commute transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommuteMode {
    Car,
    Bus,
    Train,
}

impl CommuteMode {
    /// Parses a free-text reply.
    ///
    /// "bus" selects bus, "train" or "metro" selects train; anything
    /// else falls back to car, the default mode.
    #[must_use]
    pub fn from_reply(reply: &str) -> Self {
        let reply = reply.to_lowercase();
        if reply.contains("train") || reply.contains("metro") {
            CommuteMode::Train
        } else if reply.contains("bus") {
            CommuteMode::Bus
        } else {
            CommuteMode::Car
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CommuteMode::Car => "Car",
            CommuteMode::Bus => "Bus",
            CommuteMode::Train => "Train/Metro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_reply_matches_substring_case_insensitive() {
        assert_eq!(FuelKind::from_reply("Petrol"), FuelKind::Petrol);
        assert_eq!(FuelKind::from_reply("we use PETROL cars"), FuelKind::Petrol);
        assert_eq!(FuelKind::from_reply("diesel"), FuelKind::Diesel);
    }

    #[test]
    fn fuel_reply_falls_back_to_diesel() {
        assert_eq!(FuelKind::from_reply("electric"), FuelKind::Diesel);
        assert_eq!(FuelKind::from_reply(""), FuelKind::Diesel);
    }

    #[test]
    fn haul_reply_falls_back_to_long() {
        assert_eq!(HaulLength::from_reply("short hops"), HaulLength::Short);
        assert_eq!(HaulLength::from_reply("mostly international"), HaulLength::Long);
        assert_eq!(HaulLength::from_reply(""), HaulLength::Long);
    }

    #[test]
    fn commute_reply_recognizes_metro_as_train() {
        assert_eq!(CommuteMode::from_reply("metro"), CommuteMode::Train);
        assert_eq!(CommuteMode::from_reply("the Train"), CommuteMode::Train);
        assert_eq!(CommuteMode::from_reply("bus"), CommuteMode::Bus);
    }

    #[test]
    fn commute_reply_falls_back_to_car() {
        assert_eq!(CommuteMode::from_reply("bicycle"), CommuteMode::Car);
        assert_eq!(CommuteMode::from_reply(""), CommuteMode::Car);
    }
}
