use serde::{Deserialize, Serialize};

use crate::model::respondent::RespondentKind;

/// Current position in the fixed question sequence.
///
/// The cursor advances strictly forward through the branch selected at
/// `ChooseKind`. `Diet` is a single cursor value covering a two-step
/// sub-sequence (vegetarian meals, then non-vegetarian meals); which
/// step is active is derived from whether the vegetarian-meal field is
/// still unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cursor {
    ChooseKind,
    Electricity,
    /// Individual branch only.
    Lpg,
    /// Individual branch only: monthly fuel liters.
    Transport,
    /// Individual branch only: petrol or diesel.
    TransportFuel,
    Flights,
    FlightHaul,
    /// Individual branch only: veg then non-veg meals per week.
    Diet,
    /// Company branch only: monthly liquid fuel liters.
    Fuel,
    /// Company branch only.
    Employees,
    /// Company branch only: km per employee per day.
    CommuteDistance,
    /// Company branch only: car, bus, or train.
    CommuteMode,
    /// Company branch only: commute days per year.
    CommuteDays,
    /// Company branch only: kg per month.
    Waste,
    Results,
}

impl Cursor {
    /// The first question state for the given respondent kind.
    #[must_use]
    pub fn first(kind: RespondentKind) -> Self {
        // Both branches open with electricity.
        let _ = kind;
        Cursor::Electricity
    }

    /// The next cursor value in the given branch.
    ///
    /// Returns `None` for `ChooseKind` (the successor depends on the
    /// kind choice, see [`Cursor::first`]) and for `Results` (terminal).
    #[must_use]
    pub fn next(self, kind: RespondentKind) -> Option<Self> {
        match kind {
            RespondentKind::Individual => match self {
                Cursor::Electricity => Some(Cursor::Lpg),
                Cursor::Lpg => Some(Cursor::Transport),
                Cursor::Transport => Some(Cursor::TransportFuel),
                Cursor::TransportFuel => Some(Cursor::Flights),
                Cursor::Flights => Some(Cursor::FlightHaul),
                Cursor::FlightHaul => Some(Cursor::Diet),
                Cursor::Diet => Some(Cursor::Results),
                _ => None,
            },
            RespondentKind::Company => match self {
                Cursor::Electricity => Some(Cursor::Fuel),
                Cursor::Fuel => Some(Cursor::Employees),
                Cursor::Employees => Some(Cursor::CommuteDistance),
                Cursor::CommuteDistance => Some(Cursor::CommuteMode),
                Cursor::CommuteMode => Some(Cursor::CommuteDays),
                Cursor::CommuteDays => Some(Cursor::Flights),
                Cursor::Flights => Some(Cursor::FlightHaul),
                Cursor::FlightHaul => Some(Cursor::Waste),
                Cursor::Waste => Some(Cursor::Results),
                _ => None,
            },
        }
    }

    /// True for states answered by picking from a fixed button set.
    #[must_use]
    pub fn is_categorical(self) -> bool {
        matches!(
            self,
            Cursor::ChooseKind | Cursor::TransportFuel | Cursor::FlightHaul | Cursor::CommuteMode
        )
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Cursor::Results)
    }
}
