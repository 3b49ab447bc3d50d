use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::respondent::{CommuteMode, FuelKind, HaulLength, RespondentKind};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when recording an answer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnswerError {
    #[error("answer magnitude must be non-negative, got {provided}")]
    Negative { provided: f64 },
    #[error("answer magnitude must be finite, got {provided}")]
    NotFinite { provided: f64 },
}

fn validate_magnitude(value: f64) -> Result<f64, AnswerError> {
    if !value.is_finite() {
        return Err(AnswerError::NotFinite { provided: value });
    }
    if value < 0.0 {
        return Err(AnswerError::Negative { provided: value });
    }
    Ok(value)
}

//
// ─── INDIVIDUAL ANSWERS ───────────────────────────────────────────────────────
//

/// Answers collected for an individual respondent.
///
/// Every field starts unset; `None` and an answered `0` are distinct so
/// the question cursor always knows which fields are still default.
/// Fields are only ever written once, by the sequencer, and read at
/// finalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndividualAnswers {
    electricity_kwh_month: Option<f64>,
    lpg_cylinders_year: Option<f64>,
    transport_liters_month: Option<f64>,
    transport_fuel: Option<FuelKind>,
    flights_per_year: Option<f64>,
    flight_haul: Option<HaulLength>,
    veg_meals_week: Option<f64>,
    nonveg_meals_week: Option<f64>,
}

impl IndividualAnswers {
    /// Records monthly electricity consumption in kWh.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_electricity(&mut self, kwh_month: f64) -> Result<(), AnswerError> {
        self.electricity_kwh_month = Some(validate_magnitude(kwh_month)?);
        Ok(())
    }

    /// Records LPG cylinders consumed per year.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_lpg(&mut self, cylinders_year: f64) -> Result<(), AnswerError> {
        self.lpg_cylinders_year = Some(validate_magnitude(cylinders_year)?);
        Ok(())
    }

    /// Records monthly transportation fuel in liters.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_transport(&mut self, liters_month: f64) -> Result<(), AnswerError> {
        self.transport_liters_month = Some(validate_magnitude(liters_month)?);
        Ok(())
    }

    pub fn set_transport_fuel(&mut self, fuel: FuelKind) {
        self.transport_fuel = Some(fuel);
    }

    /// Records flight trips per year.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_flights(&mut self, trips_year: f64) -> Result<(), AnswerError> {
        self.flights_per_year = Some(validate_magnitude(trips_year)?);
        Ok(())
    }

    pub fn set_flight_haul(&mut self, haul: HaulLength) {
        self.flight_haul = Some(haul);
    }

    /// Records vegetarian meals per week.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_veg_meals(&mut self, meals_week: f64) -> Result<(), AnswerError> {
        self.veg_meals_week = Some(validate_magnitude(meals_week)?);
        Ok(())
    }

    /// Records non-vegetarian meals per week.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_nonveg_meals(&mut self, meals_week: f64) -> Result<(), AnswerError> {
        self.nonveg_meals_week = Some(validate_magnitude(meals_week)?);
        Ok(())
    }

    #[must_use]
    pub fn electricity_kwh_month(&self) -> Option<f64> {
        self.electricity_kwh_month
    }

    #[must_use]
    pub fn lpg_cylinders_year(&self) -> Option<f64> {
        self.lpg_cylinders_year
    }

    #[must_use]
    pub fn transport_liters_month(&self) -> Option<f64> {
        self.transport_liters_month
    }

    #[must_use]
    pub fn transport_fuel(&self) -> Option<FuelKind> {
        self.transport_fuel
    }

    #[must_use]
    pub fn flights_per_year(&self) -> Option<f64> {
        self.flights_per_year
    }

    #[must_use]
    pub fn flight_haul(&self) -> Option<HaulLength> {
        self.flight_haul
    }

    #[must_use]
    pub fn veg_meals_week(&self) -> Option<f64> {
        self.veg_meals_week
    }

    #[must_use]
    pub fn nonveg_meals_week(&self) -> Option<f64> {
        self.nonveg_meals_week
    }

    /// True once every question in the individual branch is answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.electricity_kwh_month.is_some()
            && self.lpg_cylinders_year.is_some()
            && self.transport_liters_month.is_some()
            && self.transport_fuel.is_some()
            && self.flights_per_year.is_some()
            && self.flight_haul.is_some()
            && self.veg_meals_week.is_some()
            && self.nonveg_meals_week.is_some()
    }
}

//
// ─── COMPANY ANSWERS ──────────────────────────────────────────────────────────
//

/// Answers collected for a company respondent.
///
/// Uses the detailed commute model: employee count, per-person daily
/// distance, transport mode, and commute days per year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyAnswers {
    electricity_kwh_month: Option<f64>,
    fuel_liters_month: Option<f64>,
    employees: Option<f64>,
    commute_km_day: Option<f64>,
    commute_mode: Option<CommuteMode>,
    commute_days_year: Option<f64>,
    flights_per_year: Option<f64>,
    flight_haul: Option<HaulLength>,
    waste_kg_month: Option<f64>,
}

impl CompanyAnswers {
    /// Records monthly electricity consumption in kWh.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_electricity(&mut self, kwh_month: f64) -> Result<(), AnswerError> {
        self.electricity_kwh_month = Some(validate_magnitude(kwh_month)?);
        Ok(())
    }

    /// Records monthly liquid fuel consumption in liters.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_fuel(&mut self, liters_month: f64) -> Result<(), AnswerError> {
        self.fuel_liters_month = Some(validate_magnitude(liters_month)?);
        Ok(())
    }

    /// Records the employee count.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_employees(&mut self, employees: f64) -> Result<(), AnswerError> {
        self.employees = Some(validate_magnitude(employees)?);
        Ok(())
    }

    /// Records the average daily commute distance per employee in km.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_commute_distance(&mut self, km_day: f64) -> Result<(), AnswerError> {
        self.commute_km_day = Some(validate_magnitude(km_day)?);
        Ok(())
    }

    pub fn set_commute_mode(&mut self, mode: CommuteMode) {
        self.commute_mode = Some(mode);
    }

    /// Records commute days per year.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_commute_days(&mut self, days_year: f64) -> Result<(), AnswerError> {
        self.commute_days_year = Some(validate_magnitude(days_year)?);
        Ok(())
    }

    /// Records business flight trips per year.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_flights(&mut self, trips_year: f64) -> Result<(), AnswerError> {
        self.flights_per_year = Some(validate_magnitude(trips_year)?);
        Ok(())
    }

    pub fn set_flight_haul(&mut self, haul: HaulLength) {
        self.flight_haul = Some(haul);
    }

    /// Records monthly waste in kg.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the magnitude is negative or not finite.
    pub fn set_waste(&mut self, kg_month: f64) -> Result<(), AnswerError> {
        self.waste_kg_month = Some(validate_magnitude(kg_month)?);
        Ok(())
    }

    #[must_use]
    pub fn electricity_kwh_month(&self) -> Option<f64> {
        self.electricity_kwh_month
    }

    #[must_use]
    pub fn fuel_liters_month(&self) -> Option<f64> {
        self.fuel_liters_month
    }

    #[must_use]
    pub fn employees(&self) -> Option<f64> {
        self.employees
    }

    #[must_use]
    pub fn commute_km_day(&self) -> Option<f64> {
        self.commute_km_day
    }

    #[must_use]
    pub fn commute_mode(&self) -> Option<CommuteMode> {
        self.commute_mode
    }

    #[must_use]
    pub fn commute_days_year(&self) -> Option<f64> {
        self.commute_days_year
    }

    #[must_use]
    pub fn flights_per_year(&self) -> Option<f64> {
        self.flights_per_year
    }

    #[must_use]
    pub fn flight_haul(&self) -> Option<HaulLength> {
        self.flight_haul
    }

    #[must_use]
    pub fn waste_kg_month(&self) -> Option<f64> {
        self.waste_kg_month
    }

    /// True once every question in the company branch is answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.electricity_kwh_month.is_some()
            && self.fuel_liters_month.is_some()
            && self.employees.is_some()
            && self.commute_km_day.is_some()
            && self.commute_mode.is_some()
            && self.commute_days_year.is_some()
            && self.flights_per_year.is_some()
            && self.flight_haul.is_some()
            && self.waste_kg_month.is_some()
    }
}

//
// ─── ANSWER RECORD ────────────────────────────────────────────────────────────
//

/// The live answer record for a session; exactly one variant per session,
/// matching the chosen `RespondentKind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnswerRecord {
    Individual(IndividualAnswers),
    Company(CompanyAnswers),
}

impl AnswerRecord {
    /// Creates the all-default record for the given respondent kind.
    #[must_use]
    pub fn new(kind: RespondentKind) -> Self {
        match kind {
            RespondentKind::Individual => Self::Individual(IndividualAnswers::default()),
            RespondentKind::Company => Self::Company(CompanyAnswers::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> RespondentKind {
        match self {
            AnswerRecord::Individual(_) => RespondentKind::Individual,
            AnswerRecord::Company(_) => RespondentKind::Company,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            AnswerRecord::Individual(answers) => answers.is_complete(),
            AnswerRecord::Company(answers) => answers.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_complete_only_when_all_fields_set() {
        let mut answers = IndividualAnswers::default();
        assert!(!answers.is_complete());

        answers.set_electricity(300.0).unwrap();
        answers.set_lpg(6.0).unwrap();
        answers.set_transport(50.0).unwrap();
        answers.set_transport_fuel(FuelKind::Petrol);
        answers.set_flights(4.0).unwrap();
        answers.set_flight_haul(HaulLength::Short);
        answers.set_veg_meals(5.0).unwrap();
        assert!(!answers.is_complete());

        answers.set_nonveg_meals(2.0).unwrap();
        assert!(answers.is_complete());
    }

    #[test]
    fn zero_answer_is_distinct_from_unset() {
        let mut answers = IndividualAnswers::default();
        assert_eq!(answers.veg_meals_week(), None);
        answers.set_veg_meals(0.0).unwrap();
        assert_eq!(answers.veg_meals_week(), Some(0.0));
    }

    #[test]
    fn negative_magnitude_is_rejected() {
        let mut answers = CompanyAnswers::default();
        let err = answers.set_waste(-1.0).unwrap_err();
        assert_eq!(err, AnswerError::Negative { provided: -1.0 });
        assert_eq!(answers.waste_kg_month(), None);
    }

    #[test]
    fn non_finite_magnitude_is_rejected() {
        let mut answers = IndividualAnswers::default();
        assert!(answers.set_electricity(f64::NAN).is_err());
        assert!(answers.set_electricity(f64::INFINITY).is_err());
        assert_eq!(answers.electricity_kwh_month(), None);
    }

    #[test]
    fn record_variant_matches_kind() {
        let record = AnswerRecord::new(RespondentKind::Company);
        assert_eq!(record.kind(), RespondentKind::Company);
        assert!(!record.is_complete());
    }
}
