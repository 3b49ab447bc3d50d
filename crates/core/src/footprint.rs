//! Pure emission estimation from a completed answer record.
//!
//! Every function here is deterministic and side-effect free. All
//! results are in tons of CO2 per year. Unset answer fields count as
//! zero; the interview sequencer guarantees all required fields are
//! populated before totals are computed.

use crate::model::{CommuteMode, CompanyAnswers, FuelKind, HaulLength, IndividualAnswers};

//
// ─── EMISSION FACTORS ─────────────────────────────────────────────────────────
//

/// kg CO2 per kWh of grid electricity.
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.70;

/// kg CO2 per LPG cylinder.
pub const LPG_KG_PER_CYLINDER: f64 = 3.0;

/// kg CO2 per liter of petrol.
pub const PETROL_KG_PER_LITER: f64 = 2.31;

/// kg CO2 per liter of diesel.
pub const DIESEL_KG_PER_LITER: f64 = 2.68;

/// kg CO2 per short-haul flight trip.
pub const SHORT_HAUL_KG_PER_TRIP: f64 = 300.0;

/// kg CO2 per long-haul flight trip.
pub const LONG_HAUL_KG_PER_TRIP: f64 = 1000.0;

/// kg CO2 per vegetarian meal.
pub const VEG_MEAL_KG: f64 = 1.5;

/// kg CO2 per non-vegetarian meal.
pub const NONVEG_MEAL_KG: f64 = 3.0;

/// kg CO2 per kg of company waste.
pub const WASTE_KG_PER_KG: f64 = 0.5;

/// kg CO2 per commuter-km by mode.
#[must_use]
pub fn commute_kg_per_km(mode: CommuteMode) -> f64 {
    match mode {
        CommuteMode::Car => 0.18,
        CommuteMode::Bus => 0.08,
        CommuteMode::Train => 0.04,
    }
}

//
// ─── COMPONENTS ───────────────────────────────────────────────────────────────
//

/// Annual electricity emissions from a monthly kWh figure.
#[must_use]
pub fn electricity_tons(kwh_per_month: f64) -> f64 {
    kwh_per_month * ELECTRICITY_KG_PER_KWH * 12.0 / 1000.0
}

/// Annual LPG emissions from a yearly cylinder count.
#[must_use]
pub fn lpg_tons(cylinders_per_year: f64) -> f64 {
    cylinders_per_year * LPG_KG_PER_CYLINDER / 1000.0
}

/// Annual personal-transport emissions from monthly fuel liters.
#[must_use]
pub fn transport_tons(liters_per_month: f64, fuel: FuelKind) -> f64 {
    let factor = match fuel {
        FuelKind::Petrol => PETROL_KG_PER_LITER,
        FuelKind::Diesel => DIESEL_KG_PER_LITER,
    };
    liters_per_month * 12.0 * factor / 1000.0
}

/// Annual company liquid-fuel emissions, assuming petrol equivalent.
#[must_use]
pub fn company_fuel_tons(liters_per_month: f64) -> f64 {
    liters_per_month * 12.0 * PETROL_KG_PER_LITER / 1000.0
}

/// Annual commute emissions for the whole workforce.
#[must_use]
pub fn commute_tons(km_per_day: f64, mode: CommuteMode, days_per_year: f64, employees: f64) -> f64 {
    km_per_day * commute_kg_per_km(mode) * days_per_year * employees / 1000.0
}

/// Annual flight emissions from a yearly trip count and haul bucket.
#[must_use]
pub fn flights_tons(trips_per_year: f64, haul: HaulLength) -> f64 {
    let per_trip = match haul {
        HaulLength::Short => SHORT_HAUL_KG_PER_TRIP,
        HaulLength::Long => LONG_HAUL_KG_PER_TRIP,
    };
    trips_per_year * per_trip / 1000.0
}

/// Annual diet emissions from weekly meal counts.
#[must_use]
pub fn diet_tons(veg_meals_per_week: f64, nonveg_meals_per_week: f64) -> f64 {
    (veg_meals_per_week * VEG_MEAL_KG + nonveg_meals_per_week * NONVEG_MEAL_KG) * 52.0 / 1000.0
}

/// Annual waste emissions from a monthly kg figure.
#[must_use]
pub fn waste_tons(kg_per_month: f64) -> f64 {
    kg_per_month * 12.0 * WASTE_KG_PER_KG / 1000.0
}

//
// ─── TOTALS ───────────────────────────────────────────────────────────────────
//

/// Total annual footprint for an individual respondent.
///
/// Categorical fields fall back to the same defaults the free-text
/// parser uses (diesel, long haul) when unset.
#[must_use]
pub fn individual_total(answers: &IndividualAnswers) -> f64 {
    electricity_tons(answers.electricity_kwh_month().unwrap_or(0.0))
        + lpg_tons(answers.lpg_cylinders_year().unwrap_or(0.0))
        + transport_tons(
            answers.transport_liters_month().unwrap_or(0.0),
            answers.transport_fuel().unwrap_or(FuelKind::Diesel),
        )
        + flights_tons(
            answers.flights_per_year().unwrap_or(0.0),
            answers.flight_haul().unwrap_or(HaulLength::Long),
        )
        + diet_tons(
            answers.veg_meals_week().unwrap_or(0.0),
            answers.nonveg_meals_week().unwrap_or(0.0),
        )
}

/// Total annual footprint for a company respondent.
#[must_use]
pub fn company_total(answers: &CompanyAnswers) -> f64 {
    electricity_tons(answers.electricity_kwh_month().unwrap_or(0.0))
        + company_fuel_tons(answers.fuel_liters_month().unwrap_or(0.0))
        + commute_tons(
            answers.commute_km_day().unwrap_or(0.0),
            answers.commute_mode().unwrap_or(CommuteMode::Car),
            answers.commute_days_year().unwrap_or(0.0),
            answers.employees().unwrap_or(0.0),
        )
        + flights_tons(
            answers.flights_per_year().unwrap_or(0.0),
            answers.flight_haul().unwrap_or(HaulLength::Long),
        )
        + waste_tons(answers.waste_kg_month().unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn electricity_300_kwh_is_2_52_tons() {
        assert_close(electricity_tons(300.0), 2.52);
    }

    #[test]
    fn transport_50_liters_petrol_vs_diesel() {
        assert_close(transport_tons(50.0, FuelKind::Petrol), 1.386);
        assert_close(transport_tons(50.0, FuelKind::Diesel), 1.608);
    }

    #[test]
    fn ten_flights_by_haul() {
        assert_close(flights_tons(10.0, HaulLength::Short), 3.0);
        assert_close(flights_tons(10.0, HaulLength::Long), 10.0);
    }

    #[test]
    fn diet_five_veg_two_nonveg() {
        assert_close(diet_tons(5.0, 2.0), 0.702);
    }

    #[test]
    fn lpg_is_not_scaled_monthly() {
        // Cylinder count is already per year.
        assert_close(lpg_tons(10.0), 0.03);
    }

    #[test]
    fn commute_factors_by_mode() {
        assert_close(commute_tons(10.0, CommuteMode::Car, 220.0, 50.0), 19.8);
        assert_close(commute_tons(10.0, CommuteMode::Bus, 220.0, 50.0), 8.8);
        assert_close(commute_tons(10.0, CommuteMode::Train, 220.0, 50.0), 4.4);
    }

    #[test]
    fn waste_400_kg_month() {
        assert_close(waste_tons(400.0), 2.4);
    }

    #[test]
    fn individual_total_is_sum_of_components() {
        let mut answers = IndividualAnswers::default();
        answers.set_electricity(300.0).unwrap();
        answers.set_lpg(10.0).unwrap();
        answers.set_transport(50.0).unwrap();
        answers.set_transport_fuel(FuelKind::Petrol);
        answers.set_flights(10.0).unwrap();
        answers.set_flight_haul(HaulLength::Short);
        answers.set_veg_meals(5.0).unwrap();
        answers.set_nonveg_meals(2.0).unwrap();

        let expected = electricity_tons(300.0)
            + lpg_tons(10.0)
            + transport_tons(50.0, FuelKind::Petrol)
            + flights_tons(10.0, HaulLength::Short)
            + diet_tons(5.0, 2.0);
        assert_close(individual_total(&answers), expected);
        assert_close(individual_total(&answers), 2.52 + 0.03 + 1.386 + 3.0 + 0.702);
    }

    #[test]
    fn company_total_is_sum_of_components() {
        let mut answers = CompanyAnswers::default();
        answers.set_electricity(2000.0).unwrap();
        answers.set_fuel(100.0).unwrap();
        answers.set_employees(50.0).unwrap();
        answers.set_commute_distance(10.0).unwrap();
        answers.set_commute_mode(CommuteMode::Bus);
        answers.set_commute_days(220.0).unwrap();
        answers.set_flights(10.0).unwrap();
        answers.set_flight_haul(HaulLength::Long);
        answers.set_waste(400.0).unwrap();

        let expected = electricity_tons(2000.0)
            + company_fuel_tons(100.0)
            + commute_tons(10.0, CommuteMode::Bus, 220.0, 50.0)
            + flights_tons(10.0, HaulLength::Long)
            + waste_tons(400.0);
        assert_close(company_total(&answers), expected);
    }

    #[test]
    fn totals_are_non_negative_for_defaults() {
        assert_close(individual_total(&IndividualAnswers::default()), 0.0);
        assert_close(company_total(&CompanyAnswers::default()), 0.0);
    }
}
