//! Static reduction tips and the verdict against global averages.
//!
//! Individual tips are keyed on fixed sub-total thresholds; company
//! tips are the same three items regardless of input.

use serde::{Deserialize, Serialize};

use crate::footprint;
use crate::model::{CompanyAnswers, FuelKind, HaulLength, IndividualAnswers, RespondentKind};

//
// ─── TIPS ─────────────────────────────────────────────────────────────────────
//

/// A single reduction tip shown on the results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    /// Estimated savings, pre-formatted ("Could save 1.2 tons CO2/year").
    pub impact: String,
}

/// Electricity sub-total above which the electricity tip appears.
pub const ELECTRICITY_TIP_THRESHOLD: f64 = 2.0;

/// Transport sub-total above which the transport tip appears.
pub const TRANSPORT_TIP_THRESHOLD: f64 = 1.5;

/// Flight sub-total above which the flight tip appears.
pub const FLIGHTS_TIP_THRESHOLD: f64 = 2.0;

/// Weekly non-vegetarian meal count above which the diet tip appears.
pub const NONVEG_MEALS_TIP_THRESHOLD: f64 = 10.0;

/// Tips for an individual respondent, keyed on threshold checks over
/// the recomputed sub-totals.
#[must_use]
pub fn individual_tips(answers: &IndividualAnswers) -> Vec<Tip> {
    let electricity = footprint::electricity_tons(answers.electricity_kwh_month().unwrap_or(0.0));
    let transport = footprint::transport_tons(
        answers.transport_liters_month().unwrap_or(0.0),
        answers.transport_fuel().unwrap_or(FuelKind::Diesel),
    );
    let flights = footprint::flights_tons(
        answers.flights_per_year().unwrap_or(0.0),
        answers.flight_haul().unwrap_or(HaulLength::Long),
    );

    let mut tips = Vec::new();

    if electricity > ELECTRICITY_TIP_THRESHOLD {
        tips.push(Tip {
            title: "Reduce Electricity Usage",
            description: "Switch to LED bulbs, unplug devices when not in use, and consider renewable energy sources.",
            impact: format!("Could save {:.1} tons CO2/year", electricity * 0.3),
        });
    }

    if transport > TRANSPORT_TIP_THRESHOLD {
        tips.push(Tip {
            title: "Optimize Transportation",
            description: "Use public transport, bike, walk, or consider electric/hybrid vehicles for daily commute.",
            impact: format!("Could save {:.1} tons CO2/year", transport * 0.5),
        });
    }

    if flights > FLIGHTS_TIP_THRESHOLD {
        tips.push(Tip {
            title: "Mindful Flying",
            description: "Choose direct flights, economy class, and consider carbon offset programs for unavoidable flights.",
            impact: format!("Could save {:.1} tons CO2/year", flights * 0.4),
        });
    }

    if answers.nonveg_meals_week().unwrap_or(0.0) > NONVEG_MEALS_TIP_THRESHOLD {
        tips.push(Tip {
            title: "Sustainable Diet",
            description: "Try reducing meat consumption by 2-3 meals per week. Plant-based meals have a lower carbon footprint.",
            impact: "Could save 0.5-1.2 tons CO2/year".to_string(),
        });
    }

    tips
}

/// Tips for a company respondent: a fixed three-item list, not
/// data-driven.
#[must_use]
pub fn company_tips(answers: &CompanyAnswers) -> Vec<Tip> {
    let _ = answers;
    vec![
        Tip {
            title: "Energy Efficiency",
            description: "Implement LED lighting, smart HVAC systems, and energy management systems.",
            impact: "Up to 30% energy reduction possible".to_string(),
        },
        Tip {
            title: "Employee Engagement",
            description: "Promote remote work, carpooling, and provide incentives for sustainable commuting.",
            impact: "20-40% commute emissions reduction".to_string(),
        },
        Tip {
            title: "Waste Reduction",
            description: "Implement recycling programs, go paperless, and choose sustainable suppliers.",
            impact: "50-70% waste reduction achievable".to_string(),
        },
    ]
}

//
// ─── VERDICT ──────────────────────────────────────────────────────────────────
//

/// Global average annual footprint for an individual, tons CO2/year.
pub const INDIVIDUAL_GLOBAL_AVERAGE: f64 = 4.8;

/// Global average annual footprint for a company, tons CO2/year.
pub const COMPANY_GLOBAL_AVERAGE: f64 = 50.0;

/// How a total compares against the global average for its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictSeverity {
    /// Below 70% of the global average.
    Excellent,
    /// Below the global average.
    Good,
    /// At or above the global average.
    Encourage,
}

/// Fixed motivational verdict for a computed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub severity: VerdictSeverity,
    pub message: &'static str,
}

/// Classifies a total against the global-average constant for the kind.
#[must_use]
pub fn verdict_for(total: f64, kind: RespondentKind) -> Verdict {
    let average = match kind {
        RespondentKind::Individual => INDIVIDUAL_GLOBAL_AVERAGE,
        RespondentKind::Company => COMPANY_GLOBAL_AVERAGE,
    };

    if total < average * 0.7 {
        Verdict {
            severity: VerdictSeverity::Excellent,
            message: "🌟 Excellent! You're already below the global average. You're making a real difference!",
        }
    } else if total < average {
        Verdict {
            severity: VerdictSeverity::Good,
            message: "👍 Good work! You're close to the global average. Small changes can make a big impact!",
        }
    } else {
        Verdict {
            severity: VerdictSeverity::Encourage,
            message: "💪 Every step counts! With the right changes, you can significantly reduce your impact.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heavy_individual() -> IndividualAnswers {
        let mut answers = IndividualAnswers::default();
        answers.set_electricity(300.0).unwrap(); // 2.52 t, above threshold
        answers.set_lpg(6.0).unwrap();
        answers.set_transport(60.0).unwrap(); // petrol: 1.66 t, above threshold
        answers.set_transport_fuel(FuelKind::Petrol);
        answers.set_flights(10.0).unwrap(); // short: 3.0 t, above threshold
        answers.set_flight_haul(HaulLength::Short);
        answers.set_veg_meals(3.0).unwrap();
        answers.set_nonveg_meals(12.0).unwrap(); // above 10/week
        answers
    }

    #[test]
    fn heavy_individual_gets_all_four_tips() {
        let tips = individual_tips(&heavy_individual());
        let titles: Vec<&str> = tips.iter().map(|tip| tip.title).collect();
        assert_eq!(
            titles,
            vec![
                "Reduce Electricity Usage",
                "Optimize Transportation",
                "Mindful Flying",
                "Sustainable Diet",
            ]
        );
    }

    #[test]
    fn savings_use_fixed_reduction_fractions() {
        let tips = individual_tips(&heavy_individual());
        // electricity 2.52 * 0.3, transport 1.6632 * 0.5, flights 3.0 * 0.4
        assert_eq!(tips[0].impact, "Could save 0.8 tons CO2/year");
        assert_eq!(tips[1].impact, "Could save 0.8 tons CO2/year");
        assert_eq!(tips[2].impact, "Could save 1.2 tons CO2/year");
        assert_eq!(tips[3].impact, "Could save 0.5-1.2 tons CO2/year");
    }

    #[test]
    fn light_individual_gets_no_tips() {
        let mut answers = IndividualAnswers::default();
        answers.set_electricity(100.0).unwrap(); // 0.84 t
        answers.set_lpg(4.0).unwrap();
        answers.set_transport(20.0).unwrap(); // diesel: 0.64 t
        answers.set_transport_fuel(FuelKind::Diesel);
        answers.set_flights(2.0).unwrap(); // short: 0.6 t
        answers.set_flight_haul(HaulLength::Short);
        answers.set_veg_meals(10.0).unwrap();
        answers.set_nonveg_meals(4.0).unwrap();
        assert!(individual_tips(&answers).is_empty());
    }

    #[test]
    fn company_tips_are_fixed_regardless_of_input() {
        let empty = company_tips(&CompanyAnswers::default());
        let mut heavy = CompanyAnswers::default();
        heavy.set_electricity(100_000.0).unwrap();
        assert_eq!(empty, company_tips(&heavy));
        assert_eq!(empty.len(), 3);
    }

    #[test]
    fn verdict_bands_for_individual() {
        // 70% of 4.8 is 3.36.
        assert_eq!(
            verdict_for(3.0, RespondentKind::Individual).severity,
            VerdictSeverity::Excellent
        );
        assert_eq!(
            verdict_for(4.0, RespondentKind::Individual).severity,
            VerdictSeverity::Good
        );
        assert_eq!(
            verdict_for(4.8, RespondentKind::Individual).severity,
            VerdictSeverity::Encourage
        );
        assert_eq!(
            verdict_for(20.0, RespondentKind::Individual).severity,
            VerdictSeverity::Encourage
        );
    }

    #[test]
    fn verdict_uses_company_average() {
        assert_eq!(
            verdict_for(30.0, RespondentKind::Company).severity,
            VerdictSeverity::Excellent
        );
        assert_eq!(
            verdict_for(45.0, RespondentKind::Company).severity,
            VerdictSeverity::Good
        );
        assert_eq!(
            verdict_for(60.0, RespondentKind::Company).severity,
            VerdictSeverity::Encourage
        );
    }
}
