//! Payroll breakdown calculation.
//!
//! This module composes the statutory formulas into a full payroll
//! breakdown. The steps form a strict dependency chain; later figures
//! consume earlier ones:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Basic salary, clamped non-negative |
//! | 2    | Gross salary = basic + transport + housing + performance |
//! | 3    | Taxable income = gross (the exemption lives in the zero band) |
//! | 4    | PAYE from the progressive schedule |
//! | 5    | Employee pension: gross × 6% |
//! | 6    | Employee maternity: basic × 0.3% |
//! | 7    | Employee medical: basic × 7.5%, if subscribed |
//! | 8    | Net before CBHI = gross − PAYE − pension − maternity − medical |
//! | 9    | CBHI: net before CBHI × 0.5% |
//! | 10   | Advance, clamped non-negative |
//! | 11   | Net salary = net before CBHI − CBHI − advance |
//! | 12   | Total employee deductions |
//! | 13   | Employer side: pension 6%, maternity 0.3%, medical 7.5%, hazard 2% |
//!
//! Every figure is kept as an exact decimal; rounding to whole francs
//! happens only at presentation boundaries so that sums and later
//! re-derivations stay consistent.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use payroll_core::calculations::PayrollCalculator;
//! use payroll_core::models::PayrollInput;
//!
//! let input = PayrollInput {
//!     basic_salary: Decimal::from(1_000_000),
//!     ..PayrollInput::default()
//! };
//!
//! let breakdown = PayrollCalculator::default().calculate(&input);
//!
//! assert_eq!(breakdown.paye, Decimal::from(264_000));
//! assert_eq!(breakdown.net_salary, Decimal::from(595_010));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::clamp_non_negative;
use crate::calculations::paye::PayeSchedule;
use crate::models::{AllowanceBreakdown, ContributionRates, PayrollBreakdown, PayrollInput};

/// Calculator for complete payroll breakdowns.
///
/// Holds the tax band table and contribution percentages. `calculate` is a
/// pure, total function of its input: no I/O, no logging, no mutation, and
/// no error path, so any number of request handlers may share one
/// calculator without coordination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollCalculator {
    schedule: PayeSchedule,
    rates: ContributionRates,
}

impl PayrollCalculator {
    /// Creates a calculator over a custom schedule and rates. Most callers
    /// want [`PayrollCalculator::default`], which uses the statutory
    /// constants.
    pub fn new(schedule: PayeSchedule, rates: ContributionRates) -> Self {
        Self { schedule, rates }
    }

    /// Computes the full breakdown for one input.
    pub fn calculate(&self, input: &PayrollInput) -> PayrollBreakdown {
        let basic_salary = clamp_non_negative(input.basic_salary);

        let allowances = AllowanceBreakdown {
            variable: clamp_non_negative(input.variable_allowance),
            transport: clamp_non_negative(input.transport_allowance),
            housing: clamp_non_negative(input.housing_allowance),
            performance: clamp_non_negative(input.performance_allowance),
        };

        // Variable allowance is reported with the group but has never
        // counted toward gross pay.
        let gross_salary =
            basic_salary + allowances.transport + allowances.housing + allowances.performance;

        // The 60,000 exemption is already the zero-rated first tax band;
        // subtracting it here as well would exempt it twice.
        let taxable_income = clamp_non_negative(gross_salary);
        let paye = self.schedule.tax_on(taxable_income);

        let employee_pension = gross_salary * self.rates.pension_rate;
        let employee_maternity = basic_salary * self.rates.maternity_rate;
        let employee_medical = self.medical_contribution(basic_salary, input.include_medical);

        let net_before_community_health_insurance =
            gross_salary - paye - employee_pension - employee_maternity - employee_medical;
        let community_health_insurance =
            net_before_community_health_insurance * self.rates.cbhi_rate;

        let advance_amount = clamp_non_negative(input.advance_amount);
        let net_salary =
            net_before_community_health_insurance - community_health_insurance - advance_amount;

        let total_employee_deductions = paye
            + employee_pension
            + employee_maternity
            + employee_medical
            + community_health_insurance
            + advance_amount;

        // Employer side mirrors the employee formulas but is never netted
        // against employee pay.
        let employer_pension = gross_salary * self.rates.pension_rate;
        let employer_maternity = basic_salary * self.rates.maternity_rate;
        let employer_medical = self.medical_contribution(basic_salary, input.include_medical);
        let occupational_hazard = basic_salary * self.rates.hazard_rate;
        let total_employer_contributions =
            employer_pension + employer_maternity + employer_medical + occupational_hazard;
        let total_cost_of_employment = gross_salary + total_employer_contributions;

        PayrollBreakdown {
            frequency: input.frequency,
            basic_salary,
            allowances,
            gross_salary,
            taxable_income,
            paye,
            employee_pension,
            employee_maternity,
            employee_medical,
            net_before_community_health_insurance,
            community_health_insurance,
            advance_amount,
            total_employee_deductions,
            net_salary,
            employer_pension,
            employer_maternity,
            employer_medical,
            occupational_hazard,
            total_employer_contributions,
            total_cost_of_employment,
            include_medical: input.include_medical,
        }
    }

    fn medical_contribution(
        &self,
        basic_salary: Decimal,
        include_medical: bool,
    ) -> Decimal {
        if include_medical {
            basic_salary * self.rates.medical_rate
        } else {
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::PayFrequency;

    fn calculate(input: &PayrollInput) -> PayrollBreakdown {
        PayrollCalculator::default().calculate(input)
    }

    // =========================================================================
    // reference scenarios
    // =========================================================================

    #[test]
    fn one_million_basic_salary_reference_case() {
        let breakdown = calculate(&PayrollInput {
            basic_salary: dec!(1000000),
            ..PayrollInput::default()
        });

        assert_eq!(breakdown.gross_salary, dec!(1000000));
        assert_eq!(breakdown.taxable_income, dec!(1000000));
        assert_eq!(breakdown.paye, dec!(264000));
        assert_eq!(breakdown.employee_pension, dec!(60000));
        assert_eq!(breakdown.employee_maternity, dec!(3000));
        assert_eq!(breakdown.employee_medical, dec!(75000));
        assert_eq!(breakdown.net_before_community_health_insurance, dec!(598000));
        assert_eq!(breakdown.community_health_insurance, dec!(2990));
        assert_eq!(breakdown.net_salary, dec!(595010));
    }

    #[test]
    fn basic_salary_with_allowances() {
        let breakdown = calculate(&PayrollInput {
            basic_salary: dec!(500000),
            transport_allowance: dec!(50000),
            housing_allowance: dec!(100000),
            performance_allowance: dec!(50000),
            ..PayrollInput::default()
        });

        assert_eq!(breakdown.gross_salary, dec!(700000));
        assert_eq!(breakdown.paye, dec!(174000));
        assert_eq!(breakdown.employee_pension, dec!(42000));
        assert_eq!(breakdown.employee_maternity, dec!(1500));
        assert_eq!(breakdown.employee_medical, dec!(37500));
        assert_eq!(breakdown.net_before_community_health_insurance, dec!(445000));
        assert_eq!(breakdown.community_health_insurance, dec!(2225));
        assert_eq!(breakdown.net_salary, dec!(442775));
        assert_eq!(breakdown.occupational_hazard, dec!(10000));
        assert_eq!(breakdown.total_employer_contributions, dec!(91000));
        assert_eq!(breakdown.total_cost_of_employment, dec!(791000));
    }

    #[test]
    fn fractional_figures_stay_exact_through_the_chain() {
        let breakdown = calculate(&PayrollInput {
            basic_salary: dec!(752292),
            transport_allowance: dec!(252311),
            housing_allowance: dec!(525407),
            ..PayrollInput::default()
        });

        assert_eq!(breakdown.gross_salary, dec!(1530010));
        assert_eq!(breakdown.paye, dec!(423003));
        assert_eq!(breakdown.employee_pension, dec!(91800.60));
        assert_eq!(breakdown.employee_maternity, dec!(2256.876));
        assert_eq!(breakdown.employee_medical, dec!(56421.900));
        assert_eq!(
            breakdown.net_before_community_health_insurance,
            dec!(956527.624)
        );
        assert_eq!(breakdown.community_health_insurance, dec!(4782.638120));
        assert_eq!(breakdown.net_salary, dec!(951744.985880));
    }

    #[test]
    fn zero_input_produces_all_zeros() {
        let breakdown = calculate(&PayrollInput::default());

        assert_eq!(breakdown.gross_salary, dec!(0));
        assert_eq!(breakdown.paye, dec!(0));
        assert_eq!(breakdown.employee_pension, dec!(0));
        assert_eq!(breakdown.employee_maternity, dec!(0));
        assert_eq!(breakdown.employee_medical, dec!(0));
        assert_eq!(breakdown.community_health_insurance, dec!(0));
        assert_eq!(breakdown.net_salary, dec!(0));
        assert_eq!(breakdown.total_employer_contributions, dec!(0));
        assert_eq!(breakdown.total_cost_of_employment, dec!(0));
    }

    // =========================================================================
    // invariants
    // =========================================================================

    #[test]
    fn deductions_plus_net_reconstruct_gross() {
        let breakdown = calculate(&PayrollInput {
            basic_salary: dec!(752292),
            transport_allowance: dec!(252311),
            housing_allowance: dec!(525407),
            advance_amount: dec!(40000),
            ..PayrollInput::default()
        });

        let reconstructed = breakdown.net_salary
            + breakdown.paye
            + breakdown.employee_pension
            + breakdown.employee_maternity
            + breakdown.employee_medical
            + breakdown.community_health_insurance
            + breakdown.advance_amount;

        assert_eq!(reconstructed, breakdown.gross_salary);
        assert_eq!(
            breakdown.total_employee_deductions + breakdown.net_salary,
            breakdown.gross_salary
        );
    }

    #[test]
    fn total_cost_is_gross_plus_employer_contributions() {
        let breakdown = calculate(&PayrollInput {
            basic_salary: dec!(345678),
            transport_allowance: dec!(12345),
            ..PayrollInput::default()
        });

        assert_eq!(
            breakdown.total_cost_of_employment,
            breakdown.gross_salary + breakdown.total_employer_contributions
        );
    }

    #[test]
    fn variable_allowance_is_reported_but_excluded_from_gross() {
        let breakdown = calculate(&PayrollInput {
            basic_salary: dec!(300000),
            variable_allowance: dec!(90000),
            ..PayrollInput::default()
        });

        assert_eq!(breakdown.allowances.variable, dec!(90000));
        assert_eq!(breakdown.gross_salary, dec!(300000));
    }

    #[test]
    fn excluding_medical_zeroes_both_sides() {
        let with = calculate(&PayrollInput {
            basic_salary: dec!(1000000),
            ..PayrollInput::default()
        });
        let without = calculate(&PayrollInput {
            basic_salary: dec!(1000000),
            include_medical: false,
            ..PayrollInput::default()
        });

        assert_eq!(without.employee_medical, dec!(0));
        assert_eq!(without.employer_medical, dec!(0));
        assert!(without.net_salary > with.net_salary);
        assert_eq!(
            without.total_employer_contributions,
            with.total_employer_contributions - with.employer_medical
        );
    }

    #[test]
    fn advance_is_deducted_after_cbhi() {
        let plain = calculate(&PayrollInput {
            basic_salary: dec!(1000000),
            ..PayrollInput::default()
        });
        let advanced = calculate(&PayrollInput {
            basic_salary: dec!(1000000),
            advance_amount: dec!(50000),
            ..PayrollInput::default()
        });

        // CBHI is levied before the advance comes off, so it is unchanged.
        assert_eq!(
            advanced.community_health_insurance,
            plain.community_health_insurance
        );
        assert_eq!(advanced.net_salary, plain.net_salary - dec!(50000));
    }

    #[test]
    fn employer_side_mirrors_employee_formulas() {
        let breakdown = calculate(&PayrollInput {
            basic_salary: dec!(600000),
            housing_allowance: dec!(150000),
            ..PayrollInput::default()
        });

        assert_eq!(breakdown.employer_pension, breakdown.employee_pension);
        assert_eq!(breakdown.employer_maternity, breakdown.employee_maternity);
        assert_eq!(breakdown.employer_medical, breakdown.employee_medical);
        assert_eq!(breakdown.occupational_hazard, dec!(12000));
    }

    #[test]
    fn negative_amounts_are_clamped_to_zero() {
        let breakdown = calculate(&PayrollInput {
            basic_salary: dec!(-500000),
            transport_allowance: dec!(-10000),
            advance_amount: dec!(-999),
            ..PayrollInput::default()
        });

        assert_eq!(breakdown.basic_salary, dec!(0));
        assert_eq!(breakdown.gross_salary, dec!(0));
        assert_eq!(breakdown.advance_amount, dec!(0));
        assert_eq!(breakdown.net_salary, dec!(0));
    }

    #[test]
    fn custom_rates_are_injectable() {
        let no_cbhi = ContributionRates {
            cbhi_rate: Decimal::ZERO,
            ..ContributionRates::statutory()
        };
        let calculator = PayrollCalculator::new(PayeSchedule::statutory(), no_cbhi);

        let breakdown = calculator.calculate(&PayrollInput {
            basic_salary: dec!(1000000),
            ..PayrollInput::default()
        });

        assert_eq!(breakdown.community_health_insurance, dec!(0));
        assert_eq!(breakdown.net_salary, dec!(598000));
    }

    #[test]
    fn frequency_is_passed_through_unchanged() {
        let breakdown = calculate(&PayrollInput {
            basic_salary: dec!(120000),
            frequency: PayFrequency::Weekly,
            ..PayrollInput::default()
        });

        assert_eq!(breakdown.frequency, PayFrequency::Weekly);
    }

    #[test]
    fn identical_inputs_yield_identical_outputs() {
        let input = PayrollInput {
            basic_salary: dec!(752292),
            transport_allowance: dec!(252311),
            housing_allowance: dec!(525407),
            advance_amount: dec!(12000),
            ..PayrollInput::default()
        };

        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn input_is_not_mutated() {
        let input = PayrollInput {
            basic_salary: dec!(-100),
            ..PayrollInput::default()
        };
        let before = input.clone();

        let _ = calculate(&input);

        assert_eq!(input, before);
    }
}
