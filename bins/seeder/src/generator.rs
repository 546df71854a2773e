//! Synthetic journal entry generation.
//!
//! Every posted document balances: its local amounts sum to zero, and so do
//! its reporting amounts. Budget rows are plan values without documents.

use std::collections::{BTreeSet, HashMap};

use ledgerlens_core::ledger::LedgerLine;
use ledgerlens_shared::types::FiscalPeriod;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::master::{
    ALL_CENTERS, BASE_YEAR, BUDGET_UPLIFT, COGS_SPLITS, COMPANIES, CORPORATE_CENTER, Company,
    DEPRECIATION_SPLITS, FACILITIES_SPLITS, GENERAL_ADMIN_SPLITS, IT_CENTER, MARKETING_CENTER,
    MARKETING_SPLITS, OPERATIONS_CENTERS, PERSONNEL_SPLITS, RESEARCH_CENTERS, RESEARCH_SPLITS,
    REVENUE_SPLITS, SALES_CENTERS, SEASONALITY, TAX_RATE, YOY_GROWTH, balance, cost,
    facilities_center,
};

/// First document number of each company and year.
const FIRST_DOCUMENT: u64 = 1_000_000_001;

/// Cost centers receiving each payroll posting.
const PAYROLL_CENTERS: usize = 5;

const MONTHS: Decimal = dec!(12);

/// Generated actual and budget rows.
#[derive(Debug, Default)]
pub struct GeneratedLedger {
    /// Posted journal lines.
    pub actuals: Vec<LedgerLine>,
    /// Plan lines.
    pub budget: Vec<LedgerLine>,
}

/// One leg of a journal entry: account, local amount (debit positive), cost center.
type Leg<'a> = (&'a str, Decimal, Option<&'a str>);

/// Generator of balanced synthetic ACDOCA data.
pub struct Generator {
    rng: StdRng,
    companies: Vec<Company>,
    documents: HashMap<(&'static str, i32), u64>,
}

impl Generator {
    /// Creates a generator. A seed makes the output reproducible.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            companies: COMPANIES.to_vec(),
            documents: HashMap::new(),
        }
    }

    /// Restricts generation to a subset of companies.
    #[must_use]
    pub fn with_companies(mut self, companies: &[Company]) -> Self {
        self.companies = companies.to_vec();
        self
    }

    /// Generates `months` periods of actuals ending at `end`, plus a full-year
    /// budget for every year touched.
    pub fn generate(&mut self, months: u32, end: FiscalPeriod) -> GeneratedLedger {
        let mut start = end;
        for _ in 1..months {
            let Some(previous) = start.previous() else {
                break;
            };
            start = previous;
        }

        let mut ledger = GeneratedLedger::default();
        let mut years = BTreeSet::new();
        let mut period = start;

        while period <= end {
            years.insert(period.year);
            for company in self.companies.clone() {
                tracing::debug!(company = company.code, period = %period, "Generating month");
                self.month(&company, period, &mut ledger.actuals);
            }
            let Some(next) = period.next() else {
                break;
            };
            period = next;
        }

        for year in years {
            for company in &self.companies {
                tracing::debug!(company = company.code, year, "Generating budget");
                ledger.budget.extend(budget(company, year));
            }
        }

        ledger
    }

    /// Posts one month of activity for a company.
    fn month(&mut self, company: &Company, period: FiscalPeriod, out: &mut Vec<LedgerLine>) {
        let revenue = (annual_rate(company, period) / MONTHS * self.jitter(500)).round_dp(2);

        self.revenue(company, period, revenue, out);
        self.cost_of_sales(company, period, revenue, out);
        self.operating_expenses(company, period, revenue, out);
        self.financial(company, period, revenue, out);

        let pretax = revenue - revenue * cost::OPERATING_TOTAL;
        let tax = (pretax * TAX_RATE).max(Decimal::ZERO).round_dp(2);
        if tax > Decimal::ZERO {
            self.post(
                company,
                period,
                &[
                    ("800000", tax, Some(CORPORATE_CENTER)),
                    (balance::TAX_PAYABLE, -tax, None),
                ],
                out,
            );
        }
    }

    fn revenue(
        &mut self,
        company: &Company,
        period: FiscalPeriod,
        revenue: Decimal,
        out: &mut Vec<LedgerLine>,
    ) {
        for (account, share) in REVENUE_SPLITS {
            let amount = (revenue * share * self.jitter(1000)).round_dp(2);
            let center = self.pick(&SALES_CENTERS);
            self.post(
                company,
                period,
                &[
                    (balance::RECEIVABLES, amount, None),
                    (account, -amount, Some(center)),
                ],
                out,
            );
        }
    }

    fn cost_of_sales(
        &mut self,
        company: &Company,
        period: FiscalPeriod,
        revenue: Decimal,
        out: &mut Vec<LedgerLine>,
    ) {
        let cogs = revenue * cost::COGS;
        for (account, share) in COGS_SPLITS {
            let amount = (cogs * share * self.jitter(500)).round_dp(2);
            let center = self.pick(&OPERATIONS_CENTERS);
            self.post(
                company,
                period,
                &[
                    (account, amount, Some(center)),
                    (balance::INVENTORY, -amount, None),
                ],
                out,
            );
        }
    }

    fn operating_expenses(
        &mut self,
        company: &Company,
        period: FiscalPeriod,
        revenue: Decimal,
        out: &mut Vec<LedgerLine>,
    ) {
        // Payroll is spread across a random sample of cost centers.
        let personnel = revenue * cost::PERSONNEL;
        let per_center = Decimal::from(PAYROLL_CENTERS);
        for (account, share) in PERSONNEL_SPLITS {
            let amount = personnel * share * self.jitter(300);
            let centers: Vec<&'static str> = ALL_CENTERS
                .choose_multiple(&mut self.rng, PAYROLL_CENTERS)
                .copied()
                .collect();
            for center in centers {
                let center_amount = (amount / per_center * self.jitter(2000)).round_dp(2);
                self.post(
                    company,
                    period,
                    &[
                        (account, center_amount, Some(center)),
                        (balance::PAYABLES, -center_amount, None),
                    ],
                    out,
                );
            }
        }

        let facilities = revenue * cost::FACILITIES;
        let facilities_cc = facilities_center(company);
        for (account, share) in FACILITIES_SPLITS {
            let amount = (facilities * share).round_dp(2);
            self.post(
                company,
                period,
                &[
                    (account, amount, Some(facilities_cc.as_str())),
                    (balance::PAYABLES, -amount, None),
                ],
                out,
            );
        }

        let marketing = revenue * cost::SALES_MARKETING;
        for (account, share) in MARKETING_SPLITS {
            let amount = (marketing * share * self.jitter(1000)).round_dp(2);
            self.post(
                company,
                period,
                &[
                    (account, amount, Some(MARKETING_CENTER)),
                    (balance::PAYABLES, -amount, None),
                ],
                out,
            );
        }

        let research = revenue * cost::RESEARCH;
        for (account, share) in RESEARCH_SPLITS {
            let amount = (research * share).round_dp(2);
            let center = self.pick(&RESEARCH_CENTERS);
            self.post(
                company,
                period,
                &[
                    (account, amount, Some(center)),
                    (balance::PAYABLES, -amount, None),
                ],
                out,
            );
        }

        let general = revenue * cost::GENERAL_ADMIN;
        for (account, share) in GENERAL_ADMIN_SPLITS {
            let amount = (general * share * self.jitter(500)).round_dp(2);
            self.post(
                company,
                period,
                &[
                    (account, amount, Some(CORPORATE_CENTER)),
                    (balance::PAYABLES, -amount, None),
                ],
                out,
            );
        }

        let depreciation = revenue * cost::DEPRECIATION;
        for (account, share) in DEPRECIATION_SPLITS {
            let amount = (depreciation * share).round_dp(2);
            self.post(
                company,
                period,
                &[
                    (account, amount, Some(IT_CENTER)),
                    (balance::ACCUMULATED_DEPRECIATION, -amount, None),
                ],
                out,
            );
        }
    }

    /// Interest and, for non-USD companies, FX revaluation.
    fn financial(
        &mut self,
        company: &Company,
        period: FiscalPeriod,
        revenue: Decimal,
        out: &mut Vec<LedgerLine>,
    ) {
        let interest_expense = (revenue * cost::INTEREST).round_dp(2);
        self.post(
            company,
            period,
            &[
                ("710000", interest_expense, Some(CORPORATE_CENTER)),
                (balance::CASH, -interest_expense, None),
            ],
            out,
        );

        let income_factor = Decimal::new(self.rng.gen_range(5_000..=15_000), 4);
        let interest_income = (revenue * dec!(0.002) * income_factor).round_dp(2);
        self.post(
            company,
            period,
            &[
                (balance::CASH, interest_income, None),
                ("700000", -interest_income, Some(CORPORATE_CENTER)),
            ],
            out,
        );

        if company.reports_in_usd() {
            return;
        }
        let swing = Decimal::new(self.rng.gen_range(-200..=200), 4);
        let fx = (revenue * swing).round_dp(2);
        let legs: [Leg<'_>; 2] = if fx >= Decimal::ZERO {
            [
                (balance::CASH, fx, None),
                ("720000", -fx, Some(CORPORATE_CENTER)),
            ]
        } else {
            [
                ("721000", -fx, Some(CORPORATE_CENTER)),
                (balance::CASH, fx, None),
            ]
        };
        self.post(company, period, &legs, out);
    }

    /// Appends one balanced document.
    fn post(
        &mut self,
        company: &Company,
        period: FiscalPeriod,
        legs: &[Leg<'_>],
        out: &mut Vec<LedgerLine>,
    ) {
        let document = self.next_document(company, period.year);
        out.extend(legs.iter().map(|&(account, amount, center)| {
            let line = LedgerLine::new(
                company.code,
                period.year,
                period.period,
                account,
                to_reporting(company, amount),
            )
            .with_local_amount(amount)
            .with_document(document.as_str());
            match center {
                Some(center) => line.with_cost_center(center),
                None => line,
            }
        }));
    }

    fn next_document(&mut self, company: &Company, year: i32) -> String {
        let counter = self
            .documents
            .entry((company.code, year))
            .or_insert(FIRST_DOCUMENT);
        let number = *counter;
        *counter += 1;
        number.to_string()
    }

    /// `1 + u` with `u` uniform in +/- `basis_points` / 10000.
    fn jitter(&mut self, basis_points: i64) -> Decimal {
        Decimal::ONE + Decimal::new(self.rng.gen_range(-basis_points..=basis_points), 4)
    }

    fn pick(&mut self, centers: &[&'static str]) -> &'static str {
        centers
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(CORPORATE_CENTER)
    }
}

/// Plan rows for one company and year: revenue and the main cost accounts at
/// the cost ratios, uplifted over the run rate.
#[must_use]
pub fn budget(company: &Company, year: i32) -> Vec<LedgerLine> {
    const EXPENSES: [(&str, Decimal, &str); 7] = [
        ("500000", cost::COGS, "CC4000"),
        ("600000", cost::PERSONNEL, "CC5000"),
        ("610000", cost::FACILITIES, "CC4000"),
        ("620000", cost::SALES_MARKETING, "CC2000"),
        ("630000", cost::RESEARCH, "CC3000"),
        ("650000", cost::GENERAL_ADMIN, "CC5000"),
        ("640000", cost::DEPRECIATION, "CC5020"),
    ];

    let mut lines = Vec::new();
    for month in 1..=12 {
        let period = FiscalPeriod::new(year, month);
        let revenue = annual_rate(company, period) * BUDGET_UPLIFT / MONTHS;
        let plan = |account: &str, amount: Decimal, center: &str| {
            LedgerLine::new(
                company.code,
                year,
                period.period,
                account,
                to_reporting(company, amount),
            )
            .with_local_amount(amount)
            .with_cost_center(center)
        };

        for (account, share) in REVENUE_SPLITS {
            lines.push(plan(account, -(revenue * share).round_dp(2), "CC1000"));
        }
        for (account, ratio, center) in EXPENSES {
            lines.push(plan(account, (revenue * ratio).round_dp(2), center));
        }
    }

    lines
}

/// Annual revenue grown from the base year and weighted by the month's
/// seasonality. A twelfth of it is the month's revenue before noise.
fn annual_rate(company: &Company, period: FiscalPeriod) -> Decimal {
    let season = usize::try_from(period.period.saturating_sub(1))
        .ok()
        .and_then(|index| SEASONALITY.get(index))
        .copied()
        .unwrap_or(Decimal::ONE);
    company.annual_revenue * growth_factor(period.year) * season
}

/// Compound growth relative to the base year.
fn growth_factor(year: i32) -> Decimal {
    let step = Decimal::ONE + YOY_GROWTH;
    let mut factor = Decimal::ONE;
    for _ in 0..(year - BASE_YEAR).unsigned_abs() {
        factor = if year >= BASE_YEAR {
            factor * step
        } else {
            factor / step
        };
    }
    factor
}

fn to_reporting(company: &Company, amount: Decimal) -> Decimal {
    (amount * company.fx_to_usd).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerlens_core::chart::{Category, ChartOfAccounts};
    use ledgerlens_core::ledger::Scope;
    use ledgerlens_core::reports::{DerivedMetric, ReportService};
    use ledgerlens_shared::types::{AmountField, DocumentNumber};
    use rstest::rstest;

    fn generate(months: u32, end: FiscalPeriod) -> GeneratedLedger {
        Generator::new(Some(42)).generate(months, end)
    }

    #[test]
    fn test_documents_balance() {
        let ledger = generate(2, FiscalPeriod::new(2025, 2));
        let mut sums: HashMap<(String, i32, DocumentNumber), (Decimal, Decimal)> = HashMap::new();

        for line in &ledger.actuals {
            let key = (
                line.company_code.to_string(),
                line.fiscal_year,
                line.document_number.clone().unwrap(),
            );
            let entry = sums.entry(key).or_default();
            entry.0 += line.amount_local;
            entry.1 += line.amount_reporting;
        }

        assert!(!sums.is_empty());
        for (key, (local, reporting)) in sums {
            assert_eq!(local, Decimal::ZERO, "local imbalance in {key:?}");
            assert_eq!(reporting, Decimal::ZERO, "reporting imbalance in {key:?}");
        }
    }

    #[test]
    fn test_same_seed_same_ledger() {
        let a = generate(3, FiscalPeriod::new(2025, 6));
        let b = generate(3, FiscalPeriod::new(2025, 6));
        assert_eq!(a.actuals, b.actuals);
        assert_eq!(a.budget, b.budget);
    }

    #[test]
    fn test_periods_cover_range_across_year_end() {
        let ledger = generate(3, FiscalPeriod::new(2025, 1));
        let periods: BTreeSet<FiscalPeriod> =
            ledger.actuals.iter().map(LedgerLine::period).collect();
        assert_eq!(
            periods.into_iter().collect::<Vec<_>>(),
            vec![
                FiscalPeriod::new(2024, 11),
                FiscalPeriod::new(2024, 12),
                FiscalPeriod::new(2025, 1),
            ]
        );

        // One budget year per touched year and company, 11 rows per month.
        assert_eq!(ledger.budget.len(), 2 * COMPANIES.len() * 12 * 11);
    }

    #[test]
    fn test_every_pnl_account_is_charted() {
        let chart = ChartOfAccounts::standard();
        let ledger = generate(1, FiscalPeriod::new(2025, 3));

        for line in ledger.actuals.iter().chain(&ledger.budget) {
            let first = line.account.as_str().chars().next().unwrap();
            if ('4'..='8').contains(&first) {
                assert!(
                    chart.category_of(&line.account).is_some(),
                    "{} is not charted",
                    line.account
                );
            }
        }
    }

    #[test]
    fn test_generated_pnl_is_profitable() {
        let ledger = generate(12, FiscalPeriod::new(2025, 12));
        let service = ReportService::default();
        let scope = Scope::all().with_year(2025);
        let summary = service.pl_summary(&ledger.actuals, &scope, AmountField::Reporting);

        assert!(summary.amount(Category::Revenue) > Decimal::ZERO);
        assert!(summary.amount(DerivedMetric::GrossProfit) > Decimal::ZERO);
        assert!(summary.amount(DerivedMetric::NetIncome) > Decimal::ZERO);

        // COGS stays near 35% of revenue.
        let cogs_pct = summary.margin(Category::Cogs);
        assert!(cogs_pct > dec!(33) && cogs_pct < dec!(37), "{cogs_pct}");
    }

    #[test]
    fn test_budget_is_uplifted_run_rate() {
        let lines = budget(&COMPANIES[0], 2024);
        let december: Decimal = lines
            .iter()
            .filter(|line| line.fiscal_period == 12 && line.account.as_str().starts_with('4'))
            .map(|line| line.amount_local)
            .sum();

        // 50M / 12 * 1.20 seasonality * 1.05 uplift, booked as credit.
        assert_eq!(december, dec!(-5250000));
        assert!(lines.iter().all(|line| line.document_number.is_none()));
    }

    #[rstest]
    #[case(0, dec!(-2187500), dec!(-2187500))]
    #[case(1, dec!(-1312500), dec!(-1417500))]
    #[case(2, dec!(-875000), dec!(-647500))]
    fn test_budget_reporting_conversion(
        #[case] company: usize,
        #[case] local: Decimal,
        #[case] reporting: Decimal,
    ) {
        // September has seasonality 1.00: annual * 1.05 / 12, half of it product revenue.
        let line = budget(&COMPANIES[company], BASE_YEAR)
            .into_iter()
            .find(|line| line.fiscal_period == 9 && line.account.as_str() == "400000")
            .unwrap();

        assert_eq!(line.amount_local, local);
        assert_eq!(line.amount_reporting, reporting);
    }

    #[test]
    fn test_growth_factor() {
        assert_eq!(growth_factor(BASE_YEAR), Decimal::ONE);
        assert_eq!(growth_factor(BASE_YEAR + 2), dec!(1.2544));
        assert_eq!(
            (growth_factor(BASE_YEAR - 1) * dec!(1.12)).round_dp(10),
            Decimal::ONE
        );
    }

    #[test]
    fn test_usd_company_has_equal_amounts() {
        let ledger = Generator::new(Some(7))
            .with_companies(&COMPANIES[..1])
            .generate(1, FiscalPeriod::new(2025, 5));

        assert!(ledger.actuals.iter().all(|l| l.amount_local == l.amount_reporting));
        assert!(ledger.actuals.iter().all(|l| l.company_code.as_str() == "1000"));
    }
}
