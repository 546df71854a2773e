//! Master data and cost structure for the synthetic ledger.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A company code with its local currency.
#[derive(Debug, Clone, Copy)]
pub struct Company {
    /// Company code (`RBUKRS`).
    pub code: &'static str,
    /// Local currency (`RHCUR`).
    pub currency: &'static str,
    /// Average rate converting local currency into USD.
    pub fx_to_usd: Decimal,
    /// Annual revenue in local currency for the base year.
    pub annual_revenue: Decimal,
}

impl Company {
    /// Returns true if the company books in the reporting currency.
    #[must_use]
    pub fn reports_in_usd(&self) -> bool {
        self.currency == "USD"
    }
}

/// Companies generated by default.
pub const COMPANIES: [Company; 3] = [
    Company {
        code: "1000",
        currency: "USD",
        fx_to_usd: Decimal::ONE,
        annual_revenue: dec!(50000000),
    },
    Company {
        code: "2000",
        currency: "EUR",
        fx_to_usd: dec!(1.08),
        annual_revenue: dec!(30000000),
    },
    Company {
        code: "3000",
        currency: "SGD",
        fx_to_usd: dec!(0.74),
        annual_revenue: dec!(20000000),
    },
];

/// Year whose revenue equals `annual_revenue`.
pub const BASE_YEAR: i32 = 2024;

/// Year-over-year revenue growth.
pub const YOY_GROWTH: Decimal = dec!(0.12);

/// Budget uplift over the projected run rate.
pub const BUDGET_UPLIFT: Decimal = dec!(1.05);

/// Effective income tax rate.
pub const TAX_RATE: Decimal = dec!(0.25);

/// Monthly revenue seasonality, January first.
pub const SEASONALITY: [Decimal; 12] = [
    dec!(0.85),
    dec!(0.88),
    dec!(0.95),
    dec!(0.92),
    dec!(0.90),
    dec!(0.95),
    dec!(0.88),
    dec!(0.85),
    dec!(1.00),
    dec!(1.05),
    dec!(1.10),
    dec!(1.20),
];

/// Cost ratios relative to revenue.
pub mod cost {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Cost of goods sold.
    pub const COGS: Decimal = dec!(0.35);
    /// Personnel.
    pub const PERSONNEL: Decimal = dec!(0.25);
    /// Facilities.
    pub const FACILITIES: Decimal = dec!(0.05);
    /// Sales and marketing.
    pub const SALES_MARKETING: Decimal = dec!(0.10);
    /// Research and development.
    pub const RESEARCH: Decimal = dec!(0.08);
    /// General and administrative.
    pub const GENERAL_ADMIN: Decimal = dec!(0.05);
    /// Depreciation and amortization.
    pub const DEPRECIATION: Decimal = dec!(0.03);
    /// Interest expense.
    pub const INTEREST: Decimal = dec!(0.01);

    /// Sum of the operating cost ratios (excluding interest).
    pub const OPERATING_TOTAL: Decimal = dec!(0.91);
}

/// Revenue accounts and their share of monthly revenue.
pub const REVENUE_SPLITS: [(&str, Decimal); 4] = [
    ("400000", dec!(0.50)),
    ("401000", dec!(0.25)),
    ("402000", dec!(0.15)),
    ("403000", dec!(0.10)),
];

/// COGS accounts and their share of cost of sales.
pub const COGS_SPLITS: [(&str, Decimal); 4] = [
    ("500000", dec!(0.40)),
    ("501000", dec!(0.30)),
    ("502000", dec!(0.20)),
    ("503000", dec!(0.10)),
];

/// Personnel accounts.
pub const PERSONNEL_SPLITS: [(&str, Decimal); 3] = [
    ("600000", dec!(0.70)),
    ("601000", dec!(0.20)),
    ("602000", dec!(0.10)),
];

/// Facilities accounts.
pub const FACILITIES_SPLITS: [(&str, Decimal); 3] = [
    ("610000", dec!(0.60)),
    ("611000", dec!(0.25)),
    ("612000", dec!(0.15)),
];

/// Sales and marketing accounts.
pub const MARKETING_SPLITS: [(&str, Decimal); 3] = [
    ("620000", dec!(0.50)),
    ("621000", dec!(0.30)),
    ("622000", dec!(0.20)),
];

/// Research and development accounts.
pub const RESEARCH_SPLITS: [(&str, Decimal); 2] = [("630000", dec!(0.70)), ("631000", dec!(0.30))];

/// General and administrative accounts.
pub const GENERAL_ADMIN_SPLITS: [(&str, Decimal); 5] = [
    ("650000", dec!(0.30)),
    ("651000", dec!(0.25)),
    ("652000", dec!(0.15)),
    ("653000", dec!(0.15)),
    ("654000", dec!(0.15)),
];

/// Depreciation accounts.
pub const DEPRECIATION_SPLITS: [(&str, Decimal); 2] =
    [("640000", dec!(0.70)), ("641000", dec!(0.30))];

/// Balance sheet accounts used as offsetting legs.
pub mod balance {
    /// Cash.
    pub const CASH: &str = "100000";
    /// Accounts receivable.
    pub const RECEIVABLES: &str = "110000";
    /// Inventory.
    pub const INVENTORY: &str = "120000";
    /// Accumulated depreciation.
    pub const ACCUMULATED_DEPRECIATION: &str = "150000";
    /// Accounts payable and accruals.
    pub const PAYABLES: &str = "200000";
    /// Income tax payable.
    pub const TAX_PAYABLE: &str = "210000";
}

/// Sales cost centers.
pub const SALES_CENTERS: [&str; 3] = ["CC1000", "CC1010", "CC1020"];

/// Operations cost centers.
pub const OPERATIONS_CENTERS: [&str; 2] = ["CC4000", "CC4010"];

/// Research cost centers.
pub const RESEARCH_CENTERS: [&str; 3] = ["CC3000", "CC3010", "CC3020"];

/// Marketing cost center.
pub const MARKETING_CENTER: &str = "CC2000";

/// Corporate (G&A, finance, tax) cost center.
pub const CORPORATE_CENTER: &str = "CC5000";

/// IT cost center carrying depreciation.
pub const IT_CENTER: &str = "CC5020";

/// Every cost center; payroll is spread across a sample of these.
pub const ALL_CENTERS: [&str; 13] = [
    "CC1000", "CC1010", "CC1020", "CC2000", "CC3000", "CC3010", "CC3020", "CC4000", "CC4010",
    "CC4020", "CC4030", "CC5000", "CC5020",
];

/// Cost center for facilities of a company (`CC4000`, `CC4020`, `CC4030`).
#[must_use]
pub fn facilities_center(company: &Company) -> String {
    match company.code.chars().next() {
        Some('1') | None => "CC4000".to_string(),
        Some(digit) => format!("CC40{digit}0"),
    }
}
