//! Cost-center spend ranking.

use std::collections::{HashMap, HashSet};

use ledgerlens_shared::types::{CostCenter, DocumentNumber};
use rust_decimal::Decimal;

use super::CostCenterSpend;
use crate::ledger::{LedgerLine, Scope};
use crate::percent::percent_of;

#[derive(Default)]
struct Accumulator<'a> {
    spend: Decimal,
    documents: HashSet<&'a DocumentNumber>,
}

/// Ranks cost centers by expense spend within scope.
///
/// Only expense accounts (numbered 5xxxxx to 7xxxxx) count, and lines without
/// a cost center are dropped. Shares are taken against the spend of all
/// cost centers before truncating to `top_n`. Ties rank by cost center code.
#[must_use]
pub fn cost_center_report(
    lines: &[LedgerLine],
    scope: &Scope,
    top_n: usize,
) -> Vec<CostCenterSpend> {
    let mut by_center: HashMap<&CostCenter, Accumulator<'_>> = HashMap::new();

    for line in scope.filter(lines).filter(|line| line.account.is_expense()) {
        let Some(center) = line.cost_center.as_ref() else {
            continue;
        };
        let entry = by_center.entry(center).or_default();
        entry.spend += line.amount_reporting;
        if let Some(document) = &line.document_number {
            entry.documents.insert(document);
        }
    }

    let total: Decimal = by_center.values().map(|acc| acc.spend).sum();

    let mut report: Vec<CostCenterSpend> = by_center
        .into_iter()
        .map(|(center, acc)| CostCenterSpend {
            cost_center: center.clone(),
            total_spend: acc.spend,
            doc_count: acc.documents.len(),
            pct_of_total: percent_of(acc.spend, total),
        })
        .collect();

    report.sort_by(|a, b| {
        b.total_spend
            .cmp(&a.total_spend)
            .then_with(|| a.cost_center.cmp(&b.cost_center))
    });
    report.truncate(top_n);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn spend(center: &str, doc: &str, amount: Decimal) -> LedgerLine {
        LedgerLine::new("1000", 2025, 1, "600000", amount)
            .with_cost_center(center)
            .with_document(doc)
    }

    #[test]
    fn test_shares_and_top_n() {
        let lines = vec![
            spend("CC1000", "1", dec!(400)),
            spend("CC1000", "2", dec!(200)),
            spend("CC2000", "3", dec!(300)),
            spend("CC3000", "4", dec!(100)),
        ];

        let all = cost_center_report(&lines, &Scope::all(), 10);
        let shares: Vec<Decimal> = all.iter().map(|r| r.pct_of_total).collect();
        assert_eq!(shares, vec![dec!(60.0), dec!(30.0), dec!(10.0)]);
        assert_eq!(all[0].doc_count, 2);

        let top = cost_center_report(&lines, &Scope::all(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].cost_center.as_str(), "CC1000");
        assert_eq!(top[1].cost_center.as_str(), "CC2000");
        assert_eq!(top[1].pct_of_total, dec!(30.0));
    }

    #[test]
    fn test_ignores_revenue_and_unassigned_lines() {
        let lines = vec![
            spend("CC1000", "1", dec!(100)),
            LedgerLine::new("1000", 2025, 1, "400000", dec!(-1000)).with_cost_center("CC1000"),
            LedgerLine::new("1000", 2025, 1, "500000", dec!(999)),
        ];

        let report = cost_center_report(&lines, &Scope::all(), 10);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].total_spend, dec!(100));
        assert_eq!(report[0].pct_of_total, dec!(100.0));
    }

    #[test]
    fn test_ties_rank_by_code() {
        let lines = vec![spend("CC2000", "1", dec!(50)), spend("CC1000", "2", dec!(50))];

        let report = cost_center_report(&lines, &Scope::all(), 10);
        assert_eq!(report[0].cost_center.as_str(), "CC1000");
        assert_eq!(report[1].cost_center.as_str(), "CC2000");
    }

    #[test]
    fn test_counts_distinct_documents() {
        let lines = vec![
            spend("CC1000", "1", dec!(10)),
            spend("CC1000", "1", dec!(10)),
            LedgerLine::new("1000", 2025, 1, "600000", dec!(10)).with_cost_center("CC1000"),
        ];

        let report = cost_center_report(&lines, &Scope::all(), 10);
        assert_eq!(report[0].doc_count, 1);
        assert_eq!(report[0].total_spend, dec!(30));
    }

    #[test]
    fn test_zero_total_gives_zero_shares() {
        let lines = vec![spend("CC1000", "1", dec!(100)), spend("CC1000", "2", dec!(-100))];

        let report = cost_center_report(&lines, &Scope::all(), 10);
        assert_eq!(report[0].pct_of_total, Decimal::ZERO);
    }

    #[test]
    fn test_empty_scope_result() {
        let lines = vec![spend("CC1000", "1", dec!(100))];
        assert!(cost_center_report(&lines, &Scope::all().with_year(1999), 10).is_empty());
    }
}
