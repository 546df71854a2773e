//! Analytics service.

use std::collections::BTreeSet;
use std::sync::Arc;

use ledgerlens_shared::CacheConfig;
use ledgerlens_shared::types::AmountField;

use super::ReportCache;
use super::goals::{CompanyGoals, Goal, GoalError, GoalTracking};
use crate::chart::{Category, ChartOfAccounts};
use crate::comparison::{Comparator, VarianceRecord, YoyComparison};
use crate::ledger::{Dataset, LedgerLine, Scope};
use crate::reports::{CostCenterSpend, KpiSet, MonthlyTrend, PlSummary, ReportService};
use crate::simulation::{
    Forecast, ForecastStrategy, Scenario, ScenarioOutcome, SimulationEngine, SimulationError,
    forecast,
};

/// One cache per report kind, keyed by the report's query parameters.
#[derive(Clone)]
pub struct ReportCaches {
    pl_summary: ReportCache<(Scope, AmountField), PlSummary>,
    variance: ReportCache<Scope, Vec<VarianceRecord>>,
    cost_centers: ReportCache<(Scope, usize), Vec<CostCenterSpend>>,
    trends: ReportCache<(Category, Scope, AmountField), MonthlyTrend>,
    yoy: ReportCache<(i32, Scope, AmountField), YoyComparison>,
    kpis: ReportCache<Scope, KpiSet>,
}

impl ReportCaches {
    /// Creates caches sharing one capacity/TTL configuration.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            pl_summary: ReportCache::from_config(config),
            variance: ReportCache::from_config(config),
            cost_centers: ReportCache::from_config(config),
            trends: ReportCache::from_config(config),
            yoy: ReportCache::from_config(config),
            kpis: ReportCache::from_config(config),
        }
    }

    /// Invalidates every cache.
    pub fn invalidate_all(&self) {
        self.pl_summary.invalidate_all();
        self.variance.invalidate_all();
        self.cost_centers.invalidate_all();
        self.trends.invalidate_all();
        self.yoy.invalidate_all();
        self.kpis.invalidate_all();
    }
}

impl Default for ReportCaches {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

fn cached<K, V>(
    cache: Option<&ReportCache<K, V>>,
    report: &'static str,
    key: K,
    compute: impl FnOnce() -> V,
) -> Arc<V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    match cache {
        Some(cache) => {
            let (value, hit) = cache.get_or_insert_with(key, compute);
            tracing::debug!(report, cache_hit = hit, "Served report");
            value
        }
        None => Arc::new(compute()),
    }
}

fn try_cached<K, V>(
    cache: Option<&ReportCache<K, V>>,
    report: &'static str,
    key: K,
    compute: impl FnOnce() -> Option<V>,
) -> Option<Arc<V>>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    match cache {
        Some(cache) => {
            let (value, hit) = cache.try_get_or_insert_with(key, compute)?;
            tracing::debug!(report, cache_hit = hit, "Served report");
            Some(value)
        }
        None => compute().map(Arc::new),
    }
}

/// Report operations over a loaded dataset.
///
/// Returns `None` ("no data") when a required row source was never loaded.
/// Loaded but empty sources produce zero-valued reports.
pub struct AnalyticsService {
    reports: ReportService,
    comparator: Comparator,
    engine: SimulationEngine,
    dataset: Dataset,
    caches: Option<ReportCaches>,
}

impl AnalyticsService {
    /// Creates a service without caching.
    #[must_use]
    pub fn new(chart: Arc<ChartOfAccounts>, dataset: Dataset) -> Self {
        let reports = ReportService::new(chart);
        Self {
            comparator: Comparator::new(reports.clone()),
            reports,
            engine: SimulationEngine::new(),
            dataset,
            caches: None,
        }
    }

    /// Attaches report caches.
    #[must_use]
    pub fn with_caches(mut self, caches: ReportCaches) -> Self {
        self.caches = Some(caches);
        self
    }

    /// Returns the chart of accounts.
    #[must_use]
    pub fn chart(&self) -> &ChartOfAccounts {
        self.reports.chart()
    }

    /// Returns the loaded dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns true if report caching is enabled.
    #[must_use]
    pub const fn is_caching(&self) -> bool {
        self.caches.is_some()
    }

    /// Replaces the dataset and drops every cached report.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        tracing::info!(
            actuals = dataset.actual_count(),
            budget = dataset.budget_count(),
            "Replacing dataset"
        );
        self.dataset = dataset;
        self.invalidate_caches();
    }

    /// Drops every cached report.
    pub fn invalidate_caches(&self) {
        if let Some(caches) = &self.caches {
            caches.invalidate_all();
        }
    }

    /// P&L summary of the actuals.
    #[must_use]
    pub fn pl_summary(&self, scope: &Scope, currency: AmountField) -> Option<Arc<PlSummary>> {
        let actuals = self.actuals("pl_summary")?;
        Some(cached(
            self.caches.as_ref().map(|c| &c.pl_summary),
            "pl_summary",
            (scope.clone(), currency),
            || self.reports.pl_summary(actuals, scope, currency),
        ))
    }

    /// Actual vs budget per category. Needs both row sources.
    #[must_use]
    pub fn actual_vs_budget(&self, scope: &Scope) -> Option<Arc<Vec<VarianceRecord>>> {
        let actuals = self.actuals("actual_vs_budget")?;
        let Some(budget) = self.dataset.budget() else {
            tracing::warn!(report = "actual_vs_budget", "No budget loaded");
            return None;
        };
        Some(cached(
            self.caches.as_ref().map(|c| &c.variance),
            "actual_vs_budget",
            scope.clone(),
            || self.comparator.actual_vs_budget(actuals, budget, scope),
        ))
    }

    /// Top-N cost centers by spend.
    #[must_use]
    pub fn cost_centers(&self, scope: &Scope, top_n: usize) -> Option<Arc<Vec<CostCenterSpend>>> {
        let actuals = self.actuals("cost_centers")?;
        Some(cached(
            self.caches.as_ref().map(|c| &c.cost_centers),
            "cost_centers",
            (scope.clone(), top_n),
            || self.reports.cost_center_report(actuals, scope, top_n),
        ))
    }

    /// Monthly trend of a category. `None` also when the chart lacks the category.
    #[must_use]
    pub fn monthly_trend(
        &self,
        category: Category,
        scope: &Scope,
        currency: AmountField,
    ) -> Option<Arc<MonthlyTrend>> {
        let actuals = self.actuals("monthly_trend")?;
        if self.chart().rule(category).is_none() {
            tracing::debug!(%category, "Category not in chart");
            return None;
        }
        Some(cached(
            self.caches.as_ref().map(|c| &c.trends),
            "monthly_trend",
            (category, scope.clone(), currency),
            || MonthlyTrend {
                category,
                points: self
                    .reports
                    .monthly_trend(actuals, category, scope, currency)
                    .map(|trend| trend.points)
                    .unwrap_or_default(),
            },
        ))
    }

    /// Year-over-year comparison of `year` against the year before.
    ///
    /// `None` also when `year` has no predecessor.
    #[must_use]
    pub fn yoy_comparison(
        &self,
        year: i32,
        scope: &Scope,
        currency: AmountField,
    ) -> Option<Arc<YoyComparison>> {
        let actuals = self.actuals("yoy_comparison")?;
        try_cached(
            self.caches.as_ref().map(|c| &c.yoy),
            "yoy_comparison",
            (year, scope.clone(), currency),
            || self.comparator.yoy_comparison(actuals, year, scope, currency),
        )
    }

    /// Headline KPIs in reporting currency.
    #[must_use]
    pub fn kpis(&self, scope: &Scope) -> Option<Arc<KpiSet>> {
        let actuals = self.actuals("kpis")?;
        Some(cached(
            self.caches.as_ref().map(|c| &c.kpis),
            "kpis",
            scope.clone(),
            || self.reports.kpis(actuals, scope),
        ))
    }

    /// Forecasts a category trend `horizon` periods ahead.
    ///
    /// `Ok(None)` when there is no data for the category.
    pub fn forecast(
        &self,
        category: Category,
        scope: &Scope,
        currency: AmountField,
        strategy: ForecastStrategy,
        horizon: u32,
    ) -> Result<Option<Forecast>, SimulationError> {
        let Some(trend) = self.monthly_trend(category, scope, currency) else {
            return Ok(None);
        };
        if trend.points.is_empty() {
            return Ok(None);
        }
        forecast(&trend, strategy, horizon).map(Some)
    }

    /// Runs scenarios against the actual P&L. Uses the default set when none are given.
    pub fn scenarios(
        &self,
        scope: &Scope,
        currency: AmountField,
        scenarios: Option<&[Scenario]>,
    ) -> Result<Option<Vec<ScenarioOutcome>>, SimulationError> {
        let Some(actuals) = self.actuals("scenarios") else {
            return Ok(None);
        };
        let defaults;
        let scenarios = match scenarios {
            Some(scenarios) => scenarios,
            None => {
                defaults = Scenario::defaults();
                &defaults
            }
        };

        let base = self.reports.category_totals(actuals, scope, currency);
        self.engine
            .run_all(&base, scope, currency, scenarios)
            .map(Some)
    }

    /// Tracks KPI goals for each company with actuals in scope. Uses the
    /// default goals when none are given.
    pub fn track_goals(
        &self,
        scope: &Scope,
        goals: Option<&[Goal]>,
    ) -> Result<Option<GoalTracking>, GoalError> {
        let Some(actuals) = self.actuals("goals") else {
            return Ok(None);
        };
        let goals = goals.map_or_else(Goal::defaults, <[Goal]>::to_vec);
        if goals.is_empty() {
            return Err(GoalError::NoGoals);
        }

        let company_codes: BTreeSet<_> = scope.filter(actuals).map(|line| &line.company_code).collect();
        let companies = company_codes
            .into_iter()
            .map(|company_code| {
                let company_scope = Scope {
                    company_codes: BTreeSet::from([company_code.clone()]),
                    ..scope.clone()
                };
                let kpis = cached(
                    self.caches.as_ref().map(|c| &c.kpis),
                    "kpis",
                    company_scope.clone(),
                    || self.reports.kpis(actuals, &company_scope),
                );
                CompanyGoals::track(company_code.clone(), &kpis, &goals)
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(companies = companies.len(), goals = goals.len(), "Tracked goals");

        Ok(Some(GoalTracking {
            companies,
            goal_definitions: goals,
        }))
    }

    fn actuals(&self, report: &'static str) -> Option<&[LedgerLine]> {
        let actuals = self.dataset.actuals();
        if actuals.is_none() {
            tracing::warn!(report, "No actuals loaded");
        }
        actuals
    }
}
