use crate::aggregator::{net_sum, CategoryFilter};
use crate::categories::Categories;
use crate::error::Result;
use crate::fmt::round2;
use crate::models::{CategorySeries, MonthEntry, RawRow};
use crate::reconciler::reconcile;

pub const TOTAL_LABEL: &str = "Totale";
pub const INFLUENCE_LABEL: &str = "Influenze";
pub const PASSIVE_LABEL: &str = "Passive";
pub const OTHER_LABEL: &str = "Altro";

/// Source of raw movement rows for a month id. The page snapshot implements
/// this over its DOM; tests implement it over fixed fixtures.
pub trait RowExtractor {
    fn raw_rows(&self, month_id: &str) -> Result<Vec<RawRow>>;
}

// ---------------------------------------------------------------------------
// Series report
// ---------------------------------------------------------------------------

/// The finished monthly series, in chronological order (the page lists the
/// most recent month first; everything here is already reversed for
/// presentation). Element i of every series and of `labels` refers to the
/// same month.
#[derive(Debug)]
pub struct SeriesReport {
    pub labels: Vec<String>,
    pub total: Vec<f64>,
    pub influence: Vec<f64>,
    pub passive: Vec<f64>,
    pub other: Vec<f64>,
}

impl SeriesReport {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The four named series in rendering order.
    pub fn series(&self) -> Vec<CategorySeries> {
        vec![
            CategorySeries {
                label: TOTAL_LABEL.to_string(),
                values: self.total.clone(),
            },
            CategorySeries {
                label: INFLUENCE_LABEL.to_string(),
                values: self.influence.clone(),
            },
            CategorySeries {
                label: PASSIVE_LABEL.to_string(),
                values: self.passive.clone(),
            },
            CategorySeries {
                label: OTHER_LABEL.to_string(),
                values: self.other.clone(),
            },
        ]
    }
}

// ---------------------------------------------------------------------------
// Report builder
// ---------------------------------------------------------------------------

/// Builds the four monthly series from a row source and a category config.
/// Both are borrowed for exactly one build, so nothing survives the run.
pub struct ReportBuilder<'a> {
    extractor: &'a dyn RowExtractor,
    categories: &'a Categories,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(extractor: &'a dyn RowExtractor, categories: &'a Categories) -> Self {
        Self {
            extractor,
            categories,
        }
    }

    /// Reconcile and aggregate every discovered month, in the order the
    /// registry found them, then flip the result to chronological order.
    /// A month whose table is missing fails the whole build; an empty month
    /// list builds an empty report.
    pub fn build(&self, months: Vec<MonthEntry>) -> Result<SeriesReport> {
        let influence_filter = CategoryFilter::AnyOf(&self.categories.influence);
        let passive_filter = CategoryFilter::AnyOf(&self.categories.passive);

        let mut labels = Vec::with_capacity(months.len());
        let mut total = Vec::with_capacity(months.len());
        let mut influence = Vec::with_capacity(months.len());
        let mut passive = Vec::with_capacity(months.len());
        let mut other = Vec::with_capacity(months.len());

        for month in months {
            let records = reconcile(self.extractor.raw_rows(&month.id)?);
            let month_total = net_sum(&records, &CategoryFilter::All);
            let month_influence = net_sum(&records, &influence_filter);
            labels.push(month.label);
            total.push(month_total);
            influence.push(month_influence);
            passive.push(net_sum(&records, &passive_filter));
            other.push(round2(month_total - month_influence));
        }

        labels.reverse();
        total.reverse();
        influence.reverse();
        passive.reverse();
        other.reverse();

        Ok(SeriesReport {
            labels,
            total,
            influence,
            passive,
            other,
        })
    }
}
