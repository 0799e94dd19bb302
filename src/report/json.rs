use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry};
use crate::model::score::Score;
use crate::model::summary::ExtremalSummary;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreJson {
    pub stats: [u64; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl From<&Score> for ScoreJson {
    fn from(score: &Score) -> Self {
        Self {
            stats: score.stats(),
            reference: score.reference().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PairPickJson {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub score: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductPickJson {
    pub axis: &'static str,
    pub score: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelJson {
    pub name: String,
    pub kind: &'static str,
    pub frontier: Vec<ScoreJson>,
    pub pair_best: Vec<PairPickJson>,
    pub product_best: Vec<ProductPickJson>,
    pub sum_best: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryJson {
    pub tool: &'static str,
    pub version: &'static str,
    pub n_levels: usize,
    pub n_scores: usize,
    pub levels: Vec<LevelJson>,
}

fn level_json(entry: &CatalogEntry) -> Option<LevelJson> {
    let frontier = entry.frontier()?;
    let summary = ExtremalSummary::from_scores(frontier.scores());
    let axes = entry.kind.axis_names()?;
    let simple = |s: Option<&Score>| s.map(Score::simple_str);

    let mut pair_best = Vec::with_capacity(6);
    for i in 0..3 {
        for j in 0..3 {
            if i != j {
                pair_best.push(PairPickJson {
                    primary: axes[i],
                    secondary: axes[j],
                    score: simple(summary.pair_best(i, j)),
                });
            }
        }
    }
    let product_best = (0..3)
        .map(|i| ProductPickJson {
            axis: axes[i],
            score: simple(summary.product_best(i)),
        })
        .collect();

    Some(LevelJson {
        name: entry.name.clone(),
        kind: entry.kind.catalog_name(),
        frontier: frontier.scores().iter().map(ScoreJson::from).collect(),
        pair_best,
        product_best,
        sum_best: simple(summary.sum_best()),
    })
}

pub fn build_summary_json(catalog: &Catalog) -> SummaryJson {
    let levels: Vec<LevelJson> = catalog.entries().iter().filter_map(level_json).collect();
    SummaryJson {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        n_levels: levels.len(),
        n_scores: catalog.total_scores(),
        levels,
    }
}

pub fn render_summary_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&build_summary_json(catalog))
}
