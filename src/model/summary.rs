use std::cmp::Ordering;

use crate::model::score::Score;

/// Best-of picks of one level, recomputed wholesale from a frontier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtremalSummary {
    /// `pair_best[i][j]`: lexicographic best by axis `i`, then `j`, then the
    /// remaining axis. Diagonal unused.
    pair_best: [[Option<Score>; 3]; 3],
    /// `product_best[i]`: best by axis `i`, then the product of the others.
    product_best: [Option<Score>; 3],
    sum_best: Option<Score>,
}

fn third_axis(i: usize, j: usize) -> usize {
    3 - i - j
}

/// Documented scores sort first; raw stats settle whatever is left so the
/// pick does not depend on arrival order.
fn tie_break(a: &Score, b: &Score) -> Ordering {
    b.is_documented()
        .cmp(&a.is_documented())
        .then_with(|| a.stats().cmp(&b.stats()))
}

fn cmp_pair(a: &Score, b: &Score, i: usize, j: usize) -> Ordering {
    let k = third_axis(i, j);
    let (sa, sb) = (a.stats(), b.stats());
    sa[i]
        .cmp(&sb[i])
        .then(sa[j].cmp(&sb[j]))
        .then(sa[k].cmp(&sb[k]))
        .then_with(|| tie_break(a, b))
}

fn cmp_product(a: &Score, b: &Score, i: usize) -> Ordering {
    a.stats()[i]
        .cmp(&b.stats()[i])
        .then(a.product_excluding(i).cmp(&b.product_excluding(i)))
        .then_with(|| tie_break(a, b))
}

fn cmp_sum(a: &Score, b: &Score) -> Ordering {
    a.sum().cmp(&b.sum()).then_with(|| tie_break(a, b))
}

fn keep_min<F>(slot: &mut Option<Score>, candidate: &Score, cmp: F)
where
    F: Fn(&Score, &Score) -> Ordering,
{
    let better = match slot {
        Some(current) => cmp(candidate, current) == Ordering::Less,
        None => true,
    };
    if better {
        *slot = Some(candidate.clone());
    }
}

impl ExtremalSummary {
    pub fn from_scores<'a, I>(scores: I) -> Self
    where
        I: IntoIterator<Item = &'a Score>,
    {
        let mut summary = Self::default();
        for score in scores {
            summary.add(score);
        }
        summary
    }

    fn add(&mut self, score: &Score) {
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    keep_min(&mut self.pair_best[i][j], score, |a, b| cmp_pair(a, b, i, j));
                }
            }
            keep_min(&mut self.product_best[i], score, |a, b| cmp_product(a, b, i));
        }
        keep_min(&mut self.sum_best, score, cmp_sum);
    }

    pub fn pair_best(&self, primary: usize, secondary: usize) -> Option<&Score> {
        if primary == secondary {
            return None;
        }
        self.pair_best
            .get(primary)
            .and_then(|row| row.get(secondary))
            .and_then(Option::as_ref)
    }

    pub fn product_best(&self, axis: usize) -> Option<&Score> {
        self.product_best.get(axis).and_then(Option::as_ref)
    }

    pub fn sum_best(&self) -> Option<&Score> {
        self.sum_best.as_ref()
    }

    /// Column `axis` of the table: the two directional bests with `axis`
    /// primary, then the product optimum, first occurrence kept.
    pub fn column(&self, axis: usize) -> Vec<&Score> {
        let mut out: Vec<&Score> = Vec::with_capacity(3);
        let picks = (0..3)
            .filter(|&j| j != axis)
            .map(|j| self.pair_best(axis, j))
            .chain(std::iter::once(self.product_best(axis)));
        for score in picks.flatten() {
            if !out.contains(&score) {
                out.push(score);
            }
        }
        out
    }

    /// Table rows of this level without the leading name cell. Each row is
    /// terminated by a newline; rows after the first start with `|`.
    pub fn render_rows(&self) -> String {
        let columns: [Vec<&Score>; 4] = [
            self.column(0),
            self.column(1),
            self.column(2),
            self.sum_best().into_iter().collect(),
        ];
        let n_rows = columns.iter().map(Vec::len).max().unwrap_or(0).max(1);

        let mut out = String::new();
        for row in 0..n_rows {
            if row > 0 {
                out.push('|');
            }
            for (col, cells) in columns.iter().enumerate() {
                out.push('|');
                if let Some(score) = cells.get(row) {
                    out.push_str(&score.to_string());
                    if col < 3 && self.product_best(col) == Some(*score) {
                        out.push('*');
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/summary.rs"]
mod tests;
