//! Cross-validation of the range query structures.
//!
//! A [`Validator`] builds every selected structure once over the same sequence,
//! then runs queries against all of them and compares the answers by value.
//! A query that cannot be answered is recorded with its range and skipped;
//! the rest of the batch still runs.
use crate::comparator::{Comparator, Less};
use crate::error::{check_range, Result, RmqError};
use crate::range_minimum_query::{NaiveRangeMinimumQuery, RangeMinimumQuery};
use crate::segment_tree::SegmentTreeRangeMinimumQuery;
use crate::sparse_table::SparseTableRangeMinimumQuery;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoroshiro128PlusPlus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "naive")]
    Naive,
    #[serde(rename = "sparsetable")]
    SparseTable,
    #[serde(rename = "segmenttree")]
    SegmentTree,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Naive,
        Strategy::SparseTable,
        Strategy::SegmentTree,
    ];
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Strategy::Naive => "naive",
            Strategy::SparseTable => "sparsetable",
            Strategy::SegmentTree => "segmenttree",
        };
        write!(f, "{}", name)
    }
}

/// Which queries a run issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryPlan {
    /// Every `(left, right)` with `left <= right`. Quadratic in the length.
    Exhaustive,
    /// `count` random non-empty ranges.
    Random { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub strategies: Vec<Strategy>,
    pub plan: QueryPlan,
    pub seed: u64,
}

impl std::default::Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            plan: QueryPlan::Random { count: 10 },
            seed: 12910489034,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub strategy: Strategy,
    pub index: usize,
}

/// The structures disagreed on the extremal value of `[left, right]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub left: usize,
    pub right: usize,
    pub answers: Vec<Answer>,
}

/// A query that was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejected {
    pub left: usize,
    pub right: usize,
    pub error: RmqError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Queries answered by every structure.
    pub checked: usize,
    pub mismatches: Vec<Mismatch>,
    pub rejected: Vec<Rejected>,
}

impl Report {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty() && self.rejected.is_empty()
    }
}

/// Every non-empty range of a sequence of length `len`, in lexicographic order.
pub fn exhaustive_queries(len: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).flat_map(move |left| (left..len).map(move |right| (left, right)))
}

/// `count` random non-empty ranges of a sequence of length `len`.
/// The same seed always gives the same ranges. Nothing is generated for an empty sequence.
pub fn random_queries(len: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    if len == 0 {
        return vec![];
    }
    let mut rng: Xoroshiro128PlusPlus = SeedableRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let size = rng.gen_range(1..=len);
            let left = rng.gen_range(0..=len - size);
            (left, left + size - 1)
        })
        .collect()
}

pub struct Validator<'a, T, C = Less> {
    data: &'a [T],
    comparator: C,
    naive: Option<NaiveRangeMinimumQuery<'a, T, C>>,
    sparse_table: Option<SparseTableRangeMinimumQuery<'a, T, C>>,
    segment_tree: Option<SegmentTreeRangeMinimumQuery<'a, T, C>>,
    plan: QueryPlan,
    seed: u64,
}

impl<'a, T, C: Comparator<T> + Clone> Validator<'a, T, C> {
    /// Build each strategy named in `config` over `input`.
    pub fn new(input: &'a [T], comparator: C, config: &ValidationConfig) -> Result<Self> {
        if input.is_empty() {
            return Err(RmqError::EmptyInput);
        }
        if config.strategies.is_empty() {
            return Err(RmqError::NoStrategy);
        }
        let selected = |strategy| config.strategies.contains(&strategy);
        let naive = if selected(Strategy::Naive) {
            Some(NaiveRangeMinimumQuery::with_comparator(
                input,
                comparator.clone(),
            ))
        } else {
            None
        };
        let sparse_table = if selected(Strategy::SparseTable) {
            Some(SparseTableRangeMinimumQuery::with_comparator(
                input,
                comparator.clone(),
            ))
        } else {
            None
        };
        let segment_tree = if selected(Strategy::SegmentTree) {
            Some(SegmentTreeRangeMinimumQuery::with_comparator(
                input,
                comparator.clone(),
            ))
        } else {
            None
        };
        Ok(Self {
            data: input,
            comparator,
            naive,
            sparse_table,
            segment_tree,
            plan: config.plan,
            seed: config.seed,
        })
    }
    pub fn strategies(&self) -> Vec<Strategy> {
        let built = [
            self.naive.is_some(),
            self.sparse_table.is_some(),
            self.segment_tree.is_some(),
        ];
        Strategy::ALL
            .iter()
            .zip(built.iter())
            .filter_map(|(&strategy, &is_built)| is_built.then(|| strategy))
            .collect()
    }
    /// Ask every built structure for `[left, right]`.
    pub fn check(&self, left: usize, right: usize) -> Result<Vec<Answer>> {
        check_range(left, right, self.data.len())?;
        let mut answers = vec![];
        if let Some(rmq) = self.naive.as_ref() {
            answers.push(answer(Strategy::Naive, rmq, left, right)?);
        }
        if let Some(rmq) = self.sparse_table.as_ref() {
            answers.push(answer(Strategy::SparseTable, rmq, left, right)?);
        }
        if let Some(rmq) = self.segment_tree.as_ref() {
            answers.push(answer(Strategy::SegmentTree, rmq, left, right)?);
        }
        Ok(answers)
    }
    /// All answers point at elements of equal value.
    pub fn agree(&self, answers: &[Answer]) -> bool {
        answers.windows(2).all(|w| {
            self.comparator
                .equivalent(&self.data[w[0].index], &self.data[w[1].index])
        })
    }
    pub fn run_queries<I>(&self, queries: I) -> Report
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut report = Report::default();
        for (left, right) in queries {
            match self.check(left, right) {
                Ok(answers) if self.agree(&answers) => report.checked += 1,
                Ok(answers) => {
                    log::warn!("mismatch on [{}, {}]: {:?}", left, right, answers);
                    report.checked += 1;
                    report.mismatches.push(Mismatch {
                        left,
                        right,
                        answers,
                    });
                }
                Err(error) => {
                    log::warn!("query [{}, {}] aborted: {}", left, right, error);
                    report.rejected.push(Rejected { left, right, error });
                }
            }
        }
        log::info!(
            "checked {} queries: {} mismatches, {} rejected",
            report.checked,
            report.mismatches.len(),
            report.rejected.len()
        );
        report
    }
    /// Run the configured query plan.
    pub fn run(&self) -> Report {
        let len = self.data.len();
        match self.plan {
            QueryPlan::Exhaustive => self.run_queries(exhaustive_queries(len)),
            QueryPlan::Random { count } => self.run_queries(random_queries(len, count, self.seed)),
        }
    }
}

fn answer<R: RangeMinimumQuery>(
    strategy: Strategy,
    rmq: &R,
    left: usize,
    right: usize,
) -> Result<Answer> {
    let index = rmq.query(left, right)?;
    Ok(Answer { strategy, index })
}
