//! Drives segmentation, per-hand analysis and the sequential fold.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::aggregate::{Aggregator, FoldOutcome};
use crate::analysis::{analyze_block, HandAnalysis};
use crate::attribution::RakeRounding;
use crate::errors::{EngineError, ParseError};
use crate::segment::{segment_text, Block};
use crate::validate::PotMismatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub rounding: RakeRounding,
    /// Analyse blocks on the rayon pool; the fold stays sequential
    pub parallel: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            rounding: RakeRounding::Exact,
            parallel: true,
        }
    }
}

/// A block that could not be parsed, kept raw for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandFailure {
    /// 1-based position of the block in the archive
    pub position: usize,
    pub error: ParseError,
    pub block: Block,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub aggregator: Aggregator,
    pub failures: Vec<HandFailure>,
    pub mismatches: Vec<PotMismatch>,
    pub duplicates: usize,
}

impl RunSummary {
    /// Fails when not a single hand was folded.
    pub fn ensure_processed(&self) -> Result<(), EngineError> {
        if self.aggregator.hands_processed() == 0 {
            Err(EngineError::NoHands)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> PipelineOptions {
        self.options
    }

    /// Segments and processes an entire archive held in memory.
    pub fn run_text(&self, text: &str) -> RunSummary {
        self.run(segment_text(text))
    }

    /// Processes blocks in order. Parse failures are collected, not raised.
    pub fn run(&self, blocks: Vec<Block>) -> RunSummary {
        let rounding = self.options.rounding;
        let analysed: Vec<Result<HandAnalysis, ParseError>> = if self.options.parallel {
            blocks
                .par_iter()
                .map(|b| analyze_block(b, rounding))
                .collect()
        } else {
            blocks.iter().map(|b| analyze_block(b, rounding)).collect()
        };

        let mut summary = RunSummary::default();
        for (idx, (result, block)) in analysed.into_iter().zip(blocks).enumerate() {
            match result {
                Ok(analysis) => self.fold(&mut summary, analysis),
                Err(error) => {
                    warn!(position = idx + 1, %error, "skipping unparseable hand");
                    summary.failures.push(HandFailure {
                        position: idx + 1,
                        error,
                        block,
                    });
                }
            }
        }
        info!(
            hands = summary.aggregator.hands_processed(),
            failures = summary.failures.len(),
            mismatches = summary.mismatches.len(),
            duplicates = summary.duplicates,
            "archive processed"
        );
        summary
    }

    fn fold(&self, summary: &mut RunSummary, analysis: HandAnalysis) {
        match summary.aggregator.fold(&analysis) {
            FoldOutcome::Duplicate => summary.duplicates += 1,
            FoldOutcome::Folded => {
                if let Some(mismatch) = analysis.mismatch {
                    warn!(
                        hand_id = %mismatch.hand_id,
                        computed = mismatch.computed,
                        reported = mismatch.reported,
                        "pot mismatch"
                    );
                    summary.mismatches.push(mismatch);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARCHIVE: &str = "\
Hand #1: (5/10)
Table 'T' Seat #1 is the button
Seat 1: alice (100 in chips)
Seat 2: bob (100 in chips)
alice: posts small blind 5
bob: posts big blind 10
alice: calls 5
*** SHOW DOWN ***
*** SUMMARY ***
Total pot 20 | Rake 0
Seat 2: bob collected (20)

not a hand at all

Hand #1: (5/10)
Table 'T' Seat #1 is the button
Seat 1: alice (100 in chips)
Seat 2: bob (100 in chips)
*** SUMMARY ***
Total pot 0 | Rake 0
";

    #[test]
    fn collects_failures_and_duplicates() {
        for parallel in [true, false] {
            let pipeline = Pipeline::new(PipelineOptions {
                parallel,
                ..Default::default()
            });
            let summary = pipeline.run_text(ARCHIVE);
            assert_eq!(summary.aggregator.hands_processed(), 1);
            assert_eq!(summary.duplicates, 1);
            assert_eq!(summary.failures.len(), 1);
            assert_eq!(summary.failures[0].position, 2);
            assert_eq!(summary.failures[0].block, vec!["not a hand at all"]);
            assert!(summary.mismatches.is_empty());
            assert!(summary.ensure_processed().is_ok());
        }
    }

    #[test]
    fn empty_archive_is_an_error() {
        let summary = Pipeline::default().run_text("");
        assert!(matches!(summary.ensure_processed(), Err(EngineError::NoHands)));
    }
}
