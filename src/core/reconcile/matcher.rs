//! Employee matcher: links source-A and source-B records by name.
//!
//! Cost is O(|A| × |B|) similarity computations. Source-B names are
//! tokenized once up front; the pairwise scoring stays quadratic, which is
//! fine for a single shift (tens to low hundreds of employees).

use crate::config::{MatchStrategy, MatchingConfig};
use crate::core::reconcile::tokens::{name_tokens, token_score};
use crate::models::{BreakRecord, MatchedRecord, SourceBRecord};
use std::collections::BTreeSet;

/// Best candidate for one source-A record: index into source B and score.
fn best_candidate(
    a_tokens: &BTreeSet<String>,
    b_tokens: &[BTreeSet<String>],
    available: &[bool],
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut best_score = 0.0;

    for (bi, tokens) in b_tokens.iter().enumerate() {
        if !available[bi] {
            continue;
        }
        let score = token_score(a_tokens, tokens);
        // strict: the first of equally good candidates wins
        if score > best_score {
            best_score = score;
            best = Some((bi, score));
        }
    }

    best
}

/// Pair every source-A record with its most similar source-B record.
///
/// - Source-A records are processed in their given order; each yields exactly
///   one output record, paired when the best score reaches
///   `cfg.threshold`, source-A-only (score 0) otherwise.
/// - With [`MatchStrategy::Greedy`] every source-B record stays a candidate
///   for every source-A record, so one source-B record can be paired more
///   than once. With [`MatchStrategy::Exclusive`] a paired source-B record is
///   no longer offered to later source-A records.
/// - Source-B records never paired are appended, in source-B order, as
///   source-B-only records (score 0).
pub fn match_employees(
    source_a: &[BreakRecord],
    source_b: &[SourceBRecord],
    cfg: &MatchingConfig,
) -> Vec<MatchedRecord> {
    let b_tokens: Vec<BTreeSet<String>> = source_b.iter().map(|b| name_tokens(b.name())).collect();

    let mut claimed = vec![false; source_b.len()];
    let mut available = vec![true; source_b.len()];
    let mut out = Vec::with_capacity(source_a.len() + source_b.len());

    for a in source_a {
        let a_tokens = name_tokens(&a.name);

        match best_candidate(&a_tokens, &b_tokens, &available) {
            Some((bi, score)) if score >= cfg.threshold => {
                claimed[bi] = true;
                if cfg.strategy == MatchStrategy::Exclusive {
                    available[bi] = false;
                }
                out.push(MatchedRecord::paired(a.clone(), source_b[bi].clone(), score));
            }
            _ => out.push(MatchedRecord::only_a(a.clone())),
        }
    }

    out.extend(
        source_b
            .iter()
            .zip(&claimed)
            .filter(|(_, used)| !**used)
            .map(|(b, _)| MatchedRecord::only_b(b.clone())),
    );

    out
}
