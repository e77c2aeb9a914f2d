//! Near-optimal lazy parse for the high-effort compressor.
//!
//! At each position the [`HashChain`] proposes, for every length, the nearest
//! distance achieving it.  Each (length, distance) pair is priced with the
//! real LZO1X encoding cost in the current literal state, including the
//! literal-run header bytes that taking the match saves or costs, and the
//! pair with the highest gain wins (ties go to the longer match).
//!
//! A match also ends the current literal run, so literals that follow it need
//! a header of their own.  Every match is charged [`RESUMED_RUN_COST`] for
//! that header; without the charge a 3-byte match in incompressible data
//! looks like a 1-byte win and turns into a 1-byte loss.
//!
//! Before committing, up to `try_lazy` following positions are searched as
//! well.  A later match replaces the current choice when it reaches further
//! for strictly less than the current choice plus the extra bytes as
//! literals.

use super::search::{HashChain, MatchCandidates};
use super::types::CParams;
use crate::block::encode::{literal_header_cost, match_cost, TokenEncoder};
use crate::block::types::{M1_MIN_LEN, MIN_MATCH};

/// Estimated header of the literal run that resumes after a match (a run of
/// 4..=18 literals).
const RESUMED_RUN_COST: usize = 1;

/// A priced match decision, with `cost` counted from the position where the
/// parse currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Choice {
    start: usize,
    length: usize,
    distance: usize,
    cost: usize,
}

impl Choice {
    #[inline]
    fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Pick the best match from `found` for a match starting at `start` with
/// `literals` pending literals.  Returns `None` when no candidate beats
/// coding the same bytes as literals.
fn choose(found: &MatchCandidates, start: usize, literals: usize, first: bool) -> Option<Choice> {
    let header = literal_header_cost(literals, first);
    let mut best: Option<(isize, Choice)> = None;

    for (length, distance) in found.pairs() {
        let Some(cost) = match_cost(distance, length, literals) else {
            continue;
        };
        let as_literals = length + literal_header_cost(literals + length, first) - header;
        let gain = as_literals as isize - (cost + RESUMED_RUN_COST) as isize;
        // Pairs arrive shortest first, so `>=` keeps the longer on ties.
        if gain > 0 && best.map_or(true, |(g, _)| gain >= g) {
            best = Some((gain, Choice { start, length, distance, cost: header + cost }));
        }
    }
    best.map(|(_, choice)| choice)
}

/// Parse `input` and feed the decisions to `enc`.
pub fn lazy_parse(input: &[u8], chain: &mut HashChain, params: &CParams, enc: &mut TokenEncoder<'_>) {
    let end = input.len();
    let mut pos = 0usize;

    while pos + M1_MIN_LEN <= end {
        let first = enc.is_first_run();
        let literals = enc.pending_literals(pos);
        let found = chain.find_matches(input, pos, params.max_chain, params.nice_length);
        let Some(mut best) = choose(&found, pos, literals, first) else {
            pos += 1;
            continue;
        };

        for k in 1..=params.try_lazy {
            if params.skips_lazy(best.length) {
                break;
            }
            let next = pos + k;
            // Positions past the current choice stay unindexed until the
            // parse reaches them.
            if next + MIN_MATCH > end || next >= best.end() {
                break;
            }
            let budget = params.lazy_chain(best.length);
            let found = chain.find_matches(input, next, budget, params.nice_length);
            if let Some(alt) = choose(&found, next, literals + k, first) {
                let alt = Choice { cost: alt.cost + k, ..alt };
                if alt.end() > best.end() && alt.cost < best.cost + (alt.end() - best.end()) {
                    best = alt;
                }
            }
        }

        enc.emit_match(best.start, best.distance, best.length);
        pos = best.end();
    }
}
