use crate::core::chem::digestion::DigestionRule;
use crate::core::models::peptide::Peptide;
use crate::core::models::protein::ProteinRecord;
use std::collections::VecDeque;

/// Parameters bounding which peptides a digest emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestParams {
    /// Maximum number of internal cleavage points a peptide may span.
    pub missed_cleavages: usize,
    /// Minimum peptide length; 1 means no filtering.
    pub min_length: usize,
    /// Optional maximum peptide length.
    pub max_length: Option<usize>,
    /// Additionally emit semi-enzymatic peptides: truncations of each fully
    /// enzymatic peptide that keep one enzymatic terminus.
    pub semi_enzymatic: bool,
}

impl Default for DigestParams {
    fn default() -> Self {
        Self {
            missed_cleavages: 0,
            min_length: 1,
            max_length: None,
            semi_enzymatic: false,
        }
    }
}

/// Computes the ordered cleavage-point indices for a sequence under a rule.
///
/// A cleavage point is a boundary between two residues: index `i` means the
/// cut falls before residue `i`. Sequence start and end are never included.
pub fn cleavage_points(sequence: &str, rule: &DigestionRule) -> Vec<usize> {
    let residues: Vec<char> = sequence.chars().collect();
    (1..residues.len())
        .filter(|&position| rule.cleaves_at(&residues, position))
        .collect()
}

/// A lazy, finite iterator over the peptides of one digested protein.
///
/// Fully enzymatic peptides come out in fixed order: ascending
/// `start_offset`, then ascending `missed_cleavages`. With
/// `semi_enzymatic` set, each window's truncations follow it immediately:
/// first the ones keeping the enzymatic N-terminus (ascending length), then
/// the ones keeping the enzymatic C-terminus (ascending start offset). Every
/// truncation is emitted exactly once, by the smallest window that contains
/// it. Re-invoking [`digest`] with identical inputs yields an identical
/// sequence; the computation is pure.
#[derive(Debug, Clone)]
pub struct Digest<'a> {
    sequence: &'a str,
    /// Fragment boundaries: cleavage points bracketed by 0 and sequence
    /// length, so `boundaries[i]..boundaries[i + 1]` is fragment `i`.
    boundaries: Vec<usize>,
    params: DigestParams,
    /// Index of the window's first fragment.
    fragment: usize,
    /// Internal cleavage points spanned by the current window.
    span: usize,
    /// Semi-enzymatic truncations queued behind the current window.
    pending: VecDeque<Peptide>,
}

impl<'a> Digest<'a> {
    fn fragment_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    fn fits(&self, length: usize) -> bool {
        length >= self.params.min_length
            && self.params.max_length.is_none_or(|max| length <= max)
    }

    /// Queues the semi-enzymatic truncations of the window `start..end`.
    ///
    /// Truncation endpoints are restricted to the window's outermost
    /// fragments (`first_end` ends the first, `last_start` starts the last)
    /// and never land on a cleavage point, so each truncation belongs to
    /// exactly one window and never duplicates a fully enzymatic peptide.
    /// Both kinds span the same `missed` internal cleavage points as their
    /// window.
    fn queue_truncations(
        &mut self,
        start: usize,
        first_end: usize,
        last_start: usize,
        end: usize,
        missed: usize,
    ) {
        for t in (last_start + 1)..end {
            if self.fits(t - start) {
                self.pending
                    .push_back(Peptide::new(&self.sequence[start..t], start, missed));
            }
        }
        for s in (start + 1)..first_end {
            if self.fits(end - s) {
                self.pending
                    .push_back(Peptide::new(&self.sequence[s..end], s, missed));
            }
        }
    }
}

impl<'a> Iterator for Digest<'a> {
    type Item = Peptide;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(peptide) = self.pending.pop_front() {
                return Some(peptide);
            }
            if self.fragment >= self.fragment_count() {
                return None;
            }
            if self.span > self.params.missed_cleavages
                || self.fragment + self.span >= self.fragment_count()
            {
                self.fragment += 1;
                self.span = 0;
                continue;
            }

            let start = self.boundaries[self.fragment];
            let first_end = self.boundaries[self.fragment + 1];
            let last_start = self.boundaries[self.fragment + self.span];
            let end = self.boundaries[self.fragment + self.span + 1];
            let missed = self.span;
            self.span += 1;

            if self.params.semi_enzymatic {
                self.queue_truncations(start, first_end, last_start, end, missed);
            }

            if self.fits(end - start) {
                return Some(Peptide::new(&self.sequence[start..end], start, missed));
            }
        }
    }
}

/// Digests a protein under a rule, yielding peptides lazily.
pub fn digest<'a>(
    protein: &'a ProteinRecord,
    rule: &DigestionRule,
    params: DigestParams,
) -> Digest<'a> {
    let mut boundaries = Vec::with_capacity(2);
    boundaries.push(0);
    boundaries.extend(cleavage_points(&protein.sequence, rule));
    boundaries.push(protein.sequence.len());

    Digest {
        sequence: &protein.sequence,
        boundaries,
        params,
        fragment: 0,
        span: 0,
        pending: VecDeque::new(),
    }
}
