//! Derived entry attributes: normalised peak/last/weeks, "is new", and the
//! legacy change annotation with its single Hot Shot Debut.

use crate::models::{Change, ChartEntry, RawEntryFields};

/// Chart-level context the rules depend on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivationFlags {
    pub is_dated_issue: bool,
    pub is_year_end: bool,
    /// Only the legacy layout carries the change annotation.
    pub annotate_change: bool,
}

impl DerivationFlags {
    /// Week-over-week state exists only on dated weekly issues.
    pub fn tracks_history(&self) -> bool {
        self.is_dated_issue && !self.is_year_end
    }
}

pub fn derive_entries(raw: Vec<RawEntryFields>, flags: DerivationFlags) -> Vec<ChartEntry> {
    let mut entries: Vec<ChartEntry> = raw.into_iter().map(|r| derive_entry(r, flags)).collect();
    if flags.annotate_change && flags.tracks_history() {
        mark_hot_shot_debut(&mut entries);
    }
    entries
}

pub fn derive_entry(raw: RawEntryFields, flags: DerivationFlags) -> ChartEntry {
    let RawEntryFields {
        title,
        artist,
        image,
        rank,
        peak_raw,
        last_raw,
        weeks_raw,
    } = raw;

    if !flags.tracks_history() {
        return ChartEntry {
            title: title.unwrap_or_default(),
            artist,
            image,
            peak_pos: None,
            last_pos: None,
            weeks: None,
            rank,
            is_new: false,
            change: None,
        };
    }

    let weeks = weeks_raw.unwrap_or(1);
    let last = last_raw.unwrap_or(0);
    // 0 is how the legacy layout says "no peak recorded".
    let peak = match peak_raw {
        None | Some(0) => rank,
        Some(p) => p,
    };
    let is_new = weeks == 1 && last == 0;
    let change = flags.annotate_change.then(|| change_for(last, rank, weeks));

    ChartEntry {
        title: title.unwrap_or_default(),
        artist,
        image,
        peak_pos: Some(peak),
        last_pos: Some(last),
        weeks: Some(weeks),
        rank,
        is_new,
        change,
    }
}

pub fn change_for(last: u32, rank: u32, weeks: u32) -> Change {
    match last {
        0 if weeks > 1 => Change::ReEntry,
        0 => Change::New,
        _ => Change::Delta(i64::from(last) - i64::from(rank)),
    }
}

/// Relabel the highest-ranked `New` entry. Expects entries in rank order.
/// Returns the index relabelled, if any.
pub fn mark_hot_shot_debut(entries: &mut [ChartEntry]) -> Option<usize> {
    let idx = entries.iter().position(|e| e.change == Some(Change::New))?;
    entries[idx].change = Some(Change::HotShotDebut);
    Some(idx)
}
