//! Element boundaries: the span in force at an instant, forward scans and
//! next-occurrence lookup.

use jyoti_ephem::Ephemeris;
use jyoti_math::normalize_360;
use jyoti_time::{CivilDateTime, Instant, Tt};

use crate::element::ElementKind;
use crate::error::SearchError;
use crate::search_util::{Crossing, TransitConfig, find_crossing};

/// Default horizon for [`next_occurrence`], days.
pub const DEFAULT_LOOKAHEAD_DAYS: f64 = 365.0;

/// Hard cap on any lookahead or scan range, days.
pub const MAX_LOOKAHEAD_DAYS: f64 = 3660.0;

/// Offset past a located end before searching the next span, days (~1 min).
const NEXT_SPAN_NUDGE_DAYS: f64 = 1.0 / 1440.0;

/// Newton restarts for [`next_occurrence`] when a crossing lands behind `from`.
const OCCURRENCE_ROUNDS: usize = 3;

/// The sector of one element in force at some instant, with its edges.
///
/// `start`/`end` are `None` only if the solver could not take a step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryEvent {
    pub kind: ElementKind,
    /// 0-based sector index.
    pub index: u32,
    pub start: Option<Crossing>,
    pub end: Option<Crossing>,
}

/// A [`BoundaryEvent`] projected to local civil time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilBoundary {
    pub start: Option<CivilDateTime>,
    pub end: Option<CivilDateTime>,
}

impl BoundaryEvent {
    pub fn start_instant(&self) -> Option<Instant<Tt>> {
        self.start.map(|c| c.instant)
    }

    pub fn end_instant(&self) -> Option<Instant<Tt>> {
        self.end.map(|c| c.instant)
    }

    /// Display name of the sector.
    pub fn label(&self) -> String {
        self.kind.label(self.index)
    }

    /// Whether `t` lies in `[start, end)`. False when either edge is missing.
    pub fn contains(&self, t: Instant<Tt>) -> bool {
        match (self.start_instant(), self.end_instant()) {
            (Some(s), Some(e)) => s <= t && t < e,
            _ => false,
        }
    }

    pub fn duration_days(&self) -> Option<f64> {
        Some(self.end_instant()? - self.start_instant()?)
    }

    /// Both edges as local civil times (TT → UT via ΔT, then the offset).
    pub fn to_civil(&self, utc_offset_hours: f64) -> CivilBoundary {
        let project = |c: Crossing| c.instant.to_ut().to_civil(utc_offset_hours);
        CivilBoundary {
            start: self.start.map(project),
            end: self.end.map(project),
        }
    }
}

/// The span of `kind` in force at `anchor`, with the default solver config.
pub fn find_element_boundary(
    ephem: &Ephemeris,
    kind: ElementKind,
    anchor: Instant<Tt>,
) -> BoundaryEvent {
    boundary_at(ephem, kind, anchor, &TransitConfig::default())
}

/// [`find_element_boundary`] with an explicit solver config.
pub fn find_element_boundary_with(
    ephem: &Ephemeris,
    kind: ElementKind,
    anchor: Instant<Tt>,
    config: &TransitConfig,
) -> Result<BoundaryEvent, SearchError> {
    config.validate()?;
    Ok(boundary_at(ephem, kind, anchor, config))
}

pub(crate) fn boundary_at(
    ephem: &Ephemeris,
    kind: ElementKind,
    anchor: Instant<Tt>,
    config: &TransitConfig,
) -> BoundaryEvent {
    let index = kind.index_at(ephem, anchor);
    let f = |t: Instant<Tt>| kind.value_at(ephem, t);
    let end = find_crossing(anchor, f, kind.sector_start_deg(index + 1), config);
    if let Some(edge) = end.filter(|c| c.instant <= anchor) {
        // Anchor lies on the closing edge within tolerance: it opens the next sector.
        let next = (index + 1) % kind.sectors();
        log::trace!(
            "{} anchor JD {:.9} on edge {index}->{next}",
            kind.name(),
            anchor.jd()
        );
        return span_from_start(ephem, kind, next, edge, config);
    }
    let start = find_crossing(anchor, f, kind.sector_start_deg(index), config);
    BoundaryEvent {
        kind,
        index,
        start,
        end,
    }
}

/// Span of sector `index` that begins at a known crossing.
fn span_from_start(
    ephem: &Ephemeris,
    kind: ElementKind,
    index: u32,
    start: Crossing,
    config: &TransitConfig,
) -> BoundaryEvent {
    let f = |t: Instant<Tt>| kind.value_at(ephem, t);
    let end = find_crossing(
        start.instant + NEXT_SPAN_NUDGE_DAYS,
        f,
        kind.sector_start_deg(index + 1),
        config,
    );
    BoundaryEvent {
        kind,
        index,
        start: Some(start),
        end,
    }
}

fn check_range(days: f64) -> Result<(), SearchError> {
    if !days.is_finite() || days < 0.0 {
        return Err(SearchError::InvalidConfig("range must be a non-negative number of days"));
    }
    if days > MAX_LOOKAHEAD_DAYS {
        return Err(SearchError::InvalidConfig("range exceeds the lookahead cap"));
    }
    Ok(())
}

/// All spans of `kind` overlapping `[from, to)`, in order.
///
/// The first span is the one in force at `from`. Each further span starts
/// exactly where the previous one ended, so the list has no gaps. The scan
/// stops early if an end cannot be located.
pub fn element_spans(
    ephem: &Ephemeris,
    kind: ElementKind,
    from: Instant<Tt>,
    to: Instant<Tt>,
    config: &TransitConfig,
) -> Result<Vec<BoundaryEvent>, SearchError> {
    config.validate()?;
    check_range(to - from)?;

    let mut spans = Vec::new();
    let mut current = boundary_at(ephem, kind, from, config);
    loop {
        let end = current.end;
        spans.push(current);
        let Some(end) = end else {
            log::debug!(
                "{} scan stopped at index {}: end not located",
                kind.name(),
                current.index
            );
            break;
        };
        if end.instant >= to {
            break;
        }
        let index = (current.index + 1) % kind.sectors();
        current = span_from_start(ephem, kind, index, end, config);
    }
    Ok(spans)
}

/// The first span of sector `index` that starts at or after `from`.
///
/// A sector already in force at `from` is skipped in favour of its next
/// cycle. Returns `Ok(None)` when that start lies beyond
/// `from + lookahead_days`.
pub fn next_occurrence(
    ephem: &Ephemeris,
    kind: ElementKind,
    index: u32,
    from: Instant<Tt>,
    lookahead_days: f64,
) -> Result<Option<BoundaryEvent>, SearchError> {
    if index >= kind.sectors() {
        return Err(SearchError::InvalidIndex { kind, index });
    }
    check_range(lookahead_days)?;

    let config = TransitConfig::default();
    let target = kind.sector_start_deg(index);
    let rate = kind.spec().function.mean_rate_deg_per_day();
    let cycle_days = 360.0 / rate;
    let f = |t: Instant<Tt>| kind.value_at(ephem, t);

    let lead = normalize_360(target - kind.value_at(ephem, from)) / rate;
    let mut anchor = from + lead;
    let mut found = None;
    for _ in 0..OCCURRENCE_ROUNDS {
        let Some(crossing) = find_crossing(anchor, f, target, &config) else {
            log::debug!("{} {index}: no crossing near JD {:.4}", kind.name(), anchor.jd());
            return Ok(None);
        };
        if crossing.instant >= from {
            found = Some(crossing);
            break;
        }
        anchor = crossing.instant + cycle_days;
    }

    let Some(start) = found else {
        return Ok(None);
    };
    if start.instant - from > lookahead_days {
        return Ok(None);
    }
    Ok(Some(span_from_start(ephem, kind, index, start, &config)))
}
