//! Shift templates and the template catalog.
//!
//! A shift is two contiguous work blocks separated by a one-hour unpaid
//! rest gap. Three template families exist — opening, mid, closing — each
//! with a base (8h) and an extended (9h) variant. The catalog derives all
//! marker tuples from the operating window and drops any template whose
//! duration would exceed the daily cap.
//!
//! # Hour convention
//! Blocks are half-open hour ranges `[start, end)`: a block `(14, 18)`
//! covers the slots 14, 15, 16, 17.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::demand::DemandMatrix;

use super::Weekday;

/// Shift template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftRole {
    /// Covers the prep hour and the morning.
    Opening,
    /// Covers the midday trade.
    Mid,
    /// Covers the afternoon peak through close.
    Closing,
}

impl ShiftRole {
    /// Role name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            ShiftRole::Opening => "opening",
            ShiftRole::Mid => "mid",
            ShiftRole::Closing => "closing",
        }
    }
}

/// Template variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftVariant {
    /// Standard 8-hour shape.
    Base,
    /// One extra worked hour, used to reach the weekly target or cover a
    /// demand spike.
    Extended,
}

/// A contiguous work block, as a half-open hour range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBlock {
    /// First worked hour (inclusive).
    pub start: u8,
    /// End marker (exclusive).
    pub end: u8,
}

impl HourBlock {
    /// Creates a block.
    pub fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Worked hours in this block.
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        u32::from(self.end.saturating_sub(self.start))
    }

    /// Hours covered by this block, ascending.
    #[inline]
    pub fn hours(&self) -> std::ops::Range<u8> {
        self.start..self.end
    }

    /// Whether the block covers the given hour.
    #[inline]
    pub fn contains(&self, hour: u8) -> bool {
        hour >= self.start && hour < self.end
    }
}

/// A named shift shape: two work blocks with a rest gap between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Template family.
    pub role: ShiftRole,
    /// Base or extended shape.
    pub variant: ShiftVariant,
    /// Earlier work block.
    pub block1: HourBlock,
    /// Later work block.
    pub block2: HourBlock,
}

impl ShiftTemplate {
    /// Creates a template from its four hour markers.
    pub fn new(role: ShiftRole, variant: ShiftVariant, markers: (u8, u8, u8, u8)) -> Self {
        let (b1s, b1e, b2s, b2e) = markers;
        Self {
            role,
            variant,
            block1: HourBlock::new(b1s, b1e),
            block2: HourBlock::new(b2s, b2e),
        }
    }

    /// Total worked hours (both blocks, gap excluded).
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        self.block1.duration_hours() + self.block2.duration_hours()
    }

    /// Hours covered by either block, ascending.
    pub fn covered_hours(&self) -> impl Iterator<Item = u8> + '_ {
        self.block1.hours().chain(self.block2.hours())
    }

    /// Whether either block covers the given hour.
    #[inline]
    pub fn covers(&self, hour: u8) -> bool {
        self.block1.contains(hour) || self.block2.contains(hour)
    }

    /// Unmet staff-hours this template would satisfy on `day`: the sum of
    /// remaining demand over every hour the blocks cover.
    pub fn coverage(&self, day: Weekday, demand: &DemandMatrix) -> u32 {
        self.covered_hours().map(|h| demand.remaining(day, h)).sum()
    }

    /// Marker ordering invariant: `b1s < b1e <= b2s < b2e`.
    pub fn is_well_formed(&self) -> bool {
        self.block1.start < self.block1.end
            && self.block1.end <= self.block2.start
            && self.block2.start < self.block2.end
    }
}

impl fmt::Display for ShiftTemplate {
    /// Renders the committed shift string: `"HH:00 - HH:00 / HH:00 - HH:00"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:00 - {:02}:00 / {:02}:00 - {:02}:00",
            self.block1.start, self.block1.end, self.block2.start, self.block2.end
        )
    }
}

/// The set of feasible shift templates for an operating window.
///
/// Templates are held in declaration order — (opening, mid, closing) ×
/// (base, extended) — and the greedy engine breaks coverage ties by that
/// order, which keeps assignment deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCatalog {
    templates: Vec<ShiftTemplate>,
}

impl ShiftCatalog {
    /// Derives the catalog from the operating window.
    ///
    /// With opening hour `A` and closing hour `F`:
    ///
    /// | role    | base                   | extended               |
    /// |---------|------------------------|------------------------|
    /// | opening | `(A-1, A+3, A+4, A+8)` | `(A-1, A+3, A+4, A+9)` |
    /// | mid     | `(A+1, A+5, A+6, A+10)`| `(A+1, A+5, A+6, A+11)`|
    /// | closing | `(A+4, A+8, A+9, F+1)` | `(A+3, A+8, A+9, F+1)` |
    ///
    /// The closing variant extends the *earlier* block start instead of the
    /// later block end: work cannot run past `F+1`, so the ninth hour is
    /// taken before the evening block. Templates that are malformed, run
    /// past `F+1`, or exceed `max_daily_hours` are excluded.
    pub fn new(opening_hour: u8, closing_hour: u8, max_daily_hours: u32) -> Self {
        let a = |offset: u8| opening_hour.saturating_add(offset);
        let pre = opening_hour.saturating_sub(1);
        let end = closing_hour.saturating_add(1);

        let candidates = [
            ShiftTemplate::new(ShiftRole::Opening, ShiftVariant::Base, (pre, a(3), a(4), a(8))),
            ShiftTemplate::new(ShiftRole::Opening, ShiftVariant::Extended, (pre, a(3), a(4), a(9))),
            ShiftTemplate::new(ShiftRole::Mid, ShiftVariant::Base, (a(1), a(5), a(6), a(10))),
            ShiftTemplate::new(ShiftRole::Mid, ShiftVariant::Extended, (a(1), a(5), a(6), a(11))),
            ShiftTemplate::new(ShiftRole::Closing, ShiftVariant::Base, (a(4), a(8), a(9), end)),
            ShiftTemplate::new(ShiftRole::Closing, ShiftVariant::Extended, (a(3), a(8), a(9), end)),
        ];

        let templates = candidates
            .into_iter()
            .filter(|t| {
                t.is_well_formed()
                    && t.block2.end <= end
                    && t.duration_hours() <= max_daily_hours
            })
            .collect();

        Self { templates }
    }

    /// Templates in declaration order.
    pub fn templates(&self) -> &[ShiftTemplate] {
        &self.templates
    }

    /// Looks up a specific (role, variant) template, if feasible.
    pub fn template(&self, role: ShiftRole, variant: ShiftVariant) -> Option<&ShiftTemplate> {
        self.templates
            .iter()
            .find(|t| t.role == role && t.variant == variant)
    }

    /// Number of feasible templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no template fits the window.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
