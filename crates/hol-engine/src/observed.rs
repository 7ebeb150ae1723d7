//! Observed-holiday shift rules.
//!
//! When a holiday lands on a non-working day many jurisdictions observe
//! it on another day.  An [`ObservedRule`] maps each weekday the anchor
//! date may fall on to the [`Shift`] applied to it; weekdays with no
//! entry leave the holiday where it is.

use hol_time::Weekday;

/// What happens to a holiday falling on a given weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    /// Observe a fixed number of days away from the anchor.
    Days(i8),
    /// Observe on the next day that is neither a weekend day nor an
    /// already-registered holiday.
    NextWorkday,
    /// Observe on the previous such day.
    PrevWorkday,
    /// Drop the holiday entirely.
    Remove,
}

/// Weekday-indexed table of shifts.
///
/// Rules compose with `+`; on overlapping weekdays the right operand
/// wins, mirroring a dict union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObservedRule {
    shifts: [Option<Shift>; 7],
}

impl ObservedRule {
    /// Empty rule: nothing is ever shifted.
    pub const fn new() -> Self {
        ObservedRule { shifts: [None; 7] }
    }

    /// Builder: set the shift for one weekday.
    pub const fn with(mut self, weekday: Weekday, shift: Shift) -> Self {
        self.shifts[weekday as usize - 1] = Some(shift);
        self
    }

    /// Shift for a given weekday, if any.
    pub fn shift_for(&self, weekday: Weekday) -> Option<Shift> {
        self.shifts[weekday.ordinal() as usize - 1]
    }

    /// Whether the rule has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.shifts.iter().all(Option::is_none)
    }
}

impl std::ops::Add for ObservedRule {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut shifts = self.shifts;
        for (slot, shift) in shifts.iter_mut().zip(rhs.shifts) {
            if shift.is_some() {
                *slot = shift;
            }
        }
        ObservedRule { shifts }
    }
}

// ── Standard rules ────────────────────────────────────────────────────────────

/// Saturday holidays move back to Friday.
pub const SAT_TO_PREV_FRI: ObservedRule =
    ObservedRule::new().with(Weekday::Saturday, Shift::Days(-1));

/// Sunday holidays move forward to Monday.
pub const SUN_TO_NEXT_MON: ObservedRule =
    ObservedRule::new().with(Weekday::Sunday, Shift::Days(1));

/// Weekend holidays move to the following Monday.
pub const SAT_SUN_TO_NEXT_MON: ObservedRule = ObservedRule::new()
    .with(Weekday::Saturday, Shift::Days(2))
    .with(Weekday::Sunday, Shift::Days(1));

/// Weekend holidays move two days out, landing on Monday and Tuesday.
/// Used for paired holidays such as Christmas Day and Boxing Day.
pub const SAT_SUN_TO_NEXT_MON_TUE: ObservedRule = ObservedRule::new()
    .with(Weekday::Saturday, Shift::Days(2))
    .with(Weekday::Sunday, Shift::Days(2));

/// Saturday holidays observed the previous Friday, Sunday holidays the
/// next Monday (the United States federal rule).
pub const SAT_TO_PREV_FRI_SUN_TO_NEXT_MON: ObservedRule = ObservedRule::new()
    .with(Weekday::Saturday, Shift::Days(-1))
    .with(Weekday::Sunday, Shift::Days(1));

/// Weekend holidays observed on the next day that is a workday.
pub const SAT_SUN_TO_NEXT_WORKDAY: ObservedRule = ObservedRule::new()
    .with(Weekday::Saturday, Shift::NextWorkday)
    .with(Weekday::Sunday, Shift::NextWorkday);

/// Weekend holidays are simply dropped.
pub const SAT_SUN_TO_NONE: ObservedRule = ObservedRule::new()
    .with(Weekday::Saturday, Shift::Remove)
    .with(Weekday::Sunday, Shift::Remove);
