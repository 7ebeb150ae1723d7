//! Holiday entities and the populate context.
//!
//! A [`HolidayEntity`] describes one country or financial market: its
//! codes, subdivisions, categories, observance rule, translation
//! catalogs, and the populate hooks that register the holidays of one
//! year.  Hooks receive a [`Registrar`], which owns name translation,
//! label formatting, and the observed-shift mechanics.

use std::collections::{BTreeMap, BTreeSet};

use hol_core::errors::{Error, Result};
use hol_core::Category;
use hol_time::{Date, Month, Weekday};

use crate::observed::{ObservedRule, Shift};

// ── Static one-off tables ─────────────────────────────────────────────────────

/// A single one-off holiday (anniversaries, royal events, closures).
#[derive(Debug, Clone, Copy)]
pub struct SpecialDay {
    /// Gregorian year the day applies to.
    pub year: i32,
    /// Month (1–12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Canonical holiday name.
    pub name: &'static str,
    /// Category the day belongs to.
    pub category: Category,
}

/// A working-day substitution: `date` becomes a day off in exchange for
/// working the weekend day `from`.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutedDay {
    /// Year of the day off.
    pub year: i32,
    /// Month of the day off.
    pub month: u8,
    /// Day of month of the day off.
    pub day: u8,
    /// The weekend date worked instead (year, month, day).
    pub from: (i32, u8, u8),
}

/// Immutable one-off tables attached to an entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHolidays {
    /// One-off holidays, applied after the regular populate hooks.
    pub special: &'static [SpecialDay],
    /// Weekend-workday substitutions.
    pub substituted: &'static [SubstitutedDay],
}

// ── Entity trait ──────────────────────────────────────────────────────────────

/// A translation catalog: canonical message to translated message.
pub type Catalog = &'static [(&'static str, &'static str)];

/// One country or financial market known to the library.
pub trait HolidayEntity: Send + Sync {
    /// Primary code (ISO 3166-1 alpha-2 or a MIC-style market code).
    fn code(&self) -> &'static str;

    /// Alternative codes (alpha-3, legacy aliases).
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// ISO 3166-2 subdivision codes.
    fn subdivisions(&self) -> &'static [&'static str] {
        &[]
    }

    /// Subdivision aliases (alias, canonical code).
    fn subdivision_aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Subdivision assumed when none is requested.
    fn default_subdivision(&self) -> Option<&'static str> {
        None
    }

    /// First year the entity has holiday data for.
    fn start_year(&self) -> i32 {
        1800
    }

    /// Last year the entity has holiday data for.
    fn end_year(&self) -> i32 {
        2299
    }

    /// Categories the entity can populate.
    fn supported_categories(&self) -> &'static [Category] {
        &[Category::Public]
    }

    /// Category populated when none is requested.
    fn default_category(&self) -> Category {
        Category::Public
    }

    /// Languages the entity ships catalogs for.
    fn supported_languages(&self) -> &'static [&'static str] {
        &[]
    }

    /// Language used when none is requested.
    fn default_language(&self) -> Option<&'static str> {
        None
    }

    /// Translation catalog for a language, if shipped.
    fn catalog(&self, _language: &str) -> Option<Catalog> {
        None
    }

    /// Default observance rule for the entity.
    fn observed_rule(&self) -> ObservedRule {
        ObservedRule::new()
    }

    /// First year observance applies, when gated.
    fn observed_since(&self) -> Option<i32> {
        None
    }

    /// Label template for observed holidays.
    fn observed_label(&self) -> &'static str {
        "%s (observed)"
    }

    /// Label template for estimated (lunar) holidays.
    fn estimated_label(&self) -> &'static str {
        "%s (estimated)"
    }

    /// Label template for holidays that are both observed and estimated.
    fn observed_estimated_label(&self) -> &'static str {
        "%s (observed, estimated)"
    }

    /// Label template for substituted days off; `%s` is the ISO date of
    /// the weekend day worked instead.
    fn substituted_label(&self) -> &'static str {
        "Day off (substituted from %s)"
    }

    /// One-off holiday tables, applied after the populate hooks.
    fn static_holidays(&self) -> Option<&'static StaticHolidays> {
        None
    }

    /// Register the entity-wide holidays of `ctx.year()` for one
    /// category.
    fn populate(&self, ctx: &mut Registrar<'_>, category: Category) -> Result<()>;

    /// Register the subdivision-specific holidays of one category.
    fn populate_subdivision(
        &self,
        _ctx: &mut Registrar<'_>,
        _subdiv: &str,
        _category: Category,
    ) -> Result<()> {
        Ok(())
    }
}

// ── Registrar ─────────────────────────────────────────────────────────────────

/// Populate context handed to entity hooks for one (entity, year) pass.
pub struct Registrar<'a> {
    year: i32,
    observed: bool,
    catalog: Option<Catalog>,
    observed_label: &'static str,
    estimated_label: &'static str,
    observed_estimated_label: &'static str,
    default_rule: ObservedRule,
    entries: &'a mut BTreeMap<Date, String>,
    weekend_workdays: &'a mut BTreeSet<Date>,
}

impl<'a> Registrar<'a> {
    pub(crate) fn new(
        year: i32,
        observed: bool,
        catalog: Option<Catalog>,
        entity: &dyn HolidayEntity,
        entries: &'a mut BTreeMap<Date, String>,
        weekend_workdays: &'a mut BTreeSet<Date>,
    ) -> Self {
        let observed = observed
            && entity
                .observed_since()
                .map_or(true, |since| year >= since);
        Registrar {
            year,
            observed,
            catalog,
            observed_label: entity.observed_label(),
            estimated_label: entity.estimated_label(),
            observed_estimated_label: entity.observed_estimated_label(),
            default_rule: entity.observed_rule(),
            entries,
            weekend_workdays,
        }
    }

    /// Year being populated.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether observance is active for this pass.
    pub fn observed(&self) -> bool {
        self.observed
    }

    /// Translate a canonical message through the active catalog.
    pub fn tr(&self, message: &str) -> String {
        self.catalog
            .and_then(|catalog| {
                catalog
                    .iter()
                    .find(|(key, _)| *key == message)
                    .map(|(_, translated)| (*translated).to_owned())
            })
            .unwrap_or_else(|| message.to_owned())
    }

    fn format_label(&self, template: &str, name: &str) -> String {
        self.tr(template).replacen("%s", name, 1)
    }

    /// Whether a date is already registered in this container.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// Register a holiday on a fixed month/day of the populate year.
    pub fn add(&mut self, name: &str, month: Month, day: u8) -> Result<Date> {
        let date = Date::from_ymd(self.year, month.number(), day)?;
        self.add_date(name, date)
    }

    /// Register a holiday on a specific date, merging names on collision.
    pub fn add_date(&mut self, name: &str, date: Date) -> Result<Date> {
        let translated = self.tr(name);
        self.insert(date, &translated);
        Ok(date)
    }

    /// Register an estimated (lunar) holiday.
    pub fn add_estimated(&mut self, name: &str, date: Date, estimated: bool) -> Result<Date> {
        let translated = self.tr(name);
        let label = if estimated {
            self.format_label(self.estimated_label, &translated)
        } else {
            translated
        };
        self.insert(date, &label);
        Ok(date)
    }

    /// Register a holiday and apply the entity's default observance rule.
    pub fn add_observed(&mut self, name: &str, month: Month, day: u8) -> Result<Date> {
        let date = Date::from_ymd(self.year, month.number(), day)?;
        let rule = self.default_rule;
        self.add_observed_date_with(name, date, rule, false)
    }

    /// Register a holiday on a specific date and apply the default rule.
    pub fn add_observed_date(&mut self, name: &str, date: Date) -> Result<Date> {
        let rule = self.default_rule;
        self.add_observed_date_with(name, date, rule, false)
    }

    /// Register a holiday and apply an explicit observance rule.
    pub fn add_observed_with(
        &mut self,
        name: &str,
        date: Date,
        rule: ObservedRule,
    ) -> Result<Date> {
        self.add_observed_date_with(name, date, rule, false)
    }

    /// Register an estimated holiday and apply an observance rule; the
    /// observed entry is labelled "(observed, estimated)".
    pub fn add_observed_estimated(
        &mut self,
        name: &str,
        date: Date,
        rule: ObservedRule,
        estimated: bool,
    ) -> Result<Date> {
        self.add_observed_date_with(name, date, rule, estimated)
    }

    fn add_observed_date_with(
        &mut self,
        name: &str,
        date: Date,
        rule: ObservedRule,
        estimated: bool,
    ) -> Result<Date> {
        self.add_estimated(name, date, estimated)?;
        self.apply_observed(name, date, rule, estimated)?;
        Ok(date)
    }

    /// Apply an observance rule to an already-registered holiday.
    /// A no-op when observance is disabled; returns the observed date
    /// when one was added.
    pub fn apply_observed(
        &mut self,
        name: &str,
        date: Date,
        rule: ObservedRule,
        estimated: bool,
    ) -> Result<Option<Date>> {
        if !self.observed {
            return Ok(None);
        }
        let Some(shift) = rule.shift_for(date.weekday()) else {
            return Ok(None);
        };
        let observed = match shift {
            Shift::Remove => {
                self.entries.remove(&date);
                return Ok(None);
            }
            Shift::Days(n) => date.add_days(n as i32)?,
            Shift::NextWorkday => match self.scan_workday(date, 1) {
                Some(dt) => dt,
                None => return Ok(None),
            },
            Shift::PrevWorkday => match self.scan_workday(date, -1) {
                Some(dt) => dt,
                None => return Ok(None),
            },
        };
        let translated = self.tr(name);
        let template = if estimated {
            self.observed_estimated_label
        } else {
            self.observed_label
        };
        let label = self.format_label(template, &translated);
        self.insert(observed, &label);
        Ok(Some(observed))
    }

    /// Scan for the nearest workday in `direction`, staying within the
    /// populate year.
    fn scan_workday(&self, date: Date, direction: i32) -> Option<Date> {
        let mut dt = date.add_days(direction).ok()?;
        while dt.weekday().is_weekend() || self.is_holiday(dt) {
            dt = dt.add_days(direction).ok()?;
        }
        (dt.year() == self.year).then_some(dt)
    }

    /// Remove a registered holiday, returning its name.
    pub fn remove(&mut self, date: Date) -> Option<String> {
        self.entries.remove(&date)
    }

    pub(crate) fn add_special(&mut self, day: &SpecialDay) -> Result<Date> {
        let date = Date::from_ymd(day.year, day.month, day.day)?;
        self.add_date(day.name, date)
    }

    pub(crate) fn add_substituted(
        &mut self,
        day: &SubstitutedDay,
        label: &'static str,
    ) -> Result<Date> {
        let date = Date::from_ymd(day.year, day.month, day.day)?;
        let (fy, fm, fd) = day.from;
        let from = Date::from_ymd(fy, fm, fd)?;
        let name = self.format_label(label, &from.to_string());
        self.insert(date, &name);
        self.weekend_workdays.insert(from);
        Ok(date)
    }

    /// Insert with the name-merge rule: an existing entry gains the new
    /// name after a "; " delimiter, merged names kept sorted and
    /// deduplicated.
    fn insert(&mut self, date: Date, name: &str) {
        match self.entries.get_mut(&date) {
            Some(existing) => {
                let mut names: Vec<&str> = existing
                    .split(hol_core::HOLIDAY_NAME_DELIMITER)
                    .collect();
                if names.contains(&name) {
                    return;
                }
                names.push(name);
                names.sort_unstable();
                *existing = names.join(hol_core::HOLIDAY_NAME_DELIMITER);
            }
            None => {
                self.entries.insert(date, name.to_owned());
            }
        }
    }
}

/// Helper for label formatting outside a populate pass (container-level
/// synthetic names).
pub(crate) fn merge_names(existing: &str, name: &str) -> Option<String> {
    let mut names: Vec<&str> = existing.split(hol_core::HOLIDAY_NAME_DELIMITER).collect();
    if names.contains(&name) {
        return None;
    }
    names.push(name);
    names.sort_unstable();
    Some(names.join(hol_core::HOLIDAY_NAME_DELIMITER))
}

/// Validate a requested subdivision against an entity, resolving
/// aliases.  Returns the canonical subdivision code.
pub fn resolve_subdivision(
    entity: &dyn HolidayEntity,
    subdiv: &str,
) -> Result<&'static str> {
    if let Some(canonical) = entity
        .subdivisions()
        .iter()
        .find(|s| s.eq_ignore_ascii_case(subdiv))
    {
        return Ok(canonical);
    }
    if let Some((_, canonical)) = entity
        .subdivision_aliases()
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(subdiv))
    {
        return Ok(canonical);
    }
    Err(Error::UnknownSubdivision {
        entity: entity.code().to_owned(),
        subdiv: subdiv.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observed::SAT_SUN_TO_NEXT_MON;

    struct Stub;

    impl HolidayEntity for Stub {
        fn code(&self) -> &'static str {
            "ZZ"
        }

        fn observed_rule(&self) -> ObservedRule {
            SAT_SUN_TO_NEXT_MON
        }

        fn catalog(&self, language: &str) -> Option<Catalog> {
            (language == "xx").then_some(&[("New Year's Day", "Xx Day")])
        }

        fn populate(&self, ctx: &mut Registrar<'_>, _category: Category) -> Result<()> {
            ctx.add_observed("New Year's Day", Month::January, 1)?;
            Ok(())
        }
    }

    fn registrar_test<F: FnOnce(&mut Registrar<'_>)>(
        year: i32,
        observed: bool,
        f: F,
    ) -> BTreeMap<Date, String> {
        let mut entries = BTreeMap::new();
        let mut workdays = BTreeSet::new();
        let mut ctx = Registrar::new(year, observed, None, &Stub, &mut entries, &mut workdays);
        f(&mut ctx);
        entries
    }

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_observed_shift() {
        // 2022-01-01 is a Saturday: observed entry lands on Monday.
        let entries = registrar_test(2022, true, |ctx| {
            Stub.populate(ctx, Category::Public).unwrap();
        });
        assert_eq!(entries.get(&date(2022, 1, 1)).unwrap(), "New Year's Day");
        assert_eq!(
            entries.get(&date(2022, 1, 3)).unwrap(),
            "New Year's Day (observed)"
        );
    }

    #[test]
    fn test_observed_disabled() {
        let entries = registrar_test(2022, false, |ctx| {
            Stub.populate(ctx, Category::Public).unwrap();
        });
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_weekday_holiday_not_shifted() {
        // 2024-01-01 is a Monday.
        let entries = registrar_test(2024, true, |ctx| {
            Stub.populate(ctx, Category::Public).unwrap();
        });
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_name_merge_sorted() {
        let entries = registrar_test(2024, true, |ctx| {
            ctx.add("Zeta Day", Month::March, 1).unwrap();
            ctx.add("Alpha Day", Month::March, 1).unwrap();
            ctx.add("Alpha Day", Month::March, 1).unwrap();
        });
        assert_eq!(entries.get(&date(2024, 3, 1)).unwrap(), "Alpha Day; Zeta Day");
    }

    #[test]
    fn test_translation() {
        let mut entries = BTreeMap::new();
        let mut workdays = BTreeSet::new();
        let catalog = Stub.catalog("xx");
        let mut ctx = Registrar::new(2024, true, catalog, &Stub, &mut entries, &mut workdays);
        ctx.add("New Year's Day", Month::January, 1).unwrap();
        assert_eq!(entries.get(&date(2024, 1, 1)).unwrap(), "Xx Day");
    }

    #[test]
    fn test_next_workday_skips_holidays() {
        let entries = registrar_test(2022, true, |ctx| {
            // 2022-05-07 is a Saturday; Monday the 9th already taken.
            ctx.add("Victory Day", Month::May, 9).unwrap();
            ctx.add_observed_with(
                "Some Feast",
                date(2022, 5, 7),
                crate::observed::SAT_SUN_TO_NEXT_WORKDAY,
            )
            .unwrap();
        });
        assert_eq!(
            entries.get(&date(2022, 5, 10)).unwrap(),
            "Some Feast (observed)"
        );
    }

    #[test]
    fn test_workday_scan_stays_in_year() {
        let entries = registrar_test(2022, true, |ctx| {
            // 2022-12-31 is a Saturday; the next workday is in 2023, so
            // no observed entry is added.
            ctx.add_observed_with(
                "Year End",
                date(2022, 12, 31),
                crate::observed::SAT_SUN_TO_NEXT_WORKDAY,
            )
            .unwrap();
        });
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_estimated_labels() {
        let entries = registrar_test(2022, true, |ctx| {
            // 2022-05-01 is a Sunday.
            ctx.add_observed_estimated(
                "Orozo Ait",
                date(2022, 5, 1),
                SAT_SUN_TO_NEXT_MON,
                true,
            )
            .unwrap();
        });
        assert_eq!(
            entries.get(&date(2022, 5, 1)).unwrap(),
            "Orozo Ait (estimated)"
        );
        assert_eq!(
            entries.get(&date(2022, 5, 2)).unwrap(),
            "Orozo Ait (observed, estimated)"
        );
    }

    #[test]
    fn test_resolve_subdivision() {
        struct WithSubdivs;
        impl HolidayEntity for WithSubdivs {
            fn code(&self) -> &'static str {
                "YY"
            }
            fn subdivisions(&self) -> &'static [&'static str] {
                &["ON", "QC"]
            }
            fn subdivision_aliases(&self) -> &'static [(&'static str, &'static str)] {
                &[("Ontario", "ON")]
            }
            fn populate(&self, _: &mut Registrar<'_>, _: Category) -> Result<()> {
                Ok(())
            }
        }
        assert_eq!(resolve_subdivision(&WithSubdivs, "on").unwrap(), "ON");
        assert_eq!(resolve_subdivision(&WithSubdivs, "Ontario").unwrap(), "ON");
        assert!(resolve_subdivision(&WithSubdivs, "BC").is_err());
    }
}
