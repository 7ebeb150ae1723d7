//! The holiday container.
//!
//! [`Holidays`] is an ordered date-to-name map fed lazily by its entity
//! sources: looking up a date in an unpopulated year triggers that
//! year's populate pass when expansion is enabled.  The map lives
//! behind a mutex so lookups work through `&self` and concurrent
//! population of the same year is serialized.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, PoisonError};

use hol_core::errors::{Error, Result};
use hol_core::{Category, HOLIDAY_NAME_DELIMITER};
use hol_time::Date;

use crate::entity::{resolve_subdivision, HolidayEntity, Registrar};

// ── Key normalization ─────────────────────────────────────────────────────────

/// Values accepted wherever a date key is expected: [`Date`], date
/// strings, and Unix timestamps.
pub trait DateKey {
    /// Convert to a concrete date.
    fn to_date(&self) -> Result<Date>;
}

impl DateKey for Date {
    fn to_date(&self) -> Result<Date> {
        Ok(*self)
    }
}

impl DateKey for &str {
    fn to_date(&self) -> Result<Date> {
        Date::parse(self)
    }
}

impl DateKey for String {
    fn to_date(&self) -> Result<Date> {
        Date::parse(self)
    }
}

impl DateKey for i64 {
    fn to_date(&self) -> Result<Date> {
        Date::from_unix_timestamp(*self as f64)
    }
}

impl DateKey for f64 {
    fn to_date(&self) -> Result<Date> {
        Date::from_unix_timestamp(*self)
    }
}

/// How [`Holidays::get_named`] matches holiday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameLookup {
    /// Case-sensitive substring match.
    Contains,
    /// Case-sensitive exact match.
    Exact,
    /// Case-sensitive prefix match.
    StartsWith,
    /// Case-insensitive substring match (the default).
    #[default]
    IContains,
    /// Case-insensitive exact match.
    IExact,
    /// Case-insensitive prefix match.
    IStartsWith,
}

impl NameLookup {
    fn matches(&self, name: &str, pattern: &str) -> bool {
        match self {
            NameLookup::Contains => name.contains(pattern),
            NameLookup::Exact => name == pattern,
            NameLookup::StartsWith => name.starts_with(pattern),
            NameLookup::IContains => {
                name.to_lowercase().contains(&pattern.to_lowercase())
            }
            NameLookup::IExact => name.eq_ignore_ascii_case(pattern),
            NameLookup::IStartsWith => {
                name.to_lowercase().starts_with(&pattern.to_lowercase())
            }
        }
    }
}

// ── Container ─────────────────────────────────────────────────────────────────

/// One populate source: an entity plus the bound subdivision.
#[derive(Clone)]
pub(crate) struct Source {
    pub(crate) entity: Arc<dyn HolidayEntity>,
    pub(crate) subdiv: Option<&'static str>,
}

#[derive(Default)]
pub(crate) struct Inner {
    pub(crate) entries: BTreeMap<Date, String>,
    pub(crate) years: BTreeSet<i32>,
    pub(crate) weekend_workdays: BTreeSet<Date>,
}

/// Holiday container for one or more entities.
///
/// Built through [`Holidays::builder`] or by adding containers with
/// `+`.  All lookups take any [`DateKey`].
pub struct Holidays {
    pub(crate) sources: Vec<Source>,
    pub(crate) observed: bool,
    pub(crate) expand: bool,
    pub(crate) language: Option<String>,
    pub(crate) categories: Vec<Category>,
    pub(crate) inner: Mutex<Inner>,
}

impl Default for Holidays {
    fn default() -> Self {
        Holidays {
            sources: Vec::new(),
            observed: true,
            expand: true,
            language: None,
            categories: Vec::new(),
            inner: Mutex::new(Inner::default()),
        }
    }
}

impl Holidays {
    /// Start building a container for one entity.
    pub fn builder(entity: Arc<dyn HolidayEntity>) -> HolidaysBuilder {
        HolidaysBuilder::new(entity)
    }

    pub(crate) fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Configuration accessors ──────────────────────────────────────────────

    /// Entity codes, in operand order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.entity.code()).collect()
    }

    /// Subdivision bound to the first source, if any.
    pub fn subdiv(&self) -> Option<&'static str> {
        self.sources.first().and_then(|s| s.subdiv)
    }

    /// Whether observed entries are generated.
    pub fn observed(&self) -> bool {
        self.observed
    }

    /// Whether lookups populate missing years on demand.
    pub fn expand(&self) -> bool {
        self.expand
    }

    /// Requested language, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Active categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Years populated so far.
    pub fn years(&self) -> BTreeSet<i32> {
        self.lock().years.clone()
    }

    /// Number of registered holiday dates.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether no holiday is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// All (date, name) entries in date order.
    pub fn entries(&self) -> Vec<(Date, String)> {
        self.lock()
            .entries
            .iter()
            .map(|(d, n)| (*d, n.clone()))
            .collect()
    }

    /// All registered dates in order.
    pub fn dates(&self) -> Vec<Date> {
        self.lock().entries.keys().copied().collect()
    }

    // ── Population ───────────────────────────────────────────────────────────

    /// Populate a year explicitly, regardless of the expand setting.
    /// Re-populating an already-populated year is a no-op.
    pub fn populate(&self, year: i32) -> Result<()> {
        let mut inner = self.lock();
        self.populate_locked(&mut inner, year)
    }

    fn populate_locked(&self, inner: &mut Inner, year: i32) -> Result<()> {
        if inner.years.contains(&year) {
            return Ok(());
        }
        for source in &self.sources {
            let entity = source.entity.as_ref();
            if year < entity.start_year() || year > entity.end_year() {
                continue;
            }
            let language = self.language.as_deref().or(entity.default_language());
            let catalog = language.and_then(|lang| entity.catalog(lang));

            for category in self.categories_for(entity) {
                let mut ctx = Registrar::new(
                    year,
                    self.observed,
                    catalog,
                    entity,
                    &mut inner.entries,
                    &mut inner.weekend_workdays,
                );
                entity.populate(&mut ctx, category)?;
                if let Some(subdiv) = source.subdiv {
                    entity.populate_subdivision(&mut ctx, subdiv, category)?;
                }
            }

            // One-off tables override last.
            if let Some(statics) = entity.static_holidays() {
                let active = self.categories_for(entity);
                let mut ctx = Registrar::new(
                    year,
                    self.observed,
                    catalog,
                    entity,
                    &mut inner.entries,
                    &mut inner.weekend_workdays,
                );
                for day in statics.special {
                    if day.year == year && active.contains(&day.category) {
                        ctx.add_special(day)?;
                    }
                }
                for day in statics.substituted {
                    if day.year == year {
                        ctx.add_substituted(day, entity.substituted_label())?;
                    }
                }
            }
        }
        // A year is claimed only once every source registered cleanly.
        inner.years.insert(year);
        Ok(())
    }

    /// Active categories for one entity: the intersection of the
    /// container's categories with the entity's supported set, the
    /// entity default first.
    fn categories_for(&self, entity: &dyn HolidayEntity) -> Vec<Category> {
        let supported = entity.supported_categories();
        let mut out: Vec<Category> = Vec::new();
        let default = entity.default_category();
        if self.categories.contains(&default) && supported.contains(&default) {
            out.push(default);
        }
        for category in &self.categories {
            if *category != default && supported.contains(category) {
                out.push(*category);
            }
        }
        out
    }

    fn contains_locked(&self, inner: &mut Inner, date: Date) -> Result<bool> {
        if inner.entries.contains_key(&date) {
            return Ok(true);
        }
        let year = date.year();
        if self.expand && !inner.years.contains(&year) {
            self.populate_locked(inner, year)?;
            return Ok(inner.entries.contains_key(&date));
        }
        Ok(false)
    }

    // ── Lookups ──────────────────────────────────────────────────────────────

    /// Whether the key is a holiday.  Populates the key's year on a miss
    /// when expansion is enabled.
    pub fn contains<K: DateKey>(&self, key: K) -> Result<bool> {
        let date = key.to_date()?;
        let mut inner = self.lock();
        self.contains_locked(&mut inner, date)
    }

    /// Strict lookup: the holiday name, or [`Error::NoHoliday`].
    /// Populates like [`Holidays::contains`].
    pub fn name_of<K: DateKey>(&self, key: K) -> Result<String> {
        let date = key.to_date()?;
        let mut inner = self.lock();
        self.contains_locked(&mut inner, date)?;
        inner
            .entries
            .get(&date)
            .cloned()
            .ok_or_else(|| Error::NoHoliday(date.to_string()))
    }

    /// Soft lookup: the holiday name if registered.  Never populates.
    pub fn get<K: DateKey>(&self, key: K) -> Result<Option<String>> {
        let date = key.to_date()?;
        Ok(self.lock().entries.get(&date).cloned())
    }

    /// Soft lookup with a default name.  Never populates.
    pub fn get_or<K: DateKey>(&self, key: K, default: &str) -> Result<String> {
        Ok(self.get(key)?.unwrap_or_else(|| default.to_owned()))
    }

    /// All names registered on a date, split on the merge delimiter.
    /// Empty when the date is not a holiday.  Never populates.
    pub fn get_list<K: DateKey>(&self, key: K) -> Result<Vec<String>> {
        Ok(self
            .get(key)?
            .map(|names| {
                names
                    .split(HOLIDAY_NAME_DELIMITER)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Dates whose name matches a pattern, searching each merged name
    /// component separately.  Only populated years are searched.
    pub fn get_named(&self, pattern: &str, lookup: NameLookup) -> Vec<Date> {
        self.lock()
            .entries
            .iter()
            .filter(|(_, names)| {
                names
                    .split(HOLIDAY_NAME_DELIMITER)
                    .any(|name| lookup.matches(name, pattern))
            })
            .map(|(date, _)| *date)
            .collect()
    }

    /// Holiday dates sampled from `start` (inclusive) toward `stop`
    /// (exclusive) every `step` days.  Reversed bounds are normalized;
    /// a zero step is an error.  Populates sampled years when expansion
    /// is enabled.
    pub fn dates_in_range<A: DateKey, B: DateKey>(
        &self,
        start: A,
        stop: B,
        step: i32,
    ) -> Result<Vec<Date>> {
        if step == 0 {
            return Err(Error::InvalidArgument("slice step cannot be zero".into()));
        }
        let a = start.to_date()?;
        let b = stop.to_date()?;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let step = step.abs();

        let mut inner = self.lock();
        let mut out = Vec::new();
        let mut dt = lo;
        while dt < hi {
            if self.contains_locked(&mut inner, dt)? {
                out.push(dt);
            }
            dt = match dt.add_days(step) {
                Ok(next) => next,
                Err(_) => break,
            };
        }
        Ok(out)
    }

    // ── Mutation ─────────────────────────────────────────────────────────────

    /// Remove a holiday and return its name, or [`Error::NoHoliday`].
    pub fn pop<K: DateKey>(&self, key: K) -> Result<String> {
        let date = key.to_date()?;
        self.lock()
            .entries
            .remove(&date)
            .ok_or_else(|| Error::NoHoliday(date.to_string()))
    }

    /// Remove a holiday, returning the default name on a miss.
    pub fn pop_or<K: DateKey>(&self, key: K, default: &str) -> Result<String> {
        let date = key.to_date()?;
        Ok(self
            .lock()
            .entries
            .remove(&date)
            .unwrap_or_else(|| default.to_owned()))
    }

    /// Remove every holiday whose name matches the pattern
    /// (case-insensitive substring).  Errors when nothing matched.
    pub fn pop_named(&self, pattern: &str) -> Result<Vec<Date>> {
        let dates = self.get_named(pattern, NameLookup::IContains);
        if dates.is_empty() {
            return Err(Error::NoHoliday(pattern.to_owned()));
        }
        let mut inner = self.lock();
        for date in &dates {
            inner.entries.remove(date);
        }
        Ok(dates)
    }

    /// Register one holiday by hand, merging names on collision.
    pub fn set_entry<K: DateKey>(&self, key: K, name: &str) -> Result<()> {
        let date = key.to_date()?;
        let mut inner = self.lock();
        match inner.entries.get_mut(&date) {
            Some(existing) => {
                if let Some(merged) = crate::entity::merge_names(existing, name) {
                    *existing = merged;
                }
            }
            None => {
                inner.entries.insert(date, name.to_owned());
            }
        }
        Ok(())
    }

    /// Register several holidays by hand.
    pub fn update<K: DateKey>(&self, entries: &[(K, &str)]) -> Result<()> {
        for (key, name) in entries {
            self.set_entry(key.to_date()?, name)?;
        }
        Ok(())
    }

    /// Bulk-insert dates under the synthetic name "Holiday".
    pub fn append<K: DateKey>(&self, keys: &[K]) -> Result<()> {
        for key in keys {
            self.set_entry(key.to_date()?, "Holiday")?;
        }
        Ok(())
    }

    // ── Workday helpers ──────────────────────────────────────────────────────

    fn is_workday_locked(&self, inner: &mut Inner, date: Date) -> Result<bool> {
        if inner.weekend_workdays.contains(&date) {
            return Ok(true);
        }
        if date.weekday().is_weekend() {
            return Ok(false);
        }
        Ok(!self.contains_locked(inner, date)?)
    }

    /// Whether the key is a working day: not a weekend (unless worked in
    /// a substitution) and not a holiday.
    pub fn is_workday<K: DateKey>(&self, key: K) -> Result<bool> {
        let date = key.to_date()?;
        let mut inner = self.lock();
        self.is_workday_locked(&mut inner, date)
    }

    /// The `n`-th workday after (`n > 0`) or before (`n < 0`) the key;
    /// `n == 0` returns the key's date itself.
    pub fn get_nth_workday<K: DateKey>(&self, key: K, n: i32) -> Result<Date> {
        let mut date = key.to_date()?;
        let step = if n >= 0 { 1 } else { -1 };
        let mut inner = self.lock();
        for _ in 0..n.abs() {
            date = date.add_days(step)?;
            while !self.is_workday_locked(&mut inner, date)? {
                date = date.add_days(step)?;
            }
        }
        Ok(date)
    }

    /// Number of workdays between two keys, bounds inclusive.  Reversed
    /// bounds are normalized.
    pub fn get_workdays_count<A: DateKey, B: DateKey>(&self, start: A, stop: B) -> Result<usize> {
        let a = start.to_date()?;
        let b = stop.to_date()?;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mut inner = self.lock();
        let mut count = 0;
        let mut dt = lo;
        while dt <= hi {
            if self.is_workday_locked(&mut inner, dt)? {
                count += 1;
            }
            if dt == hi {
                break;
            }
            dt = dt.add_days(1)?;
        }
        Ok(count)
    }

    // ── Combination ──────────────────────────────────────────────────────────

    /// Merge two containers: union of sources, years, and entries, with
    /// colliding names concatenated in operand order.
    pub fn merged(self, rhs: Holidays) -> Result<Holidays> {
        // Both operands must cover the union of populated years before
        // their maps are merged.
        let years: BTreeSet<i32> = self.years().union(&rhs.years()).copied().collect();
        for &year in &years {
            self.populate(year)?;
            rhs.populate(year)?;
        }

        let mut categories = self.categories.clone();
        for category in &rhs.categories {
            if !categories.contains(category) {
                categories.push(*category);
            }
        }

        let mut sources = self.sources.clone();
        sources.extend(rhs.sources.iter().cloned());

        let merged = Holidays {
            sources,
            observed: self.observed || rhs.observed,
            expand: self.expand || rhs.expand,
            language: self.language.clone().or_else(|| rhs.language.clone()),
            categories,
            inner: Mutex::new(Inner::default()),
        };

        {
            let mut inner = merged.lock();
            inner.years = years;
            let lhs_inner = self.lock();
            let rhs_inner = rhs.lock();
            inner.entries = lhs_inner.entries.clone();
            for (date, names) in &rhs_inner.entries {
                match inner.entries.get_mut(date) {
                    Some(existing) => {
                        for name in names.split(HOLIDAY_NAME_DELIMITER) {
                            if !existing
                                .split(HOLIDAY_NAME_DELIMITER)
                                .any(|existing_name| existing_name == name)
                            {
                                existing.push_str(HOLIDAY_NAME_DELIMITER);
                                existing.push_str(name);
                            }
                        }
                    }
                    None => {
                        inner.entries.insert(*date, names.clone());
                    }
                }
            }
            inner.weekend_workdays = lhs_inner
                .weekend_workdays
                .union(&rhs_inner.weekend_workdays)
                .copied()
                .collect();
        }
        Ok(merged)
    }
}

impl std::ops::Add for Holidays {
    type Output = Holidays;

    fn add(self, rhs: Holidays) -> Holidays {
        self.merged(rhs).expect("container merge failed")
    }
}

impl std::iter::Sum for Holidays {
    fn sum<I: Iterator<Item = Holidays>>(iter: I) -> Holidays {
        iter.fold(Holidays::default(), |acc, h| acc + h)
    }
}

impl PartialEq for Holidays {
    fn eq(&self, other: &Self) -> bool {
        if self.codes() != other.codes()
            || self
                .sources
                .iter()
                .map(|s| s.subdiv)
                .ne(other.sources.iter().map(|s| s.subdiv))
            || self.observed != other.observed
            || self.expand != other.expand
            || self.language != other.language
            || self.categories != other.categories
        {
            return false;
        }
        let lhs = self.lock();
        let rhs = other.lock();
        lhs.years == rhs.years
            && lhs.entries == rhs.entries
            && lhs.weekend_workdays == rhs.weekend_workdays
    }
}

impl std::fmt::Debug for Holidays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Holidays")
            .field("codes", &self.codes())
            .field("subdiv", &self.subdiv())
            .field("years", &self.years())
            .field("holidays", &self.len())
            .finish()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for a single-entity [`Holidays`] container.
pub struct HolidaysBuilder {
    entity: Arc<dyn HolidayEntity>,
    years: Vec<i32>,
    subdiv: Option<String>,
    observed: bool,
    expand: bool,
    language: Option<String>,
    categories: Option<Vec<Category>>,
}

impl HolidaysBuilder {
    /// Builder with the library defaults: observed and expand on, the
    /// entity's default subdivision, category, and language.
    pub fn new(entity: Arc<dyn HolidayEntity>) -> Self {
        HolidaysBuilder {
            entity,
            years: Vec::new(),
            subdiv: None,
            observed: true,
            expand: true,
            language: None,
            categories: None,
        }
    }

    /// Populate these years eagerly at build time.
    pub fn years(mut self, years: &[i32]) -> Self {
        self.years.extend_from_slice(years);
        self
    }

    /// Bind a subdivision (validated against the entity at build).
    pub fn subdiv(mut self, subdiv: &str) -> Self {
        self.subdiv = Some(subdiv.to_owned());
        self
    }

    /// Toggle observed entries.
    pub fn observed(mut self, observed: bool) -> Self {
        self.observed = observed;
        self
    }

    /// Toggle populate-on-lookup.
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Request a translation language.
    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_owned());
        self
    }

    /// Request explicit categories (validated against the entity).
    pub fn categories(mut self, categories: &[Category]) -> Self {
        self.categories = Some(categories.to_vec());
        self
    }

    /// Validate the configuration and build the container.
    pub fn build(self) -> Result<Holidays> {
        let entity = self.entity;

        let subdiv = match &self.subdiv {
            Some(requested) => Some(resolve_subdivision(entity.as_ref(), requested)?),
            None => entity.default_subdivision(),
        };

        let categories = match self.categories {
            Some(categories) => {
                for category in &categories {
                    if !entity.supported_categories().contains(category) {
                        return Err(Error::UnsupportedCategory {
                            entity: entity.code().to_owned(),
                            category: category.label().to_owned(),
                        });
                    }
                }
                categories
            }
            None => vec![entity.default_category()],
        };

        let holidays = Holidays {
            sources: vec![Source { entity, subdiv }],
            observed: self.observed,
            expand: self.expand,
            language: self.language,
            categories,
            inner: Mutex::new(Inner::default()),
        };
        for year in self.years {
            holidays.populate(year)?;
        }
        Ok(holidays)
    }
}
