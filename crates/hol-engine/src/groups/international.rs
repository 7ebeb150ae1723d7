//! Common international observances.

use hol_core::errors::Result;
use hol_time::{Date, Month};

use crate::entity::Registrar;

/// Fixed-date days shared by many countries.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternationalHolidays;

impl InternationalHolidays {
    /// New Year's Day, January 1.
    pub fn add_new_years_day(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        ctx.add(name, Month::January, 1)
    }

    /// The day after New Year's Day, January 2.
    pub fn add_new_years_day_two(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        ctx.add(name, Month::January, 2)
    }

    /// International Women's Day, March 8.
    pub fn add_womens_day(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        ctx.add(name, Month::March, 8)
    }

    /// International Workers' Day, May 1.
    pub fn add_labour_day(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        ctx.add(name, Month::May, 1)
    }

    /// World War II Victory Day, May 9.
    pub fn add_world_war_two_victory_day(
        &self,
        ctx: &mut Registrar<'_>,
        name: &str,
    ) -> Result<Date> {
        ctx.add(name, Month::May, 9)
    }

    /// International Children's Day, June 1.
    pub fn add_childrens_day(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        ctx.add(name, Month::June, 1)
    }

    /// International Human Rights Day, December 10.
    pub fn add_human_rights_day(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        ctx.add(name, Month::December, 10)
    }
}
