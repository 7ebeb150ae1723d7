//! European Central Bank TARGET2 closing days.

use hol_core::errors::Result;
use hol_core::Category;
use hol_engine::groups::ChristianCalendar;
use hol_engine::{HolidayEntity, Registrar};
use hol_time::Month;

/// TARGET2 settlement calendar of the European Central Bank.
pub struct EuropeanCentralBank;

impl HolidayEntity for EuropeanCentralBank {
    fn code(&self) -> &'static str {
        "XECB"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ECB", "TAR"]
    }

    fn start_year(&self) -> i32 {
        1998
    }

    fn populate(&self, ctx: &mut Registrar<'_>, category: Category) -> Result<()> {
        if category != Category::Public {
            return Ok(());
        }
        let year = ctx.year();

        ctx.add("New Year's Day", Month::January, 1)?;
        if year >= 2000 {
            let christian = ChristianCalendar::western();
            christian.add_good_friday(ctx, "Good Friday")?;
            christian.add_easter_monday(ctx, "Easter Monday")?;
            ctx.add("Labour Day", Month::May, 1)?;
        }
        ctx.add("Christmas Day", Month::December, 25)?;
        if year >= 2000 {
            ctx.add("26 December", Month::December, 26)?;
        }
        // The settlement system also closed over the first two year-end
        // transitions and the euro cash changeover.
        if year == 1998 || year == 1999 || year == 2001 {
            ctx.add("31 December", Month::December, 31)?;
        }
        Ok(())
    }
}
