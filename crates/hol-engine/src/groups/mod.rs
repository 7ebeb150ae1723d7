//! Capability groups.
//!
//! Reusable bundles of holiday-registration helpers that entities
//! compose: Christian movable and fixed feasts, Islamic lunar feasts,
//! Thai Buddhist feasts, and common international days.  Each group is
//! a small value constructed by the entity and driven through the
//! [`Registrar`](crate::entity::Registrar).

mod christian;
mod international;
mod islamic;
mod thai;

pub use christian::ChristianCalendar;
pub use international::InternationalHolidays;
pub use islamic::IslamicHolidays;
pub use thai::ThaiBuddhistHolidays;
