//! Country holiday entities.

mod cambodia;
mod canada;
mod ethiopia;
mod kyrgyzstan;
mod thailand;
mod united_kingdom;
mod united_states;

pub use cambodia::Cambodia;
pub use canada::Canada;
pub use ethiopia::Ethiopia;
pub use kyrgyzstan::Kyrgyzstan;
pub use thailand::Thailand;
pub use united_kingdom::UnitedKingdom;
pub use united_states::UnitedStates;
