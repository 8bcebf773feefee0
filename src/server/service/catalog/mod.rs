//! People & planets catalog service layer.
//!
//! Every write to a detailed record (person, planet) runs in one transaction together with the
//! write to its summary record (people, planets) through [`sync::SummarySync`], so a failure on
//! either side leaves both tables untouched.

pub mod person;
pub mod planet;
pub mod sync;

#[cfg(test)]
mod tests;
