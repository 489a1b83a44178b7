//! Wall-clock access for rendering.
//!
//! Components never read the time directly; they ask the [`Clock`] found in
//! context (falling back to [`Clock::System`]) so a render can be pinned to
//! a known date.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("invalid calendar date {input:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Source of "today" for a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    /// Host wall clock, read fresh on every call.
    #[default]
    System,
    /// Always reports the given date.
    Fixed(NaiveDate),
}

impl Clock {
    /// Build a fixed clock from an ISO `YYYY-MM-DD` date.
    ///
    /// # Errors
    /// Returns [`ClockError::InvalidDate`] when `iso` is not a valid calendar date.
    pub fn fixed_on(iso: &str) -> Result<Self, ClockError> {
        NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d")
            .map(Self::Fixed)
            .map_err(|source| ClockError::InvalidDate {
                input: iso.to_string(),
                source,
            })
    }

    /// Calendar year at the moment of the call.
    #[must_use]
    pub fn current_year(self) -> i32 {
        match self {
            Self::System => system_year(),
            Self::Fixed(date) => date.year(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_wrap)] // `getFullYear` is far below `i32::MAX`.
fn system_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
fn system_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub clock: Clock,
    #[prop_or_default]
    pub children: Children,
}

/// Makes `clock` the time source for every component below it.
#[function_component(ClockProvider)]
pub fn clock_provider(p: &Props) -> Html {
    html! {
        <ContextProvider<Clock> context={p.clock}>
            { for p.children.iter() }
        </ContextProvider<Clock>>
    }
}

/// Year for the current render, from the context clock or the system clock.
#[hook]
pub fn use_current_year() -> i32 {
    use_context::<Clock>().unwrap_or_default().current_year()
}

#[cfg(test)]
mod tests {
    use super::{Clock, ClockError};
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn fixed_on_parses_iso_dates() {
        let clock = Clock::fixed_on("2024-06-01").expect("valid date");
        assert_eq!(
            clock,
            Clock::Fixed(NaiveDate::from_ymd_opt(2024, 6, 1).expect("date"))
        );
        assert_eq!(clock.current_year(), 2024);
    }

    #[test]
    fn fixed_on_tolerates_surrounding_whitespace() {
        let clock = Clock::fixed_on(" 2030-12-31\n").expect("valid date");
        assert_eq!(clock.current_year(), 2030);
    }

    #[test]
    fn fixed_on_rejects_malformed_dates() {
        for input in ["", "June 2024", "2024-13-01", "2023-02-29"] {
            let err = Clock::fixed_on(input).expect_err("should reject");
            let ClockError::InvalidDate { input: echoed, .. } = &err;
            assert_eq!(echoed, input);
            assert!(err.to_string().contains("YYYY-MM-DD"));
        }
    }

    #[test]
    fn fixed_clock_is_stable_across_reads() {
        let clock = Clock::fixed_on("2030-12-31").expect("valid date");
        assert_eq!(clock.current_year(), clock.current_year());
    }

    #[test]
    fn system_clock_matches_local_calendar_year() {
        let before = chrono::Local::now().year();
        let year = Clock::System.current_year();
        let after = chrono::Local::now().year();
        assert!(year == before || year == after);
    }

    #[test]
    fn default_clock_is_system() {
        assert_eq!(Clock::default(), Clock::System);
    }
}
