pub mod colors;
pub mod scroll;
pub mod style;

use chrono::{Datelike, Local};

pub fn current_year() -> i32 {
    Local::now().year()
}

// "Est. 2010 · 16 years" style copy for the footer and about header
pub fn years_since(established: u16) -> String {
    let years = current_year() - i32::from(established);

    match years {
        i32::MIN..=0 => format!("Est. {established}"),
        1 => format!("Est. {established} · 1 year"),
        n => format!("Est. {established} · {n} years"),
    }
}
