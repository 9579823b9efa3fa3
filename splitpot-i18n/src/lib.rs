#![warn(clippy::uninlined_format_args)]

use std::fmt::Display;

#[cfg(all(feature = "en", feature = "es"))]
compile_error!("Cannot enable both 'en' and 'es' features at the same time");

#[cfg(feature = "es")]
pub mod strings {
    pub const TOTAL_SPENT: &str = "Total Gastado";
    pub const PER_HEAD_SHARE: &str = "Total cada uno";
    pub const PAID: &str = "Pagó";
    pub const MUST_PUT_IN: &str = "Debe poner";
    pub const GETS_BACK: &str = "Debe recuperar";
    pub const NOTHING_TO_SETTLE: &str = "No hay transferencias pendientes";
}

#[cfg(not(feature = "es"))]
pub mod strings {
    pub const TOTAL_SPENT: &str = "Total spent";
    pub const PER_HEAD_SHARE: &str = "Share per person";
    pub const PAID: &str = "Paid";
    pub const MUST_PUT_IN: &str = "Puts in";
    pub const GETS_BACK: &str = "Gets back";
    pub const NOTHING_TO_SETTLE: &str = "Everyone is settled up";
}

pub use strings::*;

#[cfg(feature = "es")]
pub fn transfer_line(from: impl Display, amount: impl Display, to: impl Display) -> String {
    format!("{from} debe transferir ${amount} a {to}")
}

#[cfg(not(feature = "es"))]
pub fn transfer_line(from: impl Display, amount: impl Display, to: impl Display) -> String {
    format!("{from} pays ${amount} to {to}")
}
