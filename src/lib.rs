pub mod boxscore;
pub mod cli;
pub mod collector;
mod document;
pub mod export;
pub mod fraction;
pub mod game;
pub mod ident;
pub mod leaders;
pub mod league;
pub mod percentage;
pub mod reducer;
pub mod roster;
pub mod source;
pub mod standings;
pub mod stats;
pub mod team;

pub trait ResultExt<T, E> {
    fn log_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn log_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(err) => {
                log::error!("{:#}", err);
                None
            }
        }
    }
}
