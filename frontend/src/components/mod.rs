pub mod calendar;
pub mod entities;
pub mod records;
pub mod status_badge;
