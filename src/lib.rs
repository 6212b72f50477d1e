#![forbid(unsafe_code)]

pub mod cli;
pub mod dom;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod record;
pub mod report;
pub mod run;
pub mod scrape;
