pub mod catalog;
pub mod covers;
pub mod genre;
pub mod paginator;
pub mod pipeline;
pub mod pricer;
