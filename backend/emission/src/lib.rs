pub use plot::plot;
pub use report::report;

mod plot;
mod report;
mod utils;
