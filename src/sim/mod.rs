pub mod driver;
pub mod report;
pub mod workload;

pub use driver::Sim;
pub use report::{ProcessMetrics, Report};
pub use workload::{load_workload, parse_workload, ProcessSpec};
