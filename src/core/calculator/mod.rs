pub mod dashboard;
pub mod engine;
pub mod overtime;
pub mod payroll;
pub mod reports;
pub mod timecard;
pub mod window;

pub use dashboard::{Dashboard, build_dashboard};
pub use engine::{Distribution, EarningsEngine, GoalProgress, WindowTotals};
pub use overtime::{OvertimeSplit, calculate_pay, split_hours};
pub use payroll::{PayrollPeriod, PayrollSummary, summarize};
pub use reports::{MonthPoint, Report, build_report};
pub use timecard::{Timecard, TimecardFilter, build_timecard};
pub use window::Window;
