pub mod alert;
pub mod contractor;
pub mod payment;
pub mod project;
pub mod recent_activity;
pub mod user;

pub use alert::Alert;
pub use contractor::Contractor;
pub use payment::Payment;
pub use project::{Expense, Project, Task};
pub use recent_activity::RecentActivity;
pub use user::User;
