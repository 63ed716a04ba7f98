pub mod admin_requests;
pub mod admin_users;
pub mod attendance;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod placeholders;
pub mod register;
pub mod requests;

pub use admin_requests::AdminRequestsPage;
pub use admin_users::AdminUsersPage;
pub use attendance::AttendancePage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use placeholders::{ProjectsPage, ReportsPage};
pub use register::RegisterPage;
pub use requests::RequestsPage;
