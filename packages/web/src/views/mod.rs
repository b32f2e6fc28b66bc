mod navbar;
pub use navbar::NavBar;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod project_detail;
pub use project_detail::ProjectDetail;

mod pledge;
pub use pledge::Pledge;

mod create_project;
pub use create_project::CreateProject;

mod edit_project;
pub use edit_project::EditProject;
