mod layout;
pub use layout::AppLayout;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod all_jobs;
pub use all_jobs::AllJobs;

mod employer;
pub use employer::Employer;

mod post_job;
pub use post_job::PostJob;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::NotFound;
