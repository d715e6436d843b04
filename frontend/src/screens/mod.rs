mod admin;
mod home;
mod student;

pub use admin::AdminScreen;
pub use home::HomeScreen;
pub use student::StudentScreen;
