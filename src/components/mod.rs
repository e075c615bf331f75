pub mod dashboard;
pub mod login_controls;
pub mod profile_form;
pub mod reading_grid;
pub mod status_badge;
pub mod weather_panel;

pub use dashboard::Dashboard;
pub use login_controls::LoginControls;
pub use profile_form::ProfileForm;
pub use reading_grid::ReadingGrid;
pub use status_badge::StatusBadge;
pub use weather_panel::WeatherPanel;
