pub mod about;
pub mod app;
pub mod ar_studio;
pub mod badges_panel;
pub mod contact;
pub mod critical_banner;
pub mod dashboards;
pub mod explore;
pub mod features;
pub mod forest_view;
pub mod get_started;
pub mod hero;
pub mod leaderboard_view;
pub mod login_card;
pub mod navigation;
pub mod not_found;
pub mod notice_stack;
pub mod progress_bar;
pub mod stats_panel;

pub use app::App;
