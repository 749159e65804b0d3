pub mod user_activity;
