pub mod auth_provider;
