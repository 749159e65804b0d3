pub mod activity_repository;
pub mod entity;
pub mod supabase_auth_provider;
