pub mod activity_repository;
