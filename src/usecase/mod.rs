pub mod signup_usecase;
