pub mod auth_code;
