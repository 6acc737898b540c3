pub mod demo_values_response;
pub mod profile;
pub mod update_result_response;
