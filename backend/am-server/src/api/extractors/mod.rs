pub mod profile_query;
