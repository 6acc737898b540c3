pub mod uploaded_file;
pub mod uploads;
