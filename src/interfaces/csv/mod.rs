pub mod field_error_reader;
