pub mod field_error;
