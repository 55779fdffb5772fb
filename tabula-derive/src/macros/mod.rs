pub mod field_utils;
pub mod table_record;
