pub mod count_records;
pub mod products;
