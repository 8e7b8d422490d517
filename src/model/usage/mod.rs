pub mod category_amount;
pub mod usage_table;
