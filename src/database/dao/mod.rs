pub mod inventory_counts;

pub use inventory_counts::{DetailRow, InventoryCountsDao, SummaryRow};
