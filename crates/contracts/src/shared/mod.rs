pub mod inventory_gate;
pub mod pagination;
