// Utility functions and helpers

pub mod distance;
pub mod init_cells;
