pub mod bubble_sort;
pub mod common;
pub mod quick_sort;
pub mod shell_sort;
