// Task-Modul: Enthält die Embassy Tasks
//
// Die Firmware hat genau einen Task: den Controller-Loop.

pub mod controller;

// Re-export Tasks für einfachen Import
pub use controller::{controller_logic, controller_task};
