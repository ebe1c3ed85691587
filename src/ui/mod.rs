/// Rendering layer: egui panels around the data core.

pub mod panels;
pub mod plot;
pub mod table;
