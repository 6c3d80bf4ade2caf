pub mod bar;
pub mod doughnut;
pub mod inputs;
pub mod line;
pub mod palette;
