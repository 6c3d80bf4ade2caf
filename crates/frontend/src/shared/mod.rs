pub mod animate;
pub mod components;
pub mod count_up;
pub mod export;
pub mod reveal;
pub mod ripple;
