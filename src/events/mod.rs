mod keyboard;
mod pointer;

pub use keyboard::wire_open_keys;
pub use pointer::{wire_input_handlers, InputWiring};
