mod input;
mod prompt;
mod renderer;

pub use input::*;
pub use prompt::*;
pub use renderer::*;
