mod progress;
mod style;

pub use progress::TaskProgress;
pub use style::Style;
