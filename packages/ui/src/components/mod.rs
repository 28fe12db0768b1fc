//! Small form and layout primitives shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label, Textarea};

mod progress;
pub use progress::ProgressBar;

mod section;
pub use section::{Card, Section};
