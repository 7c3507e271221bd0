// Input fields
pub mod checkbox;
pub mod text;

// Part widgets and structural fields
pub mod error;
pub mod error_summary;
pub mod fieldset;
pub mod hint;
pub mod label;

pub use checkbox::Checkbox;
pub use error::{ErrorConfig, ErrorMessage};
pub use error_summary::ErrorSummary;
pub use fieldset::Fieldset;
pub use hint::{Hint, HintConfig};
pub use label::{Label, LabelConfig};
pub use text::Text;
