pub mod hyperlink;
pub mod progress;
pub mod table;

pub use hyperlink::hyperlink;
pub use progress::{OperationStatus, ProgressSpinner, display_status, is_interactive_terminal};
pub use table::{SearchTable, render_csv};
