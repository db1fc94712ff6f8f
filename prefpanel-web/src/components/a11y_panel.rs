mod interactions;
mod section;
mod view;

pub use interactions::{ActionCallback, SnapshotCallback, activate_handler};
pub use section::{PanelSectionView, PanelSectionViewProps};
pub use view::{A11yPanel, Props};
