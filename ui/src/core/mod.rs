//! Pure logic backing the storefront chrome: label presentation, menu state,
//! and the injected navigation capability. Nothing in here renders.

pub mod format;
pub mod menu;
pub mod nav;
