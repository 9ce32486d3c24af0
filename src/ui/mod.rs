//! Presentation layer: from fetched details to styled terminal output.
//!
//! # Architecture
//!
//! ```text
//! PropertyDetails → build_sections → RenderSection tree
//!                 → ResultsView::mount → (SearchEngine, toggle_all)
//!                 → render_results → Renderer → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`format`]: code cleaning, settings payloads, subtitles, attribute rows
//! - [`sections`]: presentation builder producing the section tree
//! - [`view`]: mounted results with expansion, visibility and highlight state
//! - [`search`]: live keyword search with restorable originals
//! - [`helpers`]: keyword patterns and highlight ranges
//! - [`renderer`]: renderer capability, results walk and screen entry point
//! - [`components`]: ANSI renderer components
//! - [`viewmodel`]: screen chrome view model
//! - [`theme`]: color schemes and ANSI escapes

pub mod components;
pub mod format;
pub mod helpers;
pub mod renderer;
pub mod search;
pub mod sections;
pub mod theme;
pub mod view;
pub mod viewmodel;

pub use helpers::Highlighted;
pub use renderer::{render, render_results, Heading, Renderer};
pub use search::{SearchEngine, SearchOutcome};
pub use sections::{build_sections, PresentationOptions, RenderSection, SectionNode};
pub use theme::Theme;
pub use view::{ResultsView, ToggleLabel};
pub use viewmodel::{EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatusLine, UIViewModel};
