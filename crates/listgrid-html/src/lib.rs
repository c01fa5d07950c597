//! HTML and JavaScript string assembly for listgrid.
//!
//! Everything the list renderer emits goes through this crate: escaped
//! text, the few tags a cell can contain, framework-style URLs, and the
//! options literal handed to the client-side in-place editor.

pub mod escape;
pub mod js;
pub mod tag;
pub mod url;

pub use escape::{CleanPolicy, clean, escape, truncate_text};
pub use js::{JsValue, js_object, js_string};
pub use tag::{Attrs, check_box_tag, content_tag, javascript_tag, tag};
pub use url::{UrlParams, percent_encode};
