//! Render configuration.
//!
//! Options are fixed when a renderer is created and never change while a
//! document is rendered.

use bitflags::bitflags;

bitflags! {
    /// Behavior flags for the HTML renderer.
    ///
    /// Combine with bitwise OR: `HtmlFlags::HARD_WRAP | HtmlFlags::ESCAPE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct HtmlFlags: u32 {
        /// Turn newlines inside paragraphs into `<br/>` line breaks.
        const HARD_WRAP = 1 << 0;
        /// Drop raw HTML blocks and inline HTML.
        const SKIP_HTML = 1 << 1;
        /// Text-escape raw HTML instead of passing it through. Wins over
        /// `SKIP_HTML`.
        const ESCAPE = 1 << 2;
    }
}

/// Options for one HTML render pass.
///
/// # Examples
///
/// ```
/// use quire::{HtmlFlags, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_flag(HtmlFlags::HARD_WRAP)
///     .with_toc_nesting_level(2);
/// assert!(options.flags.contains(HtmlFlags::HARD_WRAP));
/// assert_eq!(options.toc_nesting_level, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Behavior flags.
    pub flags: HtmlFlags,
    /// Headers with a level at or below this value get sequential
    /// `toc_N` ids instead of text-derived ids. 0 disables numbering.
    pub toc_nesting_level: u8,
}

impl RenderOptions {
    /// Options with no flags and TOC numbering disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the flags.
    pub fn with_flags(mut self, flags: HtmlFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Add a flag to the existing ones.
    pub fn with_flag(mut self, flag: HtmlFlags) -> Self {
        self.flags |= flag;
        self
    }

    pub fn with_toc_nesting_level(mut self, level: u8) -> Self {
        self.toc_nesting_level = level;
        self
    }

    /// Load options from JSON such as
    /// `{"flags": "HARD_WRAP | ESCAPE", "toc_nesting_level": 2}`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert!(options.flags.is_empty());
        assert_eq!(options.toc_nesting_level, 0);
    }

    #[test]
    fn test_builder_accumulates_flags() {
        let options = RenderOptions::new()
            .with_flag(HtmlFlags::SKIP_HTML)
            .with_flag(HtmlFlags::ESCAPE);
        assert_eq!(options.flags, HtmlFlags::SKIP_HTML | HtmlFlags::ESCAPE);

        let replaced = options.with_flags(HtmlFlags::HARD_WRAP);
        assert_eq!(replaced.flags, HtmlFlags::HARD_WRAP);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_from_json() {
        let options =
            RenderOptions::from_json(r#"{"flags": "HARD_WRAP | ESCAPE", "toc_nesting_level": 3}"#)
                .unwrap();
        assert_eq!(options.flags, HtmlFlags::HARD_WRAP | HtmlFlags::ESCAPE);
        assert_eq!(options.toc_nesting_level, 3);

        let partial = RenderOptions::from_json(r#"{"toc_nesting_level": 1}"#).unwrap();
        assert!(partial.flags.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_from_json_unknown_flag() {
        assert!(RenderOptions::from_json(r#"{"flags": "SHOUT"}"#).is_err());
    }
}
