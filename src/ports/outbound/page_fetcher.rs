use crate::shared::Result;

/// PageFetcher port for obtaining the TeVCat page HTML
///
/// Implemented over HTTP for live use and over the filesystem for saved
/// copies of the page.
pub trait PageFetcher {
    /// Returns the full page text
    ///
    /// # Errors
    /// Returns an error if the page cannot be retrieved; no partial text is
    /// ever returned.
    fn fetch_page(&self) -> Result<String>;

    /// Human-readable origin of the page (URL or file path), used in
    /// progress messages
    fn location(&self) -> String;
}

impl<T: PageFetcher + ?Sized> PageFetcher for Box<T> {
    fn fetch_page(&self) -> Result<String> {
        (**self).fetch_page()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
