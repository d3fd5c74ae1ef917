//! Object-URL previews for locally chosen files.
//!
//! Every URL handed out by `create` holds the file in browser memory until
//! `revoke` is called with it.

use super::files::LocalFile;

/// Create a preview URL for `file`. `None` off-browser or if the browser
/// refuses.
pub fn create(file: &LocalFile) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::Url::create_object_url_with_blob(file).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file;
        None
    }
}

pub fn revoke(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if url.starts_with("blob:") {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

pub fn revoke_all<I, S>(urls: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for url in urls {
        revoke(url.as_ref());
    }
}
