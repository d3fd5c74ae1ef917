//! Browser file handles chosen through `<input type="file">`.

/// A file picked by the user. In the browser this is the DOM `File`; the
/// server build only needs a placeholder with the same name.
#[cfg(feature = "hydrate")]
pub type LocalFile = web_sys::File;

#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
}

/// Take the files from a file input's change event and clear the input so
/// choosing the same file again still fires `change`.
pub fn take_input_files(ev: &leptos::ev::Event) -> Vec<LocalFile> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return Vec::new();
        };
        let mut files = Vec::new();
        if let Some(list) = input.files() {
            for i in 0..list.length() {
                if let Some(file) = list.get(i) {
                    files.push(file);
                }
            }
        }
        input.set_value("");
        files
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        Vec::new()
    }
}
