use web_sys::{Document, Element};

/// Id of the element the footer mounts into when the page provides one.
pub const MOUNT_ID: &str = "site-footer";

/// Browser document, if running in one.
#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Element to mount the footer into: `#site-footer` when present, else `<body>`.
#[must_use]
pub fn mount_root() -> Option<Element> {
    let doc = document()?;
    doc.get_element_by_id(MOUNT_ID)
        .or_else(|| doc.body().map(Element::from))
}
