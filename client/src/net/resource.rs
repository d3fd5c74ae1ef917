//! Static descriptions of each backend resource.
//!
//! DESIGN
//! ======
//! Hotels, services, providers, and banners all follow the same REST shape
//! with small differences (create route, JSON keys, image field names). Those
//! differences live in one `ResourceSpec` per resource so the list and form
//! controllers stay generic.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

/// How a resource accepts `POST` for creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateRoute {
    /// `POST {base}/add`
    AddSuffix,
    /// `POST {base}`
    Collection,
}

/// Whether a form is creating a new record or updating an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    /// The record id being edited, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// One image input on a resource form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageField {
    /// Label shown above the picker.
    pub label: &'static str,
    /// Multipart field for new files on create.
    pub create_field: &'static str,
    /// Multipart field for new files on update.
    pub update_field: &'static str,
    /// Multipart field carrying the JSON list of retained URLs on update.
    /// `None` means existing images are only ever replaced, never pruned.
    pub existing_field: Option<&'static str>,
    /// At most one image (logo, banner artwork).
    pub single: bool,
    /// Create is refused until at least one image is chosen.
    pub required_on_create: bool,
}

impl ImageField {
    /// Multipart field name for new files in `mode`.
    pub fn upload_field(&self, mode: &FormMode) -> &'static str {
        if mode.is_edit() { self.update_field } else { self.create_field }
    }
}

/// Everything the generic controllers need to talk to one resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Singular human name, used in messages ("Delete this hotel?").
    pub label: &'static str,
    /// API path of the collection, e.g. `/api/hotels`.
    pub base_path: &'static str,
    /// Envelope key holding the list.
    pub collection_key: &'static str,
    /// Envelope key holding one record.
    pub item_key: &'static str,
    pub create_route: CreateRoute,
    /// In-app route of the list page.
    pub app_route: &'static str,
    /// Image inputs, in form order.
    pub image_fields: &'static [ImageField],
}

const GALLERY_IMAGES: ImageField = ImageField {
    label: "Images",
    create_field: "images",
    update_field: "images",
    existing_field: Some("existingImages"),
    single: false,
    required_on_create: false,
};

const BANNER_IMAGE: ImageField = ImageField {
    label: "Banner Image",
    create_field: "image",
    update_field: "image",
    existing_field: None,
    single: true,
    required_on_create: true,
};

pub const SERVICES: ResourceSpec = ResourceSpec {
    label: "service",
    base_path: "/api/cleaning",
    collection_key: "cleanings",
    item_key: "cleaning",
    create_route: CreateRoute::AddSuffix,
    app_route: "/cleaning",
    image_fields: &[ImageField {
        update_field: "newImages",
        required_on_create: true,
        ..GALLERY_IMAGES
    }],
};

pub const HOTELS: ResourceSpec = ResourceSpec {
    label: "hotel",
    base_path: "/api/hotels",
    collection_key: "hotels",
    item_key: "hotel",
    create_route: CreateRoute::AddSuffix,
    app_route: "/hotel",
    image_fields: &[GALLERY_IMAGES],
};

pub const PROVIDERS: ResourceSpec = ResourceSpec {
    label: "provider",
    base_path: "/api/providers",
    collection_key: "providers",
    item_key: "provider",
    create_route: CreateRoute::AddSuffix,
    app_route: "/providers",
    image_fields: &[
        ImageField {
            label: "Logo",
            create_field: "logo",
            update_field: "logo",
            existing_field: None,
            single: true,
            required_on_create: false,
        },
        GALLERY_IMAGES,
    ],
};

pub const HOME_BANNERS: ResourceSpec = ResourceSpec {
    label: "home banner",
    base_path: "/api/home-banners",
    collection_key: "banners",
    item_key: "banner",
    create_route: CreateRoute::Collection,
    app_route: "/dashboard/homebanner",
    image_fields: &[BANNER_IMAGE],
};

pub const CLEANING_BANNERS: ResourceSpec = ResourceSpec {
    label: "cleaning banner",
    base_path: "/api/cleaning-banners",
    collection_key: "banners",
    item_key: "banner",
    create_route: CreateRoute::AddSuffix,
    app_route: "/cleaning/banner",
    image_fields: &[BANNER_IMAGE],
};

pub const INQUIRIES: ResourceSpec = ResourceSpec {
    label: "inquiry",
    base_path: "/api/contacts",
    collection_key: "contacts",
    item_key: "contact",
    create_route: CreateRoute::Collection,
    app_route: "/inquiries",
    image_fields: &[],
};

impl ResourceSpec {
    /// `GET` URL for the collection with optional query filters.
    pub fn collection_url(&self, base: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{base}{}", self.base_path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&encode_component(key));
            url.push('=');
            url.push_str(&encode_component(value));
        }
        url
    }

    /// URL of a single record (`GET`, `PUT`, `DELETE`).
    pub fn item_url(&self, base: &str, id: &str) -> String {
        format!("{base}{}/{}", self.base_path, encode_component(id))
    }

    /// URL accepting `POST` for creation.
    pub fn create_url(&self, base: &str) -> String {
        match self.create_route {
            CreateRoute::AddSuffix => format!("{base}{}/add", self.base_path),
            CreateRoute::Collection => format!("{base}{}", self.base_path),
        }
    }

    /// Submission URL for `mode`.
    pub fn submit_url(&self, base: &str, mode: &FormMode) -> String {
        match mode {
            FormMode::Create => self.create_url(base),
            FormMode::Edit(id) => self.item_url(base, id),
        }
    }

    /// In-app route of the edit page for `id`.
    pub fn edit_route(&self, id: &str) -> String {
        format!("{}/{id}/edit", self.app_route)
    }

    /// In-app route of the add page.
    pub fn add_route(&self) -> String {
        format!("{}/add", self.app_route)
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
