//! Per-resource form drafts.
//!
//! Each draft mirrors the inputs of one form. Numeric inputs are stored as
//! `Option<f64>` (coerced on change), list inputs as the comma-separated text
//! the user types, and references as plain ids.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use crate::net::payload::FieldValue;
use crate::net::types::{Banner, Hotel, Metric, Provider, Service};
use crate::state::form::FormDraft;
use crate::util::format::format_number;

const DEFAULT_GRADIENT_START: &str = "#e0f2ff";
const DEFAULT_GRADIENT_END: &str = "#ffffff";
const DEFAULT_HOTEL_CAPACITY: f64 = 2.0;

fn require(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() { Err(message.to_owned()) } else { Ok(()) }
}

// =============================================================================
// SERVICE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub duration: Option<f64>,
    pub category: String,
    /// Owning provider id; never a populated object.
    pub provider: Option<String>,
}

impl FormDraft for ServiceDraft {
    type Entity = Service;

    fn from_entity(entity: &Service) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone(),
            price: entity.price,
            duration: entity.duration,
            category: entity.category.clone(),
            provider: entity
                .provider
                .as_ref()
                .map(|r| r.id().to_owned())
                .filter(|id| !id.is_empty()),
        }
    }

    fn existing_images(entity: &Service) -> Vec<Vec<String>> {
        vec![entity.images.clone()]
    }

    fn fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text("name", self.name.clone()),
            FieldValue::Text("description", self.description.clone()),
            FieldValue::Text("price", format_number(self.price)),
            FieldValue::Text("duration", format_number(self.duration)),
            FieldValue::Text("category", self.category.clone()),
            FieldValue::Ref("provider", self.provider.clone()),
        ]
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.price.is_none() {
            return Err("Name and price are required".to_owned());
        }
        Ok(())
    }
}

// =============================================================================
// HOTEL
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct HotelDraft {
    pub name: String,
    pub location: String,
    pub price: Option<f64>,
    pub capacity: Option<f64>,
    pub description: String,
    /// Comma-separated amenities as typed.
    pub amenities: String,
    pub outside_food_allowed: bool,
}

impl Default for HotelDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            price: None,
            capacity: Some(DEFAULT_HOTEL_CAPACITY),
            description: String::new(),
            amenities: String::new(),
            outside_food_allowed: false,
        }
    }
}

impl FormDraft for HotelDraft {
    type Entity = Hotel;

    fn from_entity(entity: &Hotel) -> Self {
        Self {
            name: entity.name.clone(),
            location: entity.location.clone(),
            price: entity.price,
            capacity: entity.capacity,
            description: entity.description.clone(),
            amenities: entity.amenities.join(", "),
            outside_food_allowed: entity.outside_food_allowed,
        }
    }

    fn existing_images(entity: &Hotel) -> Vec<Vec<String>> {
        vec![entity.images.clone()]
    }

    fn fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text("name", self.name.clone()),
            FieldValue::Text("location", self.location.clone()),
            FieldValue::Text("price", format_number(self.price)),
            FieldValue::Text("capacity", format_number(self.capacity)),
            FieldValue::Text("description", self.description.clone()),
            FieldValue::Text("amenities", self.amenities.clone()),
            FieldValue::Flag("outsideFoodAllowed", self.outside_food_allowed),
        ]
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.name, "Hotel name is required")
    }
}

// =============================================================================
// PROVIDER
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ProviderDraft {
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub rating: Option<f64>,
    /// Comma-separated specialties as typed.
    pub specialties: String,
    pub is_active: bool,
}

impl Default for ProviderDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            rating: None,
            specialties: String::new(),
            is_active: true,
        }
    }
}

impl FormDraft for ProviderDraft {
    type Entity = Provider;

    fn from_entity(entity: &Provider) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone(),
            email: entity.email.clone(),
            phone: entity.phone.clone(),
            address: entity.address.clone(),
            city: entity.city.clone(),
            state: entity.state.clone(),
            pincode: entity.pincode.clone(),
            rating: entity.rating,
            specialties: entity.specialties.join(", "),
            is_active: entity.is_active,
        }
    }

    /// Slots: logo, then gallery.
    fn existing_images(entity: &Provider) -> Vec<Vec<String>> {
        vec![entity.logo.iter().cloned().collect(), entity.images.clone()]
    }

    fn fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text("name", self.name.clone()),
            FieldValue::Text("description", self.description.clone()),
            FieldValue::Text("email", self.email.clone()),
            FieldValue::Text("phone", self.phone.clone()),
            FieldValue::Text("address", self.address.clone()),
            FieldValue::Text("city", self.city.clone()),
            FieldValue::Text("state", self.state.clone()),
            FieldValue::Text("pincode", self.pincode.clone()),
            FieldValue::Text("rating", format_number(self.rating)),
            FieldValue::Text("specialties", self.specialties.clone()),
            FieldValue::Flag("isActive", self.is_active),
        ]
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.name, "Provider name is required")
    }
}

// =============================================================================
// BANNERS
// =============================================================================

/// Home-page hero: call to action, gradient, and headline metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeBannerDraft {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub gradient_start: String,
    pub gradient_end: String,
    pub metrics: Vec<Metric>,
}

impl Default for HomeBannerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            button_text: String::new(),
            button_link: String::new(),
            gradient_start: DEFAULT_GRADIENT_START.to_owned(),
            gradient_end: DEFAULT_GRADIENT_END.to_owned(),
            metrics: Vec::new(),
        }
    }
}

impl HomeBannerDraft {
    pub fn add_metric(&mut self) {
        self.metrics.push(Metric::default());
    }

    pub fn set_metric_label(&mut self, index: usize, label: String) {
        if let Some(metric) = self.metrics.get_mut(index) {
            metric.label = label;
        }
    }

    pub fn set_metric_value(&mut self, index: usize, value: String) {
        if let Some(metric) = self.metrics.get_mut(index) {
            metric.value = value;
        }
    }

    pub fn remove_metric(&mut self, index: usize) {
        if index < self.metrics.len() {
            self.metrics.remove(index);
        }
    }

    /// Metrics worth sending: rows with both columns blank are dropped.
    fn filled_metrics(&self) -> Vec<Metric> {
        self.metrics
            .iter()
            .filter(|m| !m.label.trim().is_empty() || !m.value.trim().is_empty())
            .map(|m| Metric { label: m.label.trim().to_owned(), value: m.value.trim().to_owned() })
            .collect()
    }
}

impl FormDraft for HomeBannerDraft {
    type Entity = Banner;

    fn from_entity(entity: &Banner) -> Self {
        let defaults = Self::default();
        Self {
            title: entity.title.clone(),
            subtitle: entity.subtitle.clone(),
            button_text: entity.button_text.clone().unwrap_or_default(),
            button_link: entity.button_link.clone().unwrap_or_default(),
            gradient_start: entity.gradient_start.clone().unwrap_or(defaults.gradient_start),
            gradient_end: entity.gradient_end.clone().unwrap_or(defaults.gradient_end),
            metrics: entity.metrics.clone(),
        }
    }

    fn existing_images(entity: &Banner) -> Vec<Vec<String>> {
        vec![entity.image.iter().cloned().collect()]
    }

    fn fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text("title", self.title.clone()),
            FieldValue::Text("subtitle", self.subtitle.clone()),
            FieldValue::Text("buttonText", self.button_text.clone()),
            FieldValue::Text("buttonLink", self.button_link.clone()),
            FieldValue::Text("gradientStart", self.gradient_start.clone()),
            FieldValue::Text("gradientEnd", self.gradient_end.clone()),
            FieldValue::Json("metrics", serde_json::json!(self.filled_metrics())),
        ]
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.title, "Title is required")
    }
}

/// Cleaning-page hero: title, subtitle, and artwork only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleaningBannerDraft {
    pub title: String,
    pub subtitle: String,
}

impl FormDraft for CleaningBannerDraft {
    type Entity = Banner;

    fn from_entity(entity: &Banner) -> Self {
        Self { title: entity.title.clone(), subtitle: entity.subtitle.clone() }
    }

    fn existing_images(entity: &Banner) -> Vec<Vec<String>> {
        vec![entity.image.iter().cloned().collect()]
    }

    fn fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text("title", self.title.clone()),
            FieldValue::Text("subtitle", self.subtitle.clone()),
        ]
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.title, "Title is required")
    }
}
