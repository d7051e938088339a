//! Markup for the property grid and the demo image strip.
//!
//! Both grids are rebuilt wholesale on every change and injected as inner HTML, so
//! every value coming from the backend goes through [`escape_html`] first, in text
//! and attribute position alike.

use crate::models::{DemoImage, Property};

pub const PROPERTY_ID_ATTR: &str = "data-property-id";
pub const IMAGE_ID_ATTR: &str = "data-image-id";
pub const IMAGE_URL_ATTR: &str = "data-image-url";
pub const SELECTED_IMAGE_CLASS: &str = "demo-image-selected";

/// Escapes `&`, `<`, `>`, `"` and `'`, which is safe in text and in either kind of
/// quoted attribute.
pub fn escape_html(unsafe_text: &str) -> String {
    html_escape::encode_quoted_attribute(unsafe_text).into_owned()
}

/// Escaped display fields of one property card.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyCardView {
    pub id: String,
    pub name: String,
    pub address: String,
    pub price: String,
    pub area: String,
    pub age: String,
    pub description: String,
}

impl From<&Property> for PropertyCardView {
    fn from(property: &Property) -> Self {
        Self {
            id: escape_html(&property.id),
            name: escape_html(&property.name),
            address: escape_html(&property.address),
            price: escape_html(&property.price),
            area: escape_html(&property.area),
            age: escape_html(&property.age),
            description: escape_html(&property.description),
        }
    }
}

impl PropertyCardView {
    pub fn to_markup(&self) -> String {
        format!(
            r#"<div class="bg-white rounded-lg shadow-md hover:shadow-lg transition cursor-pointer" {attr}="{id}">
    <div class="p-6">
        <h3 class="text-xl font-semibold mb-2">{name}</h3>
        <p class="text-gray-600 mb-4">{address}</p>
        <div class="grid grid-cols-2 gap-4 text-sm">
            <div><span class="font-medium">価格:</span> <span class="text-blue-600 font-bold">{price}</span></div>
            <div><span class="font-medium">面積:</span> <span>{area}</span></div>
            <div><span class="font-medium">築年数:</span> <span>{age}</span></div>
        </div>
        <p class="text-gray-600 text-sm mt-4">{description}</p>
    </div>
</div>"#,
            attr = PROPERTY_ID_ATTR,
            id = self.id,
            name = self.name,
            address = self.address,
            price = self.price,
            area = self.area,
            age = self.age,
            description = self.description,
        )
    }
}

/// Escaped fields of one demo image thumbnail.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoImageView {
    pub id: String,
    pub name: String,
    pub url: String,
    pub selected: bool,
}

impl DemoImageView {
    pub fn new(image: &DemoImage, selected: bool) -> Self {
        Self {
            id: escape_html(&image.id),
            name: escape_html(&image.name),
            url: escape_html(&image.url),
            selected,
        }
    }

    pub fn to_markup(&self) -> String {
        let selected_class = if self.selected {
            format!(" {}", SELECTED_IMAGE_CLASS)
        } else {
            String::new()
        };
        format!(
            r#"<div class="cursor-pointer hover:opacity-80 transition" {id_attr}="{id}" {url_attr}="{url}">
    <img src="{url}" alt="{name}" class="w-full h-24 object-cover rounded-lg demo-image{selected_class}">
    <p class="text-xs text-center mt-1 text-gray-600">{name}</p>
</div>"#,
            id_attr = IMAGE_ID_ATTR,
            url_attr = IMAGE_URL_ATTR,
            id = self.id,
            url = self.url,
            name = self.name,
            selected_class = selected_class,
        )
    }
}

pub fn property_grid_markup(properties: &[Property]) -> String {
    properties
        .iter()
        .map(|property| PropertyCardView::from(property).to_markup())
        .collect()
}

/// Thumbnail strip; only the image whose id equals `highlighted` is marked selected.
pub fn demo_image_grid_markup(images: &[DemoImage], highlighted: Option<&str>) -> String {
    images
        .iter()
        .map(|image| DemoImageView::new(image, highlighted == Some(image.id.as_str())).to_markup())
        .collect()
}
