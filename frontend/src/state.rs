use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::{DemoImage, Property, RenovationStyle};

/// What the visitor has picked so far.
///
/// An image is only ever selected together with a property; selecting a property
/// wipes everything below it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    pub property_id: Option<String>,
    pub image_id: Option<String>,
    pub image_url: Option<String>,
    pub last_style: Option<RenovationStyle>,
}

/// The property and image a generation request was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionTag {
    pub property_id: String,
    pub image_id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonResult {
    pub before_url: String,
    pub after_url: String,
    pub style: RenovationStyle,
    /// Distinct for every accepted result, even when the backend returns the same URL.
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub properties: Vec<Property>,
    pub demo_images: Vec<DemoImage>,
    pub selection: Selection,
    /// Backend id of the highlighted thumbnail, distinct from the synthetic image id.
    pub highlighted_image: Option<String>,
    pub result: Option<ComparisonResult>,
    /// Cleared when a request starts and set again only by an accepted result.
    pub result_shown: bool,
    /// Number of results accepted so far.
    pub result_count: u64,
    pub busy: bool,
    pub loading: bool,
    pub inquiry_open: bool,
}

pub enum Action {
    PropertiesLoaded(Vec<Property>),
    SelectProperty(String),
    DemoImagesLoaded {
        property_id: String,
        images: Vec<DemoImage>,
    },
    SelectImage {
        id: String,
        url: String,
        synthetic_id: String,
    },
    GenerationStarted,
    GenerationSucceeded {
        tag: SelectionTag,
        style: RenovationStyle,
        after_url: String,
    },
    GenerationFailed,
    ControlsReleased,
    OpenInquiry,
    CloseInquiry,
}

/// Image ids for demo photos are not persisted anywhere, so the clock is enough.
pub fn synthetic_image_id(now_ms: f64) -> String {
    format!("demo-{}", now_ms as u64)
}

impl ViewState {
    pub fn selected_property(&self) -> Option<&Property> {
        let id = self.selection.property_id.as_deref()?;
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn current_tag(&self) -> Option<SelectionTag> {
        Some(SelectionTag {
            property_id: self.selection.property_id.clone()?,
            image_id: self.selection.image_id.clone()?,
        })
    }

    pub fn detail_visible(&self) -> bool {
        self.selection.property_id.is_some()
    }

    pub fn renovation_visible(&self) -> bool {
        self.selection.image_id.is_some()
    }

    pub fn results_visible(&self) -> bool {
        self.loading || self.displayed_result().is_some()
    }

    pub fn slider_visible(&self) -> bool {
        !self.loading && self.displayed_result().is_some()
    }

    /// The result currently on screen, if any.
    pub fn displayed_result(&self) -> Option<&ComparisonResult> {
        self.result.as_ref().filter(|_| self.result_shown)
    }

    /// Applies one action and returns the next snapshot.
    pub fn apply(&self, action: Action) -> ViewState {
        let mut next = self.clone();
        match action {
            Action::PropertiesLoaded(properties) => {
                next.properties = properties;
            }
            Action::SelectProperty(id) => {
                if !self.properties.iter().any(|p| p.id == id) {
                    log::debug!("Ignoring selection of unknown property {}", id);
                    return next;
                }
                next.selection = Selection {
                    property_id: Some(id),
                    ..Selection::default()
                };
                next.demo_images.clear();
                next.highlighted_image = None;
                next.result = None;
                next.result_shown = false;
            }
            Action::DemoImagesLoaded { property_id, images } => {
                if self.selection.property_id.as_deref() == Some(property_id.as_str()) {
                    next.demo_images = images;
                } else {
                    log::debug!("Discarding demo images for stale property {}", property_id);
                }
            }
            Action::SelectImage { id, url, synthetic_id } => {
                if self.selection.property_id.is_none() {
                    return next;
                }
                next.selection.image_id = Some(synthetic_id);
                next.selection.image_url = Some(url);
                next.highlighted_image = Some(id);
            }
            Action::GenerationStarted => {
                next.busy = true;
                next.loading = true;
                next.result_shown = false;
            }
            Action::GenerationSucceeded { tag, style, after_url } => {
                next.loading = false;
                match (self.current_tag(), self.selection.image_url.clone()) {
                    (Some(current), Some(before_url)) if current == tag => {
                        next.selection.last_style = Some(style);
                        next.result_count += 1;
                        next.result = Some(ComparisonResult {
                            before_url,
                            after_url,
                            style,
                            seq: next.result_count,
                        });
                        next.result_shown = true;
                    }
                    _ => {
                        log::debug!(
                            "Discarding generation result for stale selection {}/{}",
                            tag.property_id,
                            tag.image_id
                        );
                    }
                }
            }
            Action::GenerationFailed => {
                next.loading = false;
            }
            Action::ControlsReleased => {
                next.busy = false;
                next.loading = false;
            }
            Action::OpenInquiry => next.inquiry_open = true,
            Action::CloseInquiry => next.inquiry_open = false,
        }
        next
    }
}

impl Reducible for ViewState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
