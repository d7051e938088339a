//! Browser checks for the injected grid markup. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use renovation_viewer::models::{DemoImage, Property};
use renovation_viewer::render::{demo_image_grid_markup, property_grid_markup, IMAGE_URL_ATTR};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container(markup: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_inner_html(markup);
    div
}

#[wasm_bindgen_test]
fn hostile_property_name_stays_text() {
    let property = Property {
        id: "house1".into(),
        name: "<img src=x>".into(),
        address: "東京都".into(),
        price: "1".into(),
        area: "1".into(),
        age: "1".into(),
        description: "<script>alert(1)</script>".into(),
    };
    let div = container(&property_grid_markup(&[property]));
    assert!(div.query_selector("img").unwrap().is_none());
    assert!(div.query_selector("script").unwrap().is_none());
    let heading = div.query_selector("h3").unwrap().unwrap();
    assert_eq!(heading.text_content().unwrap(), "<img src=x>");
}

#[wasm_bindgen_test]
fn image_url_attribute_round_trips() {
    let url = r#"/static/demo-images/a&b"c'.jpg"#;
    let image = DemoImage {
        id: "demo1".into(),
        name: "台所".into(),
        url: url.into(),
    };
    let div = container(&demo_image_grid_markup(&[image], Some("demo1")));
    let holder = div.first_element_child().unwrap();
    assert_eq!(holder.get_attribute(IMAGE_URL_ATTR).unwrap(), url);
    assert_eq!(div.query_selector_all("img").unwrap().length(), 1);
}
