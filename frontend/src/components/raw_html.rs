use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RawHtmlProps {
    /// Markup that has already been escaped by `crate::render`.
    pub html: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Container whose children are replaced wholesale by `html` on every change.
#[function_component]
pub fn RawHtml(props: &RawHtmlProps) -> Html {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |markup: &AttrValue| {
                if let Some(element) = node.cast::<Element>() {
                    element.set_inner_html(markup);
                }
                || ()
            },
            props.html.clone(),
        );
    }
    html! {
        <div ref={node} id={props.id.clone()} class={props.class.clone()} onclick={props.onclick.clone()}></div>
    }
}
