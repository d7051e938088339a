use yew::prelude::*;

use crate::models::RenovationStyle;

#[derive(Properties, PartialEq)]
pub struct StylePickerProps {
    pub busy: bool,
    pub on_select: Callback<RenovationStyle>,
}

#[function_component]
pub fn StylePicker(props: &StylePickerProps) -> Html {
    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
            { for RenovationStyle::ALL.iter().map(|style| {
                let style = *style;
                let on_select = props.on_select.clone();
                html! {
                    <button
                        type="button"
                        class={classes!(
                            "style-button", "px-4", "py-3", "bg-white", "border", "rounded-lg",
                            "hover:border-blue-500", "hover:text-blue-600", "transition",
                            props.busy.then_some("opacity-50")
                        )}
                        disabled={props.busy}
                        data-style={style.key()}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(style))}
                    >
                        {style.label()}
                    </button>
                }
            }) }
        </div>
    }
}
