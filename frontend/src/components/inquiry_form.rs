use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::Selection;
use crate::utils::dom;
use crate::validation::{InquiryForm, EMAIL_MAX_CHARS, MESSAGE_MAX_CHARS, NAME_MAX_CHARS, PHONE_MAX_CHARS};

#[derive(Properties, PartialEq)]
pub struct InquiryModalProps {
    pub open: bool,
    pub selection: Selection,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn InquiryModal(props: &InquiryModalProps) -> Html {
    let form = use_state(InquiryForm::default);

    let input_handler = |apply: fn(&mut InquiryForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_name = input_handler(|f, v| f.name = v);
    let on_email = input_handler(|f, v| f.email = v);
    let on_phone = input_handler(|f, v| f.phone = v);
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let selection = props.selection.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = form.submit(&selection);
            dom::alert(&outcome.notice);
            form.set(outcome.next_form);
            if outcome.close {
                on_close.emit(());
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="inquiryModal" class={classes!("fixed", "inset-0", "bg-black", "bg-opacity-50", "flex", "items-center", "justify-center", "z-50", (!props.open).then_some("hidden"))}>
            <div class="bg-white rounded-lg p-8 max-w-md w-full mx-4">
                <div class="flex justify-between items-center mb-6">
                    <h3 class="text-2xl font-bold">{"お問い合わせ"}</h3>
                    <button type="button" class="text-gray-500 hover:text-gray-700" onclick={close}>{"✕"}</button>
                </div>
                <form onsubmit={onsubmit}>
                    <div class="mb-4">
                        <label class="block text-sm font-medium mb-2" for="name">{"お名前 *"}</label>
                        <input id="name" type="text" class="w-full px-3 py-2 border rounded-lg"
                            maxlength={NAME_MAX_CHARS.to_string()} value={form.name.clone()} oninput={on_name} />
                    </div>
                    <div class="mb-4">
                        <label class="block text-sm font-medium mb-2" for="email">{"メールアドレス *"}</label>
                        <input id="email" type="email" class="w-full px-3 py-2 border rounded-lg"
                            maxlength={EMAIL_MAX_CHARS.to_string()} value={form.email.clone()} oninput={on_email} />
                    </div>
                    <div class="mb-4">
                        <label class="block text-sm font-medium mb-2" for="phone">{"電話番号"}</label>
                        <input id="phone" type="tel" class="w-full px-3 py-2 border rounded-lg"
                            maxlength={PHONE_MAX_CHARS.to_string()} value={form.phone.clone()} oninput={on_phone} />
                    </div>
                    <div class="mb-6">
                        <label class="block text-sm font-medium mb-2" for="message">{"メッセージ"}</label>
                        <textarea id="message" rows="4" class="w-full px-3 py-2 border rounded-lg"
                            maxlength={MESSAGE_MAX_CHARS.to_string()} value={form.message.clone()} oninput={on_message} />
                    </div>
                    <button type="submit" class="w-full bg-blue-600 text-white py-3 rounded-lg hover:bg-blue-700 transition">
                        {"送信する"}
                    </button>
                </form>
            </div>
        </div>
    }
}
