use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_contact: Callback<()>,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let contact = {
        let on_contact = props.on_contact.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_contact.emit(());
        })
    };

    html! {
        <header class="bg-white shadow-sm">
            <nav class="container mx-auto px-4 py-4 flex items-center justify-between">
                <a href="/" class="text-2xl font-bold text-blue-600">{"AkiyaVision"}</a>
                <div class="hidden md:flex gap-6">
                    <a href="#properties" class="hover:text-blue-600">{"物件一覧"}</a>
                    <button type="button" class="hover:text-blue-600" onclick={contact.clone()}>{"お問い合わせ"}</button>
                </div>
                <button type="button" class="md:hidden" onclick={toggle_menu}>{"☰"}</button>
            </nav>
            <div id="mobileMenu" class={classes!("md:hidden", "px-4", "pb-4", (!*menu_open).then_some("hidden"))}>
                <a href="#properties" class="block py-2">{"物件一覧"}</a>
                <button type="button" class="block py-2" onclick={contact}>{"お問い合わせ"}</button>
            </div>
        </header>
    }
}
