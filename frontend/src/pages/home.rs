use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::comparison_slider::ComparisonSlider;
use crate::components::header::Header;
use crate::components::inquiry_form::InquiryModal;
use crate::components::raw_html::RawHtml;
use crate::components::style_picker::StylePicker;
use crate::config::messages;
use crate::error::AppError;
use crate::generation::{self, BusyGuard, GenerationRequest};
use crate::models::RenovationStyle;
use crate::render::{self, IMAGE_ID_ATTR, IMAGE_URL_ATTR, PROPERTY_ID_ATTR};
use crate::state::{synthetic_image_id, Action, ViewState};
use crate::utils::api::{Backend, HttpBackend};
use crate::utils::dom;

#[function_component]
pub fn Home() -> Html {
    let state = use_reducer(ViewState::default);

    // Load the property list once on mount
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match HttpBackend.list_properties().await {
                        Ok(properties) => {
                            log::info!("Loaded {} properties", properties.len());
                            state.dispatch(Action::PropertiesLoaded(properties));
                        }
                        Err(e) => {
                            log::error!("Failed to load properties: {}", e);
                            dom::alert(messages::LOAD_PROPERTIES_FAILED);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    // Bring each panel into view as it opens
    use_effect_with_deps(
        |property_id: &Option<String>| {
            if property_id.is_some() {
                dom::scroll_into_view("houseDetails");
            }
            || ()
        },
        state.selection.property_id.clone(),
    );
    use_effect_with_deps(
        |image_id: &Option<String>| {
            if image_id.is_some() {
                dom::scroll_into_view("renovationSection");
            }
            || ()
        },
        state.selection.image_id.clone(),
    );
    use_effect_with_deps(
        |loading: &bool| {
            if *loading {
                dom::scroll_into_view("resultsSection");
            }
            || ()
        },
        state.loading,
    );

    let on_property_click = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let Some((_, property_id)) = dom::closest_attribute(e.target(), PROPERTY_ID_ATTR) else {
                return;
            };
            if !state.properties.iter().any(|p| p.id == property_id) {
                return;
            }
            state.dispatch(Action::SelectProperty(property_id.clone()));

            let state = state.clone();
            spawn_local(async move {
                match HttpBackend.list_demo_images(&property_id).await {
                    Ok(images) => state.dispatch(Action::DemoImagesLoaded { property_id, images }),
                    // Not surfaced to the visitor; the image strip simply stays empty.
                    Err(e) => log::error!("Failed to load demo images for {}: {}", property_id, e),
                }
            });
        })
    };

    let on_image_click = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let Some((holder, id)) = dom::closest_attribute(e.target(), IMAGE_ID_ATTR) else {
                return;
            };
            let Some(url) = holder.get_attribute(IMAGE_URL_ATTR) else {
                return;
            };
            state.dispatch(Action::SelectImage {
                id,
                url,
                synthetic_id: synthetic_image_id(dom::now_ms()),
            });
        })
    };

    let on_generate = {
        let state = state.clone();
        Callback::from(move |style: RenovationStyle| {
            if state.busy {
                return;
            }
            let request = match GenerationRequest::from_state(&state, style).map_err(AppError::from) {
                Ok(request) => request,
                Err(e) => {
                    log::warn!("Generation not started: {:?}", e);
                    dom::alert(&e.to_string());
                    return;
                }
            };
            state.dispatch(Action::GenerationStarted);

            let state = state.clone();
            spawn_local(async move {
                let _busy = BusyGuard::new({
                    let state = state.clone();
                    move || state.dispatch(Action::ControlsReleased)
                });
                match generation::generate(&HttpBackend, &request).await {
                    Ok(after_url) => state.dispatch(Action::GenerationSucceeded {
                        tag: request.tag,
                        style: request.style,
                        after_url,
                    }),
                    Err(e) => {
                        log::error!("Generation failed: {}", e);
                        dom::alert(messages::GENERATION_FAILED);
                        state.dispatch(Action::GenerationFailed);
                    }
                }
            });
        })
    };

    let open_inquiry = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::OpenInquiry))
    };
    let close_inquiry = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::CloseInquiry))
    };
    let open_inquiry_click = {
        let open_inquiry = open_inquiry.clone();
        Callback::from(move |_: MouseEvent| open_inquiry.emit(()))
    };

    let property_markup = AttrValue::from(render::property_grid_markup(&state.properties));
    let image_markup = AttrValue::from(render::demo_image_grid_markup(
        &state.demo_images,
        state.highlighted_image.as_deref(),
    ));

    html! {
        <>
            <Header on_contact={open_inquiry} />
            <main class="container mx-auto px-4 py-8">
                <section id="properties" class="mb-12">
                    <h2 class="text-3xl font-bold mb-6">{"物件一覧"}</h2>
                    <RawHtml
                        id="houseGrid"
                        class="grid md:grid-cols-2 lg:grid-cols-3 gap-6"
                        html={property_markup}
                        onclick={on_property_click}
                    />
                </section>

                <section id="houseDetails" class={classes!("mb-12", (!state.detail_visible()).then_some("hidden"))}>
                    {
                        if let Some(property) = state.selected_property() {
                            html! {
                                <div class="bg-white rounded-lg shadow-md p-6">
                                    <h2 class="text-2xl font-bold mb-2">{&property.name}</h2>
                                    <p class="text-gray-600 mb-4">{&property.address}</p>
                                    <div class="grid grid-cols-3 gap-4 text-sm mb-4">
                                        <div><span class="font-medium">{"価格: "}</span><span class="text-blue-600 font-bold">{&property.price}</span></div>
                                        <div><span class="font-medium">{"面積: "}</span>{&property.area}</div>
                                        <div><span class="font-medium">{"築年数: "}</span>{&property.age}</div>
                                    </div>
                                    <p class="text-gray-700 mb-6">{&property.description}</p>
                                    <h3 class="text-lg font-semibold mb-3">{"デモ画像を選択"}</h3>
                                    <RawHtml
                                        id="demoImages"
                                        class="grid grid-cols-3 gap-4"
                                        html={image_markup}
                                        onclick={on_image_click}
                                    />
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </section>

                <section id="renovationSection" class={classes!("mb-12", (!state.renovation_visible()).then_some("hidden"))}>
                    <h2 class="text-2xl font-bold mb-4">{"リノベーションスタイルを選択"}</h2>
                    <StylePicker busy={state.busy} on_select={on_generate} />
                </section>

                <section id="resultsSection" class={classes!("mb-12", (!state.results_visible()).then_some("hidden"))}>
                    <h2 class="text-2xl font-bold mb-4">{"ビフォー・アフター"}</h2>
                    <div id="loadingState" class={classes!("text-center", "py-12", (!state.loading).then_some("hidden"))}>
                        <div class="inline-block animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
                        <p class="mt-4 text-gray-600">{"AIが画像を生成しています..."}</p>
                    </div>
                    <div id="sliderContainer" class={classes!((!state.slider_visible()).then_some("hidden"))}>
                        {
                            if let Some(result) = state.result.as_ref() {
                                html! {
                                    <>
                                        <ComparisonSlider
                                            before_url={result.before_url.clone()}
                                            after_url={result.after_url.clone()}
                                            seq={result.seq}
                                        />
                                        <p class="text-center text-sm text-gray-500 mt-2">{result.style.label()}</p>
                                    </>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <div class="text-center mt-8">
                            <button
                                type="button"
                                class="bg-green-600 text-white px-8 py-3 rounded-lg hover:bg-green-700 transition"
                                onclick={open_inquiry_click}
                            >
                                {"この物件について問い合わせる"}
                            </button>
                        </div>
                    </div>
                </section>
            </main>
            <InquiryModal
                open={state.inquiry_open}
                selection={state.selection.clone()}
                on_close={close_inquiry}
            />
        </>
    }
}
