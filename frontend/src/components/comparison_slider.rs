use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::slider::{Animation, Bounds, HitTarget, Phase, PointerInput, SliderAction, SliderState};
use crate::utils::dom;

const DIVIDER_CLASS: &str = "slider-divider";

#[derive(Properties, PartialEq)]
pub struct ComparisonSliderProps {
    pub before_url: AttrValue,
    pub after_url: AttrValue,
    /// Changes with every accepted result; a change resets the divider.
    pub seq: u64,
}

fn bounds_of(container: &NodeRef) -> Bounds {
    match container.cast::<Element>() {
        Some(element) => {
            let rect = element.get_bounding_client_rect();
            Bounds {
                left: rect.left(),
                width: rect.width(),
            }
        }
        None => Bounds {
            left: 0.0,
            width: 0.0,
        },
    }
}

fn hit_target(event: &Event, container: &NodeRef) -> HitTarget {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return HitTarget::Elsewhere;
    };
    if matches!(element.closest(&format!(".{}", DIVIDER_CLASS)), Ok(Some(_))) {
        return HitTarget::Divider;
    }
    match container.cast::<Element>() {
        Some(root) if root.contains(Some(element.as_ref())) => HitTarget::Container,
        _ => HitTarget::Elsewhere,
    }
}

/// Collapses mouse and touch events into one `PointerInput`.
fn pointer_input(event: &Event, phase: Phase, target: HitTarget) -> PointerInput {
    let mut input = PointerInput {
        pointer_id: None,
        x: f64::NAN,
        y: f64::NAN,
        phase,
        target,
    };
    // Checking the type string avoids touching the TouchEvent constructor, which
    // desktop Firefox does not define.
    if event.type_().starts_with("touch") {
        let touch_event = event.unchecked_ref::<TouchEvent>();
        let touch = touch_event
            .touches()
            .get(0)
            .or_else(|| touch_event.changed_touches().get(0));
        if let Some(touch) = touch {
            input.pointer_id = Some(touch.identifier());
            input.x = touch.client_x() as f64;
            input.y = touch.client_y() as f64;
        }
    } else if let Some(mouse_event) = event.dyn_ref::<MouseEvent>() {
        input.x = mouse_event.client_x() as f64;
        input.y = mouse_event.client_y() as f64;
    }
    input
}

/// Drives `animation` from animation frames until it finishes or `token` moves on.
fn run_animation(
    animation: Animation,
    token: Rc<RefCell<u64>>,
    my_token: u64,
    slider: UseReducerHandle<SliderState>,
) {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = frame.clone();
    *handle.borrow_mut() = Some(Closure::new(move || {
        if *token.borrow() != my_token {
            let _ = frame.borrow_mut().take();
            return;
        }
        let sample = animation.sample(dom::now_ms());
        slider.dispatch(SliderAction::SetPosition(sample.position));
        if sample.finished {
            let _ = frame.borrow_mut().take();
        } else if let Some(callback) = frame.borrow().as_ref() {
            dom::request_animation_frame(callback);
        }
    }));
    if let Some(callback) = handle.borrow().as_ref() {
        dom::request_animation_frame(callback);
    };
}

#[function_component]
pub fn ComparisonSlider(props: &ComparisonSliderProps) -> Html {
    let slider = use_reducer(SliderState::default);
    let container = use_node_ref();
    // Bumped by every drag start, animation start and reset; stale frame loops stop.
    let token = use_mut_ref(|| 0u64);

    // A fresh result always starts with the before image fully visible.
    {
        let slider = slider.clone();
        let token = token.clone();
        use_effect_with_deps(
            move |_| {
                *token.borrow_mut() += 1;
                slider.dispatch(SliderAction::Reset);
                || ()
            },
            props.seq,
        );
    }

    // Moves and releases are tracked on the document so a drag survives leaving
    // the container.
    {
        let slider = slider.clone();
        let container = container.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let listeners: Vec<(&'static str, Closure<dyn Fn(Event)>)> = [
                    ("mousemove", Phase::Move),
                    ("touchmove", Phase::Move),
                    ("mouseup", Phase::Up),
                    ("touchend", Phase::Up),
                ]
                .into_iter()
                .map(|(name, phase)| {
                    let slider = slider.clone();
                    let container = container.clone();
                    let callback = Closure::<dyn Fn(Event)>::new(move |event: Event| {
                        let input = pointer_input(&event, phase, HitTarget::Elsewhere);
                        slider.dispatch(SliderAction::Pointer(input, bounds_of(&container)));
                    });
                    (name, callback)
                })
                .collect();
                if let Some(document) = document.as_ref() {
                    for (name, callback) in &listeners {
                        if document
                            .add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            log::warn!("Could not register {} listener", name);
                        }
                    }
                }
                move || {
                    if let Some(document) = document {
                        for (name, callback) in &listeners {
                            let _ = document
                                .remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref());
                        }
                    }
                }
            },
            (),
        );
    }

    let start_drag = {
        let slider = slider.clone();
        let container = container.clone();
        let token = token.clone();
        move |event: &Event| {
            event.prevent_default();
            *token.borrow_mut() += 1;
            let input = pointer_input(event, Phase::Down, HitTarget::Divider);
            slider.dispatch(SliderAction::Pointer(input, bounds_of(&container)));
        }
    };
    let on_mouse_down = {
        let start_drag = start_drag.clone();
        Callback::from(move |e: MouseEvent| start_drag(e.as_ref()))
    };
    let on_touch_start = Callback::from(move |e: TouchEvent| start_drag(e.as_ref()));

    let on_click = {
        let slider = slider.clone();
        let container = container.clone();
        Callback::from(move |e: MouseEvent| {
            let target = hit_target(&e, &container);
            slider.dispatch(SliderAction::Click {
                x: e.client_x() as f64,
                target,
                bounds: bounds_of(&container),
            });
        })
    };

    let animate_to = |target: f64| {
        let slider = slider.clone();
        let token = token.clone();
        Callback::from(move |_: MouseEvent| {
            let my_token = {
                let mut current = token.borrow_mut();
                *current += 1;
                *current
            };
            let animation = Animation::new(slider.position(), target, dom::now_ms());
            run_animation(animation, token.clone(), my_token, slider.clone());
        })
    };
    let show_before = animate_to(0.0);
    let show_after = animate_to(100.0);

    let styles = slider.styles();

    html! {
        <div>
            <div
                ref={container}
                id="beforeAfterSlider"
                class="relative w-full overflow-hidden rounded-lg select-none cursor-pointer"
                onclick={on_click}
            >
                <img src={props.before_url.clone()} alt="Before" class="w-full block" draggable="false" />
                <div class="absolute inset-0 overflow-hidden" style={styles.overlay_style()}>
                    <img src={props.after_url.clone()} alt="After" class="w-full h-full object-cover" draggable="false" />
                </div>
                <div
                    class={classes!(DIVIDER_CLASS, "absolute", "top-0", "bottom-0", "w-1", "bg-white", "cursor-ew-resize", "-translate-x-1/2")}
                    style={styles.divider_style()}
                    onmousedown={on_mouse_down}
                    ontouchstart={on_touch_start}
                >
                    <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white shadow-lg flex items-center justify-center">
                        <span class="text-gray-600">{"⇔"}</span>
                    </div>
                </div>
                <span class="absolute top-2 left-2 bg-black bg-opacity-60 text-white text-xs px-2 py-1 rounded">{"Before"}</span>
                <span class="absolute top-2 right-2 bg-black bg-opacity-60 text-white text-xs px-2 py-1 rounded">{"After"}</span>
            </div>
            <div class="flex justify-center gap-4 mt-4">
                <button class="px-4 py-2 bg-gray-200 rounded-lg hover:bg-gray-300" onclick={show_before}>
                    {"ビフォーを表示"}
                </button>
                <button class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700" onclick={show_after}>
                    {"アフターを表示"}
                </button>
            </div>
        </div>
    }
}
