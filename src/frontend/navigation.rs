use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use super::dom::{client_rect, now_seconds, scroll_y, Timeout, WindowListener};
use super::scene::{use_scene, SceneHandle};
use crate::content::{self, NAV_ITEMS};
use crate::motion::AnimationContext;
use crate::navigation::{
    menu_item_target, pointer_offset, release_tilt, tilt_towards, HeaderState, MenuState, MENU,
    SCROLL_DEBOUNCE_SECONDS,
};

/// Nav links plus the "Hire Me" entry.
const MENU_ITEM_COUNT: usize = NAV_ITEMS.len() + 1;

// one spare millisecond so the callback never lands before the deadline
fn debounce_millis() -> i32 {
    (SCROLL_DEBOUNCE_SECONDS * 1000.0).ceil() as i32 + 1
}

#[hook]
fn use_scrolled_header() -> bool {
    let scrolled = use_state_eq(|| false);
    let header = use_mut_ref(HeaderState::new);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

            let listener = WindowListener::new("scroll", {
                let header = header.clone();
                let timer = timer.clone();
                move || {
                    header.borrow_mut().on_scroll(now_seconds());
                    let header = header.clone();
                    let scrolled = scrolled.clone();
                    // replacing the pending timeout clears it
                    *timer.borrow_mut() = Some(Timeout::new(debounce_millis(), move || {
                        let elapsed = header.borrow_mut().timer_elapsed(now_seconds(), scroll_y());
                        if let Some(is_scrolled) = elapsed {
                            scrolled.set(is_scrolled);
                        }
                    }));
                }
            });

            move || {
                drop(listener);
                timer.borrow_mut().take();
                header.borrow_mut().cancel();
            }
        });
    }

    *scrolled
}

fn tilt_handlers(
    scene: &SceneHandle<AnimationContext>,
    target: String,
) -> (Callback<MouseEvent>, Callback<MouseEvent>) {
    let onmousemove = {
        let scene = scene.clone();
        let target = target.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let (dx, dy) = pointer_offset(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                client_rect(&element),
            );
            scene.with_mut(|context| tilt_towards(context, &target, dx, dy));
        })
    };

    let onmouseleave = {
        let scene = scene.clone();
        Callback::from(move |_: MouseEvent| {
            scene.with_mut(|context| release_tilt(context, &target));
        })
    };

    (onmousemove, onmouseleave)
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let root = use_node_ref();
    let scene = use_scene(root.clone(), || {
        let mut context = AnimationContext::new("navigation");
        MenuState::install(&mut context);
        context
    });
    let menu = use_state_eq(MenuState::default);
    let scrolled = use_scrolled_header();

    let on_toggle = {
        let menu = menu.clone();
        let scene = scene.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            if let Some(open) = scene.with_mut(|context| next.toggle(context, MENU_ITEM_COUNT)) {
                debug!(open, "menu_toggled");
                menu.set(next);
            }
        })
    };

    let menu_links: Html = NAV_ITEMS.iter().enumerate().map(|(index, item)| {
        let target = menu_item_target(index);
        let (onmousemove, onmouseleave) = tilt_handlers(&scene, target.clone());
        html! {
            <li>
                <a
                    class="menu-link"
                    href={item.href}
                    data-motion={target}
                    onclick={on_toggle.clone()}
                    onmousemove={onmousemove}
                    onmouseleave={onmouseleave}
                >
                    {item.name}
                </a>
            </li>
        }
    }).collect();

    let hire_target = menu_item_target(NAV_ITEMS.len());
    let (hire_move, hire_leave) = tilt_handlers(&scene, hire_target.clone());

    html! {
        <header
            ref={root}
            class={classes!("site-header", scrolled.then_some("is-scrolled"))}
        >
            <nav class="nav-bar" aria-label="Primary">
                <a class="brand gradient-text" href="#home">{content::BRAND}</a>
                <ul class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <li><a class="nav-link" href={item.href}>{item.name}</a></li>
                    }) }
                </ul>
                <a class="button button-primary nav-cta" href="#contact">{"Hire Me"}</a>
                <button
                    class={classes!("menu-toggle", menu.is_open().then_some("is-open"))}
                    type="button"
                    aria-label={menu.toggle_label()}
                    aria-expanded={menu.is_open().to_string()}
                    aria-controls="mobile-menu"
                    onclick={on_toggle.clone()}
                >
                    <span aria-hidden="true">{ if menu.is_open() { "✕" } else { "☰" } }</span>
                </button>
            </nav>
            <div
                id="mobile-menu"
                class="mobile-menu"
                data-motion={MENU}
                aria-hidden={(!menu.is_open()).to_string()}
            >
                <ul class="menu-list">
                    { menu_links }
                    <li>
                        <a
                            class="button button-primary menu-link"
                            href="#contact"
                            data-motion={hire_target}
                            onclick={on_toggle}
                            onmousemove={hire_move}
                            onmouseleave={hire_leave}
                        >
                            {"Hire Me"}
                        </a>
                    </li>
                </ul>
            </div>
        </header>
    }
}
