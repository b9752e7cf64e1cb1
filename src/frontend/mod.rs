mod about;
mod contact;
mod dom;
mod footer;
mod hero;
mod navigation;
mod preloader;
mod projects;
mod scene;

use tracing::info;
use web_sys::window;
use yew::prelude::*;

use about::About;
use contact::Contact;
use dom::{enable_smooth_scroll, lock_scroll, request_remeasure, Timeout};
use footer::Footer;
use hero::Hero;
use navigation::Navigation;
use preloader::Preloader;
use projects::Projects;

/// Delay before scroll triggers re-measure against the revealed layout.
const REMEASURE_DELAY_MS: i32 = 100;

#[function_component(App)]
fn app() -> Html {
    let loading = use_state_eq(|| true);

    {
        let is_loading = *loading;
        use_effect_with(is_loading, move |is_loading| {
            lock_scroll(*is_loading);
            let remeasure = (!*is_loading).then(|| {
                enable_smooth_scroll();
                info!("page_revealed");
                Timeout::new(REMEASURE_DELAY_MS, request_remeasure)
            });

            move || {
                drop(remeasure);
                lock_scroll(false);
            }
        });
    }

    let on_complete = {
        let loading = loading.clone();
        Callback::from(move |_| loading.set(false))
    };

    html! {
        <>
            if *loading {
                <Preloader on_complete={on_complete} />
            }
            <div class={classes!("page", (*loading).then_some("is-loading"))}>
                <Navigation />
                <main id="content">
                    <Hero />
                    <About />
                    <Projects />
                    <Contact />
                </main>
                <Footer />
            </div>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
