use yew::prelude::*;

use super::scene::use_scene;
use crate::content;
use crate::preloader::{orb_target, PreloaderScene, ORB_COUNT, PROGRESS, ROOT, TITLE};

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub on_complete: Callback<()>,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let root = use_node_ref();
    {
        let on_complete = props.on_complete.clone();
        use_scene(root.clone(), move || {
            PreloaderScene::new(move || on_complete.emit(()))
        });
    }

    html! {
        <div class="preloader" ref={root} data-motion={ROOT} role="status" aria-live="polite">
            <div class="preloader-orbs" aria-hidden="true">
                { for (0..ORB_COUNT).map(|index| html! {
                    <span
                        class={classes!("preloader-orb", format!("preloader-orb-{index}"))}
                        data-motion={orb_target(index)}
                    />
                }) }
            </div>
            <div class="preloader-body">
                <div class="preloader-title" data-motion={TITLE}>
                    <h1 class="preloader-name gradient-text">{content::OWNER}</h1>
                    <p class="preloader-subtitle">{content::PRELOADER_SUBTITLE}</p>
                </div>
                <div class="preloader-track">
                    <div class="preloader-progress" data-motion={PROGRESS} />
                </div>
            </div>
        </div>
    }
}
