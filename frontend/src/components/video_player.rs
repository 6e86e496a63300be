use web_sys::{EventTarget, HtmlVideoElement};
use yew::prelude::*;

use crate::config;
use crate::state::video::{self, VideoAction, VideoState};

/// Looping presentation video with a play/pause and volume overlay.
#[function_component(VideoPlayer)]
pub fn video_player() -> Html {
    let state = use_reducer(VideoState::default);
    let video_ref = use_node_ref();

    // Keep the element in step with the state after every transition.
    {
        let video_ref = video_ref.clone();
        let synced = use_mut_ref(|| None::<VideoState>);
        use_effect_with_deps(
            move |next| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    let previous = *synced.borrow();
                    video::sync(&video, previous, *next);
                    *synced.borrow_mut() = Some(*next);
                }
                || ()
            },
            *state,
        );
    }

    let dispatch = {
        let state = state.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |action: VideoAction| {
            if video_ref.cast::<HtmlVideoElement>().is_none() {
                log::debug!("Video not mounted, ignoring {:?}", action);
                return;
            }
            state.dispatch(action);
        })
    };

    let on_toggle_playback = dispatch.reform(|_: MouseEvent| VideoAction::TogglePlayback);
    let on_cycle_volume = dispatch.reform(|_: MouseEvent| VideoAction::CycleVolume);

    // Yew delegates listeners to the app root, so `current_target` is not the
    // video; compare against the element itself.
    let on_surface_click = {
        let video_ref = video_ref.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            let surface = video_ref.get().map(EventTarget::from);
            if video::is_surface_click(e.target().as_ref(), surface.as_ref()) {
                dispatch.emit(VideoAction::TogglePlayback);
            }
        })
    };

    html! {
        <section class="video-frame">
            <video
                ref={video_ref}
                class="presentation-video"
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                onclick={on_surface_click}
            >
                <source src={config::PRESENTATION_VIDEO} type="video/mp4" />
                <p>{"Tu navegador no soporta videos HTML5."}</p>
            </video>
            <div class="video-controls">
                <button class="video-control" onclick={on_toggle_playback}>
                    <i class={state.playback.icon()}></i>
                </button>
                <button class="video-control" onclick={on_cycle_volume}>
                    <i class={state.volume.icon()}></i>
                </button>
            </div>
        </section>
    }
}
