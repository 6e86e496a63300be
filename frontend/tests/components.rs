#![cfg(target_arch = "wasm32")]

use curcuma_care::components::faq_accordion::FaqAccordion;
use curcuma_care::components::video_player::VideoPlayer;
use curcuma_care::content::catalog::FAQS;
use curcuma_care::state::video::{self, VideoAction, VideoState};
use curcuma_care::utils::dom;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlVideoElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root() -> Element {
    let doc = dom::document().unwrap();
    let root = doc.create_element("div").unwrap();
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

/// Lets the scheduler render and run effects.
async fn settle() {
    TimeoutFuture::new(20).await;
}

fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn class_of(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .unwrap()
        .and_then(|el| el.get_attribute("class"))
        .unwrap_or_default()
}

const PLAYBACK_ICON: &str = ".video-control:nth-child(1) i";
const VOLUME_BUTTON: &str = ".video-control:nth-child(2)";
const VOLUME_ICON: &str = ".video-control:nth-child(2) i";

#[wasm_bindgen_test]
fn volume_sync_sets_muted_and_level_on_a_real_video() {
    let video: HtmlVideoElement = dom::document()
        .unwrap()
        .create_element("video")
        .unwrap()
        .dyn_into()
        .unwrap();

    let mut state = VideoState::default();
    let mut muted = Vec::new();
    let mut levels = Vec::new();
    for _ in 0..3 {
        state = state.next(VideoAction::CycleVolume);
        video::sync_volume(&video, state.volume);
        muted.push(video.muted());
        levels.push(video.volume());
    }

    assert_eq!(muted, vec![false, false, true]);
    assert_eq!(levels, vec![0.5, 1.0, 0.0]);
}

#[wasm_bindgen_test]
async fn player_mounts_muted_and_volume_button_cycles() {
    let root = mount_root();
    let _app = yew::Renderer::<VideoPlayer>::with_root(root.clone()).render();
    settle().await;

    let video: HtmlVideoElement = root
        .query_selector("video")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(video.muted());
    assert_eq!(class_of(&root, PLAYBACK_ICON), "fas fa-pause");
    assert_eq!(class_of(&root, VOLUME_ICON), "fas fa-volume-xmark");

    let mut muted = Vec::new();
    let mut levels = Vec::new();
    let mut icons = Vec::new();
    for _ in 0..3 {
        click(&root, VOLUME_BUTTON);
        settle().await;
        muted.push(video.muted());
        levels.push(video.volume());
        icons.push(class_of(&root, VOLUME_ICON));
    }

    assert_eq!(muted, vec![false, false, true]);
    assert_eq!(levels, vec![0.5, 1.0, 0.0]);
    assert_eq!(
        icons,
        vec!["fas fa-volume-low", "fas fa-volume-high", "fas fa-volume-xmark"]
    );
    assert_eq!(class_of(&root, PLAYBACK_ICON), "fas fa-pause");

    root.remove();
}

#[wasm_bindgen_test]
async fn only_clicks_on_the_video_itself_toggle_playback() {
    let root = mount_root();
    let _app = yew::Renderer::<VideoPlayer>::with_root(root.clone()).render();
    settle().await;

    // Bubbles through the video, but the target is the fallback paragraph.
    click(&root, "video p");
    settle().await;
    assert_eq!(class_of(&root, PLAYBACK_ICON), "fas fa-pause");

    click(&root, "video");
    settle().await;
    assert_eq!(class_of(&root, PLAYBACK_ICON), "fas fa-play");
    assert_eq!(class_of(&root, VOLUME_ICON), "fas fa-volume-xmark");

    click(&root, ".video-control:nth-child(1)");
    settle().await;
    assert_eq!(class_of(&root, PLAYBACK_ICON), "fas fa-pause");

    root.remove();
}

#[wasm_bindgen_test]
async fn reclicking_the_open_question_hides_its_answer() {
    let root = mount_root();
    let _app = yew::Renderer::<FaqAccordion>::with_root(root.clone()).render();
    settle().await;

    assert!(root.query_selector(".faq-answer").unwrap().is_none());

    click(&root, ".faq-card:nth-child(2) .faq-question");
    settle().await;
    assert!(root.query_selector(".faq-card:nth-child(2) .faq-answer").unwrap().is_some());

    click(&root, ".faq-card:nth-child(3) .faq-question");
    settle().await;
    assert!(root.query_selector(".faq-card:nth-child(2) .faq-answer").unwrap().is_none());
    let answer = root
        .query_selector(".faq-card:nth-child(3) .faq-answer")
        .unwrap()
        .and_then(|el| el.text_content());
    assert_eq!(answer.as_deref(), Some(FAQS[2].answer));
    assert!(class_of(&root, ".faq-card:nth-child(3) .faq-question i").contains("fa-chevron-up"));

    click(&root, ".faq-card:nth-child(3) .faq-question");
    settle().await;
    assert!(root.query_selector(".faq-answer").unwrap().is_none());
    assert!(class_of(&root, ".faq-card:nth-child(3) .faq-question i").contains("fa-chevron-down"));

    root.remove();
}
