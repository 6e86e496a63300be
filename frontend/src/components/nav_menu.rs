use yew::prelude::*;

use crate::state::navigation::Section;
use crate::state::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavMenuProps {
    pub theme: Theme,
    /// Bottom bar layout for small screens instead of the floating side rail.
    #[prop_or_default]
    pub compact: bool,
    pub on_navigate: Callback<Section>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(NavMenu)]
pub fn nav_menu(props: &NavMenuProps) -> Html {
    let (nav_class, list_class) = if props.compact {
        ("section-nav section-nav-mobile", "nav-list nav-list-row")
    } else {
        ("section-nav section-nav-side", "nav-list")
    };

    let on_toggle_theme = props.on_toggle_theme.reform(|_: MouseEvent| ());

    html! {
        <nav class={nav_class}>
            <div class="nav-panel">
                <ul class={list_class}>
                    { for Section::ALL.into_iter().map(|section| {
                        let onclick = props.on_navigate.reform(move |_: MouseEvent| section);
                        html! {
                            <li key={section.anchor()}>
                                <button class="nav-button" title={section.label()} {onclick}>
                                    <i class={section.icon()}></i>
                                    <span class="nav-tooltip">{section.label()}</span>
                                </button>
                            </li>
                        }
                    }) }
                    <li>
                        <button
                            class="nav-button"
                            title={props.theme.toggle_title()}
                            onclick={on_toggle_theme}
                        >
                            <i class={props.theme.toggle_icon()}></i>
                            <span class="nav-tooltip">{props.theme.toggle_label(props.compact)}</span>
                        </button>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
