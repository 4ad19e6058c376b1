//! Sticky page header: brand mark, section nav with the wallets panel, the
//! language switcher and the theme toggle.
//!
//! The wallets panel is a plain in-flow dropdown: it lives inside the nav
//! container, is positioned absolutely under it and closes when a press lands
//! anywhere outside that container. The language switcher next to it is the
//! portal-based `Select`, which escapes the header's backdrop stacking
//! context instead.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::select::{Select, SelectContent, SelectItem, SelectTrigger, SelectValue};
use crate::config;
use crate::i18n::{Lang, Translator};

const HEADER_CSS: &str = r#"
.site-header {
    position: sticky;
    top: 0;
    z-index: 40;
    backdrop-filter: blur(16px);
    border-bottom: 1px solid var(--header-border);
    background: var(--header-bg);
}
.site-header-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}
.brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 600;
    letter-spacing: 0.025em;
}
.brand-mark {
    height: 2rem;
    width: 2rem;
    border-radius: 12px;
    background: #0d9488;
    display: grid;
    place-items: center;
    color: #fff;
}
.brand-accent { color: var(--accent); }
.header-nav {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    font-size: 0.875rem;
    position: relative;
}
.header-nav a:hover { opacity: 0.8; }
.wallets-button {
    display: inline-flex;
    align-items: center;
    gap: 0.35rem;
    padding: 0.375rem 0.75rem;
    border: none;
    border-radius: 999px;
    background: var(--chip-bg);
    color: inherit;
    font: inherit;
    cursor: pointer;
}
.wallets-button:hover { opacity: 0.9; }
.wallets-panel {
    position: absolute;
    top: 3rem;
    left: 0;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 0.75rem;
    padding: 0.75rem;
    border-radius: 16px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    background: var(--panel-bg);
    border: 1px solid var(--panel-border);
}
.wallet-tile {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem;
    border-radius: 12px;
    background: var(--tile-bg);
    min-width: 10rem;
}
.wallet-tile-icon {
    height: 2rem;
    width: 2rem;
    display: grid;
    place-items: center;
    border-radius: 8px;
}
.wallet-tile-name { font-size: 0.875rem; font-weight: 500; }
.wallet-tile-chains { font-size: 0.75rem; color: var(--fine-text); }
.lang-select { width: 160px; min-width: 160px; }
.lang-trigger {
    border: 1px solid var(--toggle-border);
    border-radius: 12px;
    background: var(--toggle-bg);
}
.theme-toggle {
    height: 2.5rem;
    width: 2.5rem;
    display: grid;
    place-items: center;
    border-radius: 16px;
    border: 1px solid var(--toggle-border);
    background: var(--toggle-bg);
    color: inherit;
    cursor: pointer;
}
.header-cta {
    border: none;
    border-radius: 16px;
    padding: 0.6rem 1.1rem;
    background: var(--accent-strong);
    color: #fff;
    font: inherit;
    cursor: pointer;
}
.header-cta:hover { opacity: 0.9; }
@media (max-width: 768px) {
    .header-nav { display: none; }
}
"#;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub translator: Translator,
    pub lang: Lang,
    pub on_lang_change: Callback<Lang>,
    pub is_dark: bool,
    pub on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let t = props.translator;
    let wallets_open = use_state(|| false);
    let nav_ref = use_node_ref();

    let on_wallets_click = {
        let wallets_open = wallets_open.clone();
        Callback::from(move |_: MouseEvent| {
            wallets_open.set(!*wallets_open);
        })
    };

    // Close the wallets panel on any press outside the nav container. The
    // panel sits inside the container, so presses on it survive.
    {
        let open = *wallets_open;
        let wallets_open = wallets_open.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |open| {
                let document = web_sys::window().and_then(|window| window.document());
                let destructor: Box<dyn FnOnce()> = match (*open, document) {
                    (true, Some(document)) => {
                        let callback =
                            Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
                                let target = event
                                    .target()
                                    .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
                                if let Some(nav) = nav_ref.cast::<Element>() {
                                    if !nav.contains(target.as_ref()) {
                                        wallets_open.set(false);
                                    }
                                }
                            });
                        document
                            .add_event_listener_with_callback(
                                "mousedown",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        Box::new(move || {
                            if let Some(document) =
                                web_sys::window().and_then(|window| window.document())
                            {
                                document
                                    .remove_event_listener_with_callback(
                                        "mousedown",
                                        callback.as_ref().unchecked_ref(),
                                    )
                                    .unwrap();
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            open,
        );
    }

    let on_lang_pick = {
        let on_lang_change = props.on_lang_change.clone();
        Callback::from(move |code: String| {
            on_lang_change.emit(Lang::from_code(&code));
        })
    };

    let menu_theme = if props.is_dark { "menu-dark" } else { "menu-light" };

    html! {
        <header class="site-header">
            <style>{HEADER_CSS}</style>
            <div class="site-header-inner">
                <div class="brand">
                    <div class="brand-mark"><i class="fas fa-wallet"></i></div>
                    <span>{"Wallet"}<span class="brand-accent">{"BuyBack"}</span></span>
                </div>
                <div class="header-nav" ref={nav_ref}>
                    <button class="wallets-button" onclick={on_wallets_click}>
                        { t.t("nav_wallets") }
                        <i class="fas fa-chevron-down"></i>
                    </button>
                    <a href="#how">{ t.t("nav_how") }</a>
                    <a href="#features">{ t.t("nav_features") }</a>
                    <a href="#form">{ t.t("nav_form") }</a>
                    if *wallets_open {
                        <div class="wallets-panel">
                            { for config::WALLET_BRANDS.iter().map(|brand| html! {
                                <div class="wallet-tile">
                                    <div
                                        class="wallet-tile-icon"
                                        style={format!("background-color: {}22; color: {};", brand.color, brand.color)}
                                    >
                                        <i class={brand.icon}></i>
                                    </div>
                                    <div>
                                        <div class="wallet-tile-name" style={format!("color: {};", brand.color)}>
                                            { brand.name }
                                        </div>
                                        <div class="wallet-tile-chains">{ brand.chains }</div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    }
                </div>
                <div class="lang-select">
                    <Select
                        value={Some(props.lang.code().to_string())}
                        on_value_change={on_lang_pick}
                    >
                        <SelectTrigger class={classes!("lang-trigger")}>
                            <SelectValue placeholder={props.lang.code().to_string()} />
                        </SelectTrigger>
                        <SelectContent class={classes!(menu_theme)}>
                            { for Lang::ALL.iter().map(|lang| html! {
                                <SelectItem value={lang.code().to_string()}>
                                    { lang.native_name() }
                                </SelectItem>
                            }) }
                        </SelectContent>
                    </Select>
                </div>
                <a href="#form"><button class="header-cta">{ t.t("hero_cta") }</button></a>
                <button
                    class="theme-toggle"
                    aria-label="Toggle theme"
                    onclick={props.on_toggle_theme.clone()}
                >
                    if props.is_dark {
                        <i class="fas fa-sun"></i>
                    } else {
                        <i class="fas fa-moon"></i>
                    }
                </button>
            </div>
        </header>
    }
}
