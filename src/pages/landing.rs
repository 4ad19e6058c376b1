//! The main landing page: hero with the estimate card, buyback ticker,
//! feature tiles, the four-step explainer and the long-form lead section.
//! Theme and language are chosen here and persist across visits.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::header::Header;
use crate::components::select::{Select, SelectContent, SelectItem, SelectTrigger, SelectValue};
use crate::components::ticker::TickerRail;
use crate::config;
use crate::i18n::{self, Lang, Translator};
use crate::utils::validate::can_submit;
use crate::Route;

const LANDING_CSS: &str = r#"
.landing-root {
    position: relative;
    min-height: 100vh;
    color: var(--page-text);
    background: var(--page-bg);
}
.theme-dark {
    --page-bg: linear-gradient(135deg, #0b1020, #0a0f1a 50%, #000);
    --page-text: #f3f4f6;
    --fine-text: #9ca3af;
    --accent: #5eead4;
    --accent-strong: #14b8a6;
    --header-bg: rgba(11, 15, 26, 0.8);
    --header-border: #1f2937;
    --chip-bg: rgba(255, 255, 255, 0.1);
    --card-bg: rgba(13, 18, 34, 0.8);
    --card-border: rgba(255, 255, 255, 0.1);
    --input-bg: #0b1020;
    --input-border: rgba(255, 255, 255, 0.1);
    --panel-bg: rgba(11, 16, 32, 0.95);
    --panel-border: rgba(255, 255, 255, 0.1);
    --tile-bg: rgba(255, 255, 255, 0.05);
    --toggle-bg: rgba(255, 255, 255, 0.05);
    --toggle-border: rgba(255, 255, 255, 0.15);
    --rail-bg: rgba(255, 255, 255, 0.05);
    --rail-border: rgba(255, 255, 255, 0.1);
    --label-text: #e5e7eb;
    --check-accent: #2dd4bf;
    --thanks-text: #5eead4;
}
.theme-light {
    --page-bg: #fff;
    --page-text: #111827;
    --fine-text: #4b5563;
    --accent: #0d9488;
    --accent-strong: #0d9488;
    --header-bg: rgba(255, 255, 255, 0.8);
    --header-border: #e5e7eb;
    --chip-bg: #f3f4f6;
    --card-bg: #fff;
    --card-border: #e5e7eb;
    --input-bg: #fff;
    --input-border: #d1d5db;
    --panel-bg: #fff;
    --panel-border: #e5e7eb;
    --tile-bg: #f9fafb;
    --toggle-bg: #fff;
    --toggle-border: #e5e7eb;
    --rail-bg: #f9fafb;
    --rail-border: #e5e7eb;
    --label-text: #1f2937;
    --check-accent: #0d9488;
    --thanks-text: #0f766e;
}
.menu-dark {
    background: #0b1020;
    border: 1px solid rgba(255, 255, 255, 0.1);
    color: #f3f4f6;
}
.menu-light {
    background: #fff;
    border: 1px solid #e5e7eb;
    color: #111827;
}
.section {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
}
.hero-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
    padding: 6rem 1rem;
    position: relative;
}
.hero-copy { display: grid; gap: 1.5rem; position: relative; }
.hero-card-col { position: relative; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    width: fit-content;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    background: var(--chip-bg);
    font-size: 0.75rem;
    letter-spacing: 0.025em;
}
.hero-title {
    margin: 0;
    font-size: 3.25rem;
    font-weight: 700;
    line-height: 1.05;
}
.hero-overlay {
    position: absolute;
    inset: 0;
    background: #000;
    pointer-events: none;
}
.wallet-chips { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.wallet-chip {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.375rem 0.75rem;
    border-radius: 999px;
    color: #fff;
    font-size: 0.875rem;
    font-weight: 500;
}
.badge-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; font-size: 0.875rem; }
.badge-chip { padding: 0.375rem 0.75rem; border-radius: 999px; background: var(--chip-bg); }
.hero-actions { display: flex; flex-wrap: wrap; align-items: center; gap: 1rem; }
.cta-button {
    border: none;
    border-radius: 16px;
    padding: 0.7rem 1.3rem;
    background: var(--accent-strong);
    color: #fff;
    font: inherit;
    cursor: pointer;
}
.cta-button:hover { opacity: 0.9; }
.cta-button:disabled { opacity: 0.5; cursor: not-allowed; }
.fine-hint {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.75rem;
    color: var(--fine-text);
}
.scroll-cue {
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
    bottom: 1rem;
    font-size: 0.75rem;
    color: var(--fine-text);
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.card {
    background: var(--card-bg);
    border: 1px solid var(--card-border);
    border-radius: 24px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    overflow: hidden;
}
.card-header { padding: 1.5rem 1.5rem 0.5rem; display: flex; align-items: center; justify-content: space-between; }
.card-header-lead { display: flex; align-items: center; gap: 0.5rem; }
.card-header-icon {
    height: 2rem;
    width: 2rem;
    display: grid;
    place-items: center;
    border-radius: 12px;
    background: var(--accent-strong);
    color: #fff;
}
.card-kicker { margin: 0; font-size: 0.875rem; color: var(--fine-text); }
.card-title { margin: 0; font-size: 1.125rem; font-weight: 500; }
.card-body { padding: 1rem 1.5rem; display: grid; gap: 1rem; }
.card-footer {
    padding: 1rem 1.5rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.75rem;
    flex-wrap: wrap;
}
.field { display: grid; gap: 0.5rem; }
.field-label { font-size: 0.875rem; color: var(--label-text); }
.input-chrome {
    background: var(--input-bg);
    border: 1px solid var(--input-border);
    border-radius: 12px;
    color: var(--page-text);
}
.text-input {
    background: var(--input-bg);
    border: 1px solid var(--input-border);
    border-radius: 12px;
    color: var(--page-text);
    font: inherit;
    font-size: 0.9rem;
    padding: 0.55rem 0.8rem;
    width: 100%;
}
.text-input::placeholder { color: #9ca3af; }
.note-input { min-height: 96px; resize: vertical; }
.agree-row {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    font-size: 0.875rem;
    color: var(--label-text);
}
.agree-row input { margin-top: 0.25rem; accent-color: var(--check-accent); }
.thanks-line { margin-top: 1rem; font-size: 0.875rem; color: var(--thanks-text); }
.features-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
    padding-bottom: 4rem;
}
.feature-card { padding: 1.5rem; }
.feature-icon {
    height: 2.5rem;
    width: 2.5rem;
    display: grid;
    place-items: center;
    border-radius: 12px;
    background: var(--chip-bg);
    color: var(--accent);
    margin-bottom: 1rem;
}
.feature-title { margin: 0 0 0.5rem; font-size: 1.125rem; font-weight: 400; }
.feature-text { margin: 0; font-size: 0.875rem; line-height: 1.6; color: var(--fine-text); }
.how-section { padding: 5rem 1rem; }
.steps-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
.step-card { position: relative; overflow: visible; padding: 1.5rem; }
.step-ghost-num {
    position: absolute;
    top: 0.5rem;
    right: 0.75rem;
    font-size: 5.5rem;
    font-weight: 900;
    line-height: 0.9;
    letter-spacing: -0.05em;
    color: rgba(128, 128, 128, 0.12);
    user-select: none;
    pointer-events: none;
}
.step-head { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
.step-icon {
    height: 2.5rem;
    width: 2.5rem;
    display: grid;
    place-items: center;
    border-radius: 12px;
    background: var(--chip-bg);
    color: var(--accent);
}
.step-kicker { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--fine-text); }
.step-title { margin: 0 0 0.5rem; font-size: 1.25rem; font-weight: 600; position: relative; }
.step-text { margin: 0; font-size: 0.875rem; line-height: 1.6; color: var(--fine-text); position: relative; }
.form-section { padding: 4rem 1rem; display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; align-items: start; }
.form-pitch-title { margin: 0 0 1rem; font-size: 2.25rem; font-weight: 700; }
.form-pitch-sub { max-width: 36rem; margin: 0 0 1.5rem; color: var(--fine-text); }
.form-pitch-list { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.75rem; font-size: 0.875rem; color: var(--fine-text); }
.form-pitch-list li { display: flex; gap: 0.5rem; }
.lead-form { padding: 1.5rem; display: grid; gap: 1rem; }
.site-footer { margin-top: 1rem; border-top: 1px solid var(--card-border); }
.site-footer-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 2rem 1rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
    align-items: center;
}
.footer-note { margin: 0; font-size: 0.75rem; color: var(--fine-text); }
.footer-nav { display: flex; justify-content: flex-end; gap: 1rem; font-size: 0.875rem; }
.footer-nav a:hover { opacity: 0.8; }
@media (max-width: 768px) {
    .hero-grid { grid-template-columns: 1fr; padding: 3.5rem 1rem; }
    .hero-title { font-size: 2rem; }
    .features-grid { grid-template-columns: 1fr; }
    .steps-grid { grid-template-columns: 1fr; }
    .form-section { grid-template-columns: 1fr; }
    .site-footer-inner { grid-template-columns: 1fr; }
    .footer-nav { justify-content: flex-start; }
}
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    let is_dark = use_state(|| true);
    let lang = use_state(i18n::initial_lang);
    let dim_opacity = use_state(|| 0.0);

    let network = use_state(|| "ethereum".to_string());
    let address = use_state(String::new);
    let contact = use_state(String::new);
    let note = use_state(String::new);
    let agree = use_state(|| false);
    let submitted = use_state(|| false);

    // Restore the saved theme once on mount.
    {
        let is_dark = is_dark.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if let Ok(Some(storage)) = window.local_storage() {
                        if let Ok(Some(saved)) = storage.get_item(config::THEME_STORAGE_KEY) {
                            match saved.as_str() {
                                "light" => is_dark.set(false),
                                "dark" => is_dark.set(true),
                                _ => {}
                            }
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    {
        let is_dark = *is_dark;
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if let Ok(Some(storage)) = window.local_storage() {
                        let _ = storage.set_item(
                            config::THEME_STORAGE_KEY,
                            if is_dark { "dark" } else { "light" },
                        );
                    }
                }
                || ()
            },
            is_dark,
        );
    }

    {
        let lang = *lang;
        use_effect_with_deps(
            move |_| {
                i18n::store_lang(lang);
                || ()
            },
            lang,
        );
    }

    // Dim the hero slightly as the visitor scrolls away from it.
    {
        let dim_opacity = dim_opacity.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let dim_opacity = dim_opacity.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    let factor = (scroll_y / 500.0).min(1.0);
                                    dim_opacity.set(factor * 0.35);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let t = Translator::new(*lang);

    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |picked: Lang| {
            lang.set(picked);
        })
    };

    let on_toggle_theme = {
        let is_dark = is_dark.clone();
        Callback::from(move |_: MouseEvent| {
            is_dark.set(!*is_dark);
        })
    };

    let on_network_change = {
        let network = network.clone();
        Callback::from(move |key: String| {
            network.set(key);
        })
    };

    let on_address_input = {
        let address = address.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            address.set(input.value());
        })
    };

    let on_contact_input = {
        let contact = contact.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            contact.set(input.value());
        })
    };

    let on_note_input = {
        let note = note.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            note.set(input.value());
        })
    };

    let on_agree_change = {
        let agree = agree.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            agree.set(input.checked());
        })
    };

    let submit_now = {
        let address = address.clone();
        let contact = contact.clone();
        let agree = agree.clone();
        let submitted = submitted.clone();
        Callback::from(move |()| {
            if !can_submit(&address, &contact, *agree) {
                return;
            }
            gloo_console::log!("buyback request captured");
            submitted.set(true);
        })
    };

    let on_card_submit = {
        let submit_now = submit_now.clone();
        Callback::from(move |_: MouseEvent| submit_now.emit(()))
    };

    let onsubmit = {
        let submit_now = submit_now.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit_now.emit(());
        })
    };

    let submittable = can_submit(&address, &contact, *agree);
    let theme_class = if *is_dark { "theme-dark" } else { "theme-light" };
    let menu_theme = if *is_dark { "menu-dark" } else { "menu-light" };
    let year = js_sys::Date::new_0().get_full_year();

    let features = [
        ("fas fa-shield-halved", "feat_transparency_title", "feat_transparency_text"),
        ("fas fa-wallet", "feat_networks_title", "feat_networks_text"),
        ("fas fa-coins", "feat_fast_payout_title", "feat_fast_payout_text"),
    ];
    let steps = [
        ("01", "fas fa-wallet", "step_01", "step_01_text"),
        ("02", "fas fa-wand-magic-sparkles", "step_02", "step_02_text"),
        ("03", "fas fa-shield-halved", "step_03", "step_03_text"),
        ("04", "fas fa-coins", "step_04", "step_04_text"),
    ];

    html! {
        <div class={classes!("landing-root", theme_class)}>
            <style>{LANDING_CSS}</style>

            <Header
                translator={t}
                lang={*lang}
                on_lang_change={on_lang_change}
                is_dark={*is_dark}
                on_toggle_theme={on_toggle_theme}
            />

            <TickerRail />

            <section class="section hero-grid">
                <div
                    class="hero-overlay"
                    style={format!("opacity: {};", *dim_opacity)}
                ></div>
                <div class="hero-copy">
                    <div class="hero-badge">
                        <i class="fas fa-wand-magic-sparkles"></i>
                        <span>{ t.t("hero_badge_fast_estimate") }{" · +$5000"}</span>
                    </div>
                    <h1 class="hero-title">
                        { t.t("hero_title_1") }{" "}
                        <span style={format!("color: {};", config::WALLET_BRANDS[0].color)}>
                            { config::WALLET_BRANDS[0].name }
                        </span>
                        {", "}
                        <span style={format!("color: {};", config::WALLET_BRANDS[1].color)}>
                            { config::WALLET_BRANDS[1].name }
                        </span>
                        {" "}{ t.t("hero_title_and") }{" "}
                        <span style={format!("color: {};", config::WALLET_BRANDS[2].color)}>
                            { config::WALLET_BRANDS[2].name }
                        </span>
                    </h1>
                    <div class="wallet-chips">
                        { for config::WALLET_BRANDS.iter().map(|brand| html! {
                            <div
                                class="wallet-chip"
                                style={format!("background-color: {}; box-shadow: 0 0 22px {}66;", brand.color, brand.color)}
                            >
                                <i class={brand.icon}></i>
                                { brand.name }
                            </div>
                        }) }
                    </div>
                    <div class="badge-chips">
                        <div class="badge-chip">{ t.t("hero_badge_fast_estimate") }</div>
                        <div class="badge-chip">{ t.t("hero_badge_safe") }</div>
                        <div class="badge-chip">{ t.t("hero_badge_fast_payout") }</div>
                    </div>
                    <div class="hero-actions">
                        <a href="#form"><button class="cta-button">{ t.t("hero_cta") }</button></a>
                        <div class="fine-hint">
                            <i class="fas fa-lock"></i>
                            { t.t("seed_safety_hint") }
                        </div>
                    </div>
                </div>
                <div class="hero-card-col">
                    <div class="card">
                        <div class="card-header">
                            <div class="card-header-lead">
                                <div class="card-header-icon"><i class="fas fa-coins"></i></div>
                                <div>
                                    <p class="card-kicker">{ t.t("form_fast_estimate") }</p>
                                    <p class="card-title">{ t.t("form_pre_title") }</p>
                                </div>
                            </div>
                            <div class="fine-hint">{"~ 2 "}{ t.t("minutes_short") }</div>
                        </div>
                        <div class="card-body">
                            <div class="field">
                                <label class="field-label">{ t.t("form_network") }</label>
                                <Select
                                    value={Some((*network).clone())}
                                    on_value_change={on_network_change.clone()}
                                >
                                    <SelectTrigger class={classes!("input-chrome")}>
                                        <SelectValue placeholder={t.t("form_network_placeholder").to_string()} />
                                    </SelectTrigger>
                                    <SelectContent class={classes!(menu_theme)}>
                                        <SelectItem value={"ethereum".to_string()}>{"Ethereum / MetaMask"}</SelectItem>
                                        <SelectItem value={"solana".to_string()}>{"Solana / Phantom"}</SelectItem>
                                        <SelectItem value={"bsc".to_string()}>{"BNB Chain"}</SelectItem>
                                        <SelectItem value={"polygon".to_string()}>{"Polygon"}</SelectItem>
                                        <SelectItem value={"ton".to_string()}>{"TON"}</SelectItem>
                                        <SelectItem value={"other".to_string()}>{ t.t("form_network_other") }</SelectItem>
                                    </SelectContent>
                                </Select>
                            </div>
                            <div class="field">
                                <label class="field-label">{ t.t("form_address_label") }</label>
                                <input
                                    class="text-input"
                                    placeholder={t.t("form_address_placeholder")}
                                    value={(*address).clone()}
                                    oninput={on_address_input.clone()}
                                />
                            </div>
                            <div class="field">
                                <label class="field-label">{ t.t("form_contact_label") }</label>
                                <input
                                    class="text-input"
                                    placeholder={t.t("form_contact_placeholder")}
                                    value={(*contact).clone()}
                                    oninput={on_contact_input.clone()}
                                />
                            </div>
                            <div class="field">
                                <label class="field-label">{ t.t("form_desc_label") }</label>
                                <textarea
                                    class="text-input note-input"
                                    placeholder={t.t("form_desc_placeholder")}
                                    value={(*note).clone()}
                                    oninput={on_note_input.clone()}
                                ></textarea>
                            </div>
                            <label class="agree-row">
                                <input
                                    type="checkbox"
                                    checked={*agree}
                                    onchange={on_agree_change.clone()}
                                />
                                <span>{ t.t("form_owner_confirm") }</span>
                            </label>
                        </div>
                        <div class="card-footer">
                            <div class="fine-hint">
                                <i class="fas fa-shield-halved"></i>
                                { t.t("form_payouts_hint") }
                            </div>
                            <button
                                class="cta-button"
                                onclick={on_card_submit}
                                disabled={!submittable}
                            >
                                <i class="fas fa-paper-plane"></i>
                                {" "}{ t.t("form_submit") }
                            </button>
                        </div>
                    </div>
                    if *submitted {
                        <div class="thanks-line">{ t.t("form_thanks") }</div>
                    }
                </div>
                <div class="scroll-cue">
                    <i class="fas fa-circle-chevron-down"></i>
                    { t.t("hero_scroll") }
                </div>
            </section>

            <section id="features" class="section">
                <div class="features-grid">
                    { for features.iter().map(|&(icon, title, text)| html! {
                        <div class="card feature-card">
                            <div class="feature-icon"><i class={icon}></i></div>
                            <h3 class="feature-title">{ t.t(title) }</h3>
                            <p class="feature-text">{ t.t(text) }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="how" class="section how-section">
                <div class="steps-grid">
                    { for steps.iter().map(|&(num, icon, title, text)| html! {
                        <div class="card step-card">
                            <div class="step-ghost-num">{ num }</div>
                            <div class="step-head">
                                <div class="step-icon"><i class={icon}></i></div>
                                <span class="step-kicker">{ t.t("step_label") }{" "}{ num }</span>
                            </div>
                            <h4 class="step-title">{ t.t(title) }</h4>
                            <p class="step-text">{ t.t(text) }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="form" class="section form-section">
                <div>
                    <h2 class="form-pitch-title">{ t.t("form_title_left") }</h2>
                    <p class="form-pitch-sub">{ t.t("form_subtitle_left") }</p>
                    <ul class="form-pitch-list">
                        <li><i class="fas fa-lock"></i>{ t.t("seed_safety_hint") }</li>
                        <li><i class="fas fa-comment"></i>{ t.t("form_contacts_hint") }</li>
                        <li><i class="fas fa-shield-halved"></i>{ t.t("form_buyback_hint") }</li>
                    </ul>
                </div>
                <form class="card lead-form" onsubmit={onsubmit}>
                    <div class="field">
                        <label class="field-label">{ t.t("form_network") }</label>
                        <Select
                            value={Some((*network).clone())}
                            on_value_change={on_network_change}
                        >
                            <SelectTrigger class={classes!("input-chrome")}>
                                <SelectValue placeholder={t.t("form_network_placeholder").to_string()} />
                            </SelectTrigger>
                            <SelectContent class={classes!(menu_theme)}>
                                <SelectItem value={"ethereum".to_string()}>{"Ethereum / MetaMask"}</SelectItem>
                                <SelectItem value={"solana".to_string()}>{"Solana / Phantom"}</SelectItem>
                                <SelectItem value={"bsc".to_string()}>{"BNB Chain"}</SelectItem>
                                <SelectItem value={"polygon".to_string()}>{"Polygon"}</SelectItem>
                                <SelectItem value={"ton".to_string()}>{"TON"}</SelectItem>
                                <SelectItem value={"other".to_string()}>{ t.t("form_network_other") }</SelectItem>
                            </SelectContent>
                        </Select>
                    </div>
                    <div class="field">
                        <label class="field-label">{ t.t("form_address_label") }</label>
                        <input
                            class="text-input"
                            placeholder={t.t("form_address_placeholder")}
                            value={(*address).clone()}
                            oninput={on_address_input}
                        />
                    </div>
                    <div class="field">
                        <label class="field-label">{ t.t("form_contact_label") }</label>
                        <input
                            class="text-input"
                            placeholder={t.t("form_contact_placeholder")}
                            value={(*contact).clone()}
                            oninput={on_contact_input}
                        />
                    </div>
                    <div class="field">
                        <label class="field-label">{ t.t("form_desc_label") }</label>
                        <textarea
                            class="text-input note-input"
                            placeholder={t.t("form_desc_placeholder")}
                            value={(*note).clone()}
                            oninput={on_note_input}
                        ></textarea>
                    </div>
                    <label class="agree-row">
                        <input type="checkbox" checked={*agree} onchange={on_agree_change} />
                        <span>{ t.t("form_owner_confirm") }</span>
                    </label>
                    <button type="submit" class="cta-button" disabled={!submittable}>
                        <i class="fas fa-paper-plane"></i>
                        {" "}{ t.t("form_submit_short") }
                    </button>
                    if *submitted {
                        <div class="thanks-line">{ t.t("form_thanks") }</div>
                    }
                </form>
            </section>

            <footer class="site-footer">
                <div class="site-footer-inner">
                    <p class="footer-note">
                        {"© "}{ year }{" WalletBuyBack — "}{ t.t("footer_tagline") }
                    </p>
                    <div class="footer-nav">
                        <a href="#how">{ t.t("nav_how") }</a>
                        <a href="#features">{ t.t("nav_features") }</a>
                        <a href="#form">{ t.t("nav_form") }</a>
                        <Link<Route> to={Route::Lite}>{"Lite"}</Link<Route>>
                    </div>
                </div>
            </footer>
        </div>
    }
}
