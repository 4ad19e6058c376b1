//! Stripped-down variant of the landing page, served at `/lite`: one column,
//! fixed light chrome, no ticker or hero art. Same widgets, same copy, same
//! form rules.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::select::{Select, SelectContent, SelectItem, SelectTrigger, SelectValue};
use crate::i18n::{self, Lang, Translator};
use crate::utils::validate::can_submit;
use crate::Route;

const LITE_CSS: &str = r#"
.lite-root {
    min-height: 100vh;
    background: #f9fafb;
    color: #111827;
    padding: 2.5rem 1rem 4rem;
}
.lite-column {
    max-width: 34rem;
    margin: 0 auto;
    display: grid;
    gap: 1.5rem;
}
.lite-top {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}
.lite-brand { font-weight: 600; letter-spacing: 0.025em; }
.lite-brand span { color: #0d9488; }
.lite-lang { width: 150px; }
.lite-title { margin: 0; font-size: 1.75rem; font-weight: 700; }
.lite-sub { margin: 0; color: #4b5563; font-size: 0.9rem; }
.lite-card {
    background: #fff;
    border: 1px solid #e5e7eb;
    border-radius: 16px;
    padding: 1.5rem;
    display: grid;
    gap: 1rem;
}
.lite-field { display: grid; gap: 0.4rem; }
.lite-label { font-size: 0.85rem; color: #1f2937; }
.lite-input {
    background: #fff;
    border: 1px solid #d1d5db;
    border-radius: 10px;
    color: #111827;
    font: inherit;
    font-size: 0.9rem;
    padding: 0.55rem 0.8rem;
    width: 100%;
}
.lite-note { min-height: 80px; resize: vertical; }
.lite-agree {
    display: flex;
    align-items: flex-start;
    gap: 0.6rem;
    font-size: 0.85rem;
    color: #1f2937;
}
.lite-agree input { margin-top: 0.2rem; accent-color: #0d9488; }
.lite-submit {
    border: none;
    border-radius: 12px;
    padding: 0.65rem 1.2rem;
    background: #0d9488;
    color: #fff;
    font: inherit;
    cursor: pointer;
}
.lite-submit:disabled { opacity: 0.5; cursor: not-allowed; }
.lite-thanks { font-size: 0.85rem; color: #0f766e; }
.lite-footer { font-size: 0.75rem; color: #6b7280; text-align: center; }
.lite-footer a { color: #0d9488; }
.menu-light {
    background: #fff;
    border: 1px solid #e5e7eb;
    color: #111827;
}
"#;

#[function_component(Lite)]
pub fn lite() -> Html {
    let lang = use_state(i18n::initial_lang);

    let network = use_state(|| "ethereum".to_string());
    let address = use_state(String::new);
    let contact = use_state(String::new);
    let note = use_state(String::new);
    let agree = use_state(|| false);
    let submitted = use_state(|| false);

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

    let t = Translator::new(*lang);

    let on_lang_pick = {
        let lang = lang.clone();
        Callback::from(move |code: String| {
            lang.set(Lang::from_code(&code));
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

    let onsubmit = {
        let address = address.clone();
        let contact = contact.clone();
        let agree = agree.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !can_submit(&address, &contact, *agree) {
                return;
            }
            log::info!("buyback request captured");
            submitted.set(true);
        })
    };

    let submittable = can_submit(&address, &contact, *agree);

    html! {
        <div class="lite-root">
            <style>{LITE_CSS}</style>
            <div class="lite-column">
                <div class="lite-top">
                    <div class="lite-brand">{"Wallet"}<span>{"BuyBack"}</span></div>
                    <div class="lite-lang">
                        <Select
                            value={Some(lang.code().to_string())}
                            on_value_change={on_lang_pick}
                        >
                            <SelectTrigger class={classes!("lite-input")}>
                                <SelectValue placeholder={lang.code().to_string()} />
                            </SelectTrigger>
                            <SelectContent class={classes!("menu-light")}>
                                { for Lang::ALL.iter().map(|lang| html! {
                                    <SelectItem value={lang.code().to_string()}>
                                        { lang.native_name() }
                                    </SelectItem>
                                }) }
                            </SelectContent>
                        </Select>
                    </div>
                </div>
                <div>
                    <h1 class="lite-title">{ t.t("form_title_left") }</h1>
                    <p class="lite-sub">{ t.t("form_subtitle_left") }</p>
                </div>
                <form class="lite-card" onsubmit={onsubmit}>
                    <div class="lite-field">
                        <label class="lite-label">{ t.t("form_network") }</label>
                        <Select
                            value={Some((*network).clone())}
                            on_value_change={on_network_change}
                        >
                            <SelectTrigger class={classes!("lite-input")}>
                                <SelectValue placeholder={t.t("form_network_placeholder").to_string()} />
                            </SelectTrigger>
                            <SelectContent class={classes!("menu-light")}>
                                <SelectItem value={"ethereum".to_string()}>{"Ethereum / MetaMask"}</SelectItem>
                                <SelectItem value={"solana".to_string()}>{"Solana / Phantom"}</SelectItem>
                                <SelectItem value={"bsc".to_string()}>{"BNB Chain"}</SelectItem>
                                <SelectItem value={"polygon".to_string()}>{"Polygon"}</SelectItem>
                                <SelectItem value={"ton".to_string()}>{"TON"}</SelectItem>
                                <SelectItem value={"other".to_string()}>{ t.t("form_network_other") }</SelectItem>
                            </SelectContent>
                        </Select>
                    </div>
                    <div class="lite-field">
                        <label class="lite-label">{ t.t("form_address_label") }</label>
                        <input
                            class="lite-input"
                            placeholder={t.t("form_address_placeholder")}
                            value={(*address).clone()}
                            oninput={on_address_input}
                        />
                    </div>
                    <div class="lite-field">
                        <label class="lite-label">{ t.t("form_contact_label") }</label>
                        <input
                            class="lite-input"
                            placeholder={t.t("form_contact_placeholder")}
                            value={(*contact).clone()}
                            oninput={on_contact_input}
                        />
                    </div>
                    <div class="lite-field">
                        <label class="lite-label">{ t.t("form_desc_label") }</label>
                        <textarea
                            class="lite-input lite-note"
                            placeholder={t.t("form_desc_placeholder")}
                            value={(*note).clone()}
                            oninput={on_note_input}
                        ></textarea>
                    </div>
                    <label class="lite-agree">
                        <input type="checkbox" checked={*agree} onchange={on_agree_change} />
                        <span>{ t.t("form_owner_confirm") }</span>
                    </label>
                    <button type="submit" class="lite-submit" disabled={!submittable}>
                        { t.t("form_submit_short") }
                    </button>
                    if *submitted {
                        <div class="lite-thanks">{ t.t("form_thanks") }</div>
                    }
                </form>
                <div class="lite-footer">
                    { t.t("seed_safety_hint") }
                    {" · "}
                    <Link<Route> to={Route::Landing}>{"WalletBuyBack"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
