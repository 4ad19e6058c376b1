//! In-browser behavior of the select widget: toggling, outside-press
//! dismissal, pick reporting and label caching. Run with
//! `wasm-pack test --headless --chrome` (or `--firefox`).

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, MouseEventInit};
use yew::prelude::*;

use walletbuyback::components::select::{
    Select, SelectContent, SelectItem, SelectTrigger, SelectValue,
};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    picks: Rc<RefCell<Vec<String>>>,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let value = use_state(|| None::<String>);
    let on_value_change = {
        let value = value.clone();
        let picks = props.picks.clone();
        Callback::from(move |key: String| {
            picks.borrow_mut().push(key.clone());
            value.set(Some(key));
        })
    };

    html! {
        <div>
            <Select value={(*value).clone()} on_value_change={on_value_change}>
                <SelectTrigger class={classes!("harness-trigger")}>
                    <SelectValue placeholder={"Select network".to_string()} />
                </SelectTrigger>
                <SelectContent>
                    <SelectItem value={"ethereum".to_string()}>
                        {"Ethereum"}{" / "}{"MetaMask"}
                    </SelectItem>
                    <SelectItem value={"solana".to_string()}>{"Solana / Phantom"}</SelectItem>
                    <SelectItem value={"icononly".to_string()}>
                        <i class="fas fa-wallet"></i>
                    </SelectItem>
                </SelectContent>
            </Select>
            <button class="harness-outside">{"outside"}</button>
        </div>
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount() -> (yew::AppHandle<Harness>, Rc<RefCell<Vec<String>>>) {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    let picks = Rc::new(RefCell::new(Vec::new()));
    let handle = yew::Renderer::<Harness>::with_root_and_props(
        root,
        HarnessProps {
            picks: picks.clone(),
        },
    )
    .render();
    (handle, picks)
}

async fn settle() {
    TimeoutFuture::new(50).await;
}

fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).unwrap()
}

fn click(selector: &str) {
    query(selector)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn mousedown(target: &Element) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn menu_is_open() -> bool {
    query("[role='listbox']").is_some()
}

fn displayed_value() -> String {
    query(".select-value")
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn item_by_text(text: &str) -> Element {
    let items = document().query_selector_all("[role='option']").unwrap();
    for index in 0..items.length() {
        let node = items.get(index).unwrap();
        if node.text_content().unwrap_or_default() == text {
            return node.dyn_into::<Element>().unwrap();
        }
    }
    panic!("no option with text {text:?}");
}

fn teardown(handle: yew::AppHandle<Harness>) {
    handle.destroy();
}

#[wasm_bindgen_test]
async fn trigger_clicks_pair_up_to_closed() {
    let (handle, _picks) = mount();
    settle().await;
    assert!(!menu_is_open());

    click(".harness-trigger");
    settle().await;
    assert!(menu_is_open(), "one activation opens");

    click(".harness-trigger");
    settle().await;
    assert!(!menu_is_open(), "a second activation closes");

    click(".harness-trigger");
    settle().await;
    assert!(menu_is_open(), "a third opens again");

    teardown(handle);
    settle().await;
}

#[wasm_bindgen_test]
async fn outside_press_closes_but_inside_presses_do_not() {
    let (handle, _picks) = mount();
    settle().await;

    click(".harness-trigger");
    settle().await;
    assert!(menu_is_open());

    // A press on the menu surface or on the trigger is not a dismissal.
    mousedown(&query("[role='listbox']").unwrap());
    settle().await;
    assert!(menu_is_open(), "press inside the menu keeps it open");

    mousedown(&query(".harness-trigger").unwrap());
    settle().await;
    assert!(menu_is_open(), "press on the trigger is left to its click handler");

    mousedown(&query(".harness-outside").unwrap());
    settle().await;
    assert!(!menu_is_open(), "press anywhere else closes");

    teardown(handle);
    settle().await;
}

#[wasm_bindgen_test]
async fn picking_an_option_reports_once_and_closes() {
    let (handle, picks) = mount();
    settle().await;

    click(".harness-trigger");
    settle().await;
    item_by_text("Solana / Phantom")
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    settle().await;

    assert_eq!(*picks.borrow(), vec!["solana".to_string()]);
    assert!(!menu_is_open(), "picking closes the menu");
    assert_eq!(displayed_value(), "Solana / Phantom");

    teardown(handle);
    settle().await;
}

#[wasm_bindgen_test]
async fn placeholder_shows_until_first_pick_then_follows_picks() {
    let (handle, picks) = mount();
    settle().await;
    assert_eq!(displayed_value(), "Select network");

    click(".harness-trigger");
    settle().await;
    item_by_text("Solana / Phantom")
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    settle().await;
    assert_eq!(displayed_value(), "Solana / Phantom");

    // Nested renderable content concatenates to one label.
    click(".harness-trigger");
    settle().await;
    item_by_text("Ethereum / MetaMask")
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    settle().await;
    assert_eq!(displayed_value(), "Ethereum / MetaMask");

    assert_eq!(
        *picks.borrow(),
        vec!["solana".to_string(), "ethereum".to_string()]
    );

    teardown(handle);
    settle().await;
}

#[wasm_bindgen_test]
async fn icon_only_option_leaves_the_placeholder_up() {
    let (handle, picks) = mount();
    settle().await;

    click(".harness-trigger");
    settle().await;
    item_by_text("")
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    settle().await;

    // The pick is still reported, but there is no text to display.
    assert_eq!(*picks.borrow(), vec!["icononly".to_string()]);
    assert_eq!(displayed_value(), "Select network");

    teardown(handle);
    settle().await;
}

#[wasm_bindgen_test]
async fn unmount_removes_the_portal_and_the_listener() {
    let (handle, _picks) = mount();
    settle().await;

    click(".harness-trigger");
    settle().await;
    assert!(menu_is_open());

    teardown(handle);
    settle().await;
    assert!(!menu_is_open(), "portal content is gone after unmount");

    // A later press must be a no-op, not a call into a dead component.
    mousedown(&document().body().unwrap());
    settle().await;
}
