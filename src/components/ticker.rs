//! Horizontal rail of recent buyback amounts, looping forever. The track is
//! rendered twice and slid by half its width per cycle, so the loop point is
//! invisible.

use yew::prelude::*;

struct TickerItem {
    label: &'static str,
    unit: &'static str,
    color: &'static str,
}

const TICKER_ITEMS: [TickerItem; 8] = [
    TickerItem { label: "+$5,000", unit: "USDT", color: "#26A17B" },
    TickerItem { label: "+$25,000", unit: "ETH", color: "#627EEA" },
    TickerItem { label: "+$5,000", unit: "USDC", color: "#2775CA" },
    TickerItem { label: "+$12,000", unit: "BTC", color: "#F7931A" },
    TickerItem { label: "+$7,500", unit: "SOL", color: "#14F195" },
    TickerItem { label: "+$9,500", unit: "TRX", color: "#FF0000" },
    TickerItem { label: "+$16,500", unit: "BNB", color: "#F0B90B" },
    TickerItem { label: "+$19,999", unit: "BUSD", color: "#F3BA2F" },
];

const TICKER_CSS: &str = r#"
.ticker-rail {
    border-top: 1px solid var(--rail-border, rgba(255, 255, 255, 0.1));
    border-bottom: 1px solid var(--rail-border, rgba(255, 255, 255, 0.1));
    background: var(--rail-bg, rgba(255, 255, 255, 0.05));
    overflow: hidden;
}
.ticker-track {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.5rem 0;
    white-space: nowrap;
    width: max-content;
    animation: ticker-slide 22s linear infinite;
}
.ticker-chip {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    color: #fff;
    font-size: 0.875rem;
    font-weight: 600;
    background: linear-gradient(90deg, rgba(0, 0, 0, 0.65), rgba(0, 0, 0, 0.45));
}
.ticker-dot {
    height: 0.5rem;
    width: 0.5rem;
    border-radius: 999px;
}
.ticker-unit {
    opacity: 0.8;
}
@keyframes ticker-slide {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}
@media (prefers-reduced-motion: reduce) {
    .ticker-track { animation: none; }
}
"#;

fn chip(item: &TickerItem) -> Html {
    html! {
        <div class="ticker-chip" style={format!("border: 1px solid {}66;", item.color)}>
            <span class="ticker-dot" style={format!("background-color: {};", item.color)}></span>
            <span>{ item.label }</span>
            <span class="ticker-unit">{ item.unit }</span>
        </div>
    }
}

#[function_component(TickerRail)]
pub fn ticker_rail() -> Html {
    html! {
        <div class="ticker-rail">
            <style>{TICKER_CSS}</style>
            <div class="ticker-track">
                { for TICKER_ITEMS.iter().map(chip) }
                { for TICKER_ITEMS.iter().map(chip) }
            </div>
        </div>
    }
}
