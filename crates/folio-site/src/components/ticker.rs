//! Live price widget.

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{CoinGeckoSource, PricePoller, TickerConfig, TickerState};

/// Polls the price API while mounted; the poller stops on unmount.
#[component]
pub fn PriceTicker(config: TickerConfig) -> Element {
    let mut display = use_signal(TickerState::default);
    let symbol = config.symbol.clone();

    let poller = use_hook(move || match CoinGeckoSource::new(&config.api_base, &config.asset_id) {
        Ok(source) => {
            let (poller, mut rx) = PricePoller::spawn(Arc::new(source), config.poll_interval());
            spawn(async move {
                while rx.changed().await.is_ok() {
                    let state = rx.borrow_and_update().clone();
                    display.set(state);
                }
            });
            Some(Rc::new(poller))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Price ticker disabled");
            None
        }
    });

    use_drop(move || {
        if let Some(poller) = poller.as_ref() {
            poller.stop();
        }
    });

    let state = display.read();
    let price = state.price_text();
    let change = state.change();

    rsx! {
        div { class: "ticker pixel-border",
            span { class: "ticker-symbol", "{symbol}" }
            span { class: "ticker-price", "{price}" }
            if let Some(change) = change {
                span { class: "ticker-change {change.direction.css_class()}", "{change}" }
            }
        }
    }
}
