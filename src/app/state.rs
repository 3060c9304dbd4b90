//! Shop context: the cart store and on-screen notices, shared by every page.
//!
//! Provided once at the app root (`use_shop_provider`) and read anywhere
//! below it with `use_shop`. Both fields are signals, so a mutation here
//! re-renders every view that read them (cart list, totals, `#cart-count`).

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::app::dom;
use crate::cart::{CartEvent, CartStore, CartSummary, SyncReport};
use crate::notify::{self, Notice, NoticePhase, NoticeQueue};
use crate::storage::LocalStorage;

const CLEAR_PROMPT: &str = "Are you sure you want to clear your cart?";

#[derive(Clone, Copy)]
pub struct ShopState {
    cart: Signal<CartStore<LocalStorage>>,
    notices: Signal<NoticeQueue>,
}

/// Create the shop context. Call once, at the app root.
pub fn use_shop_provider() -> ShopState {
    use_context_provider(|| ShopState {
        cart: Signal::new(CartStore::new(LocalStorage)),
        notices: Signal::new(NoticeQueue::default()),
    })
}

pub fn use_shop() -> ShopState {
    use_context::<ShopState>()
}

impl ShopState {
    /// Items and total for the cart/checkout listings.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_items(self.cart.read().items())
    }

    /// Value shown by every `#cart-count` badge.
    pub fn count(&self) -> usize {
        self.cart.read().len()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.read().iter().cloned().collect()
    }

    /// Re-read and repair the persisted cart.
    pub fn sync(&self) -> SyncReport {
        let mut cart = self.cart;
        let report = cart.write().sync();
        debug!(?report, "Cart synced");
        report
    }

    /// `.add-to-cart` click.
    pub fn add(&self, product: &str, price: &str) {
        let mut cart = self.cart;
        let result = cart.write().add(product, price);
        match result {
            Ok(event) => self.notify(event),
            Err(e) => warn!(product, price, "Not adding to cart: {}", e),
        }
    }

    /// Remove control on a cart line. Stale indices do nothing.
    pub fn remove_at(&self, index: usize) {
        let mut cart = self.cart;
        let event = cart.write().remove_at(index);
        if let Some(event) = event {
            self.notify(event);
        }
    }

    /// Clear button; asks the shopper first.
    pub fn clear(&self) {
        if !dom::confirm(CLEAR_PROMPT) {
            return;
        }
        let mut cart = self.cart;
        let event = cart.write().clear();
        self.notify(event);
    }

    /// Checkout form submission.
    pub fn place_order(&self) -> CartEvent {
        let mut cart = self.cart;
        let event = cart.write().place_order();
        event
    }

    /// Show a transient notice on its own timer chain.
    ///
    /// The chain runs in the root scope: the caller is often a cart row that
    /// unmounts as a result of the very change being announced.
    pub fn notify(&self, message: impl ToString) {
        let mut notices = self.notices;
        let id = notices.write().push(message.to_string());

        spawn_forever(async move {
            notify::sleep(notify::SHOW_DELAY).await;
            notices.write().set_phase(id, NoticePhase::Shown);

            notify::sleep(notify::DISMISS_AFTER).await;
            notices.write().set_phase(id, NoticePhase::Leaving);

            notify::sleep(notify::FADE_OUT).await;
            notices.write().remove(id);
        });
    }
}

#[cfg(test)]
#[cfg(feature = "server")]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    use dioxus::dioxus_core::NoOpMutations;

    thread_local! {
        static SHOP: Cell<Option<ShopState>> = const { Cell::new(None) };
    }

    #[component]
    fn Shop() -> Element {
        let shop = use_shop_provider();
        let mut line_shown = use_signal(|| true);
        SHOP.with(|slot| slot.set(Some(shop)));

        rsx! {
            if line_shown() {
                LastLine { on_removed: move |_| line_shown.set(false) }
            }
        }
    }

    /// A cart row that announces its own removal and disappears.
    #[component]
    fn LastLine(on_removed: EventHandler) -> Element {
        let shop = use_shop();
        use_effect(move || {
            shop.notify(CartEvent::Emptied);
            on_removed.call(());
        });
        rsx! { p { "Mug - $9.99" } }
    }

    async fn run_for(dom: &mut VirtualDom, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::timeout_at(deadline, dom.wait_for_work())
            .await
            .is_ok()
        {
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn notices(dom: &VirtualDom) -> Vec<Notice> {
        let shop = SHOP.with(Cell::get).unwrap();
        dom.in_runtime(|| shop.notices())
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_notice_outlives_unmounted_caller() {
        let mut dom = VirtualDom::new(Shop);
        dom.rebuild_in_place();

        run_for(&mut dom, notify::SHOW_DELAY + Duration::from_millis(100)).await;
        let shown = notices(&dom);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].message, "Cart is now empty");
        assert_eq!(shown[0].phase, NoticePhase::Shown);

        run_for(&mut dom, notify::DISMISS_AFTER + Duration::from_millis(50)).await;
        let leaving = notices(&dom);
        assert_eq!(leaving.len(), 1);
        assert_eq!(leaving[0].phase, NoticePhase::Leaving);

        run_for(&mut dom, notify::FADE_OUT + Duration::from_millis(200)).await;
        assert!(notices(&dom).is_empty());
    }
}
