//! A text-input driven dropdown that filters a caller-supplied option list.
#![allow(non_snake_case)]

use std::time::Duration;

use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use registry::prefs::user_prefs::AssetSearchField;

use crate::compat;

/// Grace period between the input losing focus and the list closing, so a
/// click on a list item still lands on a mounted row.
pub const CLOSE_DELAY: Duration = Duration::from_millis(100);

pub const DEFAULT_PLACEHOLDER: &str = "Choose an asset";

/// The option field the search text is matched against.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum SearchKey {
    Label,
    #[default]
    Value,
}

impl From<AssetSearchField> for SearchKey {
    fn from(field: AssetSearchField) -> Self {
        match field {
            AssetSearchField::Label => Self::Label,
            AssetSearchField::Value => Self::Value,
        }
    }
}

/// Anything the [`ComboBox`] can list.
pub trait SelectOption: Clone + PartialEq + 'static {
    /// Text written into the input once the option is chosen.
    fn label(&self) -> &str;

    /// Stable identity of the option, also used as the row key.
    fn value(&self) -> &str;

    fn symbol(&self) -> &str {
        self.label()
    }

    fn icon_url(&self) -> Option<&str> {
        None
    }

    fn search_field(&self, key: SearchKey) -> &str {
        match key {
            SearchKey::Label => self.label(),
            SearchKey::Value => self.value(),
        }
    }
}

/// Keeps the options whose `key` field contains `search_text`, ignoring case.
/// Order is preserved.
pub fn filter_options<T: SelectOption>(options: &[T], key: SearchKey, search_text: &str) -> Vec<T> {
    let needle = search_text.to_lowercase();
    options
        .iter()
        .filter(|option| option.search_field(key).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Identifies one deferred close request. Only the most recent request, with
/// no interaction since, is allowed to close the list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CloseTicket(u64);

/// Ephemeral state of one widget instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboBoxState {
    search_text: String,
    is_open: bool,
    generation: u64,
}

impl ComboBoxState {
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn show(&mut self) {
        self.cancel_pending_close();
        self.is_open = true;
    }

    pub fn toggle(&mut self) {
        self.cancel_pending_close();
        self.is_open = !self.is_open;
    }

    /// Requests a close that takes effect when the ticket is passed to
    /// [`ComboBoxState::expire`].
    pub fn schedule_close(&mut self) -> CloseTicket {
        self.generation += 1;
        CloseTicket(self.generation)
    }

    /// Applies a deferred close. Returns whether the list was closed.
    pub fn expire(&mut self, ticket: CloseTicket) -> bool {
        if ticket.0 != self.generation || !self.is_open {
            return false;
        }
        self.is_open = false;
        true
    }

    /// Invalidates every outstanding [`CloseTicket`].
    pub fn cancel_pending_close(&mut self) {
        self.generation += 1;
    }

    /// Shows `label` in the input and closes the list.
    pub fn select(&mut self, label: &str) {
        self.cancel_pending_close();
        self.search_text = label.to_string();
        self.is_open = false;
    }
}

fn cancel_close_task(mut pending: Signal<Option<Task>>) {
    if let Ok(mut pending) = pending.try_write() {
        if let Some(task) = pending.take() {
            task.cancel();
        }
    }
}

/// Closes the list once [`CLOSE_DELAY`] has passed, unless something touches
/// the widget first. Must run inside the widget's scope.
fn close_after_delay(mut state: Signal<ComboBoxState>, mut pending_close: Signal<Option<Task>>) {
    cancel_close_task(pending_close);
    let ticket = state.write().schedule_close();
    let task = spawn(async move {
        compat::sleep(CLOSE_DELAY).await;
        state.write().expire(ticket);
    });
    pending_close.set(Some(task));
}

fn reopen(mut state: Signal<ComboBoxState>, pending_close: Signal<Option<Task>>) {
    cancel_close_task(pending_close);
    state.write().show();
}

fn select_option<T: SelectOption>(
    mut state: Signal<ComboBoxState>,
    pending_close: Signal<Option<Task>>,
    option: T,
    on_select: Option<EventHandler<T>>,
) {
    cancel_close_task(pending_close);
    state.write().select(option.label());
    if let Some(handler) = on_select {
        handler.call(option);
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct OptionListProps<T: SelectOption> {
    options: Vec<T>,
    on_pick: EventHandler<T>,
}

/// The open dropdown: one row per option, or a placeholder row when nothing
/// matches.
pub fn OptionList<T: SelectOption>(props: OptionListProps<T>) -> Element {
    let on_pick = props.on_pick;
    let no_result = props.options.is_empty();

    rsx! {
        div {
            class: "combo-list",
            role: "listbox",
            if no_result {
                div { class: "combo-no-result", "No result" }
            }
            {
                props.options.into_iter().map(move |option| {
                    let key = option.value().to_string();
                    let symbol = option.symbol().to_string();
                    let icon_url = option.icon_url().unwrap_or_default().to_string();
                    rsx! {
                        div {
                            key: "{key}",
                            class: "combo-option",
                            role: "option",
                            onclick: move |_| on_pick.call(option.clone()),
                            div {
                                class: "item",
                                div {
                                    class: "logo",
                                    img { class: "img", src: "{icon_url}", alt: "{symbol}" }
                                }
                                div { class: "label", "{symbol}" }
                            }
                        }
                    }
                })
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ComboBoxProps<T: SelectOption> {
    #[props(default = DEFAULT_PLACEHOLDER.to_string())]
    placeholder: String,
    #[props(default)]
    search_key: SearchKey,
    options: Vec<T>,
    #[props(optional)]
    on_select: Option<EventHandler<T>>,
}

/// A searchable select. The caller owns the option list and recomputes it
/// when its source changes, the widget only filters it.
pub fn ComboBox<T: SelectOption>(props: ComboBoxProps<T>) -> Element {
    let mut state = use_signal(ComboBoxState::default);
    let pending_close = use_signal(|| None::<Task>);

    use_drop(move || cancel_close_task(pending_close));

    let on_select = props.on_select;
    let (search_text, is_open) = {
        let state = state.read();
        (state.search_text().to_string(), state.is_open())
    };
    let filtered = filter_options(&props.options, props.search_key, &search_text);
    let arrow_class = if is_open { "combo-arrow open" } else { "combo-arrow" };

    rsx! {
        div {
            class: "combo-box",
            div {
                class: "combo-input-wrapper",
                input {
                    class: "combo-input",
                    r#type: "text",
                    placeholder: "{props.placeholder}",
                    value: "{search_text}",
                    oninput: move |evt| state.write().set_search_text(evt.value()),
                    onfocus: move |_| reopen(state, pending_close),
                    onblur: move |_| close_after_delay(state, pending_close),
                }
                div {
                    class: "{arrow_class}",
                    onclick: move |_| {
                        cancel_close_task(pending_close);
                        state.write().toggle();
                    },
                }
            }
            if is_open {
                OptionList::<T> {
                    options: filtered,
                    on_pick: move |option: T| select_option(state, pending_close, option, on_select),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Instant;

    use super::*;
    use crate::test_util;
    use crate::test_util::Captured;

    #[derive(Clone, PartialEq, Debug)]
    struct Coin {
        label: &'static str,
        value: &'static str,
    }

    impl SelectOption for Coin {
        fn label(&self) -> &str {
            self.label
        }

        fn value(&self) -> &str {
            self.value
        }
    }

    fn coins() -> Vec<Coin> {
        vec![
            Coin { label: "ATOM", value: "Cosmos Hub Atom" },
            Coin { label: "OSMO", value: "Osmosis" },
            Coin { label: "scrt", value: "Secret Network" },
            Coin { label: "STARS", value: "Stargaze" },
        ]
    }

    fn labels(options: &[Coin]) -> Vec<&str> {
        options.iter().map(|option| option.label).collect()
    }

    #[test]
    fn label_search_is_case_insensitive_substring() {
        let options = &coins()[..2];
        assert_eq!(labels(&filter_options(options, SearchKey::Label, "at")), ["ATOM"]);
        assert_eq!(labels(&filter_options(options, SearchKey::Label, "SM")), ["OSMO"]);
        assert!(filter_options(options, SearchKey::Label, "xyz").is_empty());
    }

    #[test]
    fn filtering_preserves_option_order() {
        let options = coins();
        assert_eq!(labels(&filter_options(&options, SearchKey::Label, "s")), ["OSMO", "scrt", "STARS"]);
        assert_eq!(labels(&filter_options(&options, SearchKey::Label, "")), ["ATOM", "OSMO", "scrt", "STARS"]);
    }

    #[test]
    fn value_search_matches_the_value_field() {
        let options = coins();
        assert_eq!(labels(&filter_options(&options, SearchKey::Value, "net")), ["scrt"]);
        // "Cosmos Hub Atom" contains "osmo" as well
        assert_eq!(labels(&filter_options(&options, SearchKey::Value, "osmo")), ["ATOM", "OSMO"]);
        assert_eq!(SearchKey::default(), SearchKey::Value);
    }

    #[test]
    fn search_key_follows_prefs() {
        assert!(SearchKey::from(AssetSearchField::Label).is_label());
        assert!(SearchKey::from(AssetSearchField::Value).is_value());
    }

    #[test]
    fn focus_opens_and_blur_closes_after_the_delay() {
        let mut state = ComboBoxState::default();
        state.show();
        assert!(state.is_open());

        let ticket = state.schedule_close();
        assert!(state.is_open());

        assert!(state.expire(ticket));
        assert!(!state.is_open());
    }

    #[test]
    fn click_during_blur_grace_period_selects() {
        let options = coins();
        let mut state = ComboBoxState::default();
        state.show();
        state.set_search_text("o");

        let ticket = state.schedule_close();
        // the list is still mounted, so the row click reaches select
        assert!(state.is_open());
        let chosen = &filter_options(&options, SearchKey::Label, state.search_text())[1];
        state.select(chosen.label());

        assert_eq!(state.search_text(), "OSMO");
        assert!(!state.is_open());
        assert!(!state.expire(ticket));
    }

    #[test]
    fn refocus_cancels_a_stale_close() {
        let mut state = ComboBoxState::default();
        state.show();
        let ticket = state.schedule_close();
        state.show();

        assert!(!state.expire(ticket));
        assert!(state.is_open());
    }

    #[test]
    fn only_the_latest_blur_may_close() {
        let mut state = ComboBoxState::default();
        state.show();
        let first = state.schedule_close();
        let second = state.schedule_close();

        assert!(!state.expire(first));
        assert!(state.is_open());
        assert!(state.expire(second));
    }

    #[test]
    fn toggle_flips_without_focus() {
        let mut state = ComboBoxState::default();
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn toggle_invalidates_pending_close() {
        let mut state = ComboBoxState::default();
        state.show();
        let ticket = state.schedule_close();
        state.toggle();
        state.toggle();

        assert!(!state.expire(ticket));
        assert!(state.is_open());
    }

    #[test]
    fn selection_keeps_the_label_in_the_input() {
        let mut state = ComboBoxState::default();
        state.show();
        state.set_search_text("st");
        state.select("STARS");
        assert_eq!(state.search_text(), "STARS");

        state.show();
        assert_eq!(state.search_text(), "STARS");
    }

    /// Handles into a widget's state, driven the way the rendered widget
    /// drives them.
    #[derive(Clone, Copy)]
    struct Controls {
        state: Signal<ComboBoxState>,
        pending_close: Signal<Option<Task>>,
        pick: Callback<Coin>,
        focus: Callback<()>,
        blur: Callback<()>,
    }

    #[derive(Clone)]
    struct Rig {
        options: Vec<Coin>,
        picked: Rc<RefCell<Vec<Coin>>>,
        controls: Captured<Controls>,
    }

    impl Rig {
        fn new(options: Vec<Coin>) -> Self {
            Self {
                options,
                picked: Rc::default(),
                controls: Captured::default(),
            }
        }

        fn mount(&self) -> (VirtualDom, Controls) {
            let mut dom = VirtualDom::new_with_props(RigView, self.clone());
            test_util::rebuild(&mut dom);
            let controls = self.controls.get();
            (dom, controls)
        }
    }

    fn RigView(rig: Rig) -> Element {
        let state = use_signal(ComboBoxState::default);
        let pending_close = use_signal(|| None::<Task>);

        let picked = rig.picked.clone();
        let on_select = use_callback(move |coin: Coin| picked.borrow_mut().push(coin));
        let pick = use_callback(move |coin: Coin| {
            select_option(state, pending_close, coin, Some(on_select))
        });
        let focus = use_callback(move |_: ()| reopen(state, pending_close));
        let blur = use_callback(move |_: ()| close_after_delay(state, pending_close));
        rig.controls.set(Controls {
            state,
            pending_close,
            pick,
            focus,
            blur,
        });

        let (search_text, is_open) = {
            let state = state.read();
            (state.search_text().to_string(), state.is_open())
        };
        let filtered = filter_options(&rig.options, SearchKey::Label, &search_text);

        rsx! {
            if is_open {
                OptionList::<Coin> { options: filtered, on_pick: pick }
            }
        }
    }

    fn EmptyList() -> Element {
        rsx! {
            OptionList::<Coin> { options: Vec::new(), on_pick: |_: Coin| {} }
        }
    }

    fn FullList() -> Element {
        rsx! {
            OptionList::<Coin> { options: coins(), on_pick: |_: Coin| {} }
        }
    }

    fn is_open(dom: &VirtualDom, state: Signal<ComboBoxState>) -> bool {
        dom.in_runtime(|| state.peek().is_open())
    }

    #[test]
    fn empty_list_shows_the_no_result_row() {
        let mut dom = VirtualDom::new(EmptyList);
        let html = test_util::rebuild(&mut dom);

        assert!(html.contains(r#"class="combo-no-result""#));
        assert!(html.contains("No result"));
        assert!(!html.contains("combo-option"));
    }

    #[test]
    fn rows_follow_option_order() {
        let mut dom = VirtualDom::new(FullList);
        let html = test_util::rebuild(&mut dom);

        assert!(!html.contains("No result"));
        assert_eq!(html.matches(r#"class="combo-option""#).count(), 4);
        let positions: Vec<usize> = ["ATOM", "OSMO", "scrt", "STARS"]
            .iter()
            .map(|symbol| html.find(&format!(r#"alt="{symbol}""#)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn picking_an_option_calls_on_select_once() {
        let rig = Rig::new(coins());
        let (mut dom, controls) = rig.mount();
        let mut state = controls.state;

        dom.in_runtime(|| {
            state.write().show();
            state.write().set_search_text("o");
        });
        let html = test_util::settle(&mut dom);
        assert!(html.contains(r#"alt="OSMO""#));

        let osmo = coins()[1].clone();
        dom.in_runtime(|| controls.pick.call(osmo.clone()));
        let html = test_util::settle(&mut dom);

        assert_eq!(*rig.picked.borrow(), [osmo]);
        assert_eq!(dom.in_runtime(|| state.peek().search_text().to_string()), "OSMO");
        assert!(!is_open(&dom, state));
        assert!(!html.contains("combo-list"));
    }

    #[tokio::test]
    async fn blur_closes_the_list_after_the_delay() {
        let rig = Rig::new(coins());
        let (mut dom, controls) = rig.mount();
        let mut state = controls.state;
        dom.in_runtime(|| state.write().show());
        assert!(test_util::settle(&mut dom).contains("combo-list"));

        let blurred_at = Instant::now();
        dom.in_runtime(|| controls.blur.call(()));
        test_util::settle(&mut dom);
        assert!(is_open(&dom, state));

        tokio::time::timeout(Duration::from_secs(5), async {
            while is_open(&dom, state) {
                dom.wait_for_work().await;
                dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
            }
        })
        .await
        .expect("list never closed");

        assert!(blurred_at.elapsed() >= CLOSE_DELAY);
        assert!(!test_util::settle(&mut dom).contains("combo-list"));
    }

    #[tokio::test]
    async fn refocus_cancels_the_close_task() {
        let rig = Rig::new(coins());
        let (mut dom, controls) = rig.mount();

        dom.in_runtime(|| controls.focus.call(()));
        dom.in_runtime(|| controls.blur.call(()));
        test_util::settle(&mut dom);
        assert!(dom.in_runtime(|| controls.pending_close.peek().is_some()));

        dom.in_runtime(|| controls.focus.call(()));
        assert!(dom.in_runtime(|| controls.pending_close.peek().is_none()));

        tokio::time::sleep(CLOSE_DELAY * 3).await;
        let html = test_util::settle(&mut dom);
        assert!(is_open(&dom, controls.state));
        assert!(html.contains("combo-list"));
    }
}
