use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::app::Page;

/// Debounce de la búsqueda automática mientras se escribe
const SEARCH_DEBOUNCE_MS: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let search = use_state(String::new);
    let show_search = use_state(|| false);
    let debounce = use_mut_ref(|| None::<Timeout>);

    let go_search = {
        let on_navigate = props.on_navigate.clone();
        let show_search = show_search.clone();
        Callback::from(move |query: String| {
            let trimmed = query.trim();
            if !trimmed.is_empty() {
                on_navigate.emit(Page::Search(trimmed.to_string()));
                show_search.set(false);
            }
        })
    };

    let on_input = {
        let search = search.clone();
        let go_search = go_search.clone();
        let debounce = debounce.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            search.set(value.clone());

            // Reprogramar la búsqueda automática; soltar el Timeout
            // anterior lo cancela.
            let go_search = go_search.clone();
            *debounce.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                go_search.emit(value);
            }));
        })
    };

    let on_keydown = {
        let search = search.clone();
        let show_search = show_search.clone();
        let go_search = go_search.clone();
        let debounce = debounce.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => {
                debounce.borrow_mut().take();
                go_search.emit((*search).clone());
            }
            "Escape" => {
                debounce.borrow_mut().take();
                show_search.set(false);
                search.set(String::new());
            }
            _ => {}
        })
    };

    let open_search = {
        let show_search = show_search.clone();
        Callback::from(move |_: MouseEvent| show_search.set(true))
    };

    let close_search = {
        let show_search = show_search.clone();
        let search = search.clone();
        Callback::from(move |_: MouseEvent| {
            show_search.set(false);
            search.set(String::new());
        })
    };

    let submit_search = {
        let search = search.clone();
        let go_search = go_search.clone();
        let debounce = debounce.clone();
        Callback::from(move |_: MouseEvent| {
            debounce.borrow_mut().take();
            go_search.emit((*search).clone());
        })
    };

    let nav_to = |target: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(target.clone()))
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a class="navbar-brand" onclick={nav_to(Page::Home)}>{"Bluebird"}</a>

                <div class="navbar-links">
                    <a class="nav-link" onclick={nav_to(Page::Home)}>{"Home"}</a>
                    <a class="nav-link" onclick={nav_to(Page::Wishlist)}>{"Wishlist"}</a>
                    <a class="nav-link" onclick={nav_to(Page::Bookings)}>{"MyBook"}</a>
                </div>

                <div class="navbar-search">
                    if !*show_search {
                        <button class="search-open" onclick={open_search} aria-label="Open search">
                            { search_icon() }
                        </button>
                    } else {
                        <div class="search-box">
                            <input
                                type="text"
                                placeholder="Search vehicle..."
                                value={(*search).clone()}
                                oninput={on_input}
                                onkeydown={on_keydown}
                            />
                            <button class="search-submit" onclick={submit_search} aria-label="Search">
                                { search_icon() }
                            </button>
                            <button class="search-close" onclick={close_search} aria-label="Close search">
                                { close_icon() }
                            </button>
                        </div>
                    }
                </div>
            </div>
        </nav>
    }
}

fn search_icon() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path stroke-linecap="round" stroke-linejoin="round"
                d="M21 21l-4.35-4.35M5 11a6 6 0 1112 0 6 6 0 01-12 0z" />
        </svg>
    }
}

fn close_icon() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path stroke-linecap="round" stroke-linejoin="round" d="M6 18L18 6M6 6l12 12" />
        </svg>
    }
}
