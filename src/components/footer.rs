use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"© Bluebird Group - Vehicle Rental"}</p>
        </footer>
    }
}
