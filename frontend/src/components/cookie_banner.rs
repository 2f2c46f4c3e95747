use yew::prelude::*;
use yew_router::prelude::*;

use crate::consent::Decision;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CookieBannerProps {
    pub on_decide: Callback<Decision>,
}

#[function_component(CookieBanner)]
pub fn cookie_banner(props: &CookieBannerProps) -> Html {
    let choose = |decision: Decision| {
        let on_decide = props.on_decide.clone();
        Callback::from(move |_: MouseEvent| on_decide.emit(decision))
    };

    html! {
        <div class="cookie-banner" role="dialog" aria-live="polite">
            <span class="cookie-icon">{"🍪"}</span>
            <p class="cookie-title">{"We use cookies"}</p>
            <p>
                {"We rely on essential and analytics cookies to improve your experience. Read our "}
                <Link<Route> to={Route::CookiePolicy} classes="cookie-link">
                    {"Cookie Policy"}
                </Link<Route>>
                {"."}
            </p>
            <div class="cookie-actions">
                <button type="button" class="cookie-decline" onclick={choose(Decision::Declined)}>
                    {"Decline"}
                </button>
                <button type="button" class="cookie-accept" onclick={choose(Decision::Accepted)}>
                    {"Accept"}
                </button>
            </div>
        </div>
    }
}
