use yew::prelude::*;

use crate::config;

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    html! {
        <div class="legal-content cookie-policy">
            <p class="eyebrow">{"Cookie Policy"}</p>
            <h1>{"Cookie Policy"}</h1>
            <p class="legal-updated">{"Last Updated: December 20, 2025"}</p>

            <section>
                <h2>{"1. Introduction"}</h2>
                <p>{"Welcome to EatoraAI (\"we,\" \"our,\" or \"us\"). This Cookie Policy explains what cookies are, how we use them on our website and web application, and what your choices are regarding their use."}</p>
            </section>

            <section>
                <h2>{"2. What Are Cookies?"}</h2>
                <p>{"Cookies are small text files that are stored on your computer or mobile device when you visit a website. They are widely used to make websites work more efficiently and to provide information to the owners of the site."}</p>
            </section>

            <section>
                <h2>{"3. How We Use Cookies"}</h2>
                <p>{"We use cookies for several reasons, including:"}</p>
                <ul>
                    <li><strong>{"Essential Cookies: "}</strong>{"These are necessary for the website and our web application to function properly. They enable core features such as user login, account management, and secure payment processing. You cannot opt out of these cookies as the application cannot function without them."}</li>
                    <li><strong>{"Performance & Analytics Cookies: "}</strong>{"These help us understand how visitors interact with our website by collecting and reporting information anonymously. This helps us improve our user interface and services."}</li>
                    <li><strong>{"Functionality Cookies: "}</strong>{"These allow the website to remember choices you make (such as your language preference) to provide a more personalized experience."}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Third-Party Cookies"}</h2>
                <p>{"In some cases, we use trusted third-party services. The following section details the third-party cookies you might encounter through our service:"}</p>
                <ul>
                    <li><strong>{"Payment Processing: "}</strong>{"Our application processes payments via providers such as Stripe or PayPal. These providers may use cookies to ensure secure transactions and prevent fraud."}</li>
                    <li><strong>{"Analytics: "}</strong>{"We may use tools like Google Analytics to help us understand how you use the site and ways that we can improve your experience."}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Your Cookie Choices"}</h2>
                <p>{"Most web browsers automatically accept cookies, but you can usually modify your browser settings to decline cookies if you prefer. However, blocking Essential Cookies may prevent you from logging into your account or making payments within our application."}</p>
                <p>{"To manage cookies, look at the \"Settings\" or \"Privacy\" section of your specific browser (Chrome, Safari, Firefox, Edge, etc.)."}</p>
            </section>

            <section>
                <h2>{"6. Changes to This Policy"}</h2>
                <p>{"We may update this Cookie Policy from time to time in order to reflect, for example, changes to the cookies we use or for other operational, legal, or regulatory reasons. Please re-visit this Cookie Policy regularly to stay informed about our use of cookies and related technologies."}</p>
            </section>

            <section>
                <h2>{"7. Contact Us"}</h2>
                <p>{"If you have any questions about our use of cookies, please contact us at:"}</p>
                <p>
                    {"Email: "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </p>
                <p>
                    {"Website: "}
                    <a href={config::SITE_URL}>{config::SITE_URL}</a>
                </p>
            </section>
        </div>
    }
}
