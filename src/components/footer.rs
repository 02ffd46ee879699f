use chrono::Datelike;
use yew::prelude::*;

const SOCIALS: [(&str, &str); 4] = [
    ("Twitter / X", "https://twitter.com"),
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Instagram", "https://instagram.com"),
];

const COMPANY: [(&str, &str); 4] = [
    ("Manifesto", "#ethos"),
    ("Services", "#services"),
    ("Pricing", "#pricing"),
    ("Careers", "#contact"),
];

const LEGAL: [&str; 4] = ["Privacy Policy", "Terms of Service", "Cookie Policy", "SLA"];

pub fn copyright_line(year: i32) -> String {
    format!("© {} Ambitious Realism. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { background: #000; border-top: 1px solid rgba(255, 255, 255, 0.1); padding: 5rem 0; }
                    .footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 3rem; margin-bottom: 4rem; }
                    .footer-grid h4 { color: #fff; font-weight: 700; margin-bottom: 1.5rem; }
                    .footer-grid ul { list-style: none; padding: 0; margin: 0; font-size: 0.875rem; }
                    .footer-grid li { margin-bottom: 1rem; }
                    .footer-grid li a { color: var(--text-muted); }
                    .footer-grid li a:hover { color: var(--primary-color); }
                    .footer-blurb { color: var(--text-muted); font-size: 0.875rem; line-height: 1.6; margin-bottom: 1.5rem; }
                    .footer-icons { display: flex; gap: 1rem; }
                    .footer-icons a { color: var(--text-muted); }
                    .footer-icons a:hover { color: #fff; }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        color: var(--text-muted);
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="brand">
                            <span class="text-primary mono">{"</>"}</span>
                            <span>{"AMBITIOUS"}<span class="text-primary">{"REALISM"}</span></span>
                        </div>
                        <p class="footer-blurb">
                            {"Redefining the digital landscape through chaos engineering and aesthetic perfection."}
                        </p>
                        <div class="footer-icons">
                            <a href="https://github.com" target="_blank" rel="noopener noreferrer" aria-label="GitHub">{"GH"}</a>
                            <a href="https://twitter.com" target="_blank" rel="noopener noreferrer" aria-label="Twitter">{"X"}</a>
                            <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"IN"}</a>
                            <a href="mailto:hello@ambitiousrealism.com" aria-label="Email">{"@"}</a>
                        </div>
                    </div>

                    <div>
                        <h4>{"COMPANY"}</h4>
                        <ul>
                            { for COMPANY.iter().map(|(label, href)| html! {
                                <li><a href={*href}>{ *label }</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"LEGAL"}</h4>
                        <ul>
                            { for LEGAL.iter().map(|label| html! {
                                <li><a href="#">{ *label }</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"SOCIALS"}</h4>
                        <ul>
                            { for SOCIALS.iter().map(|(label, href)| html! {
                                <li><a href={*href} target="_blank" rel="noopener noreferrer">{ *label }</a></li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{ copyright_line(year) }</p>
                    <p class="mono tiny">{"VIBE_CHECK: "}<span class="text-green">{"PASSED"}</span></p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright_line(2025), "© 2025 Ambitious Realism. All rights reserved.");
    }
}
