// Top bar with refresh and theme controls
use crate::domain::theme::ThemeMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: ThemeMode,
    pub refreshing: bool,
}

/// The refresh control is disabled while a refresh is outstanding
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let (refresh_icon, refresh_label) = if props.refreshing {
        ("⏳", "Refreshing...")
    } else {
        ("🔄", "Refresh Data")
    };
    let (theme_icon, theme_label) = if props.theme.is_dark() {
        ("☀️", "Light")
    } else {
        ("🌙", "Dark")
    };

    html! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <div>
                        <div class="navbar__logo">{"JUMIA"}</div>
                        <div class="navbar__subtitle">{"Analytics Dashboard"}</div>
                    </div>
                </div>
                <div class="navbar__actions">
                    <form method="post" action="/refresh">
                        <button type="submit" class="theme-toggle" aria-label="Refresh data" disabled={props.refreshing}>
                            {refresh_icon}
                            <span>{refresh_label}</span>
                        </button>
                    </form>
                    <form method="post" action="/theme">
                        <button type="submit" class="theme-toggle" aria-label="Toggle theme">
                            {theme_icon}
                            <span>{theme_label}</span>
                        </button>
                    </form>
                </div>
            </div>
        </nav>
    }
}
