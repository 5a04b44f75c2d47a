// Section navigation sidebar
use crate::domain::navigation::Section;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Section,
}

fn nav_item(section: Section, active: Section) -> Html {
    let classes = classes!(
        "sidebar__link",
        (section == active).then_some("sidebar__link--active")
    );
    html! {
        <li>
            <a href={format!("#{}", section.id())} data-section={section.id()} class={classes}>
                <span class="sidebar__icon">{section.icon()}</span>
                <span>{section.label()}</span>
            </a>
        </li>
    }
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="sidebar">
            <div class="sidebar__title">{"Navigation"}</div>
            <ul class="sidebar__nav">
                { for Section::ALL.into_iter().map(|section| nav_item(section, props.active)) }
            </ul>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::components::render_fragment;

    #[tokio::test]
    async fn test_marks_only_active_section() {
        let html = render_fragment::<Sidebar>(SidebarProps {
            active: Section::Growth,
        })
        .await;

        assert_eq!(html.matches("sidebar__link--active").count(), 1);
        assert_eq!(html.matches("<li>").count(), 4);

        let growth_link = html
            .split("<a ")
            .find(|tag| tag.contains(r#"data-section="growth""#))
            .and_then(|tag| tag.split('>').next())
            .unwrap();
        assert!(growth_link.contains("sidebar__link--active"));
        assert!(growth_link.contains(r##"href="#growth""##));
    }
}
