use yew::prelude::*;

use super::reveal::Reveal;
use crate::content::{
    ContentStore, EducationEntry, ExperienceEntry, Icon, ProjectEntry, SectionHeading, SkillEntry,
};
use crate::nav::{ScrollTarget, Section};

fn icon(icon: Icon, size: u32) -> Html {
    Html::from_html_unchecked(AttrValue::from(icon.svg(size)))
}

#[derive(Properties, PartialEq)]
pub struct StoreProps {
    pub store: &'static ContentStore,
}

#[derive(Properties, PartialEq)]
struct SectionTitleProps {
    heading: &'static SectionHeading,
}

#[function_component(SectionTitle)]
fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <span class="section-ordinal">{props.heading.ordinal}</span>
            <h2>{props.heading.title}</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub store: &'static ContentStore,
    pub on_navigate: Callback<ScrollTarget>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let profile = &props.store.profile;
    let copy = &props.store.copy;

    let on_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(ScrollTarget::Section(Section::Contact)))
    };

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-body">
                <div class="availability">
                    <span class="availability-pulse" aria-hidden="true" />
                    <span class="availability-label">{copy.availability}</span>
                </div>

                <h1 class="hero-headline">
                    {copy.headline_lead}
                    <span class="gradient-text">{copy.headline_highlight}</span>
                    <br />
                    {copy.headline_trail}
                </h1>

                <p class="hero-intro">
                    {"Hi, I'm "}
                    <span class="hero-name">{profile.name}</span>
                    {". "}
                    {copy.introduction}
                </p>
                <p class="hero-meta">
                    {profile.role}
                    <span class="separator" aria-hidden="true">{"•"}</span>
                    {profile.location}
                </p>

                <div class="hero-actions">
                    <a class="button button-solid" href={props.store.socials.linkedin} target="_blank" rel="noopener noreferrer">
                        {"LINKEDIN"}
                        {icon(Icon::ArrowRight, 16)}
                    </a>
                    <button class="button button-outline" type="button" onclick={on_contact}>
                        {"CONTACT ME"}
                    </button>
                </div>
            </div>

            <div class="scroll-hint" aria-hidden="true">
                {copy.scroll_hint}
                <span class="scroll-hint-rule" />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    skill: &'static SkillEntry,
}

#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let skill = props.skill;
    html! {
        <li class="skill">
            <div class="skill-header">
                <span class="skill-name">{icon(skill.icon, 16)}{skill.name}</span>
                <span class="skill-level">{format!("{}%", skill.bar_width())}</span>
            </div>
            <div class="skill-track">
                <div class="skill-fill" style={skill.bar_style()} />
            </div>
        </li>
    }
}

#[function_component(About)]
pub fn about(props: &StoreProps) -> Html {
    let store = props.store;
    let copy = &store.copy;

    html! {
        <section id={Section::About.id()} class="section">
            <Reveal>
                <SectionTitle heading={&copy.about} />
            </Reveal>
            <div class="about-grid">
                <Reveal class={classes!("about-copy")}>
                    <p>{store.profile.about}</p>
                    <p>
                        {copy.current_role_lead}
                        <strong>{copy.current_employer}</strong>
                        {copy.current_role_trail}
                    </p>
                    <p class="tagline">{store.profile.tagline}</p>
                </Reveal>
                <Reveal class={classes!("skills")} delay_ms={150}>
                    <h3 class="eyebrow">{copy.skills_heading}</h3>
                    <ul class="skill-list">
                        { for store.skills.iter().enumerate().map(|(index, skill)| html! {
                            <SkillBar key={index} skill={skill} />
                        }) }
                    </ul>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceCardProps {
    entry: &'static ExperienceEntry,
}

#[function_component(ExperienceCard)]
fn experience_card(props: &ExperienceCardProps) -> Html {
    let entry = props.entry;
    html! {
        <li class="timeline-item timeline-professional">
            <span class="timeline-node" aria-hidden="true" />
            <div class="timeline-heading">
                <h3>{entry.role}</h3>
                <span class="timeline-period">{entry.period}</span>
            </div>
            <div class="timeline-meta">
                <span class="timeline-icon accent-cyan">{icon(entry.icon, 14)}</span>
                {entry.company}
                <span class="separator" aria-hidden="true">{"•"}</span>
                {entry.kind}
            </div>
            <p>{entry.description}</p>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct EducationCardProps {
    entry: &'static EducationEntry,
}

#[function_component(EducationCard)]
fn education_card(props: &EducationCardProps) -> Html {
    let entry = props.entry;
    html! {
        <li class="timeline-item timeline-academic">
            <span class="timeline-node" aria-hidden="true" />
            <div class="timeline-heading timeline-heading-stacked">
                <h3>{entry.school}</h3>
                <span class="timeline-period">{entry.period}</span>
            </div>
            <div class="timeline-meta">
                <span class="timeline-icon accent-purple">{icon(entry.icon, 14)}</span>
                {entry.degree}
            </div>
            <p>{entry.description}</p>
        </li>
    }
}

#[function_component(Journey)]
pub fn journey(props: &StoreProps) -> Html {
    let store = props.store;
    let copy = &store.copy;

    html! {
        <section id={Section::Experience.id()} class="section">
            <Reveal>
                <SectionTitle heading={&copy.journey} />
            </Reveal>
            <div class="journey-grid">
                <Reveal>
                    <div class="column-heading">
                        <span class="accent-cyan">{icon(Icon::Briefcase, 24)}</span>
                        <h3>{copy.professional_heading}</h3>
                    </div>
                    <ol class="timeline">
                        { for store.experience.iter().enumerate().map(|(index, entry)| html! {
                            <ExperienceCard key={index} entry={entry} />
                        }) }
                    </ol>
                </Reveal>
                <Reveal delay_ms={150}>
                    <div class="column-heading">
                        <span class="accent-purple">{icon(Icon::GraduationCap, 24)}</span>
                        <h3>{copy.academic_heading}</h3>
                    </div>
                    <ol class="timeline">
                        { for store.education.iter().enumerate().map(|(index, entry)| html! {
                            <EducationCard key={index} entry={entry} />
                        }) }
                    </ol>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static ProjectEntry,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    html! {
        <article class="card project-card">
            <div class="project-header">
                <span class="pill">{project.category}</span>
                <div class="project-links">
                    { for project.links.iter().enumerate().map(|(index, link)| html! {
                        <a key={index} href={link.url} aria-label={format!("{}: {}", link.label, project.title)}>
                            {icon(Icon::ExternalLink, 20)}
                        </a>
                    }) }
                </div>
            </div>
            <h3>{project.title}</h3>
            <p class="project-description">{project.description}</p>
            <ul class="tech-tags">
                { for project.tech.iter().enumerate().map(|(index, tag)| html! {
                    <li key={index}>{format!("#{tag}")}</li>
                }) }
            </ul>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects(props: &StoreProps) -> Html {
    let store = props.store;

    html! {
        <section id={Section::Projects.id()} class="section">
            <Reveal>
                <SectionTitle heading={&store.copy.projects} />
            </Reveal>
            <div class="project-grid">
                { for store.projects.iter().enumerate().map(|(index, project)| html! {
                    <Reveal key={index} delay_ms={(index as u32) * 100}>
                        <ProjectCard project={project} />
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact(props: &StoreProps) -> Html {
    let store = props.store;
    let copy = &store.copy;

    html! {
        <section id={Section::Contact.id()} class="section section-contact">
            <Reveal class={classes!("contact-card")}>
                <span class="contact-rule" aria-hidden="true" />
                <h2>{copy.contact_heading}</h2>
                <p>{copy.contact_body}</p>
                <a class="button button-pill" href={store.socials.mailto()}>{copy.contact_action}</a>
            </Reveal>
        </section>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &StoreProps) -> Html {
    let store = props.store;

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p class="copyright">{store.copy.copyright}</p>
                <ul class="social-links">
                    { for store.socials.links().into_iter().enumerate().map(|(index, link)| html! {
                        <li key={index}>
                            <a href={link.href} aria-label={link.label}>{icon(link.icon, 20)}</a>
                        </li>
                    }) }
                </ul>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;

    async fn render<C>() -> String
    where
        C: BaseComponent<Properties = StoreProps>,
    {
        yew::LocalServerRenderer::<C>::with_props(StoreProps { store: portfolio() })
            .hydratable(false)
            .render()
            .await
    }

    fn appear_in_order<S: AsRef<str>>(html: &str, needles: impl IntoIterator<Item = S>) -> bool {
        let mut from = 0;
        for needle in needles {
            let needle = needle.as_ref();
            match html[from..].find(needle) {
                Some(at) => from += at + needle.len(),
                None => return false,
            }
        }
        true
    }

    #[tokio::test]
    async fn about_renders_one_bar_per_skill_in_store_order() {
        let skills = portfolio().skills;
        let html = render::<About>().await;

        assert_eq!(html.matches(r#"class="skill""#).count(), skills.len());
        assert_eq!(html.matches(r#"class="skill-fill""#).count(), skills.len());
        assert!(appear_in_order(
            &html,
            skills.iter().map(|skill| format!("{}</span>", skill.name)),
        ));
        assert!(appear_in_order(
            &html,
            skills
                .iter()
                .map(|skill| format!(r#"style="width: {}%;""#, skill.level)),
        ));
    }

    #[tokio::test]
    async fn journey_renders_both_timelines_in_store_order() {
        let store = portfolio();
        let html = render::<Journey>().await;

        assert_eq!(
            html.matches("timeline-item timeline-professional").count(),
            store.experience.len()
        );
        assert_eq!(
            html.matches("timeline-item timeline-academic").count(),
            store.education.len()
        );
        assert!(appear_in_order(&html, store.experience.iter().map(|entry| entry.company)));
        assert!(appear_in_order(
            &html,
            store
                .education
                .iter()
                .map(|entry| format!("<h3>{}</h3>", entry.school)),
        ));
    }

    #[tokio::test]
    async fn projects_render_one_card_per_entry_with_tags_and_links() {
        let projects = portfolio().projects;
        let html = render::<Projects>().await;

        assert_eq!(html.matches(r#"class="card project-card""#).count(), projects.len());
        assert!(appear_in_order(
            &html,
            projects
                .iter()
                .map(|project| format!("<h3>{}</h3>", project.title)),
        ));

        let tags: usize = projects.iter().map(|project| project.tech.len()).sum();
        assert_eq!(html.matches("<li>#").count(), tags);

        let links: Vec<String> = projects
            .iter()
            .flat_map(|project| {
                project
                    .links
                    .iter()
                    .map(move |link| format!(r#"aria-label="{}: {}""#, link.label, project.title))
            })
            .collect();
        assert!(appear_in_order(&html, &links));
    }

    #[tokio::test]
    async fn footer_lists_social_links_in_order() {
        let links = portfolio().socials.links();
        let html = render::<SiteFooter>().await;

        assert_eq!(html.matches("<li>").count(), links.len());
        assert!(appear_in_order(
            &html,
            links.iter().map(|link| format!(r#"aria-label="{}""#, link.label)),
        ));
        assert_eq!(html.matches("mailto:").count(), 1);
    }
}
