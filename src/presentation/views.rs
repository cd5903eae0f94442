use askama::Template;

use crate::domain::story::{SELF_REFERENCE, Story};
use crate::infra::assets::DocumentAssets;
use crate::presentation::icons;

/// An anchor target plus its new-tab policy.
///
/// The self-reference marker points at the document itself, so it opens in
/// place; every real link opens in a new browsing context.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub href: String,
    pub new_tab: bool,
}

impl LinkView {
    fn new(href: &str) -> Self {
        Self {
            href: href.to_string(),
            new_tab: href != SELF_REFERENCE,
        }
    }
}

/// Template context for the standalone document.
pub struct DocumentView {
    pub document_title: String,
    pub stylesheet: String,
    pub title: String,
    pub story_link: LinkView,
    pub description: String,
    pub author: String,
    pub author_link: LinkView,
    pub category: String,
    pub category_link: LinkView,
    pub read_time: String,
    pub content_html: String,
    pub script: String,
    pub user_icon: &'static str,
    pub tag_icon: &'static str,
    pub timer_icon: &'static str,
}

#[derive(Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate {
    pub view: DocumentView,
}

/// Compose the complete document for a validated story.
///
/// Metadata text is escaped by the template engine; the stylesheet, script,
/// icons, and the rendered fragment are embedded verbatim. `document_title`
/// doubles as the head title and is the computed output file name.
pub fn assemble(
    story: &Story,
    read_time: &str,
    document_title: &str,
    assets: &DocumentAssets,
) -> Result<String, askama::Error> {
    let view = DocumentView {
        document_title: document_title.to_string(),
        stylesheet: assets.stylesheet.clone(),
        title: story.title.clone(),
        story_link: LinkView::new(&story.story_link),
        description: story.description.clone(),
        author: story.author.clone(),
        author_link: LinkView::new(&story.author_profile_link),
        category: story.category.clone(),
        category_link: LinkView::new(&story.category_link),
        read_time: read_time.to_string(),
        content_html: story.rendered_html.clone(),
        script: assets.script.clone(),
        user_icon: icons::get("user").unwrap_or_default(),
        tag_icon: icons::get("tag").unwrap_or_default(),
        timer_icon: icons::get("timer").unwrap_or_default(),
    };

    DocumentTemplate { view }.render()
}
